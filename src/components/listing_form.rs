use yew::prelude::*;

use crate::models::{ListingDraft, ListingField};
use crate::utils::browser::event_value;
use crate::viewmodels::ListingFormMode;

#[derive(Properties, PartialEq)]
pub struct ListingFormFieldsProps {
    pub draft: ListingDraft,
    pub mode: ListingFormMode,
    #[prop_or(false)]
    pub disabled: bool,
    pub on_input: Callback<(ListingField, String)>,
}

/// Inputs for every listing field, in form order.
#[function_component(ListingFormFields)]
pub fn listing_form_fields(props: &ListingFormFieldsProps) -> Html {
    let fields = ListingField::ALL.into_iter().map(|field| {
        let oninput = {
            let on_input = props.on_input.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = event_value(&e) {
                    on_input.emit((field, value));
                }
            })
        };
        let name = field.wire_name();
        let value = props.draft.get(field).to_string();
        let required = props.mode.is_required(field);

        let control = if field == ListingField::Description {
            html! {
                <textarea
                    id={name}
                    name={name}
                    rows="4"
                    placeholder={field.placeholder()}
                    value={value}
                    {oninput}
                    {required}
                    disabled={props.disabled}
                />
            }
        } else {
            html! {
                <input
                    id={name}
                    name={name}
                    type={field.input_type()}
                    placeholder={field.placeholder()}
                    value={value}
                    {oninput}
                    {required}
                    disabled={props.disabled}
                />
            }
        };

        html! {
            <div class="form-group" key={name}>
                <label for={name}>{field.label()}</label>
                {control}
            </div>
        }
    });

    html! { <>{ for fields }</> }
}
