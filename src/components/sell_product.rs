use yew::prelude::*;
use yew_router::prelude::*;

use super::{end_expired_session, ListingFormFields};
use crate::hooks::{use_api, use_task_scope, use_view_model, SessionHandle};
use crate::models::ListingField;
use crate::router::Route;
use crate::services::ApiError;
use crate::utils::browser::{alert, confirm};
use crate::utils::constants::{MSG_CONFIRM_SELL, MSG_SELL_SUCCESS};
use crate::viewmodels::ListingFormViewModel;

#[derive(Properties, PartialEq)]
pub struct SellProductProps {
    pub session: SessionHandle,
}

#[function_component(SellProduct)]
pub fn sell_product(props: &SellProductProps) -> Html {
    let vm = use_view_model(ListingFormViewModel::create);
    let api = use_api();
    let tasks = use_task_scope();
    let navigator = use_navigator();

    let on_input = {
        let vm = vm.clone();
        Callback::from(move |(field, value): (ListingField, String)| {
            vm.update(|vm| vm.draft.set(field, value));
        })
    };

    let on_submit = {
        let vm = vm.clone();
        let session = props.session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if vm.read().submitting || !confirm(MSG_CONFIRM_SELL) {
                return;
            }
            let Ok(draft) = vm.update(ListingFormViewModel::begin_submit) else {
                return;
            };
            log::info!("🛒 Posting listing: {}", draft.name);

            let token = session.token().map(str::to_string);
            let (vm, api, session, navigator) =
                (vm.clone(), api.clone(), session.clone(), navigator.clone());
            tasks.spawn(async move {
                match api.create_listing(token.as_deref(), &draft).await {
                    Ok(()) => {
                        vm.update(ListingFormViewModel::succeed);
                        alert(MSG_SELL_SUCCESS);
                        if let Some(nav) = &navigator {
                            nav.push(&Route::MyListings);
                        }
                    }
                    Err(ApiError::Unauthenticated) => {
                        vm.update(|vm| vm.submitting = false);
                        end_expired_session(&session, navigator.as_ref());
                    }
                    Err(err) => {
                        log::error!("❌ Posting listing failed: {}", err);
                        vm.update(|vm| vm.fail(&err));
                    }
                }
            });
        })
    };

    let state = vm.read();

    html! {
        <div class="listing-form-screen">
            <form class="listing-form" onsubmit={on_submit}>
                <h2>{"Sell Your Product"}</h2>

                if let Some(error) = &state.error {
                    <div class="banner banner-error">{error.clone()}</div>
                }

                <ListingFormFields
                    draft={state.draft.clone()}
                    mode={state.mode}
                    disabled={state.submitting}
                    {on_input}
                />

                <button type="submit" class="btn-primary" disabled={state.submitting}>
                    {if state.submitting { "Posting..." } else { "Sell Product" }}
                </button>
            </form>
        </div>
    }
}
