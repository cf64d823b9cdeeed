use yew::prelude::*;

use crate::models::Listing;
use crate::utils::constants::{NO_DESCRIPTION, UNNAMED_PRODUCT};
use crate::utils::format::{display_or_none, format_price};

#[derive(Properties, PartialEq)]
pub struct ListingCardProps {
    pub listing: Listing,
    #[prop_or_default]
    pub deleting: bool,
    pub on_update: Callback<String>,
    pub on_delete: Callback<String>,
}

/// One of the seller's own listings, with update and delete actions.
#[function_component(ListingCard)]
pub fn listing_card(props: &ListingCardProps) -> Html {
    let listing = &props.listing;

    let on_update = {
        let id = listing.id.clone();
        let cb = props.on_update.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let on_delete = {
        let id = listing.id.clone();
        let cb = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };

    let row = |label: &'static str, value: &str| match display_or_none(value) {
        Some(value) => html! {
            <div class="detail-row">
                <span class="detail-label">{label}</span>
                <span class="detail-value">{value.to_string()}</span>
            </div>
        },
        None => html! {},
    };

    let name = display_or_none(&listing.name).unwrap_or(UNNAMED_PRODUCT);
    let description = display_or_none(&listing.description).unwrap_or(NO_DESCRIPTION);

    html! {
        <div class={classes!("listing-card", props.deleting.then_some("deleting"))}>
            <div class="listing-header">
                <h3 class="listing-name">{name.to_string()}</h3>
                <span class="listing-price">{format_price(&listing.price)}</span>
            </div>

            <div class="listing-details">
                {row("Roll No", &listing.roll_number)}
                {row("College", &listing.college_name)}
                {row("Department", &listing.department)}
                {row("Phone", &listing.phone_number)}
                if let Some(email) = display_or_none(&listing.email) {
                    <div class="detail-row">
                        <span class="detail-label">{"Email"}</span>
                        <a class="detail-value" href={format!("mailto:{}", email)}>
                            {email.to_string()}
                        </a>
                    </div>
                }
            </div>

            <p class="listing-description">{description.to_string()}</p>

            if let Some(link) = display_or_none(&listing.image_link_url) {
                <a class="listing-images" href={link.to_string()} target="_blank" rel="noopener noreferrer">
                    {"📷 View Images"}
                </a>
            }

            <div class="listing-actions">
                <button class="btn-secondary" onclick={on_update} disabled={props.deleting}>
                    {"✏️ Update"}
                </button>
                <button class="btn-danger" onclick={on_delete} disabled={props.deleting}>
                    {if props.deleting { "Deleting..." } else { "🗑 Delete" }}
                </button>
            </div>
        </div>
    }
}
