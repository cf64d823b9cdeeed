use yew::prelude::*;

use crate::models::Listing;
use crate::utils::constants::{DESCRIPTION_PREVIEW_CHARS, UNNAMED_PRODUCT};
use crate::utils::format::{display_or_none, format_price, truncate_description};

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Listing,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    let name = display_or_none(&product.name).unwrap_or(UNNAMED_PRODUCT);

    let detail = |icon: &'static str, value: &str| match display_or_none(value) {
        Some(value) => html! {
            <div class="product-detail">
                <span class="detail-icon">{icon}</span>
                <span>{value.to_string()}</span>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="product-card">
            <div class="product-header">
                <h3 class="product-name">{name.to_string()}</h3>
                <span class="product-price">{format_price(&product.price)}</span>
            </div>

            <p class="product-description">
                {truncate_description(&product.description, DESCRIPTION_PREVIEW_CHARS)}
            </p>

            <div class="product-details">
                {detail("🏫", &product.college_name)}
                {detail("📚", &product.department)}
                {detail("📞", &product.phone_number)}
                if let Some(email) = display_or_none(&product.email) {
                    <div class="product-detail">
                        <span class="detail-icon">{"✉️"}</span>
                        <a href={format!("mailto:{}", email)}>{email.to_string()}</a>
                    </div>
                }
            </div>

            if let Some(link) = display_or_none(&product.image_link_url) {
                <a class="product-images" href={link.to_string()} target="_blank" rel="noopener noreferrer">
                    {"📷 View Images"}
                </a>
            }
        </div>
    }
}
