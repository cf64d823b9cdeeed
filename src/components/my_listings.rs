use yew::prelude::*;
use yew_router::prelude::*;

use super::{end_expired_session, ListingCard};
use crate::hooks::{use_api, use_task_scope, use_view_model, SessionHandle};
use crate::router::{Route, UpdateQuery};
use crate::utils::browser::{alert, prompt};
use crate::utils::constants::MSG_DELETE_PROMPT;
use crate::viewmodels::{DeleteOutcome, FetchOutcome, MyListingsViewModel};

#[derive(Properties, PartialEq)]
pub struct MyListingsProps {
    pub session: SessionHandle,
}

#[function_component(MyListings)]
pub fn my_listings(props: &MyListingsProps) -> Html {
    let vm = use_view_model(MyListingsViewModel::default);
    let api = use_api();
    let tasks = use_task_scope();
    let navigator = use_navigator();

    // Fetch once on mount
    {
        let vm = vm.clone();
        let api = api.clone();
        let tasks = tasks.clone();
        let navigator = navigator.clone();
        let session = props.session.clone();
        use_effect_with((), move |_| {
            let token = session.token().map(str::to_string);
            tasks.spawn(async move {
                let result = api.my_listings(token.as_deref()).await;
                match vm.update(|vm| vm.apply_fetch(result)) {
                    FetchOutcome::Loaded(count) => log::info!("📋 Loaded {} own listings", count),
                    FetchOutcome::RedirectToLogin => {
                        end_expired_session(&session, navigator.as_ref())
                    }
                    FetchOutcome::Failed(message) => {
                        log::error!("❌ {}", message);
                        alert(&message);
                    }
                }
            });
            || ()
        });
    }

    let on_update = {
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            let Some(nav) = &navigator else {
                return;
            };
            let query = UpdateQuery { id: Some(id) };
            if let Err(err) = nav.push_with_query(&Route::UpdateProduct, &query) {
                log::error!("❌ Could not open update view: {}", err);
            }
        })
    };

    let on_delete = {
        let vm = vm.clone();
        let session = props.session.clone();
        Callback::from(move |id: String| {
            let Some(password) = prompt(MSG_DELETE_PROMPT) else {
                return;
            };
            let Some(request) = vm.update(|vm| vm.begin_delete(&id, password)) else {
                return;
            };
            log::info!("🗑 Deleting listing {}", id);

            let token = session.token().map(str::to_string);
            let (vm, api, session, navigator) =
                (vm.clone(), api.clone(), session.clone(), navigator.clone());
            tasks.spawn(async move {
                let result = api.delete_listing(token.as_deref(), &request).await;
                let outcome = vm.update(|vm| vm.apply_delete(&id, result));
                if outcome == DeleteOutcome::RedirectToLogin {
                    end_expired_session(&session, navigator.as_ref());
                } else if let Some(message) = outcome.message() {
                    alert(message);
                }
            });
        })
    };

    let state = vm.read();

    if state.loading {
        return html! {
            <div class="loading-screen">
                <div class="spinner"></div>
                <h3>{"Loading Your Listings"}</h3>
            </div>
        };
    }

    if state.listings.is_empty() {
        return html! {
            <div class="empty-state">
                <div class="empty-icon">{"📦"}</div>
                <h3>{"No Products Listed Yet"}</h3>
                <p>{"Start selling by listing your first product."}</p>
                <Link<Route> to={Route::SellProduct} classes="btn-primary">
                    {"➕ Sell a Product"}
                </Link<Route>>
            </div>
        };
    }

    let count = state.listings.len();

    html! {
        <div class="my-listings">
            <div class="page-header">
                <h2>{"My Listings"}</h2>
                <span class="page-count">
                    {format!("{} Product{} Listed", count, if count == 1 { "" } else { "s" })}
                </span>
            </div>
            <div class="listing-grid">
                { for state.listings.iter().map(|listing| html! {
                    <ListingCard
                        key={listing.id.clone()}
                        listing={listing.clone()}
                        deleting={state.is_deleting(&listing.id)}
                        on_update={on_update.clone()}
                        on_delete={on_delete.clone()}
                    />
                }) }
            </div>
        </div>
    }
}
