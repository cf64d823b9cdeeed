use yew::prelude::*;
use yew_router::prelude::*;

use super::{end_expired_session, ListingFormFields};
use crate::hooks::{use_api, use_task_scope, use_view_model, SessionHandle};
use crate::models::ListingField;
use crate::router::{Route, UpdateQuery};
use crate::services::ApiError;
use crate::utils::browser::{alert, confirm};
use crate::utils::constants::{
    MSG_CONFIRM_UPDATE, MSG_MISSING_PRODUCT_ID, MSG_PRODUCT_FETCH_FAILED, MSG_UPDATE_SUCCESS,
};
use crate::viewmodels::ListingFormViewModel;

#[derive(Properties, PartialEq)]
pub struct UpdateProductProps {
    pub session: SessionHandle,
    /// Route parameter; when absent the `?id=` query string is used.
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(UpdateProduct)]
pub fn update_product(props: &UpdateProductProps) -> Html {
    let vm = use_view_model(ListingFormViewModel::update);
    let api = use_api();
    let tasks = use_task_scope();
    let navigator = use_navigator();
    let location = use_location();

    let product_id = props.id.clone().or_else(|| {
        location
            .and_then(|loc| loc.query::<UpdateQuery>().ok())
            .and_then(|query| query.id)
            .filter(|id| !id.is_empty())
    });

    // Load the current record into the form
    {
        let vm = vm.clone();
        let api = api.clone();
        let tasks = tasks.clone();
        let navigator = navigator.clone();
        let session = props.session.clone();
        use_effect_with(product_id.clone(), move |product_id| {
            match product_id.clone() {
                None => {
                    log::warn!("⚠️ Update view opened without a product id");
                    alert(MSG_MISSING_PRODUCT_ID);
                    if let Some(nav) = &navigator {
                        nav.push(&Route::MyListings);
                    }
                }
                Some(id) => {
                    let token = session.token().map(str::to_string);
                    tasks.spawn(async move {
                        match api.fetch_listing(token.as_deref(), &id).await {
                            Ok(listing) => {
                                log::info!("✏️ Editing listing {}", listing.id);
                                vm.update(|vm| vm.prefill(&listing));
                            }
                            Err(ApiError::Unauthenticated) => {
                                end_expired_session(&session, navigator.as_ref());
                            }
                            Err(err) => {
                                log::error!("❌ Could not load listing {}: {}", id, err);
                                vm.update(|vm| vm.loading = false);
                                alert(MSG_PRODUCT_FETCH_FAILED);
                                if let Some(nav) = &navigator {
                                    nav.push(&Route::MyListings);
                                }
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    let on_input = {
        let vm = vm.clone();
        Callback::from(move |(field, value): (ListingField, String)| {
            vm.update(|vm| vm.draft.set(field, value));
        })
    };

    let on_submit = {
        let vm = vm.clone();
        let session = props.session.clone();
        let product_id = product_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(id) = product_id.clone() else {
                return;
            };
            if vm.read().submitting || !confirm(MSG_CONFIRM_UPDATE) {
                return;
            }
            let Ok(draft) = vm.update(ListingFormViewModel::begin_submit) else {
                return;
            };

            let token = session.token().map(str::to_string);
            let (vm, api, session, navigator) =
                (vm.clone(), api.clone(), session.clone(), navigator.clone());
            tasks.spawn(async move {
                match api.update_listing(token.as_deref(), &id, &draft).await {
                    Ok(reply) => {
                        vm.update(ListingFormViewModel::succeed);
                        if reply.message.is_empty() {
                            alert(MSG_UPDATE_SUCCESS);
                        } else {
                            alert(&reply.message);
                        }
                        if let Some(nav) = &navigator {
                            nav.push(&Route::MyListings);
                        }
                    }
                    Err(ApiError::Unauthenticated) => {
                        vm.update(|vm| vm.submitting = false);
                        end_expired_session(&session, navigator.as_ref());
                    }
                    Err(err) => {
                        log::error!("❌ Updating listing {} failed: {}", id, err);
                        vm.update(|vm| vm.fail(&err));
                    }
                }
            });
        })
    };

    let state = vm.read();

    if state.loading {
        return html! {
            <div class="loading-screen">
                <div class="spinner"></div>
                <h3>{"Loading Product"}</h3>
            </div>
        };
    }

    html! {
        <div class="listing-form-screen">
            <form class="listing-form" onsubmit={on_submit}>
                <h2>{"Update Product"}</h2>

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
                    {if state.submitting { "Updating..." } else { "Update Product" }}
                </button>
            </form>
        </div>
    }
}
