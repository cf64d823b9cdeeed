use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use super::{end_expired_session, ProductCard};
use crate::hooks::{
    use_api, use_task_scope, use_view_model, SessionHandle, TaskScope, ViewModelHandle,
};
use crate::services::ApiClient;
use crate::utils::browser::event_value;
use crate::viewmodels::{FetchOutcome, ProductsViewModel};

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    pub session: SessionHandle,
}

/// Runs one browse request with whatever is in the search box.
fn fetch_products(
    vm: &ViewModelHandle<ProductsViewModel>,
    api: &Rc<ApiClient>,
    tasks: &TaskScope,
    session: &SessionHandle,
    navigator: Option<Navigator>,
) {
    let query = vm.update(ProductsViewModel::begin_fetch);
    let token = session.token().map(str::to_string);
    let (vm, api, session) = (vm.clone(), api.clone(), session.clone());
    tasks.spawn(async move {
        let result = api.products(token.as_deref(), query.as_deref()).await;
        match vm.update(|vm| vm.apply_fetch(result)) {
            FetchOutcome::Loaded(count) => log::info!("🛍 {} products found", count),
            FetchOutcome::RedirectToLogin => end_expired_session(&session, navigator.as_ref()),
            FetchOutcome::Failed(message) => log::error!("❌ {}", message),
        }
    });
}

#[function_component(Products)]
pub fn products(props: &ProductsProps) -> Html {
    let vm = use_view_model(ProductsViewModel::default);
    let api = use_api();
    let tasks = use_task_scope();
    let navigator = use_navigator();

    {
        let (vm, api, tasks, navigator) = (vm.clone(), api.clone(), tasks.clone(), navigator.clone());
        let session = props.session.clone();
        use_effect_with((), move |_| {
            fetch_products(&vm, &api, &tasks, &session, navigator);
            || ()
        });
    }

    let search = {
        let (vm, api, tasks, navigator) = (vm.clone(), api.clone(), tasks.clone(), navigator.clone());
        let session = props.session.clone();
        Callback::from(move |_: ()| {
            fetch_products(&vm, &api, &tasks, &session, navigator.clone());
        })
    };

    let on_input = {
        let vm = vm.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                vm.update(|vm| vm.search = value);
            }
        })
    };
    let on_keypress = {
        let search = search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                search.emit(());
            }
        })
    };
    let on_search_click = search.reform(|_: MouseEvent| ());

    let state = vm.read();
    let count = state.products.len();

    let results = if state.loading {
        html! {
            <div class="loading-screen">
                <div class="spinner"></div>
                <h3>{"Loading Products"}</h3>
            </div>
        }
    } else if state.products.is_empty() {
        html! {
            <div class="empty-state">
                <div class="empty-icon">{"🔍"}</div>
                <h3>{"No Products Found"}</h3>
                <p>{"Try a different search term."}</p>
            </div>
        }
    } else {
        html! {
            <div class="product-grid">
                { for state.products.iter().map(|product| html! {
                    <ProductCard key={product.id.clone()} product={product.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="products-screen">
            <div class="page-header">
                <h2>{"Campus Marketplace"}</h2>
                <p>{"Discover amazing products from fellow students"}</p>
                if !state.loading {
                    <span class="page-count">
                        {format!("{} Product{} Available", count, if count == 1 { "" } else { "s" })}
                    </span>
                }
            </div>

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search products by name..."
                    value={state.search.clone()}
                    oninput={on_input}
                    onkeypress={on_keypress}
                />
                <button class="btn-primary" onclick={on_search_click} disabled={state.loading}>
                    {"🔍 Search"}
                </button>
            </div>

            if let Some(error) = &state.error {
                <div class="banner banner-error">{error.clone()}</div>
            }

            {results}
        </div>
    }
}
