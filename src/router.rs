use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    AuthGuard, ForgotPassword, GuardMode, Home, LoginScreen, MyListings, NotFound, Products,
    RegisterScreen, SellProduct, UpdateProduct,
};
use crate::hooks::SessionHandle;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/home")]
    HomeAlias,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/updatepassword")]
    ForgotPassword,
    #[at("/sellproduct")]
    SellProduct,
    #[at("/mylistings")]
    MyListings,
    #[at("/products")]
    Products,
    /// Listing id in the `?id=` query string.
    #[at("/updateproduct")]
    UpdateProduct,
    #[at("/updateproduct/:id")]
    UpdateProductById { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of `/updateproduct?id=...`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateQuery {
    pub id: Option<String>,
}

pub fn switch(route: Route, session: SessionHandle) -> Html {
    match route {
        Route::Home | Route::HomeAlias => html! { <Home session={session} /> },
        Route::Login => html! { <LoginScreen session={session} /> },
        Route::Register => html! { <RegisterScreen /> },
        Route::ForgotPassword => html! { <ForgotPassword /> },
        Route::SellProduct => html! {
            <AuthGuard session={session.clone()} mode={GuardMode::Prompt}>
                <SellProduct session={session} />
            </AuthGuard>
        },
        Route::MyListings => html! {
            <AuthGuard session={session.clone()}>
                <MyListings session={session} />
            </AuthGuard>
        },
        Route::Products => html! {
            <AuthGuard session={session.clone()}>
                <Products session={session} />
            </AuthGuard>
        },
        Route::UpdateProduct => html! {
            <AuthGuard session={session.clone()}>
                <UpdateProduct session={session} />
            </AuthGuard>
        },
        Route::UpdateProductById { id } => html! {
            <AuthGuard session={session.clone()}>
                <UpdateProduct session={session} id={Some(id)} />
            </AuthGuard>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_views() {
        assert_eq!(Route::recognize("/home"), Some(Route::HomeAlias));
        assert_eq!(Route::recognize("/updatepassword"), Some(Route::ForgotPassword));
        assert_eq!(
            Route::recognize("/updateproduct/64ab"),
            Some(Route::UpdateProductById {
                id: "64ab".to_string()
            })
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/admin_login"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/profile"), Some(Route::NotFound));
    }

    #[test]
    fn login_path_is_stable() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::MyListings.to_path(), "/mylistings");
    }
}
