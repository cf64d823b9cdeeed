use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::SessionHandle;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub session: SessionHandle,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let actions = if props.session.is_authenticated() {
        html! {
            <>
                <Link<Route> to={Route::Products} classes="btn-primary">{"Browse Products"}</Link<Route>>
                <Link<Route> to={Route::SellProduct} classes="btn-secondary">{"Sell a Product"}</Link<Route>>
            </>
        }
    } else {
        html! {
            <>
                <Link<Route> to={Route::Login} classes="btn-primary">{"Login"}</Link<Route>>
                <Link<Route> to={Route::Register} classes="btn-secondary">{"Create an Account"}</Link<Route>>
            </>
        }
    };

    html! {
        <section class="home-hero">
            <h1>{"Campus Marketplace"}</h1>
            <p>
                {"Discover amazing products from fellow students. Connect, buy, and sell within your college community."}
            </p>
            <div class="home-actions">{actions}</div>
        </section>
    }
}
