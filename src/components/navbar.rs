use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::SessionHandle;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub session: SessionHandle,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let on_logout = {
        let session = props.session.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            session.sign_out();
            menu_open.set(false);
        })
    };

    let link = |to: Route, icon: &'static str, label: &'static str| {
        let active = current.as_ref() == Some(&to);
        html! {
            <span onclick={close_menu.clone()}>
                <Link<Route> to={to} classes={classes!("nav-link", active.then_some("active"))}>
                    <span class="nav-icon">{icon}</span>
                    <span>{label}</span>
                </Link<Route>>
            </span>
        }
    };

    let links = if props.session.is_authenticated() {
        html! {
            <>
                {link(Route::Home, "🏠", "Home")}
                {link(Route::SellProduct, "➕", "Sell Product")}
                {link(Route::MyListings, "📋", "My Listings")}
                {link(Route::Products, "👁", "Browse Products")}
                <button class="nav-logout" onclick={on_logout}>
                    <span class="nav-icon">{"⏻"}</span>
                    <span>{"Logout"}</span>
                </button>
            </>
        }
    } else {
        html! {
            <>
                {link(Route::Home, "🏠", "Home")}
                {link(Route::Login, "🔑", "Login")}
                {link(Route::Register, "📝", "Register")}
            </>
        }
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-logo">
                    <span class="logo-icon">{"🎓"}</span>
                    <span class="logo-text">{"BAS-Be a Seller"}</span>
                </Link<Route>>
                <button
                    class="navbar-toggle"
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    onclick={toggle_menu}
                >
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
                <div class={classes!("navbar-links", (*menu_open).then_some("open"))}>
                    {links}
                </div>
            </div>
        </nav>
    }
}
