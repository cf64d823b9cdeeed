use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-brand">
                <span class="footer-logo">{"🎓"}</span>
                <span>{"BAS - Be a Seller"}</span>
            </div>
            <nav class="footer-links">
                <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                <Link<Route> to={Route::Products}>{"Browse Products"}</Link<Route>>
                <Link<Route> to={Route::SellProduct}>{"Sell Product"}</Link<Route>>
            </nav>
            <p class="footer-copy">
                {format!("© {} BAS. Buy and sell within your college community.", year)}
            </p>
        </footer>
    }
}
