use yew::prelude::*;
use yew_router::prelude::*;

use super::{Footer, Navbar};
use crate::hooks::use_session_store;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session_store();

    let render = {
        let session = session.clone();
        Callback::from(move |route: Route| switch(route, session.clone()))
    };

    html! {
        <BrowserRouter>
            <div class="app">
                <Navbar session={session} />
                <main class="app-main">
                    <Switch<Route> render={render} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
