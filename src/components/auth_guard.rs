use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::SessionHandle;
use crate::router::Route;
use crate::state::require_token;

/// What a protected view shows when there is no session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GuardMode {
    /// Replace the current location with Login.
    #[default]
    Redirect,
    /// Stay on the page and show a link to Login.
    Prompt,
}

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub session: SessionHandle,
    #[prop_or_default]
    pub mode: GuardMode,
    pub children: Children,
}

/// Wraps every protected view. Children are only mounted with a token, so
/// no protected fetch starts without one.
#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let navigator = use_navigator();
    let authenticated = require_token(props.session.session()).is_ok();
    let mode = props.mode;

    use_effect_with(authenticated, move |authenticated| {
        if !*authenticated && mode == GuardMode::Redirect {
            log::info!("🔒 No session, redirecting to login");
            if let Some(nav) = navigator {
                nav.replace(&Route::Login);
            }
        }
        || ()
    });

    if authenticated {
        return html! { <>{ for props.children.iter() }</> };
    }

    match mode {
        GuardMode::Redirect => html! {},
        GuardMode::Prompt => html! {
            <div class="auth-notice">
                <div class="auth-notice-card">
                    <h2>{"Please Login to Sell Products"}</h2>
                    <Link<Route> to={Route::Login} classes="auth-notice-link">
                        {"Go to Login"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
