use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_api, use_task_scope, use_view_model, SessionHandle};
use crate::router::Route;
use crate::utils::browser::event_value;
use crate::viewmodels::LoginViewModel;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub session: SessionHandle,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let vm = use_view_model(LoginViewModel::default);
    let api = use_api();
    let tasks = use_task_scope();
    let navigator = use_navigator();

    let on_field = |name: &'static str| {
        let vm = vm.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                vm.update(|vm| vm.set_field(name, value));
            }
        })
    };

    let on_submit = {
        let vm = vm.clone();
        let session = props.session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if vm.read().status.loading {
                return;
            }
            let request = vm.update(LoginViewModel::begin_submit);
            log::info!("🔐 Logging in as {}", request.email);

            let (vm, api, session, navigator) =
                (vm.clone(), api.clone(), session.clone(), navigator.clone());
            tasks.spawn(async move {
                match api.login(&request).await {
                    Ok(response) => {
                        session.sign_in(response.token);
                        vm.update(LoginViewModel::succeed);
                        TimeoutFuture::new(CONFIG.redirect_delay_ms).await;
                        if let Some(nav) = navigator {
                            nav.push(&Route::Products);
                        }
                    }
                    Err(err) => {
                        log::error!("❌ Login failed: {}", err);
                        vm.update(|vm| vm.fail(&err));
                    }
                }
            });
        })
    };

    let state = vm.read();
    let loading = state.status.loading;

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2>{"Login to Your Account"}</h2>

                if let Some(error) = &state.status.error {
                    <div class="banner banner-error">{error.clone()}</div>
                }
                if let Some(success) = &state.status.success {
                    <div class="banner banner-success">{success.clone()}</div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={state.email.clone()}
                            oninput={on_field("email")}
                            required=true
                            disabled={loading}
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            value={state.password.clone()}
                            oninput={on_field("password")}
                            required=true
                            disabled={loading}
                        />
                    </div>

                    <div class="auth-links">
                        <Link<Route> to={Route::ForgotPassword}>{"Forgot Password?"}</Link<Route>>
                    </div>

                    <button type="submit" class="btn-primary" disabled={loading}>
                        {if loading { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="auth-footer">
                    {"Don't have an account?"}
                    <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
