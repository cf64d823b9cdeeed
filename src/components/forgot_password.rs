use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_api, use_task_scope, use_view_model};
use crate::router::Route;
use crate::utils::browser::event_value;
use crate::viewmodels::ResetPasswordViewModel;

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let vm = use_view_model(ResetPasswordViewModel::default);
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
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if vm.read().status.loading {
                return;
            }
            let Ok(request) = vm.update(ResetPasswordViewModel::begin_submit) else {
                return;
            };

            let (vm, api, navigator) = (vm.clone(), api.clone(), navigator.clone());
            tasks.spawn(async move {
                match api.reset_password(&request).await {
                    Ok(()) => {
                        vm.update(ResetPasswordViewModel::succeed);
                        TimeoutFuture::new(CONFIG.redirect_delay_ms).await;
                        if let Some(nav) = navigator {
                            nav.push(&Route::Login);
                        }
                    }
                    Err(err) => {
                        log::error!("❌ Password reset failed: {}", err);
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
                <h2>{"Reset Your Password"}</h2>

                if let Some(error) = &state.status.error {
                    <div class="banner banner-error">{error.clone()}</div>
                }
                if let Some(success) = &state.status.success {
                    <div class="banner banner-success">{success.clone()}</div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" name="email"
                            value={state.email.clone()}
                            oninput={on_field("email")}
                            required=true disabled={loading} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"New Password"}</label>
                        <input type="password" id="password" name="password"
                            value={state.password.clone()}
                            oninput={on_field("password")}
                            required=true disabled={loading} />
                    </div>
                    <div class="form-group">
                        <label for="confirmPassword">{"Confirm New Password"}</label>
                        <input type="password" id="confirmPassword" name="confirmPassword"
                            value={state.confirm_password.clone()}
                            oninput={on_field("confirmPassword")}
                            required=true disabled={loading} />
                    </div>

                    <button type="submit" class="btn-primary" disabled={loading}>
                        {if loading { "Updating..." } else { "Update Password" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <Link<Route> to={Route::Login}>{"Back to Login"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
