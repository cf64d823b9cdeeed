use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_api, use_task_scope, use_view_model};
use crate::router::Route;
use crate::utils::browser::event_value;
use crate::viewmodels::RegisterViewModel;

#[function_component(RegisterScreen)]
pub fn register_screen() -> Html {
    let vm = use_view_model(RegisterViewModel::default);
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
            // Mismatched passwords stop here, before any request
            let Ok(request) = vm.update(RegisterViewModel::begin_submit) else {
                return;
            };
            log::info!("📝 Registering {}", request.email);

            let (vm, api, navigator) = (vm.clone(), api.clone(), navigator.clone());
            tasks.spawn(async move {
                match api.register(&request).await {
                    Ok(()) => {
                        vm.update(RegisterViewModel::succeed);
                        TimeoutFuture::new(CONFIG.redirect_delay_ms).await;
                        if let Some(nav) = navigator {
                            nav.push(&Route::Login);
                        }
                    }
                    Err(err) => {
                        log::error!("❌ Registration failed: {}", err);
                        vm.update(|vm| vm.fail(&err));
                    }
                }
            });
        })
    };

    let state = vm.read();
    let loading = state.status.loading;

    let field = |id: &'static str, label: &'static str, kind: &'static str, value: &str| {
        html! {
            <div class="form-group">
                <label for={id}>{label}</label>
                <input
                    type={kind}
                    id={id}
                    name={id}
                    value={value.to_string()}
                    oninput={on_field(id)}
                    required=true
                    disabled={loading}
                />
            </div>
        }
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{"Create Your Account"}</h1>

                if let Some(error) = &state.status.error {
                    <p class="banner banner-error">{error.clone()}</p>
                }
                if let Some(success) = &state.status.success {
                    <p class="banner banner-success">{success.clone()}</p>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    {field("name", "Full Name", "text", &state.name)}
                    {field("email", "Email", "email", &state.email)}
                    {field("password", "Password", "password", &state.password)}
                    {field("confirmPassword", "Confirm Password", "password", &state.confirm_password)}

                    <button type="submit" class="btn-primary" disabled={loading}>
                        {if loading { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="auth-footer">
                    {"Already have an account?"}
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
