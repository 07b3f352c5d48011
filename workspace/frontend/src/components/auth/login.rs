use model::{FieldErrors, LoginRequest};
use yew::prelude::*;
use yew_router::prelude::*;

use super::AuthCard;
use crate::api_client::use_api_client;
use crate::session::use_session;
use crate::ui::form::{error_for, input_class, Field, FormValues};
use crate::ui::loading::SubmitButton;
use crate::ui::toast::use_toasts;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let server_error = use_state(|| None::<String>);
    let client = use_api_client();
    let session = use_session();
    let toast_ctx = use_toasts();
    let navigator = use_navigator();

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_loading = is_loading.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = FormValues::from_form(&form_ref) else {
                return;
            };
            let request = LoginRequest {
                username: values.text("username"),
                password: values.text("password"),
            };

            if let Err(field_errors) = model::check(&request) {
                log::debug!("Login form invalid: {:?}", field_errors.keys().collect::<Vec<_>>());
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::new());
            server_error.set(None);

            let client = client.clone();
            let session = session.clone();
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();
            let is_loading = is_loading.clone();
            let server_error = server_error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                log::info!("Submitting login for {}", request.username);
                let result = client.login(&request).await;
                is_loading.set(false);

                let response = match result {
                    Ok(response) => response,
                    Err(e) => {
                        server_error.set(Some(e.message().to_string()));
                        return;
                    }
                };

                let Some(session) = session else {
                    log::error!("No session context; cannot sign in");
                    return;
                };
                match session.sign_in(response) {
                    Ok(()) => {
                        toast_ctx.show_success("Welcome back!".to_string());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        log::error!("Rejected token from login: {}", e);
                        server_error.set(Some("Login failed: the server returned an unusable token".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <AuthCard title="Sign in" subtitle="Track your accounts, spending and investments">
            if let Some(message) = (*server_error).clone() {
                <div class="alert alert-error">
                    <i class="fas fa-exclamation-circle"></i>
                    <span>{message}</span>
                </div>
            }
            <form ref={form_ref} onsubmit={on_submit} class="space-y-4" novalidate={true}>
                <Field label="Username" error={error_for(&errors, "username")}>
                    <input name="username" type="text" autocomplete="username"
                        class={input_class("input", &errors, "username")} />
                </Field>
                <Field label="Password" error={error_for(&errors, "password")}>
                    <input name="password" type="password" autocomplete="current-password"
                        class={input_class("input", &errors, "password")} />
                </Field>
                <div class="card-actions flex-col items-stretch gap-3 pt-2">
                    <SubmitButton label="Sign in" busy={*is_loading} class="btn btn-primary w-full" />
                    <p class="text-sm text-center">
                        {"No account yet? "}
                        <Link<Route> to={Route::Register} classes="link link-primary">{"Register"}</Link<Route>>
                    </p>
                </div>
            </form>
        </AuthCard>
    }
}
