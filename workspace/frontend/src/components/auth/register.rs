use model::{FieldErrors, RegisterRequest};
use yew::prelude::*;
use yew_router::prelude::*;

use super::AuthCard;
use crate::api_client::use_api_client;
use crate::ui::form::{error_for, input_class, Field, FormValues};
use crate::ui::loading::SubmitButton;
use crate::ui::toast::use_toasts;
use crate::Route;

const FIELDS: [(&str, &str, &str, &str); 5] = [
    ("username", "Username", "text", "username"),
    ("full_name", "Full name", "text", "name"),
    ("email", "Email", "email", "email"),
    ("password", "Password", "password", "new-password"),
    ("confirm_password", "Confirm password", "password", "new-password"),
];

#[function_component(Register)]
pub fn register() -> Html {
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let client = use_api_client();
    let toast_ctx = use_toasts();
    let navigator = use_navigator();

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_loading = is_loading.clone();
        let errors = errors.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = FormValues::from_form(&form_ref) else {
                return;
            };
            let request = RegisterRequest {
                username: values.text("username"),
                password: values.text("password"),
                confirm_password: values.text("confirm_password"),
                full_name: values.text("full_name"),
                email: values.text("email"),
            };

            if let Err(field_errors) = model::check(&request) {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::new());

            let client = client.clone();
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();
            let is_loading = is_loading.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = client.register(&request).await;
                is_loading.set(false);

                match result {
                    Ok(()) => {
                        toast_ctx.show_success("Registration successful. Please sign in.".to_string());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => toast_ctx.show_error(e.message().to_string()),
                }
            });
        })
    };

    html! {
        <AuthCard title="Create account" subtitle="It only takes a minute">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-3" novalidate={true}>
                { for FIELDS.iter().map(|(name, label, kind, autocomplete)| {
                    html! {
                        <Field label={*label} error={error_for(&errors, name)}>
                            <input name={*name} type={*kind} autocomplete={*autocomplete}
                                class={input_class("input", &errors, name)} />
                        </Field>
                    }
                })}
                <div class="card-actions flex-col items-stretch gap-3 pt-2">
                    <SubmitButton label="Register" busy={*is_loading} class="btn btn-primary w-full" />
                    <p class="text-sm text-center">
                        {"Already registered? "}
                        <Link<Route> to={Route::Login} classes="link link-primary">{"Sign in"}</Link<Route>>
                    </p>
                </div>
            </form>
        </AuthCard>
    }
}
