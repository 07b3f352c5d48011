mod login;
mod register;

pub use login::Login;
pub use register::Register;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct AuthCardProps {
    title: AttrValue,
    subtitle: AttrValue,
    children: Children,
}

/// Centered card used by the sign-in and sign-up screens.
#[function_component(AuthCard)]
fn auth_card(props: &AuthCardProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center gap-3 mb-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-xl">
                            <i class="fas fa-wallet"></i>
                        </div>
                        <div>
                            <h2 class="card-title text-2xl">{props.title.clone()}</h2>
                            <p class="text-sm text-base-content/60">{props.subtitle.clone()}</p>
                        </div>
                    </div>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
