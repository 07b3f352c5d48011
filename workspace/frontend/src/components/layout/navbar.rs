use yew::prelude::*;
use yew_router::prelude::*;

use super::page::DRAWER_ID;
use crate::session::use_session;
use crate::ui::toast::use_toasts;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let username = session
        .as_ref()
        .and_then(|s| s.user().map(|u| u.username.clone()));

    let toasts = use_toasts();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(session) = &session {
                session.sign_out();
                toasts.show_info("You have been logged out.".to_string());
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for={DRAWER_ID}>
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ props.title.clone() }</h1>
            </div>
            <div class="flex-none gap-2">
                if let Some(on_refresh) = props.on_refresh.clone() {
                    <button
                        class="btn btn-ghost btn-circle"
                        title="Refresh"
                        onclick={Callback::from(move |_| on_refresh.emit(()))}
                    >
                        <i class="fas fa-sync-alt"></i>
                    </button>
                }
                if let Some(username) = username {
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                            <i class="fas fa-user-circle text-xl"></i>
                            <span class="hidden md:inline">{username}</span>
                        </div>
                        <ul tabindex="0" class="dropdown-content menu bg-base-100 rounded-box z-50 w-40 p-2 shadow">
                            <li>
                                <a onclick={on_logout}>
                                    <i class="fas fa-sign-out-alt"></i>{" Logout"}
                                </a>
                            </li>
                        </ul>
                    </div>
                }
            </div>
        </div>
    }
}
