use chrono::NaiveDate;
use common::{Session, SessionError, TokenStore};
use model::{CurrentUser, Id, LoginResponse};
use web_sys::window;
use yew::prelude::*;

use crate::ui::toast::use_toasts;

pub const TOKEN_KEY: &str = "fintrack_token";

/// Keeps the bearer token in `localStorage` so it survives reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(TOKEN_KEY, token) {
                    log::error!("Failed to persist token: {:?}", e);
                }
            }
            None => log::warn!("localStorage unavailable; session will not survive a reload"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Seconds since the Unix epoch, for token expiry checks.
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Session shared with every component that needs identity.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    handle: UseStateHandle<Session>,
}

impl SessionContext {
    pub fn session(&self) -> &Session {
        &self.handle
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.handle.user()
    }

    pub fn user_id(&self) -> Option<Id> {
        self.handle.user_id()
    }

    pub fn is_authenticated(&self) -> bool {
        self.handle.is_authenticated()
    }

    pub fn sign_in(&self, response: LoginResponse) -> Result<(), SessionError> {
        let session = Session::login(&LocalStorageTokenStore, response)?;
        log::info!("Signed in as {:?}", session.user().map(|u| u.username.as_str()));
        self.handle.set(session);
        Ok(())
    }

    pub fn sign_out(&self) {
        log::info!("Signing out");
        self.handle.set(Session::logout(&LocalStorageTokenStore));
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Restores the stored session once, when the application loads.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let toasts = use_toasts();
    // Read before restoring; restoring clears an expired token.
    let had_token = use_state(|| LocalStorageTokenStore.load().is_some());
    let handle = use_state(|| {
        let session = Session::restore(&LocalStorageTokenStore, now_secs());
        log::debug!("Restored session, authenticated={}", session.is_authenticated());
        session
    });

    {
        let expired = *had_token && !handle.is_authenticated();
        use_effect_with((), move |_| {
            if expired {
                toasts.show_warning("Your session has expired. Please log in again.".to_string());
            }
            || ()
        });
    }

    let context = SessionContext { handle };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Session context; components are always rendered under [`SessionProvider`].
#[hook]
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}
