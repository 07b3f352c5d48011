use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod router;
pub mod session;
pub mod settings;
pub mod ui;

pub use router::Route;

use session::SessionProvider;
use ui::toast::ToastProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <SessionProvider>
                <BrowserRouter>
                    <Switch<Route> render={router::switch} />
                </BrowserRouter>
            </SessionProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Local settings first so the logger has a level before anything else runs
    settings::init_settings(None);
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== FinTrack Frontend Application Starting ===");
    log::debug!("Debug mode: {}", settings.debug_mode);

    wasm_bindgen_futures::spawn_local(async {
        let remote = api_client::fetch_client_config().await;
        settings::init_settings(remote.as_ref());

        let settings = settings::get_settings();
        log::info!("Application settings: {:?}", settings);
        log::debug!("API base URL: {}", settings.api_base_url);

        log::trace!("Initializing Yew renderer");
        yew::Renderer::<App>::new().render();
        log::info!("Application initialized successfully");
    });
}
