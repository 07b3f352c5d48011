use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::accounts::Accounts;
use crate::components::auth::{Login, Register};
use crate::components::categories::Categories;
use crate::components::dashboard::Dashboard;
use crate::components::investments::Investments;
use crate::components::layout::page::Page;
use crate::components::scheduled::ScheduledTransactions;
use crate::components::transactions::Transactions;
use crate::session::use_session;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/accounts")]
    Accounts,
    #[at("/transactions")]
    Transactions,
    #[at("/scheduled-transactions")]
    ScheduledTransactions,
    #[at("/categories")]
    Categories,
    #[at("/investments")]
    Investments,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register | Route::NotFound)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home | Route::Dashboard => "Dashboard",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Accounts => "Accounts",
            Route::Transactions => "Transactions",
            Route::ScheduledTransactions => "Scheduled Transactions",
            Route::Categories => "Categories",
            Route::Investments => "Investments",
            Route::NotFound => "404",
        }
    }
}

/// Where to send the user instead of `route`, if anywhere.
pub fn redirect_for(route: &Route, authenticated: bool) -> Option<Route> {
    match route {
        Route::Login | Route::Register if authenticated => Some(Route::Dashboard),
        route if route.requires_auth() && !authenticated => Some(Route::Login),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
struct GuardProps {
    route: Route,
}

/// Applies the session check before rendering a route.
#[function_component(Guard)]
fn guard(props: &GuardProps) -> Html {
    let authenticated = use_session().is_some_and(|s| s.is_authenticated());

    if let Some(target) = redirect_for(&props.route, authenticated) {
        log::debug!("Redirecting {:?} to {:?}", props.route, target);
        return html! { <Redirect<Route> to={target} /> };
    }

    render(props.route.clone())
}

fn render(route: Route) -> Html {
    let title = route.title();
    match route {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Page title={title}><Dashboard /></Page> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Register => {
            log::trace!("Rendering Register page");
            html! { <Register /> }
        }
        Route::Accounts => {
            log::trace!("Rendering Accounts page");
            html! { <Page title={title}><Accounts /></Page> }
        }
        Route::Transactions => {
            log::trace!("Rendering Transactions page");
            html! { <Page title={title}><Transactions /></Page> }
        }
        Route::ScheduledTransactions => {
            log::trace!("Rendering Scheduled Transactions page");
            html! { <Page title={title}><ScheduledTransactions /></Page> }
        }
        Route::Categories => {
            log::trace!("Rendering Categories page");
            html! { <Page title={title}><Categories /></Page> }
        }
        Route::Investments => {
            log::trace!("Rendering Investments page");
            html! { <Page title={title}><Investments /></Page> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Page title={title} refreshable={false}>
                    <div class="hero py-24">
                        <div class="hero-content text-center flex-col">
                            <h1 class="text-5xl font-bold">{"404"}</h1>
                            <p class="py-4">{"The page you are looking for does not exist."}</p>
                            <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                                {"Back to Dashboard"}
                            </Link<Route>>
                        </div>
                    </div>
                </Page>
            }
        }
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    html! { <Guard route={route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_users_sent_to_login() {
        assert_eq!(redirect_for(&Route::Accounts, false), Some(Route::Login));
        assert_eq!(redirect_for(&Route::Home, false), Some(Route::Login));
        assert_eq!(redirect_for(&Route::Login, false), None);
        assert_eq!(redirect_for(&Route::Register, false), None);
    }

    #[test]
    fn test_signed_in_users_skip_login() {
        assert_eq!(redirect_for(&Route::Login, true), Some(Route::Dashboard));
        assert_eq!(redirect_for(&Route::Investments, true), None);
        assert_eq!(redirect_for(&Route::NotFound, true), None);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::ScheduledTransactions.to_path(), "/scheduled-transactions");
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
    }
}
