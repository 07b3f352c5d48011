use yew::prelude::*;
use yew_router::prelude::*;
use super::page::DRAWER_ID;
use crate::Route;

const ENTRIES: [(Route, &str); 6] = [
    (Route::Dashboard, "fas fa-home"),
    (Route::Accounts, "fas fa-university"),
    (Route::Transactions, "fas fa-exchange-alt"),
    (Route::ScheduledTransactions, "fas fa-calendar-check"),
    (Route::Categories, "fas fa-tags"),
    (Route::Investments, "fas fa-chart-line"),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for={DRAWER_ID}></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-wallet"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"FinTrack"}</span>
                    </div>
                </li>

                { for ENTRIES.iter().map(|(route, icon)| {
                    let active = current.as_ref() == Some(route)
                        || (matches!(route, Route::Dashboard) && current == Some(Route::Home));
                    html! {
                        <li>
                            <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                <i class={classes!(*icon, "w-5")}></i>
                                {format!(" {}", route.title())}
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
