use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

fn trail(route: Option<Route>) -> Vec<Route> {
    match route {
        None | Some(Route::Home) | Some(Route::Dashboard) => vec![Route::Dashboard],
        Some(route) => vec![Route::Dashboard, route],
    }
}

#[function_component(Breadcrumb)]
pub fn breadcrumb() -> Html {
    let items = trail(use_route::<Route>());

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for items.iter().enumerate().map(|(idx, route)| {
                    let is_last = idx == items.len() - 1;
                    let label = if idx == 0 { "Home" } else { route.title() };
                    html! {
                        <li>
                            if is_last {
                                <span class="text-primary font-semibold">{label}</span>
                            } else {
                                <Link<Route> to={route.clone()} classes="hover:text-primary">
                                    {label}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_starts_at_home() {
        assert_eq!(trail(Some(Route::Dashboard)), vec![Route::Dashboard]);
        assert_eq!(trail(Some(Route::Investments)), vec![Route::Dashboard, Route::Investments]);
    }
}
