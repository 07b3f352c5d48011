use yew::prelude::*;

use super::breadcrumb::Breadcrumb;
use super::navbar::Navbar;
use super::sidebar::Sidebar;

/// Id of the drawer toggle the navbar's menu button targets.
pub const DRAWER_ID: &str = "app-drawer";

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub title: AttrValue,
    pub children: Children,
    /// Shows the navbar refresh button.
    #[prop_or(true)]
    pub refreshable: bool,
}

/// Drawer shell around an authenticated page. Refreshing remounts the body,
/// which re-fetches everything the body loads on mount.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let refresh_trigger = use_state(|| 0u32);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        let title = props.title.clone();
        Callback::from(move |_| {
            log::debug!("{} page refresh triggered", title);
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <div class="drawer lg:drawer-open">
            <input id={DRAWER_ID} type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <Navbar
                    title={props.title.clone()}
                    on_refresh={props.refreshable.then_some(on_refresh)}
                />
                <Breadcrumb />
                <main class="flex-1 p-6 overflow-y-auto" key={*refresh_trigger}>
                    { for props.children.iter() }
                </main>
            </div>
            <Sidebar />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_button_is_opt_out() {
        let props = yew::props!(PageProps {
            title: "Accounts",
            children: Children::default(),
        });
        assert!(props.refreshable);

        let props = yew::props!(PageProps {
            title: "Page not found",
            children: Children::default(),
            refreshable: false,
        });
        assert!(!props.refreshable);
    }
}
