use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{"Something went wrong"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-primary btn-sm"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="alert alert-info">
            <i class="fas fa-info-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}

/// What a list page shows instead of its items while loading, after a
/// failed first fetch, or when the list is empty. `None` means render the
/// list.
pub fn list_status<T>(
    state: &common::ResourceState<T>,
    empty_message: &str,
    on_retry: Callback<()>,
) -> Option<Html> {
    use crate::ui::loading::{Loading, LoadingSize};

    if state.loading && state.items.is_empty() {
        return Some(html! { <Loading size={LoadingSize::Large} /> });
    }
    if let Some(error) = &state.error {
        if state.items.is_empty() {
            return Some(html! { <ErrorDisplay message={error.clone()} on_retry={Some(on_retry)} /> });
        }
    }
    if state.items.is_empty() {
        return Some(html! { <EmptyState message={empty_message.to_string()} /> });
    }
    None
}

#[derive(Properties, PartialEq)]
pub struct StaleBannerProps {
    pub message: Option<String>,
    pub on_retry: Callback<()>,
}

/// Shown above a list whose latest refresh failed but whose earlier
/// contents are still displayed.
#[function_component(StaleBanner)]
pub fn stale_banner(props: &StaleBannerProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };
    let on_retry = props.on_retry.clone();
    html! {
        <div class="alert alert-warning mb-4">
            <i class="fas fa-exclamation-triangle"></i>
            <span>{message}</span>
            <button class="btn btn-sm" onclick={Callback::from(move |_| on_retry.emit(()))}>{"Retry"}</button>
        </div>
    }
}
