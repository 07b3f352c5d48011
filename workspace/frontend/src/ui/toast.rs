use common::{Notice, NoticeLevel};
use yew::prelude::*;

use crate::settings;

#[derive(Clone, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

impl From<NoticeLevel> for ToastType {
    fn from(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Success => ToastType::Success,
            NoticeLevel::Error => ToastType::Error,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Clone, PartialEq, Default)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<(String, ToastType)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_info(&self, message: String) {
        self.add_toast.emit((message, ToastType::Info));
    }

    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastType::Success));
    }

    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((message, ToastType::Warning));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastType::Error));
    }

    pub fn notify(&self, notice: &Notice) {
        self.add_toast
            .emit((notice.message.clone(), notice.level.into()));
    }
}

/// Toasts of the enclosing [`ToastProvider`]; a no-op context outside one.
#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let toasts = toasts.clone();

        Callback::from(move |(message, toast_type): (String, ToastType)| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            toasts.dispatch(ToastAction::Push(Toast {
                id,
                message,
                toast_type,
            }));

            // Auto-dismiss
            let toasts = toasts.clone();
            let duration = settings::get_settings().toast_duration_ms;
            let timeout_handle = gloo_timers::callback::Timeout::new(duration, move || {
                toasts.dispatch(ToastAction::Dismiss(id));
            });
            timeout_handle.forget();
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: usize| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let context = ToastContext {
        toasts: toasts.0.clone(),
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.0.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

#[derive(Default, PartialEq)]
struct ToastList(Vec<Toast>);

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        std::rc::Rc::new(Self(toasts))
    }
}
