use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "loading-sm",
            LoadingSize::Medium => "loading-md",
            LoadingSize::Large => "loading-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: LoadingSize,
    #[prop_or_default]
    pub text: Option<String>,
}

/// Per-view loading indicator shown while a request is outstanding.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
            if let Some(text) = &props.text {
                <p class="text-sm text-base-content/60">{text}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub busy: bool,
    #[prop_or(AttrValue::Static("btn btn-primary"))]
    pub class: AttrValue,
}

/// Form submit button that disables itself and spins while `busy`.
#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class={props.class.clone()} disabled={props.busy}>
            if props.busy {
                <span class="loading loading-spinner loading-sm"></span>
            }
            {props.label.clone()}
        </button>
    }
}
