use compute::categories::{check_parent, parent_options};
use model::{Category, CategoryDraft, CategoryType, FieldErrors};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::CategoriesApi;
use crate::hooks::ResourceHandle;
use crate::ui::form::{error_for, input_class, saved, Field, FormValues};
use crate::ui::loading::SubmitButton;

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub category: Option<Category>,
    /// Type preselected for a new category.
    pub default_kind: CategoryType,
    pub categories: ResourceHandle<CategoriesApi>,
}

#[function_component(CategoryModal)]
pub fn category_modal(props: &CategoryModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let kind = {
        let initial = props.category.as_ref().map(|c| c.kind).unwrap_or(props.default_kind);
        use_state(move || initial)
    };

    let on_kind_change = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selected) = select.value().parse::<CategoryType>() {
                kind.set(selected);
            }
        })
    };

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_loading = is_loading.clone();
        let errors = errors.clone();
        let editing = props.category.clone();
        let categories = props.categories.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = FormValues::from_form(&form_ref) else {
                return;
            };
            let draft = CategoryDraft {
                name: values.text("name"),
                kind: values.choice("kind"),
                parent_id: values.id("parent_id"),
                description: values.optional_text("description"),
            };

            let editing_id = editing.as_ref().map(|c| c.id);
            if let Err(e) = check_parent(
                categories.items(),
                editing_id,
                draft.kind,
                draft.parent_id,
            ) {
                log::warn!("Rejected parent selection: {}", e);
                errors.set(FieldErrors::from([("parent_id".to_string(), e.to_string())]));
                return;
            }

            let is_loading = is_loading.clone();
            let errors = errors.clone();
            let categories = categories.clone();
            let on_close = on_close.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match editing_id {
                    Some(id) => {
                        log::info!("Updating category ID: {}", id);
                        categories.update(id, &draft).await
                    }
                    None => {
                        log::info!("Creating new category: {}", draft.name);
                        categories.create(&draft).await
                    }
                };
                is_loading.set(false);

                if saved(&result, &errors) {
                    on_close.emit(());
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let (title, button_text) = if props.category.is_some() {
        ("Edit Category", "Update Category")
    } else {
        ("Add Category", "Create Category")
    };
    let editing_id = props.category.as_ref().map(|c| c.id);
    let current_parent = props.category.as_ref().and_then(|c| c.parent_id);
    let parents = parent_options(props.categories.items(), *kind, editing_id);

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="category_modal">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4" novalidate={true}>
                    <Field label="Name" error={error_for(&errors, "name")}>
                        <input
                            name="name"
                            type="text"
                            placeholder="e.g. Groceries"
                            class={input_class("input", &errors, "name")}
                            value={props.category.as_ref().map(|c| c.name.clone()).unwrap_or_default()}
                        />
                    </Field>

                    <Field label="Type" error={error_for(&errors, "kind")}>
                        <select name="kind" class={input_class("select", &errors, "kind")} onchange={on_kind_change}>
                            { for CategoryType::ALL.iter().map(|k| html! {
                                <option value={k.as_str()} selected={*k == *kind}>{k.label()}</option>
                            })}
                        </select>
                    </Field>

                    <Field label="Parent Category (optional)" error={error_for(&errors, "parent_id")}>
                        <select name="parent_id" class={input_class("select", &errors, "parent_id")}>
                            <option value="">{"None (Top-level Category)"}</option>
                            { for parents.iter().map(|c| html! {
                                <option value={c.id.to_string()} selected={current_parent == Some(c.id)}>
                                    {&c.name}
                                </option>
                            })}
                        </select>
                    </Field>

                    <Field label="Description (optional)">
                        <input
                            name="description"
                            type="text"
                            placeholder="e.g. Food and household items"
                            class="input input-bordered w-full"
                            value={props.category.as_ref().and_then(|c| c.description.clone()).unwrap_or_default()}
                        />
                    </Field>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()} disabled={*is_loading}>
                            {"Cancel"}
                        </button>
                        <SubmitButton label={button_text} busy={*is_loading} />
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
