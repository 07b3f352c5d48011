use common::Badged;
use compute::build_tree;
use model::{Category, CategoryType};
use yew::prelude::*;

use super::category_modal::CategoryModal;
use super::tree_item::TreeItem;
use crate::api_client::{use_api_client, CategoriesApi};
use crate::hooks::use_resource;
use crate::ui::confirm::confirm;
use crate::ui::error::{list_status, EmptyState, StaleBanner};

#[function_component(Categories)]
pub fn categories() -> Html {
    log::trace!("Categories component rendering");
    let client = use_api_client();
    // All types are loaded: parent validation needs the full list.
    let categories = use_resource(CategoriesApi { client, kind: None });

    let active_kind = use_state(|| CategoryType::Expense);
    let show_modal = use_state(|| false);
    let selected = use_state(|| None::<Category>);
    let modal_key = use_state(|| 0u32);

    let open_modal = {
        let show_modal = show_modal.clone();
        let selected = selected.clone();
        let modal_key = modal_key.clone();
        Callback::from(move |category: Option<Category>| {
            log::info!(
                "Opening category modal (editing: {:?})",
                category.as_ref().map(|c| &c.name)
            );
            selected.set(category);
            modal_key.set(*modal_key + 1);
            show_modal.set(true);
        })
    };

    let on_close_modal = {
        let show_modal = show_modal.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            show_modal.set(false);
            selected.set(None);
        })
    };

    let on_delete = {
        let categories = categories.clone();
        Callback::from(move |category: Category| {
            let has_children = categories
                .items()
                .iter()
                .any(|c| c.parent_id == Some(category.id));
            let message = if has_children {
                format!(
                    "Are you sure you want to delete category '{}'? Its subcategories may also be removed.",
                    category.name
                )
            } else {
                format!("Are you sure you want to delete category '{}'?", category.name)
            };
            if !confirm(&message) {
                return;
            }
            log::info!("Delete confirmed for category: {}", category.name);
            let categories = categories.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if categories.remove(category.id).await.is_ok() {
                    log::info!("Category deleted successfully: {}", category.name);
                }
            });
        })
    };

    let on_retry = {
        let categories = categories.clone();
        Callback::from(move |_| categories.refresh())
    };

    let state = categories.state();
    let tree = build_tree(&state.items, *active_kind);
    let on_add = open_modal.reform(|_: MouseEvent| None);
    let on_edit = open_modal.reform(Some);

    html! {
        <>
            <CategoryModal
                key={*modal_key}
                show={*show_modal}
                on_close={on_close_modal}
                category={(*selected).clone()}
                default_kind={*active_kind}
                categories={categories.clone()}
            />

            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Categories"}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add Category"}
                </button>
            </div>

            <div role="tablist" class="tabs tabs-boxed mb-4 w-fit">
                { for CategoryType::ALL.iter().map(|kind| {
                    let kind = *kind;
                    let active_kind = active_kind.clone();
                    let is_active = *active_kind == kind;
                    let badge = kind.badge();
                    html! {
                        <a role="tab"
                            class={classes!("tab", is_active.then_some("tab-active"))}
                            onclick={Callback::from(move |_| active_kind.set(kind))}>
                            <i class={classes!(badge.icon_class(), "mr-2")}></i>{kind.label()}
                        </a>
                    }
                })}
            </div>

            <StaleBanner message={state.error.clone().filter(|_| !state.items.is_empty())} on_retry={on_retry.clone()} />

            if !tree.orphans.is_empty() {
                <div class="alert alert-warning mb-4">
                    <i class="fas fa-exclamation-triangle"></i>
                    <span>
                        {format!(
                            "{} subcategor{} hidden because the parent is missing or of another type: {}",
                            tree.orphans.len(),
                            if tree.orphans.len() == 1 { "y is" } else { "ies are" },
                            tree.orphans.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
                        )}
                    </span>
                </div>
            }

            {
                match list_status(
                    state,
                    "No categories found. Create your first category to get started!",
                    on_retry,
                ) {
                    Some(status) => status,
                    None if tree.is_empty() => html! {
                        <EmptyState message={format!("No {} categories yet.", active_kind.label().to_lowercase())} />
                    },
                    None => html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body p-2">
                                { for tree.roots.iter().map(|node| html! {
                                    <TreeItem
                                        key={node.category.id}
                                        node={node.clone()}
                                        on_edit={on_edit.clone()}
                                        on_delete={on_delete.clone()}
                                    />
                                })}
                            </div>
                        </div>
                    },
                }
            }
        </>
    }
}
