use common::Badged;
use compute::CategoryNode;
use model::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TreeItemProps {
    pub node: CategoryNode,
    pub on_edit: Callback<Category>,
    pub on_delete: Callback<Category>,
}

#[derive(Properties, PartialEq)]
struct RowProps {
    category: Category,
    child: bool,
    #[prop_or_default]
    child_count: usize,
    #[prop_or_default]
    expanded: Option<bool>,
    #[prop_or_default]
    on_toggle: Callback<()>,
    on_edit: Callback<Category>,
    on_delete: Callback<Category>,
}

#[function_component(CategoryRow)]
fn category_row(props: &RowProps) -> Html {
    let category = &props.category;
    let badge = category.kind.badge();

    let on_edit = {
        let category = category.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            log::info!("Edit clicked for category: {}", category.name);
            on_edit.emit(category.clone());
        })
    };
    let on_delete = {
        let category = category.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(category.clone());
        })
    };
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <div class={classes!("flex", "items-center", "py-2", "px-4", "hover:bg-base-200", "rounded-lg", "transition-colors", props.child.then_some("ml-6"))}>
            <div class="w-6 flex-shrink-0">
                if let Some(expanded) = props.expanded {
                    <button class="btn btn-ghost btn-xs" onclick={on_toggle}>
                        if expanded {
                            <i class="fas fa-chevron-down"></i>
                        } else {
                            <i class="fas fa-chevron-right"></i>
                        }
                    </button>
                }
            </div>

            <div class="flex-shrink-0 w-8 h-8 flex items-center justify-center bg-base-200 rounded-lg mr-3">
                if props.child {
                    <i class="fas fa-tag text-base-content/60"></i>
                } else {
                    <i class={badge.icon_class()}></i>
                }
            </div>

            <div class="flex-1">
                <div class="font-medium">{&category.name}</div>
                if let Some(description) = &category.description {
                    <div class="text-sm text-base-content/60">{description}</div>
                }
            </div>

            if props.child_count > 0 {
                <div class="badge badge-sm badge-ghost mr-2">
                    {format!("{} {}", props.child_count, if props.child_count == 1 { "subcategory" } else { "subcategories" })}
                </div>
            }

            <div class="flex gap-1 flex-shrink-0">
                <button class="btn btn-ghost btn-sm" onclick={on_edit}>
                    <i class="fas fa-edit"></i>
                </button>
                <button class="btn btn-ghost btn-sm text-error" onclick={on_delete}>
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </div>
    }
}

/// A top-level category and, when expanded, its subcategories.
#[function_component(TreeItem)]
pub fn tree_item(props: &TreeItemProps) -> Html {
    let is_expanded = use_state(|| true);
    let node = &props.node;
    let has_children = !node.children.is_empty();

    let on_toggle = {
        let is_expanded = is_expanded.clone();
        Callback::from(move |_| is_expanded.set(!*is_expanded))
    };

    html! {
        <div class="category-tree-item">
            <CategoryRow
                category={node.category.clone()}
                child={false}
                child_count={node.children.len()}
                expanded={has_children.then_some(*is_expanded)}
                on_toggle={on_toggle}
                on_edit={props.on_edit.clone()}
                on_delete={props.on_delete.clone()}
            />
            if *is_expanded && has_children {
                <div class="category-tree-children">
                    { for node.children.iter().map(|child| html! {
                        <CategoryRow
                            key={child.id}
                            category={child.clone()}
                            child={true}
                            on_edit={props.on_edit.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}
