use common::format::format_date;
use common::Badged;
use model::{Transaction, TransactionType};
use yew::prelude::*;

use crate::ui::money::SignedAmount;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    /// Row actions are hidden when no handlers are given.
    #[prop_or_default]
    pub on_edit: Option<Callback<Transaction>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<Transaction>>,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let with_actions = props.on_edit.is_some() || props.on_delete.is_some();

    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class={classes!("table", "table-zebra", props.compact.then_some("table-sm"))}>
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Description"}</th>
                        <th>{"Category"}</th>
                        if !props.compact {
                            <th>{"Account"}</th>
                            <th>{"Type"}</th>
                        }
                        <th class="text-right">{"Amount"}</th>
                        if with_actions {
                            <th>{"Actions"}</th>
                        }
                    </tr>
                </thead>
                <tbody>
                    { for props.transactions.iter().map(|t| {
                        let badge = t.transaction_type.badge();
                        let on_edit = props.on_edit.clone().map(|cb| {
                            let t = t.clone();
                            Callback::from(move |_: MouseEvent| cb.emit(t.clone()))
                        });
                        let on_delete = props.on_delete.clone().map(|cb| {
                            let t = t.clone();
                            Callback::from(move |_: MouseEvent| cb.emit(t.clone()))
                        });

                        html! {
                            <tr key={t.id} class="hover">
                                <td class="whitespace-nowrap">{format_date(t.transaction_date)}</td>
                                <td>
                                    <div class="font-medium">{&t.description}</div>
                                    if let Some(notes) = t.notes.as_ref().filter(|_| !props.compact) {
                                        <div class="text-xs text-base-content/60">{notes}</div>
                                    }
                                </td>
                                <td><span class="badge badge-sm badge-ghost">{t.category_name()}</span></td>
                                if !props.compact {
                                    <td>{t.account_name()}</td>
                                    <td>
                                        <span class={classes!("badge", "badge-sm", badge.badge_class())}>
                                            <i class={classes!(badge.icon_class(), "mr-1")}></i>
                                            {t.transaction_type.label()}
                                        </span>
                                    </td>
                                }
                                <td class="text-right">
                                    <SignedAmount
                                        amount={t.amount}
                                        outflow={t.transaction_type.is_outflow()}
                                        neutral={t.transaction_type == TransactionType::Transfer}
                                    />
                                </td>
                                if with_actions {
                                    <td class="whitespace-nowrap">
                                        if let Some(on_edit) = on_edit {
                                            <button class="btn btn-ghost btn-xs" onclick={on_edit}>
                                                <i class="fas fa-edit"></i>
                                            </button>
                                        }
                                        if let Some(on_delete) = on_delete {
                                            <button class="btn btn-ghost btn-xs text-error" onclick={on_delete}>
                                                <i class="fas fa-trash"></i>
                                            </button>
                                        }
                                    </td>
                                }
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
