use common::format::format_date;
use common::Badged;
use compute::DueStatus;
use model::{ScheduledTransaction, TransactionType};
use yew::prelude::*;

use crate::session::today;
use crate::ui::money::SignedAmount;

#[derive(Properties, PartialEq)]
pub struct ScheduledListProps {
    pub scheduled: Vec<ScheduledTransaction>,
    pub on_edit: Callback<ScheduledTransaction>,
    pub on_delete: Callback<ScheduledTransaction>,
    pub on_execute: Callback<ScheduledTransaction>,
    /// Schedule currently being executed.
    #[prop_or_default]
    pub executing: Option<model::Id>,
}

fn due_badge(status: DueStatus) -> &'static str {
    match status {
        DueStatus::Overdue(_) => "badge-error",
        DueStatus::DueToday => "badge-warning",
        DueStatus::DueIn(days) if days <= 7 => "badge-info",
        DueStatus::DueIn(_) => "badge-ghost",
    }
}

#[function_component(ScheduledList)]
pub fn scheduled_list(props: &ScheduledListProps) -> Html {
    let today = today();

    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Description"}</th>
                        <th>{"Frequency"}</th>
                        <th>{"Next due"}</th>
                        <th>{"Account"}</th>
                        <th class="text-right">{"Amount"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.scheduled.iter().map(|s| {
                        let status = DueStatus::of(s.next_due_date, today);
                        let frequency = s.frequency.badge();
                        let busy = props.executing == Some(s.id);
                        let on_edit = {
                            let s = s.clone();
                            props.on_edit.reform(move |_: MouseEvent| s.clone())
                        };
                        let on_delete = {
                            let s = s.clone();
                            props.on_delete.reform(move |_: MouseEvent| s.clone())
                        };
                        let on_execute = {
                            let s = s.clone();
                            props.on_execute.reform(move |_: MouseEvent| s.clone())
                        };

                        html! {
                            <tr key={s.id} class={classes!("hover", (!s.active).then_some("opacity-50"))}>
                                <td>
                                    <div class="font-medium">{&s.description}</div>
                                    <div class="text-xs text-base-content/60">
                                        {s.category.as_ref().map(|c| c.name.as_str()).unwrap_or("Uncategorized")}
                                        if !s.active {
                                            <span class="badge badge-xs badge-ghost ml-2">{"Paused"}</span>
                                        }
                                    </div>
                                </td>
                                <td>
                                    <span class={classes!("badge", "badge-sm", frequency.badge_class())}>
                                        <i class={classes!(frequency.icon_class(), "mr-1")}></i>
                                        {s.frequency.label()}
                                    </span>
                                </td>
                                <td>
                                    <div>{format_date(s.next_due_date)}</div>
                                    if s.active {
                                        <span class={classes!("badge", "badge-xs", due_badge(status))}>{status.to_string()}</span>
                                    }
                                </td>
                                <td>{s.account.as_ref().map(|a| a.name.as_str()).unwrap_or("Unknown")}</td>
                                <td class="text-right">
                                    <SignedAmount
                                        amount={s.amount}
                                        outflow={s.transaction_type.is_outflow()}
                                        neutral={s.transaction_type == TransactionType::Transfer}
                                    />
                                </td>
                                <td class="whitespace-nowrap">
                                    <button
                                        class="btn btn-success btn-xs"
                                        onclick={on_execute}
                                        disabled={busy || !s.active}
                                        title="Execute now"
                                    >
                                        if busy {
                                            <span class="loading loading-spinner loading-xs"></span>
                                        } else {
                                            <i class="fas fa-play"></i>
                                        }
                                    </button>
                                    <button class="btn btn-ghost btn-xs" onclick={on_edit}>
                                        <i class="fas fa-edit"></i>
                                    </button>
                                    <button class="btn btn-ghost btn-xs text-error" onclick={on_delete}>
                                        <i class="fas fa-trash"></i>
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_badge_escalates() {
        assert_eq!(due_badge(DueStatus::Overdue(2)), "badge-error");
        assert_eq!(due_badge(DueStatus::DueToday), "badge-warning");
        assert_eq!(due_badge(DueStatus::DueIn(3)), "badge-info");
        assert_eq!(due_badge(DueStatus::DueIn(30)), "badge-ghost");
    }
}
