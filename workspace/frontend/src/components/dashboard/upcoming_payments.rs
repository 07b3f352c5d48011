use common::format::format_date;
use compute::schedule::upcoming;
use compute::DueStatus;
use model::{ScheduledTransaction, TransactionType};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::today;
use crate::ui::error::EmptyState;
use crate::ui::money::SignedAmount;

const UPCOMING_DAYS: i64 = 7;

#[derive(Properties, PartialEq)]
pub struct UpcomingPaymentsProps {
    pub scheduled: Vec<ScheduledTransaction>,
}

#[function_component(UpcomingPayments)]
pub fn upcoming_payments(props: &UpcomingPaymentsProps) -> Html {
    let today = today();
    let due = upcoming(&props.scheduled, today, UPCOMING_DAYS);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title">{"Upcoming Payments"}</h3>
                    <Link<Route> to={Route::ScheduledTransactions} classes="btn btn-ghost btn-xs">
                        {"Manage"} <i class="fas fa-arrow-right ml-1"></i>
                    </Link<Route>>
                </div>
                if due.is_empty() {
                    <EmptyState message="Nothing due in the next 7 days." />
                } else {
                    <ul class="divide-y divide-base-200">
                        { for due.iter().map(|s| {
                            let status = DueStatus::of(s.next_due_date, today);
                            html! {
                                <li key={s.id} class="flex justify-between items-center py-2">
                                    <div>
                                        <div class="font-medium">{&s.description}</div>
                                        <div class={classes!("text-xs", if status.is_overdue() { "text-error" } else { "text-base-content/60" })}>
                                            {format!("{} · {}", format_date(s.next_due_date), status)}
                                        </div>
                                    </div>
                                    <SignedAmount
                                        amount={s.amount}
                                        outflow={s.transaction_type.is_outflow()}
                                        neutral={s.transaction_type == TransactionType::Transfer}
                                    />
                                </li>
                            }
                        })}
                    </ul>
                }
            </div>
        </div>
    }
}
