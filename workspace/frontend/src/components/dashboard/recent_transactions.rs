use compute::transactions::recent;
use model::Transaction;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::transactions::TransactionTable;
use crate::router::Route;
use crate::session::today;
use crate::ui::error::EmptyState;

const RECENT_DAYS: i64 = 30;
const RECENT_LIMIT: usize = 10;

#[derive(Properties, PartialEq)]
pub struct RecentTransactionsProps {
    pub transactions: Vec<Transaction>,
}

#[function_component(RecentTransactions)]
pub fn recent_transactions(props: &RecentTransactionsProps) -> Html {
    let since = today() - chrono::Duration::days(RECENT_DAYS);
    let latest: Vec<Transaction> = recent(&props.transactions, since, RECENT_LIMIT)
        .into_iter()
        .cloned()
        .collect();

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title">{"Recent Transactions"}</h3>
                    <Link<Route> to={Route::Transactions} classes="btn btn-ghost btn-xs">
                        {"View all"} <i class="fas fa-arrow-right ml-1"></i>
                    </Link<Route>>
                </div>
                if latest.is_empty() {
                    <EmptyState message="No transactions in the last 30 days." />
                } else {
                    <TransactionTable transactions={latest} compact={true} />
                }
            </div>
        </div>
    }
}
