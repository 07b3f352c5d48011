use common::format::DateRange;
use common::resource::TransactionScope;
use yew::prelude::*;

use super::balance_overview::BalanceOverview;
use super::expense_chart::ExpenseChart;
use super::recent_transactions::RecentTransactions;
use super::upcoming_payments::UpcomingPayments;
use crate::api_client::{use_api_client, AccountsApi, ScheduledApi, TransactionsApi};
use crate::hooks::use_resource;
use crate::session::{today, use_session};
use crate::ui::error::{list_status, StaleBanner};

/// Span of transaction history the dashboard charts.
const HISTORY_DAYS: i64 = 365;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    log::trace!("Dashboard component rendering");
    let client = use_api_client();
    let owner = use_session().and_then(|s| s.user_id());
    let scope = match owner {
        Some(user_id) => TransactionScope::UserDateRange {
            user_id,
            range: DateRange::last_days(today(), HISTORY_DAYS),
        },
        None => TransactionScope::All,
    };

    let accounts = use_resource(AccountsApi {
        client: client.clone(),
        owner,
    });
    let transactions = use_resource(TransactionsApi {
        client: client.clone(),
        scope,
    });
    let scheduled = use_resource(ScheduledApi { client, owner });

    let on_retry = {
        let accounts = accounts.clone();
        let transactions = transactions.clone();
        let scheduled = scheduled.clone();
        Callback::from(move |_| {
            accounts.refresh();
            transactions.refresh();
            scheduled.refresh();
        })
    };

    let error = [
        accounts.state().error.as_ref(),
        transactions.state().error.as_ref(),
        scheduled.state().error.as_ref(),
    ]
    .into_iter()
    .flatten()
    .next()
    .cloned();

    let overview = list_status(
        accounts.state(),
        "No accounts yet. Add an account to see your net worth.",
        on_retry.clone(),
    )
    .unwrap_or_else(|| html! { <BalanceOverview accounts={accounts.items().to_vec()} /> });

    html! {
        <div class="space-y-6">
            <StaleBanner message={error.filter(|_| !accounts.items().is_empty())} on_retry={on_retry} />

            {overview}

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ExpenseChart transactions={transactions.items().to_vec()} />
                <UpcomingPayments scheduled={scheduled.items().to_vec()} />
            </div>

            <RecentTransactions transactions={transactions.items().to_vec()} />
        </div>
    }
}
