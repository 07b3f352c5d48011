use common::resource::TransactionScope;
use compute::expenses::cash_flow;
use compute::TransactionFilter;
use model::Transaction;
use rust_decimal::Decimal;
use yew::prelude::*;

use super::filter::TransactionFilterBar;
use super::table::TransactionTable;
use super::transaction_modal::TransactionModal;
use crate::api_client::{use_api_client, AccountsApi, CategoriesApi, TransactionsApi};
use crate::hooks::use_resource;
use crate::session::use_session;
use crate::ui::confirm::confirm_delete;
use crate::ui::error::{list_status, StaleBanner};
use crate::ui::money::{money, SignedAmount};

#[function_component(Transactions)]
pub fn transactions() -> Html {
    log::trace!("Transactions component rendering");
    let client = use_api_client();
    let owner = use_session().and_then(|s| s.user_id());
    let transactions = use_resource(TransactionsApi {
        client: client.clone(),
        scope: TransactionScope::All,
    });
    let accounts = use_resource(AccountsApi {
        client: client.clone(),
        owner,
    });
    let categories = use_resource(CategoriesApi { client, kind: None });

    let filter = use_state(TransactionFilter::default);
    let show_modal = use_state(|| false);
    let selected = use_state(|| None::<Transaction>);
    let modal_key = use_state(|| 0u32);

    let open_modal = {
        let show_modal = show_modal.clone();
        let selected = selected.clone();
        let modal_key = modal_key.clone();
        Callback::from(move |transaction: Option<Transaction>| {
            log::info!(
                "Opening transaction modal (editing: {:?})",
                transaction.as_ref().map(|t| t.id)
            );
            selected.set(transaction);
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
        let transactions = transactions.clone();
        Callback::from(move |transaction: Transaction| {
            if !confirm_delete("transaction", &transaction.description) {
                return;
            }
            let transactions = transactions.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = transactions.remove(transaction.id).await;
            });
        })
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |next: TransactionFilter| filter.set(next))
    };

    let on_retry = {
        let transactions = transactions.clone();
        Callback::from(move |_| transactions.refresh())
    };

    let state = transactions.state();
    let visible: Vec<Transaction> = filter.apply(&state.items).into_iter().cloned().collect();
    let flow = cash_flow(&visible);
    let on_add = open_modal.reform(|_: MouseEvent| None);
    let on_edit = open_modal.reform(Some);

    html! {
        <>
            <TransactionModal
                key={*modal_key}
                show={*show_modal}
                on_close={on_close_modal}
                transaction={(*selected).clone()}
                transactions={transactions.clone()}
                accounts={accounts.items().to_vec()}
                categories={categories.items().to_vec()}
            />

            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Transactions"}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add Transaction"}
                </button>
            </div>

            <TransactionFilterBar
                filter={(*filter).clone()}
                on_change={on_filter}
                accounts={accounts.items().to_vec()}
                categories={categories.items().to_vec()}
            />

            <StaleBanner message={state.error.clone().filter(|_| !state.items.is_empty())} on_retry={on_retry.clone()} />

            {
                match list_status(
                    state,
                    "No transactions yet. Record your first one to get started!",
                    on_retry,
                ) {
                    Some(status) => status,
                    None if visible.is_empty() => html! {
                        <div class="alert">
                            <i class="fas fa-search"></i>
                            <span>{"No transactions match the current filters."}</span>
                        </div>
                    },
                    None => html! {
                        <>
                            <div class="stats stats-vertical md:stats-horizontal shadow mb-4 w-full">
                                <div class="stat">
                                    <div class="stat-title">{"Income"}</div>
                                    <div class="stat-value text-success text-2xl">{money(flow.income)}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">{"Expenses"}</div>
                                    <div class="stat-value text-error text-2xl">{money(flow.expenses)}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">{"Net"}</div>
                                    <div class="stat-value text-2xl">
                                        <SignedAmount amount={flow.net.abs()} outflow={flow.net < Decimal::ZERO} />
                                    </div>
                                    <div class="stat-desc">
                                        {format!("{} of {} transactions", visible.len(), state.items.len())}
                                    </div>
                                </div>
                            </div>
                            <TransactionTable
                                transactions={visible.clone()}
                                on_edit={on_edit}
                                on_delete={on_delete}
                            />
                        </>
                    },
                }
            }
        </>
    }
}
