use compute::{summarize, LiabilityDisplay};
use model::Account;
use yew::prelude::*;

use super::account_card::AccountCard;
use super::account_modal::AccountModal;
use crate::api_client::{use_api_client, AccountsApi};
use crate::hooks::use_resource;
use crate::session::use_session;
use crate::ui::confirm::confirm_delete;
use crate::ui::error::{list_status, StaleBanner};
use crate::ui::money;

#[function_component(Accounts)]
pub fn accounts() -> Html {
    log::trace!("Accounts component rendering");
    let client = use_api_client();
    let owner = use_session().and_then(|s| s.user_id());
    let accounts = use_resource(AccountsApi { client, owner });

    let show_modal = use_state(|| false);
    let selected = use_state(|| None::<Account>);
    let modal_key = use_state(|| 0u32);

    let open_modal = {
        let show_modal = show_modal.clone();
        let selected = selected.clone();
        let modal_key = modal_key.clone();
        Callback::from(move |account: Option<Account>| {
            log::info!("Opening account modal (editing: {:?})", account.as_ref().map(|a| a.id));
            selected.set(account);
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
        let accounts = accounts.clone();
        Callback::from(move |account: Account| {
            if !confirm_delete("account", &account.name) {
                return;
            }
            let accounts = accounts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if accounts.remove(account.id).await.is_ok() {
                    log::info!("Account deleted: {}", account.name);
                }
            });
        })
    };

    let on_retry = {
        let accounts = accounts.clone();
        Callback::from(move |_| accounts.refresh())
    };

    let state = accounts.state();
    let summary = summarize(&state.items, LiabilityDisplay::Negated);
    let on_add = open_modal.reform(|_: MouseEvent| None);
    let on_edit = open_modal.reform(Some);

    html! {
        <>
            <AccountModal
                key={*modal_key}
                show={*show_modal}
                on_close={on_close_modal}
                account={(*selected).clone()}
                accounts={accounts.clone()}
            />

            <div class="flex justify-between items-center mb-4">
                <div>
                    <h2 class="text-2xl font-bold">{"Accounts"}</h2>
                    if !state.items.is_empty() {
                        <p class="text-sm text-base-content/60">
                            {format!("{} accounts, net worth {}", state.items.len(), money::money(summary.net_worth))}
                        </p>
                    }
                </div>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add Account"}
                </button>
            </div>

            <StaleBanner message={state.error.clone().filter(|_| !state.items.is_empty())} on_retry={on_retry.clone()} />

            {
                match list_status(
                    state,
                    "No accounts found. Create your first account to get started!",
                    on_retry,
                ) {
                    Some(status) => status,
                    None => html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            { for state.items.iter().map(|account| html! {
                                <AccountCard
                                    key={account.id}
                                    account={account.clone()}
                                    on_edit={on_edit.clone()}
                                    on_delete={on_delete.clone()}
                                />
                            })}
                        </div>
                    },
                }
            }
        </>
    }
}
