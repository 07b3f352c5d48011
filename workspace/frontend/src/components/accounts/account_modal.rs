use model::{Account, AccountDraft, AccountType, FieldErrors};
use yew::prelude::*;

use crate::api_client::AccountsApi;
use crate::hooks::ResourceHandle;
use crate::session::use_session;
use crate::ui::form::{error_for, input_class, saved, Field, FormValues};
use crate::ui::loading::SubmitButton;

#[derive(Properties, PartialEq)]
pub struct AccountModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    /// Account being edited; `None` adds a new one.
    pub account: Option<Account>,
    pub accounts: ResourceHandle<AccountsApi>,
}

#[function_component(AccountModal)]
pub fn account_modal(props: &AccountModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let user_id = use_session().and_then(|s| s.user_id());

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_loading = is_loading.clone();
        let errors = errors.clone();
        let editing = props.account.clone();
        let accounts = props.accounts.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = FormValues::from_form(&form_ref) else {
                return;
            };
            let draft = AccountDraft {
                name: values.text("name"),
                account_type: values.choice("account_type"),
                balance: values.decimal("balance"),
                user_id: editing.as_ref().and_then(|a| a.user_id).or(user_id),
            };

            let is_loading = is_loading.clone();
            let errors = errors.clone();
            let editing = editing.clone();
            let accounts = accounts.clone();
            let on_close = on_close.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match &editing {
                    Some(account) => {
                        log::info!("Updating account ID: {}", account.id);
                        accounts.update(account.id, &draft).await
                    }
                    None => {
                        log::info!("Creating new account: {}", draft.name);
                        accounts.create(&draft).await
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

    let (title, button_text) = if props.account.is_some() {
        ("Edit Account", "Update Account")
    } else {
        ("Add Account", "Create Account")
    };
    let current_type = props.account.as_ref().map(|a| a.account_type).unwrap_or_default();

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="account_modal">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4" novalidate={true}>
                    <Field label="Name" error={error_for(&errors, "name")}>
                        <input
                            name="name"
                            type="text"
                            placeholder="e.g. Salary Account"
                            class={input_class("input", &errors, "name")}
                            value={props.account.as_ref().map(|a| a.name.clone()).unwrap_or_default()}
                        />
                    </Field>

                    <Field label="Type" error={error_for(&errors, "account_type")}>
                        <select name="account_type" class={input_class("select", &errors, "account_type")}>
                            { for AccountType::ALL.iter().map(|kind| html! {
                                <option value={kind.as_str()} selected={*kind == current_type}>
                                    {kind.label()}
                                </option>
                            })}
                        </select>
                    </Field>

                    <Field label="Balance" error={error_for(&errors, "balance")}>
                        <input
                            name="balance"
                            type="number"
                            step="0.01"
                            placeholder="0.00"
                            class={input_class("input", &errors, "balance")}
                            value={props.account.as_ref().map(|a| a.balance.to_string()).unwrap_or_default()}
                        />
                    </Field>
                    if current_type == AccountType::Credit || props.account.is_none() {
                        <p class="text-xs text-base-content/60">
                            {"Credit balances are entered as the amount owed; they count against net worth."}
                        </p>
                    }

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
