use common::format::input_date;
use compute::categories::categories_for_transaction_type;
use model::{Account, Category, FieldErrors, Transaction, TransactionDraft, TransactionType};
use yew::prelude::*;

use crate::api_client::TransactionsApi;
use crate::hooks::ResourceHandle;
use crate::session::today;
use crate::ui::form::{error_for, input_class, saved, Field, FormValues};
use crate::ui::loading::SubmitButton;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub transaction: Option<Transaction>,
    pub transactions: ResourceHandle<TransactionsApi>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let draft = props
        .transaction
        .as_ref()
        .map(TransactionDraft::from)
        .unwrap_or_else(|| TransactionDraft {
            transaction_date: Some(today()),
            ..TransactionDraft::default()
        });
    let transaction_type = use_state(|| draft.transaction_type);

    let on_type_change = {
        let transaction_type = transaction_type.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            transaction_type.set(select.value().parse().unwrap_or_default());
        })
    };

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_loading = is_loading.clone();
        let errors = errors.clone();
        let editing = props.transaction.as_ref().map(|t| t.id);
        let transactions = props.transactions.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = FormValues::from_form(&form_ref) else {
                return;
            };
            let draft = TransactionDraft {
                description: values.text("description"),
                amount: values.decimal("amount"),
                transaction_type: values.choice("transaction_type"),
                transaction_date: values.date("transaction_date"),
                account_id: values.id("account_id"),
                category_id: values.id("category_id"),
                notes: values.optional_text("notes"),
            };

            let is_loading = is_loading.clone();
            let errors = errors.clone();
            let transactions = transactions.clone();
            let on_close = on_close.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match editing {
                    Some(id) => {
                        log::info!("Updating transaction ID: {}", id);
                        transactions.update(id, &draft).await
                    }
                    None => {
                        log::info!("Creating transaction: {}", draft.description);
                        transactions.create(&draft).await
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

    let (title, button_text) = if props.transaction.is_some() {
        ("Edit Transaction", "Update Transaction")
    } else {
        ("Add Transaction", "Create Transaction")
    };
    let category_choices = categories_for_transaction_type(&props.categories, *transaction_type);

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="transaction_modal">
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">{title}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-3" novalidate={true}>
                    <Field label="Description" error={error_for(&errors, "description")}>
                        <input
                            name="description"
                            type="text"
                            placeholder="e.g. Groceries"
                            class={input_class("input", &errors, "description")}
                            value={draft.description.clone()}
                        />
                    </Field>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                        <Field label="Type" error={error_for(&errors, "transaction_type")}>
                            <select
                                name="transaction_type"
                                class={input_class("select", &errors, "transaction_type")}
                                onchange={on_type_change}
                            >
                                { for TransactionType::ALL.iter().map(|t| html! {
                                    <option value={t.as_str()} selected={*t == *transaction_type}>{t.label()}</option>
                                })}
                            </select>
                        </Field>

                        <Field label="Amount" error={error_for(&errors, "amount")}>
                            <input
                                name="amount"
                                type="number"
                                step="0.01"
                                min="0"
                                placeholder="0.00"
                                class={input_class("input", &errors, "amount")}
                                value={draft.amount.map(|a| a.to_string()).unwrap_or_default()}
                            />
                        </Field>

                        <Field label="Date" error={error_for(&errors, "transaction_date")}>
                            <input
                                name="transaction_date"
                                type="date"
                                class={input_class("input", &errors, "transaction_date")}
                                value={draft.transaction_date.map(input_date).unwrap_or_default()}
                            />
                        </Field>

                        <Field label="Account" error={error_for(&errors, "account_id")}>
                            <select name="account_id" class={input_class("select", &errors, "account_id")}>
                                <option value="" selected={draft.account_id.is_none()}>{"Select account"}</option>
                                { for props.accounts.iter().map(|a| html! {
                                    <option value={a.id.to_string()} selected={draft.account_id == Some(a.id)}>{&a.name}</option>
                                })}
                            </select>
                        </Field>
                    </div>

                    <Field label="Category" error={error_for(&errors, "category_id")}>
                        <select name="category_id" class={input_class("select", &errors, "category_id")}>
                            <option value="" selected={draft.category_id.is_none()}>{"Select category"}</option>
                            { for category_choices.iter().map(|c| html! {
                                <option value={c.id.to_string()} selected={draft.category_id == Some(c.id)}>
                                    { if c.is_top_level() { c.name.clone() } else { format!("↳ {}", c.name) } }
                                </option>
                            })}
                        </select>
                    </Field>

                    <Field label="Notes" error={error_for(&errors, "notes")}>
                        <textarea
                            name="notes"
                            rows="2"
                            class={input_class("textarea", &errors, "notes")}
                            value={draft.notes.clone().unwrap_or_default()}
                        />
                    </Field>

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
