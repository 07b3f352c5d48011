use common::format::input_date;
use compute::categories::categories_for_transaction_type;
use model::{
    Account, Category, FieldErrors, Frequency, ScheduledTransaction, ScheduledTransactionDraft,
    TransactionType,
};
use yew::prelude::*;

use crate::api_client::ScheduledApi;
use crate::hooks::ResourceHandle;
use crate::ui::form::{error_for, input_class, saved, Field, FormValues};
use crate::ui::loading::SubmitButton;

#[derive(Properties, PartialEq)]
pub struct ScheduledModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub scheduled: Option<ScheduledTransaction>,
    pub schedules: ResourceHandle<ScheduledApi>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
}

#[function_component(ScheduledModal)]
pub fn scheduled_modal(props: &ScheduledModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let draft = props
        .scheduled
        .as_ref()
        .map(ScheduledTransactionDraft::from)
        .unwrap_or_default();
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
        let editing = props.scheduled.as_ref().map(|s| s.id);
        let schedules = props.schedules.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = FormValues::from_form(&form_ref) else {
                return;
            };
            let draft = ScheduledTransactionDraft {
                description: values.text("description"),
                amount: values.decimal("amount"),
                frequency: values.choice("frequency"),
                next_due_date: values.date("next_due_date"),
                transaction_type: values.choice("transaction_type"),
                account_id: values.id("account_id"),
                category_id: values.id("category_id"),
                notes: values.optional_text("notes"),
                active: values.checked("active"),
            };

            let is_loading = is_loading.clone();
            let errors = errors.clone();
            let schedules = schedules.clone();
            let on_close = on_close.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match editing {
                    Some(id) => {
                        log::info!("Updating scheduled transaction ID: {}", id);
                        schedules.update(id, &draft).await
                    }
                    None => {
                        log::info!("Creating scheduled transaction: {}", draft.description);
                        schedules.create(&draft).await
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

    let (title, button_text) = if props.scheduled.is_some() {
        ("Edit Scheduled Transaction", "Update")
    } else {
        ("Add Scheduled Transaction", "Create")
    };
    let category_choices = categories_for_transaction_type(&props.categories, *transaction_type);

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="scheduled_modal">
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">{title}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-3" novalidate={true}>
                    <Field label="Description" error={error_for(&errors, "description")}>
                        <input
                            name="description"
                            type="text"
                            placeholder="e.g. Rent"
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

                        <Field label="Frequency" error={error_for(&errors, "frequency")}>
                            <select name="frequency" class={input_class("select", &errors, "frequency")}>
                                { for Frequency::ALL.iter().map(|f| html! {
                                    <option value={f.as_str()} selected={*f == draft.frequency}>{f.label()}</option>
                                })}
                            </select>
                        </Field>

                        <Field label="Next due date" error={error_for(&errors, "next_due_date")}>
                            <input
                                name="next_due_date"
                                type="date"
                                class={input_class("input", &errors, "next_due_date")}
                                value={draft.next_due_date.map(input_date).unwrap_or_default()}
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

                        <Field label="Category" error={error_for(&errors, "category_id")}>
                            <select name="category_id" class={input_class("select", &errors, "category_id")}>
                                <option value="" selected={draft.category_id.is_none()}>{"Select category"}</option>
                                { for category_choices.iter().map(|c| html! {
                                    <option value={c.id.to_string()} selected={draft.category_id == Some(c.id)}>{&c.name}</option>
                                })}
                            </select>
                        </Field>
                    </div>

                    <Field label="Notes" error={error_for(&errors, "notes")}>
                        <textarea
                            name="notes"
                            rows="2"
                            class={input_class("textarea", &errors, "notes")}
                            value={draft.notes.clone().unwrap_or_default()}
                        />
                    </Field>

                    <label class="label cursor-pointer justify-start gap-3">
                        <input name="active" type="checkbox" class="toggle toggle-primary" checked={draft.active} />
                        <span class="label-text">{"Active"}</span>
                    </label>

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
