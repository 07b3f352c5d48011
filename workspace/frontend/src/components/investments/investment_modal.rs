use common::format::input_date;
use model::{FieldErrors, Investment, InvestmentDraft, InvestmentType};
use yew::prelude::*;

use crate::api_client::InvestmentsApi;
use crate::hooks::ResourceHandle;
use crate::session::{today, use_session};
use crate::ui::form::{error_for, input_class, saved, Field, FormValues};
use crate::ui::loading::SubmitButton;

#[derive(Properties, PartialEq)]
pub struct InvestmentModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub investment: Option<Investment>,
    pub investments: ResourceHandle<InvestmentsApi>,
}

#[function_component(InvestmentModal)]
pub fn investment_modal(props: &InvestmentModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let user_id = use_session().and_then(|s| s.user_id());
    let draft = props
        .investment
        .as_ref()
        .map(InvestmentDraft::from)
        .unwrap_or_else(|| InvestmentDraft {
            start_date: Some(today()),
            ..InvestmentDraft::default()
        });

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_loading = is_loading.clone();
        let errors = errors.clone();
        let editing = props.investment.as_ref().map(|i| (i.id, i.user_id));
        let investments = props.investments.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = FormValues::from_form(&form_ref) else {
                return;
            };
            let draft = InvestmentDraft {
                name: values.text("name"),
                investment_type: values.choice("investment_type"),
                initial_amount: values.decimal("initial_amount"),
                current_value: values.decimal("current_value"),
                start_date: values.date("start_date"),
                end_date: values.date("end_date"),
                expected_return_rate: values.decimal("expected_return_rate"),
                ticker: values.optional_text("ticker"),
                notes: values.optional_text("notes"),
                user_id: editing.and_then(|(_, owner)| owner).or(user_id),
            };

            let is_loading = is_loading.clone();
            let errors = errors.clone();
            let investments = investments.clone();
            let on_close = on_close.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match editing {
                    Some((id, _)) => {
                        log::info!("Updating investment ID: {}", id);
                        investments.update(id, &draft).await
                    }
                    None => {
                        log::info!("Creating investment: {}", draft.name);
                        investments.create(&draft).await
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

    let (title, button_text) = if props.investment.is_some() {
        ("Edit Investment", "Update Investment")
    } else {
        ("Add Investment", "Create Investment")
    };
    let decimal_value = |d: Option<rust_decimal::Decimal>| d.map(|d| d.to_string()).unwrap_or_default();

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="investment_modal">
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">{title}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-3" novalidate={true}>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                        <Field label="Name" error={error_for(&errors, "name")}>
                            <input
                                name="name"
                                type="text"
                                placeholder="e.g. Index Fund SIP"
                                class={input_class("input", &errors, "name")}
                                value={draft.name.clone()}
                            />
                        </Field>

                        <Field label="Type" error={error_for(&errors, "investment_type")}>
                            <select name="investment_type" class={input_class("select", &errors, "investment_type")}>
                                { for InvestmentType::ALL.iter().map(|t| html! {
                                    <option value={t.as_str()} selected={*t == draft.investment_type}>{t.label()}</option>
                                })}
                            </select>
                        </Field>

                        <Field label="Initial amount" error={error_for(&errors, "initial_amount")}>
                            <input
                                name="initial_amount"
                                type="number"
                                step="0.01"
                                min="0"
                                class={input_class("input", &errors, "initial_amount")}
                                value={decimal_value(draft.initial_amount)}
                            />
                        </Field>

                        <Field label="Current value" error={error_for(&errors, "current_value")}>
                            <input
                                name="current_value"
                                type="number"
                                step="0.01"
                                min="0"
                                placeholder="Leave empty if unknown"
                                class={input_class("input", &errors, "current_value")}
                                value={decimal_value(draft.current_value)}
                            />
                        </Field>

                        <Field label="Start date" error={error_for(&errors, "start_date")}>
                            <input
                                name="start_date"
                                type="date"
                                class={input_class("input", &errors, "start_date")}
                                value={draft.start_date.map(input_date).unwrap_or_default()}
                            />
                        </Field>

                        <Field label="End date" error={error_for(&errors, "end_date")}>
                            <input
                                name="end_date"
                                type="date"
                                class={input_class("input", &errors, "end_date")}
                                value={draft.end_date.map(input_date).unwrap_or_default()}
                            />
                        </Field>

                        <Field label="Expected return (% p.a.)" error={error_for(&errors, "expected_return_rate")}>
                            <input
                                name="expected_return_rate"
                                type="number"
                                step="0.01"
                                min="0"
                                class={input_class("input", &errors, "expected_return_rate")}
                                value={decimal_value(draft.expected_return_rate)}
                            />
                        </Field>

                        <Field label="Ticker" error={error_for(&errors, "ticker")}>
                            <input
                                name="ticker"
                                type="text"
                                placeholder="Optional"
                                class={input_class("input", &errors, "ticker")}
                                value={draft.ticker.clone().unwrap_or_default()}
                            />
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
