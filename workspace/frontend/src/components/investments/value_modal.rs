use common::resource::Action;
use common::{ApiError, ResourceEvent};
use model::{FieldErrors, Investment};
use yew::prelude::*;

use crate::api_client::InvestmentsApi;
use crate::hooks::ResourceHandle;
use crate::ui::form::{error_for, input_class, saved, Field, FormValues};
use crate::ui::loading::SubmitButton;
use crate::ui::money::optional_money;

#[derive(Properties, PartialEq)]
pub struct ValueModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub investment: Option<Investment>,
    pub investments: ResourceHandle<InvestmentsApi>,
}

/// Records a new current value for one investment.
#[function_component(ValueModal)]
pub fn value_modal(props: &ValueModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let errors = use_state(FieldErrors::new);

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_loading = is_loading.clone();
        let errors = errors.clone();
        let investment_id = props.investment.as_ref().map(|i| i.id);
        let investments = props.investments.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(values), Some(id)) = (FormValues::from_form(&form_ref), investment_id) else {
                return;
            };
            let value = match values.decimal("current_value") {
                Some(value) if value > rust_decimal::Decimal::ZERO => value,
                _ => {
                    let mut fields = FieldErrors::new();
                    fields.insert(
                        "current_value".into(),
                        "Current value must be greater than 0".into(),
                    );
                    errors.set(fields);
                    return;
                }
            };

            let is_loading = is_loading.clone();
            let errors = errors.clone();
            let investments = investments.clone();
            let on_close = on_close.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                log::info!("Updating value of investment {} to {}", id, value);
                let result: Result<Investment, ApiError> =
                    investments.api().client.update_investment_value(id, value).await;
                investments.dispatch(ResourceEvent::from_update(result.clone(), Action::Revalue));
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

    let Some(investment) = props.investment.as_ref() else {
        return html! {};
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="value_modal">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{format!("Update value of {}", investment.name)}</h3>
                <p class="text-sm text-base-content/60">
                    {format!("Currently recorded: {}", optional_money(investment.current_value))}
                </p>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-3" novalidate={true}>
                    <Field label="Current value" error={error_for(&errors, "current_value")}>
                        <input
                            name="current_value"
                            type="number"
                            step="0.01"
                            min="0"
                            class={input_class("input", &errors, "current_value")}
                            value={investment.display_value().to_string()}
                        />
                    </Field>
                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()} disabled={*is_loading}>
                            {"Cancel"}
                        </button>
                        <SubmitButton label="Save Value" busy={*is_loading} />
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
