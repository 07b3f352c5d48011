use compute::investment::{format_percentage, portfolio_summary};
use model::Investment;
use rust_decimal::Decimal;
use yew::prelude::*;

use super::investment_card::InvestmentCard;
use super::investment_modal::InvestmentModal;
use super::performance_modal::PerformanceModal;
use super::value_modal::ValueModal;
use crate::api_client::{use_api_client, InvestmentsApi};
use crate::hooks::use_resource;
use crate::session::use_session;
use crate::ui::confirm::confirm_delete;
use crate::ui::error::{list_status, StaleBanner};
use crate::ui::money::{money, SignedAmount};

/// Which investment dialog is open.
#[derive(Clone, PartialEq)]
enum Dialog {
    Closed,
    Edit(Option<Investment>),
    Revalue(Investment),
    Performance(Investment),
}

#[function_component(Investments)]
pub fn investments() -> Html {
    log::trace!("Investments component rendering");
    let client = use_api_client();
    let owner = use_session().and_then(|s| s.user_id());
    let investments = use_resource(InvestmentsApi { client, owner });

    let dialog = use_state(|| Dialog::Closed);
    let modal_key = use_state(|| 0u32);

    let open = {
        let dialog = dialog.clone();
        let modal_key = modal_key.clone();
        Callback::from(move |next: Dialog| {
            modal_key.set(*modal_key + 1);
            dialog.set(next);
        })
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(Dialog::Closed))
    };

    let on_delete = {
        let investments = investments.clone();
        Callback::from(move |investment: Investment| {
            if !confirm_delete("investment", &investment.name) {
                return;
            }
            let investments = investments.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = investments.remove(investment.id).await;
            });
        })
    };

    let on_retry = {
        let investments = investments.clone();
        Callback::from(move |_| investments.refresh())
    };

    let state = investments.state();
    let summary = portfolio_summary(&state.items);
    let on_add = open.reform(|_: MouseEvent| Dialog::Edit(None));
    let on_edit = open.reform(|i| Dialog::Edit(Some(i)));
    let on_revalue = open.reform(Dialog::Revalue);
    let on_performance = open.reform(Dialog::Performance);

    let (editing, show_edit) = match &*dialog {
        Dialog::Edit(investment) => (investment.clone(), true),
        _ => (None, false),
    };
    let (revaluing, show_value) = match &*dialog {
        Dialog::Revalue(investment) => (Some(investment.clone()), true),
        _ => (None, false),
    };

    html! {
        <>
            <InvestmentModal
                key={format!("edit-{}", *modal_key)}
                show={show_edit}
                on_close={on_close.clone()}
                investment={editing}
                investments={investments.clone()}
            />
            <ValueModal
                key={format!("value-{}", *modal_key)}
                show={show_value}
                on_close={on_close.clone()}
                investment={revaluing}
                investments={investments.clone()}
            />
            if let Dialog::Performance(investment) = &*dialog {
                <PerformanceModal
                    key={format!("performance-{}", *modal_key)}
                    investment={investment.clone()}
                    on_close={on_close.clone()}
                />
            }

            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Investments"}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add Investment"}
                </button>
            </div>

            if summary.count > 0 {
                <div class="stats stats-vertical md:stats-horizontal shadow mb-4 w-full">
                    <div class="stat">
                        <div class="stat-title">{"Invested"}</div>
                        <div class="stat-value text-2xl">{money(summary.invested)}</div>
                        <div class="stat-desc">{format!("{} holdings", summary.count)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Current value"}</div>
                        <div class="stat-value text-2xl">{money(summary.current)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Gain"}</div>
                        <div class="stat-value text-2xl">
                            <SignedAmount amount={summary.gain.abs()} outflow={summary.gain < Decimal::ZERO} />
                        </div>
                        <div class="stat-desc">{format!("{}%", format_percentage(summary.gain_percentage()))}</div>
                    </div>
                </div>
            }

            <StaleBanner message={state.error.clone().filter(|_| !state.items.is_empty())} on_retry={on_retry.clone()} />

            {
                match list_status(
                    state,
                    "No investments yet. Add one to start tracking returns.",
                    on_retry,
                ) {
                    Some(status) => status,
                    None => html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            { for state.items.iter().map(|investment| html! {
                                <InvestmentCard
                                    key={investment.id}
                                    investment={investment.clone()}
                                    on_edit={on_edit.clone()}
                                    on_delete={on_delete.clone()}
                                    on_revalue={on_revalue.clone()}
                                    on_performance={on_performance.clone()}
                                />
                            })}
                        </div>
                    },
                }
            }
        </>
    }
}
