use common::format::{format_date, input_date};
use compute::investment::{absolute_return, format_percentage, holding_period_for, return_percentage};
use compute::simulated_curve;
use model::Investment;
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::api_client::use_api_client;
use crate::hooks::FetchState;
use crate::session::today;
use crate::ui::chart::{base_layout, PlotlyChart};
use crate::ui::fetch_hook::use_fetch_with_refetch;
use crate::ui::money::optional_money;

#[derive(Properties, PartialEq)]
pub struct PerformanceModalProps {
    pub investment: Investment,
    pub on_close: Callback<()>,
}

#[function_component(PerformanceModal)]
pub fn performance_modal(props: &PerformanceModalProps) -> Html {
    let investment = &props.investment;
    let client = use_api_client();
    let (return_rate, refetch) = {
        let id = investment.id;
        use_fetch_with_refetch(id, move || {
            let client = client.clone();
            async move { client.investment_return_rate(id).await }
        })
    };

    let today = today();
    let curve = simulated_curve(investment, today);
    let data = serde_json::json!([{
        "x": curve.iter().map(|p| input_date(p.date)).collect::<Vec<_>>(),
        "y": curve.iter().map(|p| p.value.to_f64().unwrap_or_default()).collect::<Vec<_>>(),
        "type": "scatter",
        "mode": "lines+markers",
        "line": {"color": "#6366f1", "shape": "spline"},
        "name": investment.name,
    }]);

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let on_retry = refetch.reform(|_: MouseEvent| ());
    let percentage = return_percentage(investment);

    html! {
        <dialog class="modal modal-open" id="performance_modal">
            <div class="modal-box max-w-3xl">
                <h3 class="font-bold text-lg">{format!("{} performance", investment.name)}</h3>

                <div class="stats stats-vertical md:stats-horizontal shadow w-full my-4">
                    <div class="stat">
                        <div class="stat-title">{"Duration"}</div>
                        <div class="stat-value text-xl">{format!("{} years", holding_period_for(investment, today))}</div>
                        <div class="stat-desc">
                            {format!("From {}", format_date(investment.start_date))}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Absolute return"}</div>
                        <div class="stat-value text-xl">{optional_money(absolute_return(investment))}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Return"}</div>
                        <div class="stat-value text-xl">
                            {format_percentage(percentage)}
                            if percentage.is_some() { {"%"} }
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Annualized return"}</div>
                        <div class="stat-value text-xl">
                            {
                                match &*return_rate {
                                    FetchState::Success(Some(rate)) => html! { <span>{format!("{}%", format_percentage(Some(*rate)))}</span> },
                                    FetchState::Success(None) => html! { <span>{format_percentage(None)}</span> },
                                    FetchState::Error(_) => html! {
                                        <button class="btn btn-xs btn-outline btn-error" onclick={on_retry}>
                                            <i class="fas fa-redo"></i> {" Retry"}
                                        </button>
                                    },
                                    _ => html! { <span class="loading loading-dots loading-sm"></span> },
                                }
                            }
                        </div>
                        if let FetchState::Error(message) = &*return_rate {
                            <div class="stat-desc text-error">{message}</div>
                        }
                    </div>
                </div>

                <PlotlyChart
                    id={format!("investment-curve-{}", investment.id)}
                    data={data}
                    layout={base_layout(serde_json::json!({"showlegend": false}))}
                    height={260}
                />
                <p class="text-xs text-base-content/60 italic mt-2">
                    <i class="fas fa-info-circle mr-1"></i>
                    {"Illustrative curve, not historical data. It only connects the initial and current values."}
                </p>

                <div class="modal-action">
                    <button class="btn" onclick={on_close.clone()}>{"Close"}</button>
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
