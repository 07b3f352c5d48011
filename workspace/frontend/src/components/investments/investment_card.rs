use common::format::format_date;
use common::Badged;
use compute::investment::{absolute_return, format_percentage, return_percentage};
use compute::ReturnTier;
use model::Investment;
use yew::prelude::*;

use crate::ui::money::{money, optional_money};

#[derive(Properties, PartialEq)]
pub struct InvestmentCardProps {
    pub investment: Investment,
    pub on_edit: Callback<Investment>,
    pub on_delete: Callback<Investment>,
    pub on_revalue: Callback<Investment>,
    pub on_performance: Callback<Investment>,
}

#[function_component(InvestmentCard)]
pub fn investment_card(props: &InvestmentCardProps) -> Html {
    let investment = &props.investment;
    let kind = investment.investment_type.badge();
    let percentage = return_percentage(investment);
    let tier = percentage.map(ReturnTier::from_percentage);

    let emit = |cb: &Callback<Investment>| {
        let investment = investment.clone();
        cb.reform(move |_: MouseEvent| investment.clone())
    };

    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <div>
                        <h3 class="card-title">
                            {&investment.name}
                            if let Some(ticker) = &investment.ticker {
                                <span class="badge badge-outline badge-sm font-mono">{ticker}</span>
                            }
                        </h3>
                        <span class={classes!("badge", "badge-sm", kind.badge_class())}>
                            <i class={classes!(kind.icon_class(), "mr-1")}></i>
                            {investment.investment_type.label()}
                        </span>
                    </div>
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost btn-sm btn-circle">
                            <i class="fas fa-ellipsis-v"></i>
                        </div>
                        <ul tabindex="0" class="dropdown-content menu bg-base-100 rounded-box z-10 w-44 p-2 shadow">
                            <li><a onclick={emit(&props.on_performance)}><i class="fas fa-chart-line"></i>{"Performance"}</a></li>
                            <li><a onclick={emit(&props.on_revalue)}><i class="fas fa-pen-to-square"></i>{"Update value"}</a></li>
                            <li><a onclick={emit(&props.on_edit)}><i class="fas fa-edit"></i>{"Edit"}</a></li>
                            <li><a class="text-error" onclick={emit(&props.on_delete)}><i class="fas fa-trash"></i>{"Delete"}</a></li>
                        </ul>
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-2 mt-2 text-sm">
                    <div>
                        <div class="text-base-content/60">{"Invested"}</div>
                        <div class="font-mono">{money(investment.initial_amount)}</div>
                    </div>
                    <div>
                        <div class="text-base-content/60">{"Current"}</div>
                        <div class="font-mono">{optional_money(investment.current_value)}</div>
                    </div>
                    <div>
                        <div class="text-base-content/60">{"Return"}</div>
                        <div class="font-mono">{optional_money(absolute_return(investment))}</div>
                    </div>
                    <div>
                        <div class="text-base-content/60">{"Return %"}</div>
                        {
                            match tier {
                                Some(tier) => html! {
                                    <span class={classes!("badge", tier.badge().badge_class())}>
                                        <i class={classes!(tier.badge().icon_class(), "mr-1")}></i>
                                        {format!("{}%", format_percentage(percentage))}
                                    </span>
                                },
                                None => html! { <span class="text-base-content/60">{format_percentage(None)}</span> },
                            }
                        }
                    </div>
                </div>

                <div class="text-xs text-base-content/60 mt-2">
                    {format!("Since {}", format_date(investment.start_date))}
                    if let Some(end) = investment.end_date {
                        {format!(" until {}", format_date(end))}
                    }
                </div>
            </div>
        </div>
    }
}
