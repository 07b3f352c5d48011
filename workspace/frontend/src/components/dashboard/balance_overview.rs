use common::Badged;
use compute::{summarize, LiabilityDisplay};
use model::Account;
use rust_decimal::Decimal;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::ui::money::money;

#[derive(Properties, PartialEq)]
pub struct BalanceOverviewProps {
    pub accounts: Vec<Account>,
}

/// Net worth with one tile per account type present.
#[function_component(BalanceOverview)]
pub fn balance_overview(props: &BalanceOverviewProps) -> Html {
    let summary = summarize(&props.accounts, LiabilityDisplay::Negated);
    let net_class = if summary.net_worth < Decimal::ZERO { "text-error" } else { "text-success" };

    html! {
        <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
            <div class="stat">
                <div class="stat-figure text-primary">
                    <i class="fas fa-scale-balanced text-3xl"></i>
                </div>
                <div class="stat-title">{"Net Worth"}</div>
                <div class={classes!("stat-value", net_class)}>{money(summary.net_worth)}</div>
                <div class="stat-desc">
                    <Link<Route> to={Route::Accounts} classes="link link-hover">
                        {format!("{} accounts", props.accounts.len())}
                    </Link<Route>>
                </div>
            </div>
            { for summary.by_type.iter().map(|subtotal| {
                let badge = subtotal.account_type.badge();
                html! {
                    <div class="stat">
                        <div class={classes!("stat-figure", badge.text_class())}>
                            <i class={classes!(badge.icon_class(), "text-2xl")}></i>
                        </div>
                        <div class="stat-title">{subtotal.account_type.label()}</div>
                        <div class="stat-value text-xl">
                            {money(subtotal.total)}
                        </div>
                        <div class="stat-desc">{format!("{} accounts", subtotal.count)}</div>
                    </div>
                }
            })}
        </div>
    }
}
