use common::format::{format_balance, format_currency};
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::settings;

/// Amount in the configured currency.
pub fn money(amount: Decimal) -> String {
    format_currency(Some(amount), &settings::get_settings().currency)
}

pub fn optional_money(amount: Option<Decimal>) -> String {
    format_currency(amount, &settings::get_settings().currency)
}

pub fn balance(amount: Decimal, liability: bool) -> String {
    format_balance(amount, liability, &settings::get_settings().currency)
}

#[derive(Properties, PartialEq)]
pub struct SignedAmountProps {
    pub amount: Decimal,
    /// Expenses render as outflows.
    pub outflow: bool,
    #[prop_or_default]
    pub neutral: bool,
}

/// Transaction amount with a +/- sign and colour.
#[function_component(SignedAmount)]
pub fn signed_amount(props: &SignedAmountProps) -> Html {
    let (sign, class) = match (props.neutral, props.outflow) {
        (true, _) => ("", "text-base-content"),
        (false, true) => ("-", "text-error"),
        (false, false) => ("+", "text-success"),
    };
    html! {
        <span class={classes!("font-mono", "font-bold", class)}>
            {format!("{}{}", sign, money(props.amount.abs()))}
        </span>
    }
}
