use common::Badged;
use model::Account;
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::ui::money;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub account: Account,
    pub on_edit: Callback<Account>,
    pub on_delete: Callback<Account>,
}

#[function_component(AccountCard)]
pub fn account_card(props: &Props) -> Html {
    let account = &props.account;
    let badge = account.account_type.badge();
    let liability = account.account_type.is_liability();
    let balance = money::balance(account.balance, liability);
    let balance_class = if liability || account.balance < Decimal::ZERO {
        "text-error"
    } else {
        "text-success"
    };

    let on_edit = {
        let account = account.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |_| {
            log::info!("Edit clicked for account: {}", account.name);
            on_edit.emit(account.clone());
        })
    };
    let on_delete = {
        let account = account.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| on_delete.emit(account.clone()))
    };

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow">
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <div class="flex items-center gap-3">
                        <div class={classes!("w-10", "h-10", "rounded-lg", "flex", "items-center", "justify-center", "bg-base-200")}>
                            <i class={classes!(badge.icon_class(), "text-lg")}></i>
                        </div>
                        <div>
                            <h3 class="card-title text-base">{&account.name}</h3>
                            <span class={classes!("badge", "badge-sm", "mt-1", badge.badge_class())}>
                                {account.account_type.label()}
                            </span>
                        </div>
                    </div>
                    <div class={classes!("text-2xl", "font-bold", "font-mono", balance_class)}>
                        {balance}
                    </div>
                </div>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-sm btn-ghost" onclick={on_edit}>
                        <i class="fas fa-edit"></i>{" Edit"}
                    </button>
                    <button class="btn btn-sm btn-ghost text-error" onclick={on_delete}>
                        <i class="fas fa-trash"></i>{" Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}
