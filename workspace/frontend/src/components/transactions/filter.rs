use common::format::{input_date, Period};
use compute::TransactionFilter;
use model::{Account, Category, TransactionType};
use yew::prelude::*;

use crate::session::today;
use crate::ui::form::FormValues;

#[derive(Properties, PartialEq)]
pub struct TransactionFilterBarProps {
    pub filter: TransactionFilter,
    pub on_change: Callback<TransactionFilter>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
}

fn read_filter(values: &FormValues) -> TransactionFilter {
    TransactionFilter {
        start: values.date("start"),
        end: values.date("end"),
        transaction_type: values.optional_text("transaction_type").and_then(|t| t.parse().ok()),
        account_id: values.id("account_id"),
        category_id: values.id("category_id"),
        min_amount: values.decimal("min_amount"),
        max_amount: values.decimal("max_amount"),
        search: values.optional_text("search"),
    }
}

#[function_component(TransactionFilterBar)]
pub fn transaction_filter_bar(props: &TransactionFilterBarProps) -> Html {
    let form_ref = use_node_ref();
    let expanded = use_state(|| false);
    // Inputs are uncontrolled; presets and clearing reseed them by remounting
    // the form.
    let seed = use_state(|| props.filter.clone());
    let revision = use_state(|| 0u32);

    let reseed = {
        let seed = seed.clone();
        let revision = revision.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |filter: TransactionFilter| {
            seed.set(filter.clone());
            revision.set(*revision + 1);
            on_change.emit(filter);
        })
    };

    let on_input = {
        let form_ref = form_ref.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: InputEvent| {
            if let Some(values) = FormValues::from_form(&form_ref) {
                on_change.emit(read_filter(&values));
            }
        })
    };

    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let on_period = {
        let filter = props.filter.clone();
        let reseed = reseed.clone();
        Callback::from(move |period: Period| {
            let range = period.range(today());
            log::debug!("Filtering by {}: {} to {}", period.label(), range.start, range.end);
            reseed.emit(TransactionFilter {
                start: Some(range.start),
                end: Some(range.end),
                ..filter.clone()
            });
        })
    };

    let on_clear = {
        Callback::from(move |_: MouseEvent| reseed.emit(TransactionFilter::default()))
    };

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let filter = &*seed;
    let date_value = |d: Option<chrono::NaiveDate>| d.map(input_date).unwrap_or_default();
    let amount_value = |a: Option<rust_decimal::Decimal>| a.map(|a| a.to_string()).unwrap_or_default();

    html! {
        <div class="card bg-base-100 shadow mb-4">
            <form key={*revision} ref={form_ref} class="card-body p-4 gap-3" oninput={on_input} onsubmit={on_submit}>
                <div class="flex flex-wrap gap-2 items-center">
                    <input
                        name="search"
                        type="search"
                        placeholder="Search description or notes"
                        class="input input-bordered input-sm flex-1 min-w-48"
                        value={filter.search.clone().unwrap_or_default()}
                    />
                    <div class="join">
                        { for Period::ALL.iter().map(|period| {
                            let period = *period;
                            let onclick = on_period.reform(move |_: MouseEvent| period);
                            html! {
                                <button type="button" class="btn btn-sm join-item" {onclick}>
                                    {period.label()}
                                </button>
                            }
                        })}
                    </div>
                    <button type="button" class="btn btn-sm btn-ghost" onclick={toggle}>
                        <i class="fas fa-filter"></i>
                        { if *expanded { " Fewer filters" } else { " More filters" } }
                    </button>
                    if !props.filter.is_empty() {
                        <button type="button" class="btn btn-sm btn-ghost text-error" onclick={on_clear}>
                            <i class="fas fa-times"></i> {" Clear"}
                        </button>
                    }
                </div>

                <div class={classes!("grid", "grid-cols-2", "md:grid-cols-4", "gap-2", (!*expanded).then_some("hidden"))}>
                    <label class="form-control">
                        <span class="label-text text-xs">{"From"}</span>
                        <input name="start" type="date" class="input input-bordered input-sm" value={date_value(filter.start)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text text-xs">{"To"}</span>
                        <input name="end" type="date" class="input input-bordered input-sm" value={date_value(filter.end)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text text-xs">{"Min amount"}</span>
                        <input name="min_amount" type="number" step="0.01" class="input input-bordered input-sm" value={amount_value(filter.min_amount)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text text-xs">{"Max amount"}</span>
                        <input name="max_amount" type="number" step="0.01" class="input input-bordered input-sm" value={amount_value(filter.max_amount)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text text-xs">{"Type"}</span>
                        <select name="transaction_type" class="select select-bordered select-sm">
                            <option value="" selected={filter.transaction_type.is_none()}>{"All types"}</option>
                            { for TransactionType::ALL.iter().map(|t| html! {
                                <option value={t.as_str()} selected={filter.transaction_type == Some(*t)}>{t.label()}</option>
                            })}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text text-xs">{"Account"}</span>
                        <select name="account_id" class="select select-bordered select-sm">
                            <option value="" selected={filter.account_id.is_none()}>{"All accounts"}</option>
                            { for props.accounts.iter().map(|a| html! {
                                <option value={a.id.to_string()} selected={filter.account_id == Some(a.id)}>{&a.name}</option>
                            })}
                        </select>
                    </label>
                    <label class="form-control col-span-2">
                        <span class="label-text text-xs">{"Category"}</span>
                        <select name="category_id" class="select select-bordered select-sm">
                            <option value="" selected={filter.category_id.is_none()}>{"All categories"}</option>
                            { for props.categories.iter().map(|c| html! {
                                <option value={c.id.to_string()} selected={filter.category_id == Some(c.id)}>{&c.name}</option>
                            })}
                        </select>
                    </label>
                </div>
            </form>
        </div>
    }
}
