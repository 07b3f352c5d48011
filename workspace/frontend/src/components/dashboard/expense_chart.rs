use compute::expenses::{monthly_expenses, top_expense_categories, TOP_CATEGORIES};
use model::Transaction;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use yew::prelude::*;

use crate::ui::chart::{base_layout, PlotlyChart};
use crate::ui::error::EmptyState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Grouping {
    Category,
    Month,
}

fn as_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

fn category_trace(transactions: &[Transaction]) -> Option<Value> {
    let totals = top_expense_categories(transactions, TOP_CATEGORIES);
    if totals.is_empty() {
        return None;
    }
    Some(json!([{
        "labels": totals.iter().map(|t| t.name.clone()).collect::<Vec<_>>(),
        "values": totals.iter().map(|t| as_f64(t.total)).collect::<Vec<_>>(),
        "type": "pie",
        "hole": 0.45,
        "textinfo": "label+percent",
    }]))
}

fn monthly_trace(transactions: &[Transaction]) -> Option<Value> {
    let totals = monthly_expenses(transactions);
    if totals.is_empty() {
        return None;
    }
    Some(json!([{
        "x": totals.iter().map(|t| t.label()).collect::<Vec<_>>(),
        "y": totals.iter().map(|t| as_f64(t.total)).collect::<Vec<_>>(),
        "type": "bar",
        "marker": {"color": "#ef4444"},
        "name": "Expenses",
    }]))
}

#[derive(Properties, PartialEq)]
pub struct ExpenseChartProps {
    pub transactions: Vec<Transaction>,
}

#[function_component(ExpenseChart)]
pub fn expense_chart(props: &ExpenseChartProps) -> Html {
    let grouping = use_state(|| Grouping::Category);

    let tab = |value: Grouping, label: &'static str| {
        let grouping = grouping.clone();
        let active = *grouping == value;
        let onclick = Callback::from(move |_: MouseEvent| grouping.set(value));
        html! {
            <a role="tab" class={classes!("tab", active.then_some("tab-active"))} {onclick}>{label}</a>
        }
    };

    let trace = match *grouping {
        Grouping::Category => category_trace(&props.transactions),
        Grouping::Month => monthly_trace(&props.transactions),
    };
    let layout = match *grouping {
        Grouping::Category => base_layout(json!({"showlegend": false, "margin": {"t": 10, "r": 10, "l": 10, "b": 10}})),
        Grouping::Month => base_layout(Value::Null),
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title">{"Expenses"}</h3>
                    <div role="tablist" class="tabs tabs-boxed tabs-sm">
                        {tab(Grouping::Category, "By category")}
                        {tab(Grouping::Month, "By month")}
                    </div>
                </div>
                {
                    match trace {
                        Some(data) => html! {
                            <PlotlyChart id="chart-expenses" {data} {layout} />
                        },
                        None => html! { <EmptyState message="No expenses recorded yet." /> },
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_trace_without_expenses() {
        assert!(category_trace(&[]).is_none());
        assert!(monthly_trace(&[]).is_none());
    }
}
