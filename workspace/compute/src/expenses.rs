//! Spending breakdowns for the dashboard chart.

use chrono::{Datelike, NaiveDate};
use model::{Transaction, TransactionType};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Number of categories the expense chart shows.
pub const TOP_CATEGORIES: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total: Decimal,
}

impl MonthlyTotal {
    /// Short label such as `Jan 2024`.
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CashFlow {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

fn expenses(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Expense)
}

/// Largest expense categories, highest first. Ties keep first appearance.
/// Transactions without a category are grouped as "Uncategorized".
pub fn top_expense_categories(transactions: &[Transaction], limit: usize) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for tx in expenses(transactions) {
        let name = tx.category_name();
        match totals.iter_mut().find(|t| t.name == name) {
            Some(total) => total.total += tx.amount,
            None => totals.push(CategoryTotal {
                name: name.to_string(),
                total: tx.amount,
            }),
        }
    }

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals.truncate(limit);
    totals
}

/// Expense totals per calendar month, oldest first.
pub fn monthly_expenses(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
    for tx in expenses(transactions) {
        let key = (tx.transaction_date.year(), tx.transaction_date.month());
        *months.entry(key).or_insert(Decimal::ZERO) += tx.amount;
    }

    months
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal { year, month, total })
        .collect()
}

/// Income against expenses. Transfers move money between accounts and are
/// left out.
pub fn cash_flow(transactions: &[Transaction]) -> CashFlow {
    let mut flow = CashFlow::default();
    for tx in transactions {
        match tx.transaction_type {
            TransactionType::Income => flow.income += tx.amount,
            TransactionType::Expense => flow.expenses += tx.amount,
            TransactionType::Transfer => {}
        }
    }
    flow.net = flow.income - flow.expenses;
    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, transaction};
    use rust_decimal_macros::dec;

    fn sample() -> Vec<Transaction> {
        vec![
            transaction(1, TransactionType::Expense, dec!(120), date(2024, 2, 3), Some("Food")),
            transaction(2, TransactionType::Income, dec!(5000), date(2024, 2, 1), Some("Salary")),
            transaction(3, TransactionType::Expense, dec!(900), date(2024, 1, 15), Some("Rent")),
            transaction(4, TransactionType::Expense, dec!(80), date(2024, 2, 20), None),
            transaction(5, TransactionType::Expense, dec!(30), date(2024, 1, 2), Some("Food")),
            transaction(6, TransactionType::Transfer, dec!(1000), date(2024, 2, 5), None),
        ]
    }

    #[test]
    fn test_top_categories() {
        let top = top_expense_categories(&sample(), TOP_CATEGORIES);
        let names: Vec<_> = top.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Uncategorized"]);
        assert_eq!(top[1].total, dec!(150));

        assert_eq!(top_expense_categories(&sample(), 1).len(), 1);
    }

    #[test]
    fn test_monthly_expenses_are_chronological() {
        let months = monthly_expenses(&sample());
        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[0].month), (2024, 1));
        assert_eq!(months[0].total, dec!(930));
        assert_eq!(months[1].total, dec!(200));
        assert_eq!(months[1].label(), "Feb 2024");
    }

    #[test]
    fn test_cash_flow_skips_transfers() {
        let flow = cash_flow(&sample());
        assert_eq!(flow.income, dec!(5000));
        assert_eq!(flow.expenses, dec!(1130));
        assert_eq!(flow.net, dec!(3870));
    }
}
