use chrono::NaiveDate;
use model::{Id, Transaction, TransactionType};
use rust_decimal::Decimal;

/// Client-side filter over an already-fetched transaction list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub transaction_type: Option<TransactionType>,
    pub account_id: Option<Id>,
    pub category_id: Option<Id>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    /// Case-insensitive match on description or notes.
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        let date = tx.transaction_date;
        if self.start.is_some_and(|start| date < start) || self.end.is_some_and(|end| date > end) {
            return false;
        }
        if self.transaction_type.is_some_and(|t| t != tx.transaction_type) {
            return false;
        }
        if self.account_id.is_some() && self.account_id != tx.account_id() {
            return false;
        }
        if self.category_id.is_some() && self.category_id != tx.category_id() {
            return false;
        }
        if self.min_amount.is_some_and(|min| tx.amount < min)
            || self.max_amount.is_some_and(|max| tx.amount > max)
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                tx.description.to_lowercase().contains(&needle)
                    || tx
                        .notes
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Newest transactions on or after `since`, newest first, at most `limit`.
pub fn recent(transactions: &[Transaction], since: NaiveDate, limit: usize) -> Vec<&Transaction> {
    let mut recent: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.transaction_date >= since)
        .collect();
    recent.sort_by(|a, b| {
        b.transaction_date
            .cmp(&a.transaction_date)
            .then_with(|| b.id.cmp(&a.id))
    });
    recent.truncate(limit);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, transaction};
    use rust_decimal_macros::dec;

    fn sample() -> Vec<Transaction> {
        let mut rent = transaction(
            3,
            TransactionType::Expense,
            dec!(900),
            date(2024, 1, 15),
            Some("Rent"),
        );
        rent.notes = Some("January flat rent".to_string());
        vec![
            transaction(1, TransactionType::Expense, dec!(120), date(2024, 2, 3), Some("Food")),
            transaction(2, TransactionType::Income, dec!(5000), date(2024, 2, 1), Some("Salary")),
            rent,
            transaction(4, TransactionType::Expense, dec!(80), date(2024, 2, 3), None),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TransactionFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 4);
    }

    #[test]
    fn test_combined_filter() {
        let filter = TransactionFilter {
            start: Some(date(2024, 2, 1)),
            transaction_type: Some(TransactionType::Expense),
            min_amount: Some(dec!(100)),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&sample()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_search_matches_notes() {
        let filter = TransactionFilter {
            search: Some("  FLAT ".to_string()),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&sample()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let txs = sample();
        let ids: Vec<_> = recent(&txs, date(2024, 1, 20), 10).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 1, 2]);
        assert_eq!(recent(&txs, date(2000, 1, 1), 2).len(), 2);
    }
}
