use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::category::CategoryType;
use crate::validation::positive_amount;
use crate::{EntityRef, Id, ParseEnumError, wire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    Expense,
    Income,
    Transfer,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Expense,
        TransactionType::Income,
        TransactionType::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "EXPENSE",
            TransactionType::Income => "INCOME",
            TransactionType::Transfer => "TRANSFER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
            TransactionType::Transfer => "Transfer",
        }
    }

    /// Category type a transaction of this type may be filed under.
    /// Transfers have no matching category type.
    pub fn category_type(&self) -> Option<CategoryType> {
        match self {
            TransactionType::Expense => Some(CategoryType::Expense),
            TransactionType::Income => Some(CategoryType::Income),
            TransactionType::Transfer => None,
        }
    }

    /// Expenses are displayed as outflows.
    pub fn is_outflow(&self) -> bool {
        matches!(self, TransactionType::Expense)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("transaction type", s))
    }
}

/// A concrete money movement. The amount is always a positive magnitude;
/// direction comes from the transaction type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Id,
    pub description: String,
    #[serde(default, deserialize_with = "wire::decimal_or_zero")]
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    #[serde(deserialize_with = "wire::flexible_date")]
    pub transaction_date: NaiveDate,
    #[serde(default)]
    pub account: Option<EntityRef>,
    #[serde(default)]
    pub category: Option<EntityRef>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn account_id(&self) -> Option<Id> {
        self.account.as_ref().map(|a| a.id)
    }

    pub fn category_id(&self) -> Option<Id> {
        self.category.as_ref().map(|c| c.id)
    }

    pub fn account_name(&self) -> &str {
        self.account.as_ref().map(|a| a.name.as_str()).unwrap_or("Unknown")
    }

    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(
        required(message = "Amount is required"),
        custom(function = "positive_amount")
    )]
    pub amount: Option<Decimal>,
    pub transaction_type: TransactionType,
    #[validate(required(message = "Date is required"))]
    pub transaction_date: Option<NaiveDate>,
    #[validate(required(message = "Account is required"))]
    pub account_id: Option<Id>,
    #[validate(required(message = "Category is required"))]
    pub category_id: Option<Id>,
    pub notes: Option<String>,
}

impl From<&Transaction> for TransactionDraft {
    fn from(transaction: &Transaction) -> Self {
        Self {
            description: transaction.description.clone(),
            amount: Some(transaction.amount),
            transaction_type: transaction.transaction_type,
            transaction_date: Some(transaction.transaction_date),
            account_id: transaction.account_id(),
            category_id: transaction.category_id(),
            notes: transaction.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_transaction_with_embedded_refs() {
        let txn: Transaction = serde_json::from_value(json!({
            "id": 11,
            "description": "Weekly shop",
            "amount": "84.20",
            "transactionType": "EXPENSE",
            "transactionDate": "2024-05-02T09:15:00",
            "account": {"id": 1, "name": "Checking"},
            "category": null
        }))
        .unwrap();

        assert_eq!(txn.amount, dec!(84.20));
        assert_eq!(txn.transaction_date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(txn.account_name(), "Checking");
        assert_eq!(txn.category_name(), "Uncategorized");
        assert_eq!(txn.category_id(), None);
    }

    #[test]
    fn test_transfer_has_no_category_type() {
        assert_eq!(TransactionType::Transfer.category_type(), None);
        assert_eq!(
            TransactionType::Income.category_type(),
            Some(CategoryType::Income)
        );
    }

    #[test]
    fn test_draft_rejects_non_positive_amount() {
        let draft = TransactionDraft {
            description: "Refund".to_string(),
            amount: Some(dec!(-5)),
            transaction_type: TransactionType::Income,
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            account_id: Some(1),
            category_id: Some(2),
            notes: None,
        };
        let errors = crate::check(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["amount"], "Amount must be positive");
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = crate::check(&TransactionDraft::default()).unwrap_err();
        for field in ["description", "amount", "transaction_date", "account_id", "category_id"] {
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
    }
}
