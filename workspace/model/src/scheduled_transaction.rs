use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::transaction::TransactionType;
use crate::validation::positive_amount;
use crate::{EntityRef, Id, ParseEnumError, wire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("frequency", s))
    }
}

fn default_active() -> bool {
    true
}

/// Recurring transaction template.
///
/// Executing one is a server-side effect: the backend materializes a
/// transaction and advances `next_due_date`. This side only triggers the
/// execution and reflects the returned record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTransaction {
    pub id: Id,
    pub description: String,
    #[serde(default, deserialize_with = "wire::decimal_or_zero")]
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub frequency: Frequency,
    #[serde(deserialize_with = "wire::flexible_date")]
    pub next_due_date: NaiveDate,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub account: Option<EntityRef>,
    #[serde(default)]
    pub category: Option<EntityRef>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTransactionDraft {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(
        required(message = "Amount is required"),
        custom(function = "positive_amount")
    )]
    pub amount: Option<Decimal>,
    pub frequency: Frequency,
    #[validate(required(message = "Next due date is required"))]
    pub next_due_date: Option<NaiveDate>,
    pub transaction_type: TransactionType,
    #[validate(required(message = "Account is required"))]
    pub account_id: Option<Id>,
    #[validate(required(message = "Category is required"))]
    pub category_id: Option<Id>,
    pub notes: Option<String>,
    pub active: bool,
}

impl Default for ScheduledTransactionDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: None,
            frequency: Frequency::Monthly,
            next_due_date: None,
            transaction_type: TransactionType::Expense,
            account_id: None,
            category_id: None,
            notes: None,
            active: true,
        }
    }
}

impl From<&ScheduledTransaction> for ScheduledTransactionDraft {
    fn from(scheduled: &ScheduledTransaction) -> Self {
        Self {
            description: scheduled.description.clone(),
            amount: Some(scheduled.amount),
            frequency: scheduled.frequency,
            next_due_date: Some(scheduled.next_due_date),
            transaction_type: scheduled.transaction_type,
            account_id: scheduled.account.as_ref().map(|a| a.id),
            category_id: scheduled.category.as_ref().map(|c| c.id),
            notes: scheduled.notes.clone(),
            active: scheduled.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_active_defaults_to_true() {
        let scheduled: ScheduledTransaction = serde_json::from_value(json!({
            "id": 2,
            "description": "Rent",
            "amount": 15000,
            "transactionType": "EXPENSE",
            "frequency": "MONTHLY",
            "nextDueDate": "2024-07-01"
        }))
        .unwrap();

        assert!(scheduled.active);
        assert_eq!(scheduled.frequency, Frequency::Monthly);
    }

    #[test]
    fn test_draft_defaults_match_form() {
        let draft = ScheduledTransactionDraft::default();
        assert!(draft.active);
        assert_eq!(draft.frequency, Frequency::Monthly);
        assert_eq!(draft.transaction_type, TransactionType::Expense);
        let errors = crate::check(&draft).unwrap_err();
        assert_eq!(errors["next_due_date"], "Next due date is required");
    }
}
