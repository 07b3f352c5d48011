use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::{Id, ParseEnumError, wire};

/// Kind of money container. CREDIT balances are liabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Savings,
    Checking,
    Credit,
    Investment,
    Cash,
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        AccountType::Savings,
        AccountType::Checking,
        AccountType::Credit,
        AccountType::Investment,
        AccountType::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "SAVINGS",
            AccountType::Checking => "CHECKING",
            AccountType::Credit => "CREDIT",
            AccountType::Investment => "INVESTMENT",
            AccountType::Cash => "CASH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
            AccountType::Credit => "Credit",
            AccountType::Investment => "Investment",
            AccountType::Cash => "Cash",
        }
    }

    /// Balances of liability accounts count negatively towards net worth.
    pub fn is_liability(&self) -> bool {
        matches!(self, AccountType::Credit)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("account type", s))
    }
}

/// Account as returned by the backend.
///
/// The balance is stored as a plain magnitude even for CREDIT accounts; the
/// liability sign is applied only when aggregating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Id,
    pub name: String,
    pub account_type: AccountType,
    #[serde(default, deserialize_with = "wire::decimal_or_zero")]
    pub balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
}

/// Request body for creating or updating an account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountDraft {
    #[validate(length(min = 1, message = "Account name is required"))]
    pub name: String,
    pub account_type: AccountType,
    #[validate(required(message = "Balance is required"))]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
}

impl From<&Account> for AccountDraft {
    fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            account_type: account.account_type,
            balance: Some(account.balance),
            user_id: account.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_account_from_backend_json() {
        let account: Account = serde_json::from_value(json!({
            "id": 7,
            "name": "Credit Card",
            "accountType": "CREDIT",
            "balance": 200.5,
            "userId": 3
        }))
        .unwrap();

        assert_eq!(account.account_type, AccountType::Credit);
        assert_eq!(account.balance, dec!(200.5));
        assert_eq!(account.user_id, Some(3));
        assert!(account.account_type.is_liability());
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!("checking".parse::<AccountType>(), Ok(AccountType::Checking));
        assert_eq!(" CASH ".parse::<AccountType>(), Ok(AccountType::Cash));
        assert!("LOAN".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_draft_requires_name_and_balance() {
        let draft = AccountDraft::default();
        let errors = crate::check(&draft).unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("Account name is required"));
        assert_eq!(errors.get("balance").map(String::as_str), Some("Balance is required"));
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = AccountDraft {
            name: "Wallet".to_string(),
            account_type: AccountType::Cash,
            balance: Some(dec!(10)),
            user_id: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["accountType"], "CASH");
        assert!(value.get("userId").is_none());
    }
}
