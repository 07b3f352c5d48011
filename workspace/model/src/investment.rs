use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::validation::{non_negative_rate, positive_current_value, positive_initial_amount};
use crate::{Id, ParseEnumError, wire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    #[default]
    Sip,
    MutualFund,
    Stock,
    FixedDeposit,
    Bond,
    RealEstate,
    Other,
}

impl InvestmentType {
    pub const ALL: [InvestmentType; 7] = [
        InvestmentType::Sip,
        InvestmentType::MutualFund,
        InvestmentType::Stock,
        InvestmentType::FixedDeposit,
        InvestmentType::Bond,
        InvestmentType::RealEstate,
        InvestmentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Sip => "SIP",
            InvestmentType::MutualFund => "MUTUAL_FUND",
            InvestmentType::Stock => "STOCK",
            InvestmentType::FixedDeposit => "FIXED_DEPOSIT",
            InvestmentType::Bond => "BOND",
            InvestmentType::RealEstate => "REAL_ESTATE",
            InvestmentType::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentType::Sip => "SIP",
            InvestmentType::MutualFund => "Mutual Fund",
            InvestmentType::Stock => "Stock",
            InvestmentType::FixedDeposit => "Fixed Deposit",
            InvestmentType::Bond => "Bond",
            InvestmentType::RealEstate => "Real Estate",
            InvestmentType::Other => "Other",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvestmentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("investment type", s))
    }
}

/// Tracked holding. `current_value` stays `None` until the user records a
/// valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: Id,
    pub name: String,
    pub investment_type: InvestmentType,
    #[serde(default, deserialize_with = "wire::decimal_or_zero")]
    pub initial_amount: Decimal,
    #[serde(default, deserialize_with = "wire::optional_decimal")]
    pub current_value: Option<Decimal>,
    #[serde(deserialize_with = "wire::flexible_date")]
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "wire::optional_flexible_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire::optional_decimal")]
    pub expected_return_rate: Option<Decimal>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
}

impl Investment {
    /// Value shown in lists: the recorded valuation, else the amount invested.
    pub fn display_value(&self) -> Decimal {
        self.current_value.unwrap_or(self.initial_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDraft {
    #[validate(length(min = 1, message = "Investment name is required"))]
    pub name: String,
    pub investment_type: InvestmentType,
    #[validate(
        required(message = "Initial amount is required"),
        custom(function = "positive_initial_amount")
    )]
    pub initial_amount: Option<Decimal>,
    #[validate(custom(function = "positive_current_value"))]
    pub current_value: Option<Decimal>,
    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(custom(function = "non_negative_rate"))]
    pub expected_return_rate: Option<Decimal>,
    pub ticker: Option<String>,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
}

impl From<&Investment> for InvestmentDraft {
    fn from(investment: &Investment) -> Self {
        Self {
            name: investment.name.clone(),
            investment_type: investment.investment_type,
            initial_amount: Some(investment.initial_amount),
            current_value: investment.current_value,
            start_date: Some(investment.start_date),
            end_date: investment.end_date,
            expected_return_rate: investment.expected_return_rate,
            ticker: investment.ticker.clone(),
            notes: investment.notes.clone(),
            user_id: investment.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn valid_draft() -> InvestmentDraft {
        InvestmentDraft {
            name: "Index fund".to_string(),
            investment_type: InvestmentType::MutualFund,
            initial_amount: Some(dec!(1000)),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            ..Default::default()
        }
    }

    #[test]
    fn test_investment_without_valuation() {
        let investment: Investment = serde_json::from_value(json!({
            "id": 5,
            "name": "FD",
            "investmentType": "FIXED_DEPOSIT",
            "initialAmount": "50000",
            "currentValue": null,
            "startDate": "2022-04-01"
        }))
        .unwrap();

        assert_eq!(investment.current_value, None);
        assert_eq!(investment.display_value(), dec!(50000));
        assert_eq!(investment.investment_type.label(), "Fixed Deposit");
    }

    #[test]
    fn test_optional_fields_only_checked_when_set() {
        assert!(crate::check(&valid_draft()).is_ok());

        let draft = InvestmentDraft {
            current_value: Some(dec!(0)),
            expected_return_rate: Some(dec!(-1)),
            ..valid_draft()
        };
        let errors = crate::check(&draft).unwrap_err();
        assert_eq!(errors["current_value"], "Current value must be positive");
        assert_eq!(errors["expected_return_rate"], "Expected return rate must be positive");
    }

    #[test]
    fn test_initial_amount_must_be_positive() {
        let draft = InvestmentDraft {
            initial_amount: Some(Decimal::ZERO),
            ..valid_draft()
        };
        let errors = crate::check(&draft).unwrap_err();
        assert_eq!(errors["initial_amount"], "Initial amount must be positive");
    }
}
