//! Lenient decoders for the backend's numeric and date fields.
//!
//! The backend serializes decimals either as JSON numbers or as strings and
//! dates either as `YYYY-MM-DD` or as full ISO date-times. Required amounts
//! coerce anything unparseable to zero; optional amounts become `None`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

/// Parses a decimal out of an arbitrary JSON value.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Required amount: null, missing or unparseable values become zero.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Decimal::ZERO,
        Some(value) => decimal_from_value(&value).unwrap_or_else(|| {
            warn!(%value, "Unparseable amount, treating as zero");
            Decimal::ZERO
        }),
    })
}

/// Optional amount: null, missing or unparseable values become `None`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = decimal_from_value(&value);
            if parsed.is_none() {
                warn!(%value, "Unparseable optional amount, ignoring");
            }
            parsed
        }
    })
}

/// Parses the date part of `YYYY-MM-DD` or an ISO date-time.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date(&text).ok_or_else(|| de::Error::custom(format!("invalid date '{}'", text)))
}

pub fn optional_flexible_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    match text {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_date(&text)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date '{}'", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "decimal_or_zero")]
        amount: Decimal,
        #[serde(default, deserialize_with = "optional_decimal")]
        extra: Option<Decimal>,
        #[serde(default, deserialize_with = "optional_flexible_date")]
        when: Option<NaiveDate>,
    }

    fn holder(value: serde_json::Value) -> Holder {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_amounts_accept_numbers_and_strings() {
        assert_eq!(holder(json!({"amount": 1000.5})).amount, dec!(1000.5));
        assert_eq!(holder(json!({"amount": "250.75"})).amount, dec!(250.75));
        assert_eq!(holder(json!({"amount": 12})).amount, dec!(12));
    }

    #[test]
    fn test_missing_or_garbage_amount_is_zero() {
        assert_eq!(holder(json!({})).amount, Decimal::ZERO);
        assert_eq!(holder(json!({"amount": null})).amount, Decimal::ZERO);
        assert_eq!(holder(json!({"amount": "abc"})).amount, Decimal::ZERO);
        assert_eq!(holder(json!({"amount": true})).amount, Decimal::ZERO);
    }

    #[test]
    fn test_optional_amount_stays_absent() {
        assert_eq!(holder(json!({"extra": null})).extra, None);
        assert_eq!(holder(json!({"extra": "n/a"})).extra, None);
        assert_eq!(holder(json!({"extra": "0"})).extra, Some(Decimal::ZERO));
    }

    #[test]
    fn test_dates_keep_only_the_day() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(holder(json!({"when": "2024-03-15"})).when, expected);
        assert_eq!(holder(json!({"when": "2024-03-15T10:30:00"})).when, expected);
        assert_eq!(holder(json!({"when": "2024-03-15T10:30:00.000Z"})).when, expected);
        assert_eq!(holder(json!({"when": ""})).when, None);
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let result: Result<Holder, _> = serde_json::from_value(json!({"when": "15/03/2024"}));
        assert!(result.is_err());
    }
}
