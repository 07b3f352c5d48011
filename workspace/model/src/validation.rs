//! Form-validation helpers shared by every draft.
//!
//! Drafts derive [`validator::Validate`]; the SPA only needs the first
//! message per field to annotate the offending input.

use std::borrow::Cow;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

/// Field name to the first message reported for it.
pub type FieldErrors = BTreeMap<String, String>;

pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let message = errs.iter().find_map(|e| e.message.as_ref())?;
            Some((field.to_string(), message.to_string()))
        })
        .collect()
}

/// Validates a draft, returning the flattened errors on failure.
pub fn check<T: Validate>(draft: &T) -> Result<(), FieldErrors> {
    draft.validate().map_err(|errors| field_errors(&errors))
}

fn rejected(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

pub(crate) fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(rejected("positive", "Amount must be positive"))
    }
}

pub(crate) fn positive_initial_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(rejected("positive", "Initial amount must be positive"))
    }
}

pub(crate) fn positive_current_value(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(rejected("positive", "Current value must be positive"))
    }
}

pub(crate) fn non_negative_rate(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(rejected("min", "Expected return rate must be positive"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_positive_amount() {
        assert!(positive_amount(&dec!(0.01)).is_ok());
        assert!(positive_amount(&Decimal::ZERO).is_err());
        assert!(positive_amount(&dec!(-5)).is_err());
    }

    #[test]
    fn test_rate_accepts_zero() {
        assert!(non_negative_rate(&Decimal::ZERO).is_ok());
        assert!(non_negative_rate(&dec!(7.5)).is_ok());
        let err = non_negative_rate(&dec!(-0.1)).unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Expected return rate must be positive")
        );
    }
}
