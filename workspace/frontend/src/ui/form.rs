use std::str::FromStr;

use chrono::NaiveDate;
use common::ApiError;
use model::{FieldErrors, Id};
use rust_decimal::Decimal;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

/// Values of a submitted form, read by input `name`.
pub struct FormValues(FormData);

impl FormValues {
    pub fn from_form(form_ref: &NodeRef) -> Option<Self> {
        let form = form_ref.cast::<HtmlFormElement>()?;
        match FormData::new_with_form(&form) {
            Ok(data) => Some(Self(data)),
            Err(e) => {
                log::error!("Failed to read form data: {:?}", e);
                None
            }
        }
    }

    pub fn text(&self, name: &str) -> String {
        self.0.get(name).as_string().unwrap_or_default().trim().to_string()
    }

    pub fn optional_text(&self, name: &str) -> Option<String> {
        non_empty(self.text(name))
    }

    pub fn decimal(&self, name: &str) -> Option<Decimal> {
        parse_decimal(&self.text(name))
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        parse_date(&self.text(name))
    }

    pub fn id(&self, name: &str) -> Option<Id> {
        self.text(name).parse().ok()
    }

    /// Enumerations rendered as `<select>` values.
    pub fn choice<T: FromStr + Default>(&self, name: &str) -> T {
        self.text(name).parse().unwrap_or_default()
    }

    pub fn checked(&self, name: &str) -> bool {
        self.0.has(name)
    }
}

pub fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parses a user-entered amount, tolerating thousands separators.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let cleaned: String = value.chars().filter(|c| !matches!(c, ',' | ' ')).collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Parses the value of an `<input type="date">`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    pub children: Children,
}

/// Labelled form control with its inline validation message.
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{props.label.clone()}</span>
            </label>
            { for props.children.iter() }
            if let Some(error) = &props.error {
                <label class="label">
                    <span class="label-text-alt text-error">{error}</span>
                </label>
            }
        </div>
    }
}

/// Error message for `field`, if any.
pub fn error_for(errors: &FieldErrors, field: &str) -> Option<String> {
    errors.get(field).cloned()
}

/// Input class with the error modifier when `field` has an error.
pub fn input_class(base: &'static str, errors: &FieldErrors, field: &str) -> Classes {
    let modifier = errors.contains_key(field).then(|| match base {
        "select" => "select-error",
        "textarea" => "textarea-error",
        _ => "input-error",
    });
    classes!(base, format!("{base}-bordered"), "w-full", modifier)
}

/// Applies the outcome of a save to the form's inline errors and reports
/// whether the form can close.
pub fn saved<T>(result: &Result<T, ApiError>, errors: &UseStateHandle<FieldErrors>) -> bool {
    match result {
        Ok(_) => {
            errors.set(FieldErrors::new());
            true
        }
        Err(e) => {
            if let Some(fields) = e.field_errors() {
                errors.set(fields.clone());
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_accepts_grouping() {
        assert_eq!(parse_decimal("1,00,000.50"), Decimal::from_str("100000.50").ok());
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_parse_date_input_format() {
        assert_eq!(parse_date("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_date("01/03/2024"), None);
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" rent ".to_string()), Some("rent".to_string()));
    }
}
