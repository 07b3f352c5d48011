//! Display formatting for amounts and dates.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use tracing::warn;

pub const DEFAULT_CURRENCY: &str = "INR";

fn currency(code: &str) -> &'static iso::Currency {
    match iso::find(code) {
        Some(currency) => currency,
        None => {
            warn!("Unknown currency code '{}', falling back to {}", code, DEFAULT_CURRENCY);
            iso::INR
        }
    }
}

/// Formats an amount in the given ISO currency, e.g. `₹1,00,000.00`.
/// Absent amounts render as zero.
pub fn format_currency(amount: Option<Decimal>, currency_code: &str) -> String {
    let mut amount = amount.unwrap_or(Decimal::ZERO).round_dp(2);
    if amount.is_zero() {
        amount = Decimal::ZERO;
    }
    amount.rescale(2);
    Money::from_decimal(amount, currency(currency_code)).to_string()
}

/// Formats a balance, negating it when it is shown as a liability.
pub fn format_balance(amount: Decimal, liability: bool, currency_code: &str) -> String {
    let shown = if liability { -amount } else { amount };
    format_currency(Some(shown), currency_code)
}

/// `DD/MM/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY HH:mm`
pub fn format_date_time(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// UTC timestamp in the form the backend's query parameters accept.
pub fn api_date_time(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

pub fn api_start_of_day(date: NaiveDate) -> String {
    api_date_time(date.and_time(NaiveTime::MIN))
}

pub fn api_end_of_day(date: NaiveDate) -> String {
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    api_date_time(date.and_time(end))
}

/// `YYYY-MM-DD`, as used by date inputs and request bodies.
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The `days` days before `today`, today included.
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self {
            start: today - Duration::days(days),
            end: today,
        }
    }
}

/// Quick-select periods offered by the transaction filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    LastMonth,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Today,
        Period::Yesterday,
        Period::ThisWeek,
        Period::ThisMonth,
        Period::LastMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::Yesterday => "Yesterday",
            Period::ThisWeek => "This Week",
            Period::ThisMonth => "This Month",
            Period::LastMonth => "Last Month",
        }
    }

    /// Weeks start on Sunday.
    pub fn range(&self, today: NaiveDate) -> DateRange {
        match self {
            Period::Today => DateRange { start: today, end: today },
            Period::Yesterday => {
                let day = today - Duration::days(1);
                DateRange { start: day, end: day }
            }
            Period::ThisWeek => {
                let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
                DateRange {
                    start,
                    end: start + Duration::days(6),
                }
            }
            Period::ThisMonth => month_range(today),
            Period::LastMonth => {
                let last_month = month_range(today).start - Duration::days(1);
                month_range(last_month)
            }
        }
    }
}

fn month_range(day: NaiveDate) -> DateRange {
    let start = day.with_day(1).unwrap_or(day);
    let next_month = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let end = next_month.map(|d| d - Duration::days(1)).unwrap_or(day);
    DateRange { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(Some(dec!(100000)), "INR"), "₹1,00,000.00");
        assert_eq!(format_currency(Some(dec!(1234.5)), "INR"), "₹1,234.50");
        assert_eq!(format_currency(None, "INR"), "₹0.00");
    }

    #[test]
    fn test_two_decimals_regardless_of_scale() {
        assert_eq!(format_currency(Some(dec!(5)), "INR"), "₹5.00");
        assert_eq!(format_currency(Some(dec!(-1234567.5)), "INR"), "-₹12,34,567.50");
        assert_eq!(format_currency(Some(dec!(10.456)), "INR"), "₹10.46");
        assert_eq!(format_currency(Some(dec!(100000)), "USD"), "$100,000.00");
    }

    #[test]
    fn test_liability_is_negated() {
        assert_eq!(format_balance(dec!(200), true, "INR"), "-₹200.00");
        assert_eq!(format_balance(dec!(200), false, "INR"), "₹200.00");
        assert_eq!(format_balance(Decimal::ZERO, true, "INR"), "₹0.00");
    }

    #[test]
    fn test_unknown_currency_falls_back() {
        assert_eq!(format_currency(Some(dec!(5)), "XXX-NOPE"), "₹5.00");
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_date(date(2024, 3, 7)), "07/03/2024");
        let at = date(2024, 3, 7).and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_date_time(at), "07/03/2024 09:05");
        assert_eq!(api_start_of_day(date(2024, 3, 7)), "2024-03-07T00:00:00.000Z");
    }

    #[test]
    fn test_periods() {
        // Wednesday
        let today = date(2024, 3, 13);
        assert_eq!(Period::Yesterday.range(today).start, date(2024, 3, 12));
        assert_eq!(
            Period::ThisWeek.range(today),
            DateRange { start: date(2024, 3, 10), end: date(2024, 3, 16) }
        );
        assert_eq!(
            Period::ThisMonth.range(today),
            DateRange { start: date(2024, 3, 1), end: date(2024, 3, 31) }
        );
        assert_eq!(
            Period::LastMonth.range(today),
            DateRange { start: date(2024, 2, 1), end: date(2024, 2, 29) }
        );
        assert_eq!(
            Period::LastMonth.range(date(2024, 1, 5)),
            DateRange { start: date(2023, 12, 1), end: date(2023, 12, 31) }
        );
    }
}
