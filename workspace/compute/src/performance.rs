//! Illustrative performance curve for investments without recorded history.
//!
//! The backend stores only an initial amount and a current value, so the
//! curve drawn in the performance view is synthesized: a quadratic ease from
//! the initial amount at the start date to the current value at the end date
//! (or today). It is a visual approximation and must never be presented as
//! historical data or as a projection.

use chrono::{Duration, NaiveDate};
use model::Investment;
use rust_decimal::Decimal;

/// Samples drawn per curve, both ends included.
pub const CURVE_POINTS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Eased values from `initial` to `current` over `points` samples.
pub fn eased_values(initial: Decimal, current: Decimal, points: usize) -> Vec<Decimal> {
    match points {
        0 => Vec::new(),
        1 => vec![current],
        _ => {
            let last = points - 1;
            (0..points)
                .map(|i| {
                    if i == 0 {
                        return initial;
                    }
                    if i == last {
                        return current;
                    }
                    let t = Decimal::from(i) / Decimal::from(last);
                    let eased = t * t;
                    if current >= initial {
                        initial + (current - initial) * eased
                    } else {
                        initial - (initial - current) * eased
                    }
                })
                .collect()
        }
    }
}

/// Dates evenly spaced from `start` to `end`, both included.
fn sample_dates(start: NaiveDate, end: NaiveDate, points: usize) -> Vec<NaiveDate> {
    let span = (end - start).num_days();
    let last = points.saturating_sub(1).max(1) as i64;
    (0..points as i64)
        .map(|i| start + Duration::days(span * i / last))
        .collect()
}

/// Simulated curve for `investment`. Without a valuation the curve stays
/// flat at the initial amount.
pub fn simulated_curve(investment: &Investment, today: NaiveDate) -> Vec<CurvePoint> {
    let end = investment.end_date.unwrap_or(today);
    let current = investment.display_value();

    sample_dates(investment.start_date, end, CURVE_POINTS)
        .into_iter()
        .zip(eased_values(investment.initial_amount, current, CURVE_POINTS))
        .map(|(date, value)| CurvePoint { date, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, investment};
    use rust_decimal_macros::dec;

    #[test]
    fn test_endpoints_are_pinned() {
        let values = eased_values(dec!(1000), dec!(1500), CURVE_POINTS);
        assert_eq!(values.len(), 6);
        assert_eq!(values[0], dec!(1000));
        assert_eq!(values[5], dec!(1500));
        // t = 0.2 -> 1000 + 500 * 0.04
        assert_eq!(values[1], dec!(1020));
    }

    #[test]
    fn test_gain_is_non_decreasing() {
        let values = eased_values(dec!(100), dec!(250), CURVE_POINTS);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_loss_is_non_increasing() {
        let values = eased_values(dec!(800), dec!(200), CURVE_POINTS);
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(values[5], dec!(200));
    }

    #[test]
    fn test_curve_dates() {
        let mut inv = investment(dec!(1000), Some(dec!(1100)));
        inv.end_date = Some(date(2023, 1, 11));
        let curve = simulated_curve(&inv, date(2030, 1, 1));
        let dates: Vec<_> = curve.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2023, 1, 1),
                date(2023, 1, 3),
                date(2023, 1, 5),
                date(2023, 1, 7),
                date(2023, 1, 9),
                date(2023, 1, 11),
            ]
        );
    }

    #[test]
    fn test_flat_without_valuation() {
        let inv = investment(dec!(750), None);
        let curve = simulated_curve(&inv, date(2024, 1, 1));
        assert!(curve.iter().all(|p| p.value == dec!(750)));
        assert_eq!(curve.last().unwrap().date, date(2024, 1, 1));
    }
}
