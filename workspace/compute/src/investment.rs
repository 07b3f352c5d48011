//! Investment return figures.
//!
//! Annualized returns come from the backend; only the simple absolute and
//! percentage returns are derived here.

use chrono::NaiveDate;
use common::badges::{Badge, Badged, Tone};
use model::Investment;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument};

const NOT_APPLICABLE: &str = "N/A";

/// `current - initial`, absent while no valuation has been recorded.
pub fn absolute_return(investment: &Investment) -> Option<Decimal> {
    investment
        .current_value
        .map(|current| current - investment.initial_amount)
}

/// Exact percentage return. Absent when there is no valuation or nothing was
/// invested.
pub fn return_percentage(investment: &Investment) -> Option<Decimal> {
    let current = investment.current_value?;
    let initial = investment.initial_amount;
    if initial.is_zero() {
        return None;
    }
    (current - initial)
        .checked_div(initial)
        .map(|ratio| ratio * Decimal::ONE_HUNDRED)
}

/// Two-decimal display form of a percentage, e.g. `"20.00"`, or `"N/A"`.
pub fn format_percentage(percentage: Option<Decimal>) -> String {
    match percentage {
        Some(p) => format!(
            "{:.2}",
            p.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => NOT_APPLICABLE.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTier {
    /// Above 15 %.
    Strong,
    Positive,
    Flat,
    Negative,
}

impl ReturnTier {
    pub fn from_percentage(percentage: Decimal) -> Self {
        if percentage > Decimal::from(15) {
            ReturnTier::Strong
        } else if percentage > Decimal::ZERO {
            ReturnTier::Positive
        } else if percentage.is_zero() {
            ReturnTier::Flat
        } else {
            ReturnTier::Negative
        }
    }

    pub fn of(investment: &Investment) -> Option<Self> {
        return_percentage(investment).map(Self::from_percentage)
    }
}

impl Badged for ReturnTier {
    fn badge(&self) -> Badge {
        match self {
            ReturnTier::Strong => Badge::new("fa-arrow-trend-up", Tone::Success),
            ReturnTier::Positive => Badge::new("fa-arrow-up", Tone::Info),
            ReturnTier::Flat => Badge::new("fa-minus", Tone::Neutral),
            ReturnTier::Negative => Badge::new("fa-arrow-down", Tone::Error),
        }
    }
}

/// Years between `start` and `end`, computed as whole days (rounded up) over
/// 365 and kept to one decimal.
pub fn holding_period_years(start: NaiveDate, end: NaiveDate) -> Decimal {
    let days = (end - start).num_days().abs();
    (Decimal::from(days) / Decimal::from(365))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Holding period up to the end date, or up to `today` for open positions.
pub fn holding_period_for(investment: &Investment, today: NaiveDate) -> Decimal {
    holding_period_years(investment.start_date, investment.end_date.unwrap_or(today))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortfolioSummary {
    pub invested: Decimal,
    pub current: Decimal,
    pub gain: Decimal,
    pub count: usize,
}

impl PortfolioSummary {
    pub fn gain_percentage(&self) -> Option<Decimal> {
        if self.invested.is_zero() {
            None
        } else {
            Some(self.gain / self.invested * Decimal::ONE_HUNDRED)
        }
    }
}

/// Totals over all holdings. Holdings without a valuation count at their
/// initial amount.
#[instrument(skip(investments), fields(num_investments = investments.len()))]
pub fn portfolio_summary(investments: &[Investment]) -> PortfolioSummary {
    let invested: Decimal = investments.iter().map(|i| i.initial_amount).sum();
    let current: Decimal = investments.iter().map(Investment::display_value).sum();
    let summary = PortfolioSummary {
        invested,
        current,
        gain: current - invested,
        count: investments.len(),
    };
    debug!(invested = %summary.invested, current = %summary.current, "Computed portfolio summary");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, investment};
    use rust_decimal_macros::dec;

    #[test]
    fn test_gain() {
        let inv = investment(dec!(1000), Some(dec!(1200)));
        assert_eq!(absolute_return(&inv), Some(dec!(200)));
        assert_eq!(format_percentage(return_percentage(&inv)), "20.00");
        assert_eq!(ReturnTier::of(&inv), Some(ReturnTier::Strong));
    }

    #[test]
    fn test_without_valuation() {
        let inv = investment(dec!(1000), None);
        assert_eq!(absolute_return(&inv), None);
        assert_eq!(return_percentage(&inv), None);
        assert_eq!(format_percentage(None), "N/A");
        assert_eq!(ReturnTier::of(&inv), None);
    }

    #[test]
    fn test_zero_initial_amount() {
        let inv = investment(Decimal::ZERO, Some(dec!(50)));
        assert_eq!(return_percentage(&inv), None);
        assert_eq!(absolute_return(&inv), Some(dec!(50)));
    }

    #[test]
    fn test_zero_current_value_is_total_loss() {
        let inv = investment(dec!(500), Some(Decimal::ZERO));
        assert_eq!(return_percentage(&inv), Some(dec!(-100)));
        assert_eq!(ReturnTier::of(&inv), Some(ReturnTier::Negative));
    }

    #[test]
    fn test_percentage_keeps_precision() {
        let inv = investment(dec!(300), Some(dec!(400)));
        let exact = return_percentage(&inv).unwrap();
        assert!(exact > dec!(33.33) && exact < dec!(33.34));
        assert_eq!(format_percentage(Some(exact)), "33.33");
    }

    #[test]
    fn test_tiers() {
        assert_eq!(ReturnTier::from_percentage(dec!(15)), ReturnTier::Positive);
        assert_eq!(ReturnTier::from_percentage(dec!(15.01)), ReturnTier::Strong);
        assert_eq!(ReturnTier::from_percentage(Decimal::ZERO), ReturnTier::Flat);
        assert_eq!(ReturnTier::from_percentage(dec!(-0.5)), ReturnTier::Negative);
        assert_eq!(ReturnTier::Negative.badge().tone, Tone::Error);
    }

    #[test]
    fn test_holding_period() {
        assert_eq!(holding_period_years(date(2023, 1, 1), date(2024, 1, 1)), dec!(1.0));
        assert_eq!(holding_period_years(date(2023, 1, 1), date(2023, 7, 2)), dec!(0.5));
        let mut inv = investment(dec!(1), None);
        inv.end_date = Some(date(2025, 1, 1));
        assert_eq!(holding_period_for(&inv, date(2030, 1, 1)), dec!(2.0));
    }

    #[test]
    fn test_portfolio_summary() {
        let holdings = vec![
            investment(dec!(1000), Some(dec!(1500))),
            investment(dec!(2000), None),
            investment(dec!(1000), Some(dec!(500))),
        ];
        let summary = portfolio_summary(&holdings);
        assert_eq!(summary.invested, dec!(4000));
        assert_eq!(summary.current, dec!(4000));
        assert_eq!(summary.gain, Decimal::ZERO);
        assert_eq!(summary.gain_percentage(), Some(Decimal::ZERO));
        assert_eq!(portfolio_summary(&[]).gain_percentage(), None);
    }
}
