//! Icon and colour lookup for enumerated values.
//!
//! Each enum maps exhaustively to a [`Badge`]; adding a variant without a
//! badge is a compile error.

use model::{AccountType, CategoryType, Frequency, InvestmentType, TransactionType};

/// daisyUI colour roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Info,
    Success,
    Warning,
    Error,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
            Tone::Accent => "accent",
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// FontAwesome icon name, e.g. `fa-piggy-bank`.
    pub icon: &'static str,
    pub tone: Tone,
}

impl Badge {
    pub const fn new(icon: &'static str, tone: Tone) -> Self {
        Self { icon, tone }
    }

    pub fn badge_class(&self) -> String {
        format!("badge-{}", self.tone.as_str())
    }

    pub fn text_class(&self) -> String {
        format!("text-{}", self.tone.as_str())
    }

    pub fn icon_class(&self) -> String {
        format!("fas {}", self.icon)
    }
}

pub trait Badged {
    fn badge(&self) -> Badge;
}

impl Badged for AccountType {
    fn badge(&self) -> Badge {
        match self {
            AccountType::Savings => Badge::new("fa-piggy-bank", Tone::Success),
            AccountType::Checking => Badge::new("fa-building-columns", Tone::Primary),
            AccountType::Credit => Badge::new("fa-credit-card", Tone::Error),
            AccountType::Investment => Badge::new("fa-chart-line", Tone::Info),
            AccountType::Cash => Badge::new("fa-money-bill-wave", Tone::Warning),
        }
    }
}

impl Badged for CategoryType {
    fn badge(&self) -> Badge {
        match self {
            CategoryType::Expense => Badge::new("fa-arrow-down", Tone::Error),
            CategoryType::Income => Badge::new("fa-arrow-up", Tone::Success),
            CategoryType::Investment => Badge::new("fa-chart-line", Tone::Info),
        }
    }
}

impl Badged for TransactionType {
    fn badge(&self) -> Badge {
        match self {
            TransactionType::Expense => Badge::new("fa-arrow-down", Tone::Error),
            TransactionType::Income => Badge::new("fa-arrow-up", Tone::Success),
            TransactionType::Transfer => Badge::new("fa-right-left", Tone::Info),
        }
    }
}

impl Badged for InvestmentType {
    fn badge(&self) -> Badge {
        match self {
            InvestmentType::Sip => Badge::new("fa-rotate", Tone::Primary),
            InvestmentType::MutualFund => Badge::new("fa-chart-pie", Tone::Info),
            InvestmentType::Stock => Badge::new("fa-chart-line", Tone::Success),
            InvestmentType::FixedDeposit => Badge::new("fa-lock", Tone::Secondary),
            InvestmentType::Bond => Badge::new("fa-file-contract", Tone::Accent),
            InvestmentType::RealEstate => Badge::new("fa-house", Tone::Warning),
            InvestmentType::Other => Badge::new("fa-coins", Tone::Neutral),
        }
    }
}

impl Badged for Frequency {
    fn badge(&self) -> Badge {
        match self {
            Frequency::Daily => Badge::new("fa-calendar-day", Tone::Warning),
            Frequency::Weekly => Badge::new("fa-calendar-week", Tone::Info),
            Frequency::Monthly => Badge::new("fa-calendar-days", Tone::Primary),
            Frequency::Yearly => Badge::new("fa-calendar", Tone::Secondary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        let badge = AccountType::Credit.badge();
        assert_eq!(badge.badge_class(), "badge-error");
        assert_eq!(badge.text_class(), "text-error");
        assert_eq!(badge.icon_class(), "fas fa-credit-card");
    }

    #[test]
    fn test_every_investment_type_has_icon() {
        assert!(InvestmentType::ALL.iter().all(|t| t.badge().icon.starts_with("fa-")));
    }
}
