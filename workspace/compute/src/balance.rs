//! Net worth and per-type balance aggregation.
//!
//! Account balances arrive as plain magnitudes. CREDIT balances are
//! liabilities: they always count negatively towards the portfolio-wide total,
//! while per-type subtotals stay unsigned unless the caller asks otherwise.

use model::{Account, AccountType};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// How liability subtotals are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiabilityDisplay {
    /// Sum of the stored magnitudes.
    #[default]
    Unsigned,
    /// Liability subtotals are negated, matching the net-worth convention.
    Negated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSubtotal {
    pub account_type: AccountType,
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalanceSummary {
    pub net_worth: Decimal,
    pub by_type: Vec<TypeSubtotal>,
}

impl BalanceSummary {
    pub fn subtotal(&self, account_type: AccountType) -> Option<&TypeSubtotal> {
        self.by_type.iter().find(|s| s.account_type == account_type)
    }
}

/// Contribution of a single account to net worth.
pub fn signed_balance(account: &Account) -> Decimal {
    if account.balance.is_zero() {
        Decimal::ZERO
    } else if account.account_type.is_liability() {
        -account.balance
    } else {
        account.balance
    }
}

pub fn net_worth(accounts: &[Account]) -> Decimal {
    accounts.iter().map(signed_balance).sum()
}

/// Subtotals per account type, in order of first appearance in `accounts`.
pub fn subtotals_by_type(accounts: &[Account], display: LiabilityDisplay) -> Vec<TypeSubtotal> {
    let mut subtotals: Vec<TypeSubtotal> = Vec::new();

    for account in accounts {
        let amount = match display {
            LiabilityDisplay::Unsigned => account.balance,
            LiabilityDisplay::Negated => signed_balance(account),
        };

        match subtotals
            .iter_mut()
            .find(|s| s.account_type == account.account_type)
        {
            Some(subtotal) => {
                subtotal.total += amount;
                subtotal.count += 1;
            }
            None => subtotals.push(TypeSubtotal {
                account_type: account.account_type,
                total: amount,
                count: 1,
            }),
        }
    }

    subtotals
}

#[instrument(
    skip(accounts, liability_display),
    fields(num_accounts = accounts.len(), display = ?liability_display)
)]
pub fn summarize(accounts: &[Account], liability_display: LiabilityDisplay) -> BalanceSummary {
    let summary = BalanceSummary {
        net_worth: net_worth(accounts),
        by_type: subtotals_by_type(accounts, liability_display),
    };
    debug!(
        net_worth = %summary.net_worth,
        types = summary.by_type.len(),
        "Computed balance summary"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::account;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_counts_negatively() {
        let accounts = vec![
            account(1, AccountType::Savings, dec!(1000)),
            account(2, AccountType::Credit, dec!(200)),
        ];
        assert_eq!(net_worth(&accounts), dec!(800));
    }

    #[test]
    fn test_empty_list() {
        let summary = summarize(&[], LiabilityDisplay::Unsigned);
        assert_eq!(summary.net_worth, Decimal::ZERO);
        assert!(summary.by_type.is_empty());
    }

    #[test]
    fn test_subtotals_keep_first_appearance_order() {
        let accounts = vec![
            account(1, AccountType::Cash, dec!(50)),
            account(2, AccountType::Credit, dec!(300)),
            account(3, AccountType::Cash, dec!(25.50)),
        ];

        let unsigned = subtotals_by_type(&accounts, LiabilityDisplay::Unsigned);
        assert_eq!(
            unsigned,
            vec![
                TypeSubtotal {
                    account_type: AccountType::Cash,
                    total: dec!(75.50),
                    count: 2
                },
                TypeSubtotal {
                    account_type: AccountType::Credit,
                    total: dec!(300),
                    count: 1
                },
            ]
        );

        let negated = summarize(&accounts, LiabilityDisplay::Negated);
        assert_eq!(negated.subtotal(AccountType::Credit).unwrap().total, dec!(-300));
        assert_eq!(negated.net_worth, dec!(-224.50));
    }

    #[test]
    fn test_zero_credit_balance_is_not_negative() {
        let accounts = vec![account(1, AccountType::Credit, dec!(0))];

        let summary = summarize(&accounts, LiabilityDisplay::Negated);
        assert_eq!(summary.net_worth, Decimal::ZERO);
        assert!(!summary.net_worth.is_sign_negative());
        let credit = summary.subtotal(AccountType::Credit).unwrap();
        assert!(!credit.total.is_sign_negative());
    }

    #[test]
    fn test_net_worth_ignores_display_mode() {
        let accounts = vec![
            account(1, AccountType::Checking, dec!(10)),
            account(2, AccountType::Credit, dec!(40)),
        ];
        assert_eq!(
            summarize(&accounts, LiabilityDisplay::Unsigned).net_worth,
            summarize(&accounts, LiabilityDisplay::Negated).net_worth
        );
    }
}
