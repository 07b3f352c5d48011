//! Fixture builders shared by the unit tests.

use chrono::NaiveDate;
use model::{
    Account, AccountType, Category, CategoryType, EntityRef, Frequency, Id, Investment,
    InvestmentType, ScheduledTransaction, Transaction, TransactionType,
};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn account(id: Id, account_type: AccountType, balance: Decimal) -> Account {
    Account {
        id,
        name: format!("Account {id}"),
        account_type,
        balance,
        user_id: Some(1),
    }
}

pub fn category(id: Id, name: &str, kind: CategoryType, parent_id: Option<Id>) -> Category {
    Category {
        id,
        name: name.to_string(),
        kind,
        parent_id,
        description: None,
    }
}

pub fn transaction(
    id: Id,
    transaction_type: TransactionType,
    amount: Decimal,
    on: NaiveDate,
    category: Option<&str>,
) -> Transaction {
    Transaction {
        id,
        description: format!("Transaction {id}"),
        amount,
        transaction_type,
        transaction_date: on,
        account: Some(EntityRef {
            id: 1,
            name: "Wallet".to_string(),
        }),
        category: category.map(|name| EntityRef {
            id: name.len() as Id,
            name: name.to_string(),
        }),
        notes: None,
    }
}

pub fn scheduled(id: Id, next_due_date: NaiveDate, active: bool) -> ScheduledTransaction {
    ScheduledTransaction {
        id,
        description: format!("Bill {id}"),
        amount: Decimal::ONE_HUNDRED,
        transaction_type: TransactionType::Expense,
        frequency: Frequency::Monthly,
        next_due_date,
        active,
        account: None,
        category: None,
        notes: None,
    }
}

pub fn investment(initial: Decimal, current: Option<Decimal>) -> Investment {
    Investment {
        id: 1,
        name: "Index fund".to_string(),
        investment_type: InvestmentType::MutualFund,
        initial_amount: initial,
        current_value: current,
        start_date: date(2023, 1, 1),
        end_date: None,
        expected_return_rate: None,
        ticker: None,
        notes: None,
        user_id: Some(1),
    }
}
