//! Entities exchanged with the finance REST backend and the drafts that
//! forms submit back to it.
//!
//! Entities are transient copies of server-owned records. Nothing here is
//! persisted locally; every type mirrors the backend's camelCase JSON.

pub mod account;
pub mod auth;
pub mod category;
pub mod investment;
pub mod scheduled_transaction;
pub mod transaction;
pub mod validation;
pub mod wire;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use account::{Account, AccountDraft, AccountType};
pub use auth::{CurrentUser, LoginRequest, LoginResponse, RegisterRequest};
pub use category::{Category, CategoryDraft, CategoryType};
pub use investment::{Investment, InvestmentDraft, InvestmentType};
pub use scheduled_transaction::{Frequency, ScheduledTransaction, ScheduledTransactionDraft};
pub use transaction::{Transaction, TransactionDraft, TransactionType};
pub use validation::{FieldErrors, check, field_errors};

/// Numeric identifier used by every backend collection.
pub type Id = i64;

/// Embedded `{id, name}` reference the backend nests inside transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: Id,
    #[serde(default)]
    pub name: String,
}

/// Returned when a form value does not name any variant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
