use model::{CategoryType, Id};
use thiserror::Error;

/// Violations of the category hierarchy rules, reported before a draft is
/// submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// A category was selected as its own parent
    #[error("A category cannot be its own parent")]
    SelfParent,

    /// The selected parent is not in the known category list
    #[error("Parent category {0} does not exist")]
    MissingParent(Id),

    /// The selected parent already has a parent of its own
    #[error("Parent category '{0}' is a subcategory; only two levels are allowed")]
    NestedParent(String),

    /// The selected parent belongs to another category type
    #[error("Parent category '{name}' is {actual}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: CategoryType,
        actual: CategoryType,
    },

    /// A category that has children was given a parent
    #[error("Category '{0}' has subcategories and cannot be nested")]
    HasChildren(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
