use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::{Id, ParseEnumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    #[default]
    Expense,
    Income,
    Investment,
}

impl CategoryType {
    pub const ALL: [CategoryType; 3] = [
        CategoryType::Expense,
        CategoryType::Income,
        CategoryType::Investment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Expense => "EXPENSE",
            CategoryType::Income => "INCOME",
            CategoryType::Investment => "INVESTMENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryType::Expense => "Expense",
            CategoryType::Income => "Income",
            CategoryType::Investment => "Investment",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("category type", s))
    }
}

/// Classification label for transactions.
///
/// Categories form a two-level hierarchy: a category is either top-level
/// (`parent_id` is `None`) or a child of a top-level category of the same
/// type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryType,
    #[serde(default)]
    pub parent_id: Option<Id>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryType,
    pub parent_id: Option<Id>,
    pub description: Option<String>,
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            kind: category.kind,
            parent_id: category.parent_id,
            description: category.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_uses_type_field() {
        let category: Category = serde_json::from_value(json!({
            "id": 4,
            "name": "Groceries",
            "type": "EXPENSE",
            "parentId": 1
        }))
        .unwrap();

        assert_eq!(category.kind, CategoryType::Expense);
        assert_eq!(category.parent_id, Some(1));
        assert!(!category.is_top_level());
        assert_eq!(category.description, None);
    }

    #[test]
    fn test_draft_round_trips_type_name() {
        let draft = CategoryDraft {
            name: "Salary".to_string(),
            kind: CategoryType::Income,
            parent_id: None,
            description: Some("Monthly pay".to_string()),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["type"], "INCOME");
        assert_eq!(value["parentId"], serde_json::Value::Null);
    }
}
