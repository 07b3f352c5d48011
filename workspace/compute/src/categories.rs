//! Two-level category hierarchy.
//!
//! A category is either top-level or the child of a top-level category of the
//! same type. The tree builder never fails on inconsistent data: children
//! whose parent cannot be found are left out of the tree and returned
//! separately so a view can flag them.

use model::{Category, CategoryType, Id, TransactionType};
use tracing::{debug, instrument, warn};

use crate::error::{ComputeError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTree {
    pub roots: Vec<CategoryNode>,
    /// Children of the requested type whose parent is not a top-level
    /// category of that type.
    pub orphans: Vec<Category>,
}

impl CategoryTree {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of categories placed in the tree, orphans excluded.
    pub fn len(&self) -> usize {
        self.roots.iter().map(|n| 1 + n.children.len()).sum()
    }
}

/// Builds the tree for one category type.
///
/// Parents keep their relative input order and children are attached in the
/// order they appear in `categories`.
#[instrument(skip(categories), fields(num_categories = categories.len()))]
pub fn build_tree(categories: &[Category], kind: CategoryType) -> CategoryTree {
    let of_kind = categories.iter().filter(|c| c.kind == kind);

    let mut roots: Vec<CategoryNode> = of_kind
        .clone()
        .filter(|c| c.is_top_level())
        .map(|c| CategoryNode {
            category: c.clone(),
            children: Vec::new(),
        })
        .collect();

    let mut orphans = Vec::new();
    for child in of_kind.filter(|c| !c.is_top_level()) {
        match roots
            .iter_mut()
            .find(|node| Some(node.category.id) == child.parent_id)
        {
            Some(node) => node.children.push(child.clone()),
            None => {
                warn!(
                    category_id = child.id,
                    parent_id = ?child.parent_id,
                    "Category references a parent outside the {} top-level set", kind
                );
                orphans.push(child.clone());
            }
        }
    }

    debug!(roots = roots.len(), orphans = orphans.len(), "Built category tree");
    CategoryTree { roots, orphans }
}

/// Categories a form may offer as parent: top-level, same type, not the
/// category being edited.
pub fn parent_options(
    categories: &[Category],
    kind: CategoryType,
    editing: Option<Id>,
) -> Vec<&Category> {
    categories
        .iter()
        .filter(|c| c.kind == kind && c.is_top_level() && Some(c.id) != editing)
        .collect()
}

/// Categories a transaction of the given type may be filed under. Transfers
/// are not tied to a category type and may use any category.
pub fn categories_for_transaction_type(
    categories: &[Category],
    transaction_type: TransactionType,
) -> Vec<&Category> {
    match transaction_type.category_type() {
        Some(kind) => categories.iter().filter(|c| c.kind == kind).collect(),
        None => categories.iter().collect(),
    }
}

/// Checks that giving `category_id` (absent for a new category) the parent
/// `parent_id` keeps the hierarchy at two same-type levels.
pub fn check_parent(
    categories: &[Category],
    category_id: Option<Id>,
    kind: CategoryType,
    parent_id: Option<Id>,
) -> Result<()> {
    let Some(parent_id) = parent_id else {
        return Ok(());
    };

    if Some(parent_id) == category_id {
        return Err(ComputeError::SelfParent);
    }

    let parent = categories
        .iter()
        .find(|c| c.id == parent_id)
        .ok_or(ComputeError::MissingParent(parent_id))?;

    if !parent.is_top_level() {
        return Err(ComputeError::NestedParent(parent.name.clone()));
    }

    if parent.kind != kind {
        return Err(ComputeError::TypeMismatch {
            name: parent.name.clone(),
            expected: kind,
            actual: parent.kind,
        });
    }

    if let Some(id) = category_id {
        if let Some(own) = categories
            .iter()
            .find(|c| c.id == id)
            .filter(|_| categories.iter().any(|c| c.parent_id == Some(id)))
        {
            return Err(ComputeError::HasChildren(own.name.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::category;

    fn sample() -> Vec<Category> {
        vec![
            category(1, "Food", CategoryType::Expense, None),
            category(2, "Salary", CategoryType::Income, None),
            category(3, "Groceries", CategoryType::Expense, Some(1)),
            category(4, "Rent", CategoryType::Expense, None),
            category(5, "Dining", CategoryType::Expense, Some(1)),
            category(6, "Bonus", CategoryType::Income, Some(2)),
        ]
    }

    #[test]
    fn test_tree_preserves_order() {
        let tree = build_tree(&sample(), CategoryType::Expense);

        let roots: Vec<_> = tree.roots.iter().map(|n| n.category.id).collect();
        assert_eq!(roots, vec![1, 4]);
        let children: Vec<_> = tree.roots[0].children.iter().map(|c| c.id).collect();
        assert_eq!(children, vec![3, 5]);
        assert!(tree.roots[1].children.is_empty());
        assert_eq!(tree.len(), 4);
        assert!(tree.orphans.is_empty());
    }

    #[test]
    fn test_cross_type_child_is_orphaned() {
        let mut categories = sample();
        // Income child pointing at an expense parent
        categories.push(category(7, "Refund", CategoryType::Income, Some(1)));

        let tree = build_tree(&categories, CategoryType::Income);
        assert_eq!(tree.roots.len(), 1);
        assert_eq!(tree.roots[0].children.len(), 1);
        assert_eq!(tree.orphans.iter().map(|c| c.id).collect::<Vec<_>>(), vec![7]);

        let expense = build_tree(&categories, CategoryType::Expense);
        assert!(expense
            .roots
            .iter()
            .all(|n| n.children.iter().all(|c| c.kind == CategoryType::Expense)));
    }

    #[test]
    fn test_missing_parent_is_excluded() {
        let categories = vec![
            category(1, "Food", CategoryType::Expense, None),
            category(2, "Ghost child", CategoryType::Expense, Some(99)),
        ];
        let tree = build_tree(&categories, CategoryType::Expense);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.orphans.len(), 1);
    }

    #[test]
    fn test_parent_options() {
        let categories = sample();
        let options: Vec<_> = parent_options(&categories, CategoryType::Expense, Some(4))
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(options, vec![1]);
    }

    #[test]
    fn test_categories_for_transaction_type() {
        let categories = sample();
        assert_eq!(
            categories_for_transaction_type(&categories, TransactionType::Income).len(),
            2
        );
        assert_eq!(
            categories_for_transaction_type(&categories, TransactionType::Transfer).len(),
            categories.len()
        );
    }

    #[test]
    fn test_check_parent() {
        let categories = sample();
        assert_eq!(check_parent(&categories, None, CategoryType::Expense, None), Ok(()));
        assert_eq!(check_parent(&categories, None, CategoryType::Expense, Some(1)), Ok(()));
        assert_eq!(
            check_parent(&categories, Some(1), CategoryType::Expense, Some(1)),
            Err(ComputeError::SelfParent)
        );
        assert_eq!(
            check_parent(&categories, None, CategoryType::Expense, Some(42)),
            Err(ComputeError::MissingParent(42))
        );
        assert_eq!(
            check_parent(&categories, None, CategoryType::Expense, Some(3)),
            Err(ComputeError::NestedParent("Groceries".to_string()))
        );
        assert!(matches!(
            check_parent(&categories, None, CategoryType::Expense, Some(2)),
            Err(ComputeError::TypeMismatch { .. })
        ));
        assert_eq!(
            check_parent(&categories, Some(1), CategoryType::Expense, Some(4)),
            Err(ComputeError::HasChildren("Food".to_string()))
        );
    }
}
