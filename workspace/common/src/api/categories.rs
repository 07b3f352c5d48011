use model::{Category, CategoryDraft, CategoryType, Id};
use tracing::{debug, error, info, trace};

use crate::api::{ApiClient, HttpRequest, Transport, json_body};
use crate::error::ApiError;

impl<T: Transport> ApiClient<T> {
    /// Get all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        trace!("Fetching all categories");
        let result = self
            .fetch::<Vec<Category>>(HttpRequest::get("/categories"), "Failed to fetch categories")
            .await;
        match &result {
            Ok(categories) => info!("Fetched {} categories", categories.len()),
            Err(e) => error!("Failed to fetch categories: {}", e),
        }
        result
    }

    /// Get a specific category by ID
    pub async fn get_category(&self, category_id: Id) -> Result<Category, ApiError> {
        trace!("Fetching category with ID: {}", category_id);
        let result = self
            .fetch::<Category>(
                HttpRequest::get(format!("/categories/{category_id}")),
                "Failed to fetch category",
            )
            .await;
        match &result {
            Ok(category) => info!("Fetched category: {} (ID: {})", category.name, category.id),
            Err(e) => error!("Failed to fetch category {}: {}", category_id, e),
        }
        result
    }

    pub async fn list_categories_by_type(
        &self,
        kind: CategoryType,
    ) -> Result<Vec<Category>, ApiError> {
        trace!("Fetching {} categories", kind);
        let result = self
            .fetch::<Vec<Category>>(
                HttpRequest::get(format!("/categories/type/{kind}")),
                "Failed to fetch categories by type",
            )
            .await;
        match &result {
            Ok(categories) => info!("Fetched {} {} categories", categories.len(), kind),
            Err(e) => error!("Failed to fetch {} categories: {}", kind, e),
        }
        result
    }

    /// Get top-level categories
    pub async fn list_root_categories(&self) -> Result<Vec<Category>, ApiError> {
        trace!("Fetching root categories");
        let result = self
            .fetch::<Vec<Category>>(
                HttpRequest::get("/categories/root"),
                "Failed to fetch root categories",
            )
            .await;
        match &result {
            Ok(categories) => info!("Fetched {} root categories", categories.len()),
            Err(e) => error!("Failed to fetch root categories: {}", e),
        }
        result
    }

    pub async fn list_subcategories(&self, parent_id: Id) -> Result<Vec<Category>, ApiError> {
        trace!("Fetching subcategories of {}", parent_id);
        let result = self
            .fetch::<Vec<Category>>(
                HttpRequest::get(format!("/categories/subcategories/{parent_id}")),
                "Failed to fetch subcategories",
            )
            .await;
        match &result {
            Ok(categories) => info!("Fetched {} subcategories of {}", categories.len(), parent_id),
            Err(e) => error!("Failed to fetch subcategories of {}: {}", parent_id, e),
        }
        result
    }

    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        const FALLBACK: &str = "Failed to create category";
        debug!("Creating new category: {}", draft.name);
        let request = HttpRequest::post("/categories").json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<Category>(request, FALLBACK).await;
        match &result {
            Ok(category) => info!(
                "Successfully created category: {} (ID: {})",
                category.name,
                category.id
            ),
            Err(e) => error!("Failed to create category '{}': {}", draft.name, e),
        }
        result
    }

    pub async fn update_category(
        &self,
        category_id: Id,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        const FALLBACK: &str = "Failed to update category";
        debug!("Updating category ID: {}", category_id);
        let request = HttpRequest::put(format!("/categories/{category_id}"))
            .json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<Category>(request, FALLBACK).await;
        match &result {
            Ok(category) => info!(
                "Successfully updated category: {} (ID: {})",
                category.name,
                category.id
            ),
            Err(e) => error!("Failed to update category {}: {}", category_id, e),
        }
        result
    }

    /// Delete a category. The backend refuses while transactions reference it.
    pub async fn delete_category(&self, category_id: Id) -> Result<(), ApiError> {
        debug!("Deleting category ID: {}", category_id);
        let result = self
            .send_discarding(
                HttpRequest::delete(format!("/categories/{category_id}")),
                "Failed to delete category",
            )
            .await;
        match &result {
            Ok(()) => info!("Successfully deleted category ID: {}", category_id),
            Err(e) => error!("Failed to delete category {}: {}", category_id, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use crate::testing::MockTransport;
    use model::CategoryType;
    use serde_json::json;

    #[tokio::test]
    async fn test_paths() {
        let client = ApiClient::new(MockTransport::new());
        for _ in 0..3 {
            client.transport().respond_json(200, json!([]));
        }

        client.list_categories_by_type(CategoryType::Income).await.unwrap();
        client.list_root_categories().await.unwrap();
        client.list_subcategories(4).await.unwrap();

        let paths: Vec<_> = client
            .transport()
            .requests()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(
            paths,
            vec!["/categories/type/INCOME", "/categories/root", "/categories/subcategories/4"]
        );
    }

    #[tokio::test]
    async fn test_referenced_category_delete_reports_server_message() {
        let client = ApiClient::new(MockTransport::new());
        client
            .transport()
            .respond_json(409, json!({"message": "Category is in use"}));

        let err = client.delete_category(2).await.unwrap_err();
        assert_eq!(err.message(), "Category is in use");
    }
}
