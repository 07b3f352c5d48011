use chrono::NaiveDate;
use model::{Id, ScheduledTransaction, ScheduledTransactionDraft};
use tracing::{debug, error, info, trace};

use crate::api::{ApiClient, HttpRequest, Transport, json_body};
use crate::error::ApiError;
use crate::format::api_end_of_day;

const BASE: &str = "/scheduled-transactions";

impl<T: Transport> ApiClient<T> {
    pub async fn list_scheduled(&self) -> Result<Vec<ScheduledTransaction>, ApiError> {
        trace!("Fetching all scheduled transactions");
        let result = self
            .fetch::<Vec<ScheduledTransaction>>(
                HttpRequest::get(BASE),
                "Failed to fetch scheduled transactions",
            )
            .await;
        match &result {
            Ok(items) => info!("Fetched {} scheduled transactions", items.len()),
            Err(e) => error!("Failed to fetch scheduled transactions: {}", e),
        }
        result
    }

    pub async fn get_scheduled(&self, scheduled_id: Id) -> Result<ScheduledTransaction, ApiError> {
        trace!("Fetching scheduled transaction with ID: {}", scheduled_id);
        let result = self
            .fetch::<ScheduledTransaction>(
                HttpRequest::get(format!("{BASE}/{scheduled_id}")),
                "Failed to fetch scheduled transaction",
            )
            .await;
        match &result {
            Ok(item) => info!(
                "Fetched scheduled transaction: {} (ID: {})",
                item.description,
                item.id
            ),
            Err(e) => error!("Failed to fetch scheduled transaction {}: {}", scheduled_id, e),
        }
        result
    }

    pub async fn list_scheduled_by_account(
        &self,
        account_id: Id,
    ) -> Result<Vec<ScheduledTransaction>, ApiError> {
        trace!("Fetching scheduled transactions of account {}", account_id);
        let result = self
            .fetch::<Vec<ScheduledTransaction>>(
                HttpRequest::get(format!("{BASE}/account/{account_id}")),
                "Failed to fetch account scheduled transactions",
            )
            .await;
        match &result {
            Ok(items) => info!(
                "Fetched {} scheduled transactions for account {}",
                items.len(),
                account_id
            ),
            Err(e) => error!(
                "Failed to fetch scheduled transactions of account {}: {}",
                account_id,
                e
            ),
        }
        result
    }

    pub async fn list_scheduled_by_user(
        &self,
        user_id: Id,
    ) -> Result<Vec<ScheduledTransaction>, ApiError> {
        trace!("Fetching scheduled transactions of user {}", user_id);
        let result = self
            .fetch::<Vec<ScheduledTransaction>>(
                HttpRequest::get(format!("{BASE}/user/{user_id}")),
                "Failed to fetch user scheduled transactions",
            )
            .await;
        match &result {
            Ok(items) => info!(
                "Fetched {} scheduled transactions for user {}",
                items.len(),
                user_id
            ),
            Err(e) => error!("Failed to fetch scheduled transactions of user {}: {}", user_id, e),
        }
        result
    }

    /// Active schedules due on or before `until`.
    pub async fn list_upcoming_scheduled(
        &self,
        until: NaiveDate,
    ) -> Result<Vec<ScheduledTransaction>, ApiError> {
        trace!("Fetching scheduled transactions due until {}", until);
        let request = HttpRequest::get(format!("{BASE}/upcoming")).query(
            "date",
            api_end_of_day(until),
        );
        let result = self
            .fetch::<Vec<ScheduledTransaction>>(
                request,
                "Failed to fetch upcoming scheduled transactions",
            )
            .await;
        match &result {
            Ok(items) => info!("Fetched {} upcoming scheduled transactions", items.len()),
            Err(e) => error!("Failed to fetch upcoming scheduled transactions: {}", e),
        }
        result
    }

    pub async fn create_scheduled(
        &self,
        draft: &ScheduledTransactionDraft,
    ) -> Result<ScheduledTransaction, ApiError> {
        const FALLBACK: &str = "Failed to create scheduled transaction";
        debug!("Creating new scheduled transaction: {}", draft.description);
        let request = HttpRequest::post(BASE).json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<ScheduledTransaction>(request, FALLBACK).await;
        match &result {
            Ok(item) => info!(
                "Successfully created scheduled transaction: {} (ID: {})",
                item.description,
                item.id
            ),
            Err(e) => error!(
                "Failed to create scheduled transaction '{}': {}",
                draft.description,
                e
            ),
        }
        result
    }

    pub async fn update_scheduled(
        &self,
        scheduled_id: Id,
        draft: &ScheduledTransactionDraft,
    ) -> Result<ScheduledTransaction, ApiError> {
        const FALLBACK: &str = "Failed to update scheduled transaction";
        debug!("Updating scheduled transaction ID: {}", scheduled_id);
        let request =
            HttpRequest::put(format!("{BASE}/{scheduled_id}")).json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<ScheduledTransaction>(request, FALLBACK).await;
        match &result {
            Ok(item) => info!(
                "Successfully updated scheduled transaction: {} (ID: {})",
                item.description,
                item.id
            ),
            Err(e) => error!("Failed to update scheduled transaction {}: {}", scheduled_id, e),
        }
        result
    }

    pub async fn delete_scheduled(&self, scheduled_id: Id) -> Result<(), ApiError> {
        debug!("Deleting scheduled transaction ID: {}", scheduled_id);
        let result = self
            .send_discarding(
                HttpRequest::delete(format!("{BASE}/{scheduled_id}")),
                "Failed to delete scheduled transaction",
            )
            .await;
        match &result {
            Ok(()) => info!("Successfully deleted scheduled transaction ID: {}", scheduled_id),
            Err(e) => error!("Failed to delete scheduled transaction {}: {}", scheduled_id, e),
        }
        result
    }

    /// Asks the backend to materialize the next occurrence. The returned
    /// record carries the advanced due date.
    pub async fn execute_scheduled(
        &self,
        scheduled_id: Id,
    ) -> Result<ScheduledTransaction, ApiError> {
        debug!("Executing scheduled transaction ID: {}", scheduled_id);
        let result = self
            .fetch::<ScheduledTransaction>(
                HttpRequest::post(format!("{BASE}/{scheduled_id}/execute")),
                "Failed to execute scheduled transaction",
            )
            .await;
        match &result {
            Ok(item) => info!(
                "Executed scheduled transaction {}; next due {}",
                item.id, item.next_due_date
            ),
            Err(e) => error!("Failed to execute scheduled transaction {}: {}", scheduled_id, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ApiClient, Method};
    use crate::testing::MockTransport;
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_returns_advanced_due_date() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond_json(
            200,
            json!({
                "id": 4,
                "description": "Rent",
                "amount": 15000,
                "transactionType": "EXPENSE",
                "frequency": "MONTHLY",
                "nextDueDate": "2024-08-01",
                "active": true
            }),
        );

        let executed = client.execute_scheduled(4).await.unwrap();
        assert_eq!(executed.next_due_date, NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());

        let request = client.transport().last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/scheduled-transactions/4/execute");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_upcoming_query() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond_json(200, json!([]));

        client
            .list_upcoming_scheduled(NaiveDate::from_ymd_opt(2024, 7, 8).unwrap())
            .await
            .unwrap();
        assert_eq!(
            client.transport().last_request().target(),
            "/scheduled-transactions/upcoming?date=2024-07-08T23:59:59.999Z"
        );
    }
}
