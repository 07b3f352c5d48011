use chrono::NaiveDate;
use model::{Id, Transaction, TransactionDraft};
use tracing::{debug, error, info, trace};

use crate::api::{ApiClient, HttpRequest, Transport, json_body};
use crate::error::ApiError;
use crate::format::{api_end_of_day, api_start_of_day};

impl<T: Transport> ApiClient<T> {
    /// Get all transactions
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        trace!("Fetching all transactions");
        let result = self
            .fetch::<Vec<Transaction>>(
                HttpRequest::get("/transactions"),
                "Failed to fetch transactions",
            )
            .await;
        match &result {
            Ok(transactions) => info!("Fetched {} transactions", transactions.len()),
            Err(e) => error!("Failed to fetch transactions: {}", e),
        }
        result
    }

    pub async fn get_transaction(&self, transaction_id: Id) -> Result<Transaction, ApiError> {
        trace!("Fetching transaction with ID: {}", transaction_id);
        let result = self
            .fetch::<Transaction>(
                HttpRequest::get(format!("/transactions/{transaction_id}")),
                "Failed to fetch transaction",
            )
            .await;
        match &result {
            Ok(transaction) => info!("Fetched transaction ID: {}", transaction.id),
            Err(e) => error!("Failed to fetch transaction {}: {}", transaction_id, e),
        }
        result
    }

    pub async fn list_transactions_by_account(
        &self,
        account_id: Id,
    ) -> Result<Vec<Transaction>, ApiError> {
        trace!("Fetching transactions of account {}", account_id);
        let result = self
            .fetch::<Vec<Transaction>>(
                HttpRequest::get(format!("/transactions/account/{account_id}")),
                "Failed to fetch account transactions",
            )
            .await;
        match &result {
            Ok(transactions) => info!(
                "Fetched {} transactions for account {}",
                transactions.len(),
                account_id
            ),
            Err(e) => error!("Failed to fetch transactions of account {}: {}", account_id, e),
        }
        result
    }

    /// Transactions dated within `start..=end`, whole days included.
    pub async fn list_transactions_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, ApiError> {
        trace!("Fetching transactions from {} to {}", start, end);
        let request = HttpRequest::get("/transactions/date-range")
            .query("start", api_start_of_day(start))
            .query("end", api_end_of_day(end));
        let result = self
            .fetch::<Vec<Transaction>>(request, "Failed to fetch transactions by date range")
            .await;
        match &result {
            Ok(transactions) => info!(
                "Fetched {} transactions from {} to {}",
                transactions.len(),
                start,
                end
            ),
            Err(e) => error!("Failed to fetch transactions from {} to {}: {}", start, end, e),
        }
        result
    }

    /// A user's transactions within `start..=end`.
    pub async fn list_user_transactions_in_range(
        &self,
        user_id: Id,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, ApiError> {
        trace!("Fetching transactions of user {} from {} to {}", user_id, start, end);
        let request = HttpRequest::get("/transactions")
            .query("userId", user_id)
            .query("startDate", api_start_of_day(start))
            .query("endDate", api_end_of_day(end));
        let result = self
            .fetch::<Vec<Transaction>>(request, "Failed to fetch user transactions")
            .await;
        match &result {
            Ok(transactions) => info!(
                "Fetched {} transactions for user {}",
                transactions.len(),
                user_id
            ),
            Err(e) => error!("Failed to fetch transactions of user {}: {}", user_id, e),
        }
        result
    }

    pub async fn create_transaction(
        &self,
        draft: &TransactionDraft,
    ) -> Result<Transaction, ApiError> {
        const FALLBACK: &str = "Failed to create transaction";
        debug!("Creating new transaction: {}", draft.description);
        let request = HttpRequest::post("/transactions").json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<Transaction>(request, FALLBACK).await;
        match &result {
            Ok(transaction) => info!("Successfully created transaction ID: {}", transaction.id),
            Err(e) => error!("Failed to create transaction '{}': {}", draft.description, e),
        }
        result
    }

    pub async fn update_transaction(
        &self,
        transaction_id: Id,
        draft: &TransactionDraft,
    ) -> Result<Transaction, ApiError> {
        const FALLBACK: &str = "Failed to update transaction";
        debug!("Updating transaction ID: {}", transaction_id);
        let request = HttpRequest::put(format!("/transactions/{transaction_id}"))
            .json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<Transaction>(request, FALLBACK).await;
        match &result {
            Ok(transaction) => info!("Successfully updated transaction ID: {}", transaction.id),
            Err(e) => error!("Failed to update transaction {}: {}", transaction_id, e),
        }
        result
    }

    pub async fn delete_transaction(&self, transaction_id: Id) -> Result<(), ApiError> {
        debug!("Deleting transaction ID: {}", transaction_id);
        let result = self
            .send_discarding(
                HttpRequest::delete(format!("/transactions/{transaction_id}")),
                "Failed to delete transaction",
            )
            .await;
        match &result {
            Ok(()) => info!("Successfully deleted transaction ID: {}", transaction_id),
            Err(e) => error!("Failed to delete transaction {}: {}", transaction_id, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use crate::testing::MockTransport;
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn test_user_range_query() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond_json(200, json!([]));

        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        client.list_user_transactions_in_range(3, start, end).await.unwrap();

        let request = client.transport().last_request();
        assert_eq!(request.path, "/transactions");
        assert_eq!(
            request.target(),
            "/transactions?userId=3&startDate=2024-05-01T00:00:00.000Z&endDate=2024-05-31T23:59:59.999Z"
        );
    }

    #[tokio::test]
    async fn test_embedded_refs_decode() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond_json(
            200,
            json!([{
                "id": 11,
                "description": "Groceries",
                "amount": 845.2,
                "transactionType": "EXPENSE",
                "transactionDate": "2024-05-03T10:15:00",
                "account": {"id": 1, "name": "Wallet"},
                "category": {"id": 4, "name": "Food"}
            }]),
        );

        let transactions = client.list_transactions_by_account(1).await.unwrap();
        assert_eq!(transactions[0].category_name(), "Food");
        assert_eq!(
            transactions[0].transaction_date,
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()
        );
    }
}
