use model::{Account, AccountDraft, Id};
use tracing::{debug, error, info, trace};

use crate::api::{ApiClient, HttpRequest, Transport, json_body};
use crate::error::ApiError;

impl<T: Transport> ApiClient<T> {
    /// Get all accounts
    pub async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        trace!("Fetching all accounts");
        let result = self
            .fetch::<Vec<Account>>(HttpRequest::get("/accounts"), "Failed to fetch accounts")
            .await;
        match &result {
            Ok(accounts) => info!("Fetched {} accounts", accounts.len()),
            Err(e) => error!("Failed to fetch accounts: {}", e),
        }
        result
    }

    /// Get a specific account by ID
    pub async fn get_account(&self, account_id: Id) -> Result<Account, ApiError> {
        trace!("Fetching account with ID: {}", account_id);
        let result = self
            .fetch::<Account>(
                HttpRequest::get(format!("/accounts/{account_id}")),
                "Failed to fetch account",
            )
            .await;
        match &result {
            Ok(account) => info!("Fetched account: {} (ID: {})", account.name, account.id),
            Err(e) => error!("Failed to fetch account {}: {}", account_id, e),
        }
        result
    }

    /// Get the accounts owned by a user
    pub async fn list_accounts_by_user(&self, user_id: Id) -> Result<Vec<Account>, ApiError> {
        trace!("Fetching accounts of user {}", user_id);
        let result = self
            .fetch::<Vec<Account>>(
                HttpRequest::get(format!("/accounts/user/{user_id}")),
                "Failed to fetch user accounts",
            )
            .await;
        match &result {
            Ok(accounts) => info!("Fetched {} accounts for user {}", accounts.len(), user_id),
            Err(e) => error!("Failed to fetch accounts of user {}: {}", user_id, e),
        }
        result
    }

    pub async fn create_account(&self, draft: &AccountDraft) -> Result<Account, ApiError> {
        const FALLBACK: &str = "Failed to create account";
        debug!("Creating new account: {}", draft.name);
        let request = HttpRequest::post("/accounts").json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<Account>(request, FALLBACK).await;
        match &result {
            Ok(account) => info!(
                "Successfully created account: {} (ID: {})",
                account.name,
                account.id
            ),
            Err(e) => error!("Failed to create account '{}': {}", draft.name, e),
        }
        result
    }

    pub async fn update_account(
        &self,
        account_id: Id,
        draft: &AccountDraft,
    ) -> Result<Account, ApiError> {
        const FALLBACK: &str = "Failed to update account";
        debug!("Updating account ID: {}", account_id);
        let request =
            HttpRequest::put(format!("/accounts/{account_id}")).json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<Account>(request, FALLBACK).await;
        match &result {
            Ok(account) => info!(
                "Successfully updated account: {} (ID: {})",
                account.name,
                account.id
            ),
            Err(e) => error!("Failed to update account {}: {}", account_id, e),
        }
        result
    }

    pub async fn delete_account(&self, account_id: Id) -> Result<(), ApiError> {
        debug!("Deleting account ID: {}", account_id);
        let result = self
            .send_discarding(
                HttpRequest::delete(format!("/accounts/{account_id}")),
                "Failed to delete account",
            )
            .await;
        match &result {
            Ok(()) => info!("Successfully deleted account ID: {}", account_id),
            Err(e) => error!("Failed to delete account {}: {}", account_id, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ApiClient, Method};
    use crate::testing::MockTransport;
    use model::{AccountDraft, AccountType};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_by_user() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond_json(
            200,
            json!([{"id": 1, "name": "Wallet", "accountType": "CASH", "balance": "120.50"}]),
        );

        let accounts = client.list_accounts_by_user(7).await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].balance, dec!(120.50));
        assert_eq!(client.transport().last_request().path, "/accounts/user/7");
    }

    #[tokio::test]
    async fn test_create_sends_camel_case_body() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond_json(
            201,
            json!({"id": 9, "name": "Card", "accountType": "CREDIT", "balance": 300}),
        );

        let draft = AccountDraft {
            name: "Card".to_string(),
            account_type: AccountType::Credit,
            balance: Some(dec!(300)),
            user_id: Some(7),
        };
        let account = client.create_account(&draft).await.unwrap();
        assert_eq!(account.id, 9);

        let request = client.transport().last_request();
        assert_eq!(request.method, Method::Post);
        let body = request.body.unwrap();
        assert_eq!(body["accountType"], "CREDIT");
        assert_eq!(body["userId"], 7);
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond(204, "");
        client.delete_account(3).await.unwrap();
        assert_eq!(client.transport().last_request().method, Method::Delete);
    }
}
