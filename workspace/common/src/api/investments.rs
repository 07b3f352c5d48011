use model::{Id, Investment, InvestmentDraft, InvestmentType, wire};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, error, info, trace};

use crate::api::{ApiClient, HttpRequest, Transport, json_body};
use crate::error::ApiError;

impl<T: Transport> ApiClient<T> {
    pub async fn list_investments(&self) -> Result<Vec<Investment>, ApiError> {
        trace!("Fetching all investments");
        let result = self
            .fetch::<Vec<Investment>>(
                HttpRequest::get("/investments"),
                "Failed to fetch investments",
            )
            .await;
        match &result {
            Ok(investments) => info!("Fetched {} investments", investments.len()),
            Err(e) => error!("Failed to fetch investments: {}", e),
        }
        result
    }

    pub async fn get_investment(&self, investment_id: Id) -> Result<Investment, ApiError> {
        trace!("Fetching investment with ID: {}", investment_id);
        let result = self
            .fetch::<Investment>(
                HttpRequest::get(format!("/investments/{investment_id}")),
                "Failed to fetch investment",
            )
            .await;
        match &result {
            Ok(investment) => info!(
                "Fetched investment: {} (ID: {})",
                investment.name,
                investment.id
            ),
            Err(e) => error!("Failed to fetch investment {}: {}", investment_id, e),
        }
        result
    }

    pub async fn list_investments_by_user(&self, user_id: Id) -> Result<Vec<Investment>, ApiError> {
        trace!("Fetching investments of user {}", user_id);
        let result = self
            .fetch::<Vec<Investment>>(
                HttpRequest::get(format!("/investments/user/{user_id}")),
                "Failed to fetch user investments",
            )
            .await;
        match &result {
            Ok(investments) => info!(
                "Fetched {} investments for user {}",
                investments.len(),
                user_id
            ),
            Err(e) => error!("Failed to fetch investments of user {}: {}", user_id, e),
        }
        result
    }

    pub async fn list_investments_by_type(
        &self,
        kind: InvestmentType,
    ) -> Result<Vec<Investment>, ApiError> {
        trace!("Fetching {} investments", kind);
        let result = self
            .fetch::<Vec<Investment>>(
                HttpRequest::get(format!("/investments/type/{kind}")),
                "Failed to fetch investments by type",
            )
            .await;
        match &result {
            Ok(investments) => info!("Fetched {} {} investments", investments.len(), kind),
            Err(e) => error!("Failed to fetch {} investments: {}", kind, e),
        }
        result
    }

    pub async fn create_investment(&self, draft: &InvestmentDraft) -> Result<Investment, ApiError> {
        const FALLBACK: &str = "Failed to create investment";
        debug!("Creating new investment: {}", draft.name);
        let request = HttpRequest::post("/investments").json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<Investment>(request, FALLBACK).await;
        match &result {
            Ok(investment) => info!(
                "Successfully created investment: {} (ID: {})",
                investment.name,
                investment.id
            ),
            Err(e) => error!("Failed to create investment '{}': {}", draft.name, e),
        }
        result
    }

    pub async fn update_investment(
        &self,
        investment_id: Id,
        draft: &InvestmentDraft,
    ) -> Result<Investment, ApiError> {
        const FALLBACK: &str = "Failed to update investment";
        debug!("Updating investment ID: {}", investment_id);
        let request = HttpRequest::put(format!("/investments/{investment_id}"))
            .json(json_body(draft, FALLBACK)?);
        let result = self.fetch::<Investment>(request, FALLBACK).await;
        match &result {
            Ok(investment) => info!(
                "Successfully updated investment: {} (ID: {})",
                investment.name,
                investment.id
            ),
            Err(e) => error!("Failed to update investment {}: {}", investment_id, e),
        }
        result
    }

    pub async fn delete_investment(&self, investment_id: Id) -> Result<(), ApiError> {
        debug!("Deleting investment ID: {}", investment_id);
        let result = self
            .send_discarding(
                HttpRequest::delete(format!("/investments/{investment_id}")),
                "Failed to delete investment",
            )
            .await;
        match &result {
            Ok(()) => info!("Successfully deleted investment ID: {}", investment_id),
            Err(e) => error!("Failed to delete investment {}: {}", investment_id, e),
        }
        result
    }

    /// Records a new current value for a holding.
    pub async fn update_investment_value(
        &self,
        investment_id: Id,
        value: Decimal,
    ) -> Result<Investment, ApiError> {
        debug!("Updating value of investment {} to {}", investment_id, value);
        let request =
            HttpRequest::put(format!("/investments/{investment_id}/value")).query("value", value);
        let result = self
            .fetch::<Investment>(request, "Failed to update investment value")
            .await;
        match &result {
            Ok(investment) => info!(
                "Updated value of investment {} (ID: {})",
                investment.name,
                investment.id
            ),
            Err(e) => error!("Failed to update value of investment {}: {}", investment_id, e),
        }
        result
    }

    /// Annualized return computed by the backend, in percent. `None` when the
    /// backend has no rate for the holding.
    pub async fn investment_return_rate(
        &self,
        investment_id: Id,
    ) -> Result<Option<Decimal>, ApiError> {
        const FALLBACK: &str = "Failed to calculate return rate";
        trace!("Fetching return rate of investment {}", investment_id);
        let result = self
            .fetch::<Value>(
                HttpRequest::get(format!("/investments/{investment_id}/return-rate")),
                FALLBACK,
            )
            .await
            .and_then(|value| match value {
                Value::Null => Ok(None),
                value => wire::decimal_from_value(&value)
                    .map(Some)
                    .ok_or_else(|| ApiError::decode(FALLBACK, format!("not a number: {value}"))),
            });
        match &result {
            Ok(Some(rate)) => info!("Return rate of investment {}: {}", investment_id, rate),
            Ok(None) => info!("No return rate available for investment {}", investment_id),
            Err(e) => error!("Failed to fetch return rate of investment {}: {}", investment_id, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ApiClient, Method};
    use crate::error::ApiError;
    use crate::testing::MockTransport;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_value_uses_query() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond_json(
            200,
            json!({
                "id": 2,
                "name": "Gold",
                "investmentType": "OTHER",
                "initialAmount": 1000,
                "currentValue": 1250.75,
                "startDate": "2023-03-01"
            }),
        );

        let investment = client.update_investment_value(2, dec!(1250.75)).await.unwrap();
        assert_eq!(investment.current_value, Some(dec!(1250.75)));

        let request = client.transport().last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.target(), "/investments/2/value?value=1250.75");
    }

    #[tokio::test]
    async fn test_return_rate() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond(200, "12.345");
        assert_eq!(client.investment_return_rate(2).await.unwrap(), Some(dec!(12.345)));

        client.transport().respond(200, r#""oops""#);
        let err = client.investment_return_rate(2).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.message(), "Failed to calculate return rate");
    }

    #[tokio::test]
    async fn test_missing_return_rate_is_not_an_error() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond(200, "null");
        assert_eq!(client.investment_return_rate(2).await.unwrap(), None);
    }
}
