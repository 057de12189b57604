//! Client for the public exchange-rate API.

use crate::error::ApiError;
use crate::exchange_rate::{ExchangeRate, RateSheet};
use crate::fiat_currency::FiatCurrency;
use crate::http::get_json;

/// Default base URL of the exchange-rate service.
pub const EXCHANGE_RATE_API_BASE: &str = "https://api.exchangerate-api.com/v4";

/// Fetches fiat exchange rates.
#[derive(Debug, Clone)]
pub struct RateClient {
    client: reqwest::Client,
    base_url: String,
}

impl RateClient {
    /// Creates a client against `base_url`, or the public service when
    /// `None`. Tests point this at a local mock server.
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or(EXCHANGE_RATE_API_BASE).to_string(),
        }
    }

    /// Fetches the full rate sheet quoted against `base`.
    pub async fn latest(&self, base: FiatCurrency) -> Result<RateSheet, ApiError> {
        let url = format!("{}/latest/{}", self.base_url, base.code());
        get_json(&self.client, &url).await
    }

    /// Fetches the one `base` to `quote` rate the UI multiplies by.
    ///
    /// Both screens resolve their rate through this method, so there is a
    /// single acquisition path however many views are alive.
    pub async fn exchange_rate(
        &self,
        base: FiatCurrency,
        quote: FiatCurrency,
    ) -> Result<ExchangeRate, ApiError> {
        let sheet = self.latest(base).await?;
        sheet.extract(base, quote)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::ApiError;
    use crate::fiat_currency::FiatCurrency;

    use super::RateClient;

    async fn mock_server_and_client() -> (mockito::ServerGuard, RateClient) {
        let server = mockito::Server::new_async().await;
        let client = RateClient::new(Some(&server.url()));
        (server, client)
    }

    #[tokio::test]
    async fn latest_decodes_the_rate_sheet() {
        let (mut server, client) = mock_server_and_client().await;
        let mock = server
            .mock("GET", "/latest/INR")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "base": "INR",
                    "date": "2024-05-01",
                    "rates": {"GBP": 0.0095, "USD": 0.012, "INR": 1.0}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let sheet = client.latest(FiatCurrency::INR).await.unwrap();
        assert_eq!(sheet.base, "INR");
        assert_eq!(sheet.rate_to(FiatCurrency::GBP), Some(0.0095));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn exchange_rate_extracts_the_requested_pair() {
        let (mut server, client) = mock_server_and_client().await;
        server
            .mock("GET", "/latest/INR")
            .with_status(200)
            .with_body(json!({"base": "INR", "rates": {"GBP": 0.0095}}).to_string())
            .create_async()
            .await;

        let fx = client
            .exchange_rate(FiatCurrency::INR, FiatCurrency::GBP)
            .await
            .unwrap();
        assert_eq!(fx.rate(), 0.0095);
        assert!((fx.convert(4_000_000.0) - 38_000.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn a_sheet_without_the_quote_currency_is_an_error() {
        let (mut server, client) = mock_server_and_client().await;
        server
            .mock("GET", "/latest/INR")
            .with_status(200)
            .with_body(json!({"base": "INR", "rates": {"USD": 0.012}}).to_string())
            .create_async()
            .await;

        let err = client
            .exchange_rate(FiatCurrency::INR, FiatCurrency::GBP)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::RateUnavailable { .. }));
    }

    #[tokio::test]
    async fn an_error_status_is_not_a_rate_sheet() {
        let (mut server, client) = mock_server_and_client().await;
        server
            .mock("GET", "/latest/INR")
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let err = client.latest(FiatCurrency::INR).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { code: 503 }));
    }

    #[tokio::test]
    async fn garbage_bodies_surface_as_malformed() {
        let (mut server, client) = mock_server_and_client().await;
        server
            .mock("GET", "/latest/INR")
            .with_status(200)
            .with_body("<html>definitely not json</html>")
            .create_async()
            .await;

        let err = client.latest(FiatCurrency::INR).await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));
    }
}
