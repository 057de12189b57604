//! Client for the CoinGecko-style market-data API.

use crate::coin_detail::CoinDetail;
use crate::error::ApiError;
use crate::fiat_currency::FiatCurrency;
use crate::http::get_json;
use crate::listing::Listing;

/// Default base URL of the market-data service.
pub const MARKET_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Fetches coin listings and per-coin profiles.
#[derive(Debug, Clone)]
pub struct MarketClient {
    client: reqwest::Client,
    base_url: String,
}

impl MarketClient {
    /// Creates a client against `base_url`, or the public service when
    /// `None`. Tests point this at a local mock server.
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or(MARKET_API_BASE).to_string(),
        }
    }

    /// Fetches the top 100 coins by market cap, quoted in `vs_currency`,
    /// with 1h/24h/7d percentage changes attached to each row.
    pub async fn markets(&self, vs_currency: FiatCurrency) -> Result<Vec<Listing>, ApiError> {
        let url = format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page=100&page=1&price_change_percentage=1h%2C24h%2C7d",
            self.base_url,
            vs_currency.vs_code(),
        );
        get_json(&self.client, &url).await
    }

    /// Fetches one coin's full profile, or `None` when the id is unknown
    /// to the market API.
    pub async fn coin_detail(&self, id: &str) -> Result<Option<CoinDetail>, ApiError> {
        let url = format!("{}/coins/{}", self.base_url, id);
        match get_json(&self.client, &url).await {
            Ok(detail) => Ok(Some(detail)),
            Err(ApiError::Status { code: 404 }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
