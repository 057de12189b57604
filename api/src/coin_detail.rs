//! The full per-coin profile behind the detail screen.

use serde::Deserialize;

use crate::quote_map::QuoteMap;

/// One coin as returned by the market API's `/coins/{id}` endpoint.
///
/// Only the slice of the (very large) upstream document the detail screen
/// renders is decoded; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub image: CoinImage,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    pub market_data: MarketData,
}

/// Localized description blurbs. Only English is used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub en: String,
}

/// Icon URLs at the three sizes the market API serves.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoinImage {
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub large: String,
}

/// The multi-currency market metrics nested under `market_data`.
///
/// Each [`QuoteMap`] holds the metric in every currency the API quotes;
/// supply figures are currency-free counts of coins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: QuoteMap,
    #[serde(default)]
    pub market_cap: QuoteMap,
    #[serde(default)]
    pub high_24h: QuoteMap,
    #[serde(default)]
    pub low_24h: QuoteMap,
    #[serde(default)]
    pub total_volume: QuoteMap,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
}

impl CoinDetail {
    /// The first sentence of the English description, for the one-line
    /// blurb under the coin's name. Empty when the API has no description.
    pub fn summary(&self) -> &str {
        let text = self.description.en.trim();
        match text.split_once('.') {
            Some((first_sentence, _)) => first_sentence,
            None => text,
        }
    }
}
