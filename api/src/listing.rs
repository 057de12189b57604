//! The one-row market summary the listings table is built from.

use serde::Deserialize;

/// One coin as returned by the market API's `/coins/markets` endpoint.
///
/// Monetary fields are quoted in whichever `vs_currency` the request named.
/// The API returns `null` for metrics it cannot compute (freshly listed or
/// dead coins), so those are optional here rather than poisoning the whole
/// page when one row is incomplete.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(rename = "price_change_percentage_1h_in_currency", default)]
    pub change_1h: Option<f64>,
    #[serde(rename = "price_change_percentage_24h_in_currency", default)]
    pub change_24h: Option<f64>,
    #[serde(rename = "price_change_percentage_7d_in_currency", default)]
    pub change_7d: Option<f64>,
}
