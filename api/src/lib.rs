//! Market data and exchange rates for the Coin Tracker frontends.
//!
//! This crate owns everything that talks to the network: the CoinGecko-style
//! market client, the exchange-rate client, the typed records they return,
//! and the currency arithmetic the UI formats for display. Nothing in here
//! depends on a renderer, so the same crate backs the web and desktop shells.

pub mod coin_detail;
pub mod error;
pub mod exchange_rate;
pub mod fiat_currency;
mod http;
pub mod listing;
pub mod market_client;
pub mod prefs;
pub mod quote_map;
pub mod rate_client;

pub use error::ApiError;
