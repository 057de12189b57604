//! Build-environment preferences, read once at application startup.

use std::env;
use std::str::FromStr;

use crate::fiat_currency::FiatCurrency;
use crate::market_client::MARKET_API_BASE;
use crate::rate_client::EXCHANGE_RATE_API_BASE;

/// The currency pair every monetary value flows across: data is fetched in
/// `source` and shown in `display`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurrencyPrefs {
    source: FiatCurrency,
    display: FiatCurrency,
}

impl CurrencyPrefs {
    /// Creates the currency pair from environment variables, with the
    /// historical INR-to-GBP pair as the in-code default.
    ///
    /// # Environment Variables (ISO 4217 codes, case-insensitive):
    /// - `SOURCE_CURRENCY`: the currency market data is requested in.
    /// - `DISPLAY_CURRENCY`: the currency amounts are converted to for
    ///   display.
    pub fn from_env() -> Self {
        let source = env::var("SOURCE_CURRENCY")
            .ok()
            .and_then(|s| FiatCurrency::from_str(&s).ok())
            .unwrap_or(FiatCurrency::INR);

        let display = env::var("DISPLAY_CURRENCY")
            .ok()
            .and_then(|s| FiatCurrency::from_str(&s).ok())
            .unwrap_or(FiatCurrency::GBP);

        Self { source, display }
    }

    pub fn source(&self) -> FiatCurrency {
        self.source
    }

    pub fn display(&self) -> FiatCurrency {
        self.display
    }
}

impl Default for CurrencyPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The market API base URL, overridable via `COINGECKO_API_URL`.
pub fn market_api_url() -> String {
    env::var("COINGECKO_API_URL").unwrap_or_else(|_| MARKET_API_BASE.to_string())
}

/// The exchange-rate API base URL, overridable via `EXCHANGE_RATE_API_URL`.
pub fn exchange_rate_api_url() -> String {
    env::var("EXCHANGE_RATE_API_URL").unwrap_or_else(|_| EXCHANGE_RATE_API_BASE.to_string())
}
