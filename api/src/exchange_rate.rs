//! Fiat-to-fiat conversion types backing every displayed amount.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ApiError;
use crate::fiat_currency::FiatCurrency;

/// The exchange-rate API's `/latest/{base}` response: every rate the
/// service quotes against one base currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateSheet {
    pub base: String,
    #[serde(default)]
    pub date: Option<String>,
    pub rates: HashMap<String, f64>,
}

impl RateSheet {
    /// Looks up the multiplier from the sheet's base to `quote`.
    pub fn rate_to(&self, quote: FiatCurrency) -> Option<f64> {
        self.rates.get(quote.code()).copied()
    }

    /// Narrows the sheet to the one pair the application displays.
    pub fn extract(&self, base: FiatCurrency, quote: FiatCurrency) -> Result<ExchangeRate, ApiError> {
        self.rate_to(quote)
            .map(|rate| ExchangeRate::new(base, quote, rate))
            .ok_or(ApiError::RateUnavailable { base, quote })
    }
}

/// One base-to-quote multiplier, fetched once per screen and applied to
/// every monetary value on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate {
    base: FiatCurrency,
    quote: FiatCurrency,
    rate: f64,
}

impl ExchangeRate {
    pub fn new(base: FiatCurrency, quote: FiatCurrency, rate: f64) -> Self {
        Self { base, quote, rate }
    }

    pub fn base(&self) -> FiatCurrency {
        self.base
    }

    pub fn quote(&self) -> FiatCurrency {
        self.quote
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Converts an amount in the base currency to the quote currency.
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::error::ApiError;
    use crate::fiat_currency::FiatCurrency;

    use super::{ExchangeRate, RateSheet};

    fn inr_sheet(rates: &[(&str, f64)]) -> RateSheet {
        RateSheet {
            base: "INR".to_string(),
            date: Some("2024-05-01".to_string()),
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn convert_scales_by_the_rate() {
        let fx = ExchangeRate::new(FiatCurrency::INR, FiatCurrency::GBP, 0.0095);
        let converted = fx.convert(4_000_000.0);
        assert!((converted - 38_000.0).abs() < 1e-6);
    }

    #[test]
    fn convert_is_linear() {
        // A power-of-two rate keeps the float math exact.
        let fx = ExchangeRate::new(FiatCurrency::INR, FiatCurrency::GBP, 0.25);
        assert_eq!(fx.convert(8.0) + fx.convert(12.0), fx.convert(20.0));
        assert_eq!(fx.convert(0.0), 0.0);
    }

    #[test]
    fn extract_finds_the_quoted_pair() {
        let sheet = inr_sheet(&[("GBP", 0.0095), ("USD", 0.012)]);
        assert_eq!(sheet.rate_to(FiatCurrency::GBP), Some(0.0095));

        let fx = sheet
            .extract(FiatCurrency::INR, FiatCurrency::GBP)
            .unwrap();
        assert_eq!(fx.base(), FiatCurrency::INR);
        assert_eq!(fx.quote(), FiatCurrency::GBP);
        assert_eq!(fx.rate(), 0.0095);
    }

    #[test]
    fn extract_reports_missing_quotes() {
        let sheet = inr_sheet(&[("USD", 0.012)]);
        assert_eq!(sheet.rate_to(FiatCurrency::GBP), None);

        let err = sheet
            .extract(FiatCurrency::INR, FiatCurrency::GBP)
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateUnavailable {
                base: FiatCurrency::INR,
                quote: FiatCurrency::GBP,
            }
        ));
    }
}
