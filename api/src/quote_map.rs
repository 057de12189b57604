//! Per-currency metric maps, as nested inside the market API's coin data.

use std::collections::HashMap;

use serde::Deserialize;

use crate::fiat_currency::FiatCurrency;

/// One metric (price, market cap, ...) quoted in many currencies at once.
///
/// The market API keys these maps by lowercase currency code, and omits
/// currencies it has no figure for, so lookups are by [`FiatCurrency`] and
/// may come back empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct QuoteMap(HashMap<String, f64>);

impl QuoteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the metric quoted in `currency`, if the API supplied it.
    pub fn get(&self, currency: FiatCurrency) -> Option<f64> {
        self.0.get(&currency.vs_code()).copied()
    }

    /// Records a quote for `currency`, returning any value it replaces.
    pub fn insert(&mut self, currency: FiatCurrency, value: f64) -> Option<f64> {
        self.0.insert(currency.vs_code(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
