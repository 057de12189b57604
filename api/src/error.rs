use thiserror::Error;

use crate::fiat_currency::FiatCurrency;

/// Any failure while fetching or decoding remote market data.
///
/// The distinction that matters to callers is transport-or-status versus
/// malformed: a [`ApiError::Malformed`] body means the upstream contract
/// changed, not that the network blinked.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP status {code}")]
    Status { code: u16 },

    #[error("could not decode response: {reason}")]
    Malformed { reason: String },

    #[error("rate sheet for {base:?} has no {quote:?} entry")]
    RateUnavailable {
        base: FiatCurrency,
        quote: FiatCurrency,
    },
}
