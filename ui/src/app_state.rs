use api::market_client::MarketClient;
use api::prefs::{self, CurrencyPrefs};
use api::rate_client::RateClient;

/// Immutable per-app context: the two API clients and the configured
/// currency pair, provided once at the root and read by every screen.
#[derive(Clone)]
pub struct AppState {
    pub market: MarketClient,
    pub rates: RateClient,
    pub prefs: CurrencyPrefs,
}

impl AppState {
    pub fn from_env() -> Self {
        let prefs = CurrencyPrefs::from_env();
        dioxus_logger::tracing::info!(
            "tracking markets in {}, displaying {}",
            prefs.source().code(),
            prefs.display().code()
        );

        Self {
            market: MarketClient::new(Some(&prefs::market_api_url())),
            rates: RateClient::new(Some(&prefs::exchange_rate_api_url())),
            prefs,
        }
    }
}
