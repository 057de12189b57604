use api::coin_detail::CoinDetail;
use api::listing::Listing;
use api::ApiError;
use dioxus::prelude::*;

use crate::app_state::AppState;

/// Fetches the top-100 market listings in the configured source currency.
pub fn use_market_listings() -> Resource<Result<Vec<Listing>, ApiError>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let state = state.clone();
        async move { state.market.markets(state.prefs.source()).await }
    })
}

/// Fetches one coin's profile. `Ok(None)` means the id is unknown upstream.
///
/// The id is read inside the resource closure, so the fetch restarts when
/// the route's id segment changes without remounting the screen.
pub fn use_coin_detail(id: ReadOnlySignal<String>) -> Resource<Result<Option<CoinDetail>, ApiError>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let state = state.clone();
        let id = id();
        async move { state.market.coin_detail(&id).await }
    })
}
