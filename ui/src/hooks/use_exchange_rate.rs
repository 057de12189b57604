use api::exchange_rate::ExchangeRate;
use api::ApiError;
use dioxus::prelude::*;

use crate::app_state::AppState;

/// Fetches the configured source-to-display exchange rate.
///
/// Every screen that converts money calls this hook, so the rate always
/// comes from the one client configured at the root rather than being
/// fetched ad hoc per view. The returned resource is owned by the calling
/// component: navigating away drops it along with any in-flight request,
/// and `restart()` refetches.
pub fn use_exchange_rate() -> Resource<Result<ExchangeRate, ApiError>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let state = state.clone();
        async move {
            state
                .rates
                .exchange_rate(state.prefs.source(), state.prefs.display())
                .await
        }
    })
}
