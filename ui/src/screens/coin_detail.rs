// src/screens/coin_detail.rs
use api::exchange_rate::ExchangeRate;
use api::fiat_currency::FiatCurrency;
use api::quote_map::QuoteMap;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::percent_change::PercentChange;
use crate::components::pico::Card;
use crate::format::format_money;
use crate::hooks::use_exchange_rate::use_exchange_rate;
use crate::hooks::use_market_data::use_coin_detail;
use crate::remote::Remote;

/// Converts one per-currency metric into the display currency, dashing out
/// metrics the API had no source-currency figure for.
fn quoted(map: &QuoteMap, source: FiatCurrency, fx: &ExchangeRate, decimals: usize) -> String {
    map.get(source)
        .map(|value| format_money(fx.convert(value), decimals))
        .unwrap_or_else(|| "—".to_string())
}

/// Formats a currency-free coin count, or a dash for unknown supplies.
fn counted(value: Option<f64>) -> String {
    value
        .map(|count| format_money(count, 0))
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn CoinDetail(id: ReadOnlySignal<String>) -> Element {
    let mut detail = use_coin_detail(id);
    let mut rate = use_exchange_rate();
    let state = use_context::<AppState>();
    let source = state.prefs.source();

    let view = Remote::from_fetch(detail.read().as_ref())
        .zip(Remote::from_fetch(rate.read().as_ref()));

    rsx! {
        match view {
            Remote::Loading => rsx! {
                Card {
                    h3 { "Coin Details" }
                    p { "Loading coin details..." }
                    progress {}
                }
            },
            Remote::Failed(reason) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load coin data: {reason}" }
                    button {
                        onclick: move |_| {
                            detail.restart();
                            rate.restart();
                        },
                        "Retry"
                    }
                }
            },
            Remote::Ready((None, _)) => rsx! {
                Card {
                    h3 { "Coin Not Found" }
                    p { "The market API knows no coin with id \"{id}\"." }
                }
            },
            Remote::Ready((Some(coin), fx)) => {
                let summary = coin.summary().to_string();
                let symbol = coin.symbol.to_uppercase();
                let rank = coin
                    .market_cap_rank
                    .map(|rank| format!("#{rank}"))
                    .unwrap_or_else(|| "—".to_string());
                let display_symbol = fx.quote().symbol();
                let decimals = fx.quote().decimals();
                let price = quoted(&coin.market_data.current_price, source, &fx, decimals);
                let market_cap = quoted(&coin.market_data.market_cap, source, &fx, 0);
                let high = quoted(&coin.market_data.high_24h, source, &fx, decimals);
                let low = quoted(&coin.market_data.low_24h, source, &fx, decimals);
                let volume = quoted(&coin.market_data.total_volume, source, &fx, 0);
                let circulating = counted(coin.market_data.circulating_supply);
                let total = counted(coin.market_data.total_supply);

                rsx! {
                    Card {
                        div {
                            style: "display: flex; align-items: center; gap: 1rem;",
                            if !coin.image.small.is_empty() {
                                img {
                                    src: "{coin.image.small}",
                                    alt: "{coin.name}",
                                    width: "50",
                                    height: "50",
                                }
                            }
                            h1 {
                                style: "margin: 0;",
                                "{coin.name}"
                            }
                        }
                        if !summary.is_empty() {
                            h5 {
                                style: "margin-top: 0.75rem; font-weight: normal;",
                                "{summary}"
                            }
                        }

                        hr {}

                        div {
                            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-top: 1rem;",
                            div {
                                strong { "Rank" }
                                p { "{rank}" }
                            }
                            div {
                                strong { "Symbol" }
                                p { "{symbol}" }
                            }
                            div {
                                strong { "Current Price ({display_symbol})" }
                                p { "{price}" }
                            }
                            div {
                                strong { "Market Cap ({display_symbol})" }
                                p { "{market_cap}" }
                            }
                            div {
                                strong { "24h High ({display_symbol})" }
                                p { "{high}" }
                            }
                            div {
                                strong { "24h Low ({display_symbol})" }
                                p { "{low}" }
                            }
                            div {
                                strong { "Total Volume ({display_symbol})" }
                                p { "{volume}" }
                            }
                            div {
                                strong { "Market Cap Change (24h)" }
                                p {
                                    PercentChange {
                                        value: coin.market_data.market_cap_change_percentage_24h,
                                    }
                                }
                            }
                            div {
                                strong { "Circulating Supply" }
                                p { "{circulating}" }
                            }
                            div {
                                strong { "Total Supply" }
                                p { "{total}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
