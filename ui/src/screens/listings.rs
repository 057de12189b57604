// File: src/screens/listings.rs

use api::exchange_rate::ExchangeRate;
use api::listing::Listing;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::percent_change::PercentChange;
use crate::components::pico::Card;
use crate::format::format_money;
use crate::hooks::use_exchange_rate::use_exchange_rate;
use crate::hooks::use_market_data::use_market_listings;
use crate::remote::Remote;
use crate::search::filter_by_name;
use crate::Route;

/// One row of the markets table, converted into the display currency.
#[component]
fn ListingRow(listing: Listing, fx: ExchangeRate) -> Element {
    let symbol = listing.symbol.to_uppercase();
    let price = listing
        .current_price
        .map(|p| format_money(fx.convert(p), fx.quote().decimals()))
        .unwrap_or_else(|| "—".to_string());
    // Market caps are shown in millions to keep the column readable.
    let market_cap = listing
        .market_cap
        .map(|cap| format_money(fx.convert(cap) / 1_000_000.0, 0))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        tr {
            td {
                div {
                    class: "coin-cell",
                    img {
                        src: "{listing.image}",
                        alt: "{listing.name}",
                        width: "30",
                        height: "30",
                    }
                    Link {
                        to: Route::CoinDetail { id: listing.id.clone() },
                        "{listing.name}"
                    }
                }
            }
            td { "{symbol}" }
            td { "{price}" }
            td { "{market_cap}" }
            td { PercentChange { value: listing.change_1h } }
            td { PercentChange { value: listing.change_24h } }
            td { PercentChange { value: listing.change_7d } }
        }
    }
}

#[component]
pub fn Listings() -> Element {
    let mut listings = use_market_listings();
    let mut rate = use_exchange_rate();
    let mut query = use_signal(String::new);

    // The table renders only once both the rows and the rate are in; a
    // failure on either side surfaces instead of a stuck spinner.
    let view = Remote::from_fetch(listings.read().as_ref())
        .zip(Remote::from_fetch(rate.read().as_ref()));

    rsx! {
        match view {
            Remote::Loading => rsx! {
                Card {
                    h3 { "Markets" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Remote::Failed(reason) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load market data: {reason}" }
                    button {
                        onclick: move |_| {
                            listings.restart();
                            rate.restart();
                        },
                        "Retry"
                    }
                }
            },
            Remote::Ready((coins, fx)) => {
                let shown = filter_by_name(&coins, &query.read());
                let display_symbol = fx.quote().symbol();
                let quote_name = fx.quote().name();
                let rate_line = format!(
                    "1 {} = {} {}",
                    fx.base().code(),
                    fx.rate(),
                    fx.quote().code()
                );
                rsx! {
                    Card {
                        h3 { "Markets ({coins.len()})" }
                        p {
                            class: "muted",
                            small { "Prices shown in {quote_name} ({rate_line})" }
                        }
                        input {
                            r#type: "search",
                            placeholder: "Search by coin name",
                            value: "{query}",
                            oninput: move |event| query.set(event.value()),
                        }
                        if shown.is_empty() {
                            EmptyState {
                                title: "No matching coins".to_string(),
                                description: Some(format!(
                                    "No coin in the top 100 has \"{query}\" in its name."
                                )),
                            }
                        } else {
                            div {
                                style: "overflow-x: auto;",
                                table {
                                    thead {
                                        tr {
                                            th { "Coin" }
                                            th { "Symbol" }
                                            th { "Price ({display_symbol})" }
                                            th { "Market Cap ({display_symbol}M)" }
                                            th { "1h" }
                                            th { "24h" }
                                            th { "7d" }
                                        }
                                    }
                                    tbody {
                                        for listing in shown.iter() {
                                            ListingRow {
                                                key: "{listing.id}",
                                                listing: listing.clone(),
                                                fx,
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
