// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
mod format;
pub mod hooks;
pub mod remote;
pub mod search;
mod screens;

use app_state::AppState;
use components::navbar::Navbar;
use screens::coin_detail::CoinDetail;
use screens::listings::Listings;

/// The application's internal routes. Each variant matches a URL pattern
/// and renders the component of the same name; the layout wraps them all
/// in the navigation bar.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Listings {},
        #[route("/coin/:id")]
        CoinDetail { id: String },
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    :root {
        --gain-color: #16a34a;
        --loss-color: #dc2626;
        --muted-color: #6b7280;
        --card-border-color: #e5e7eb;
        --card-background-color: #ffffff;
    }

    * { box-sizing: border-box; }

    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        background-color: #f6f7f9;
        color: #111827;
    }

    main.container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1rem 2rem 1rem;
    }

    header nav {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.75rem 1.5rem;
        background-color: #111827;
    }

    header nav ul {
        display: flex;
        align-items: center;
        gap: 1.25rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }

    header nav a {
        color: #f9fafb;
        text-decoration: none;
    }

    article {
        background-color: var(--card-background-color);
        border: 1px solid var(--card-border-color);
        border-radius: 8px;
        padding: 1.5rem;
        margin-top: 1.5rem;
    }

    table {
        width: 100%;
        border-collapse: collapse;
    }

    th, td {
        text-align: left;
        padding: 0.6rem 0.75rem;
        border-bottom: 1px solid var(--card-border-color);
        white-space: nowrap;
    }

    .coin-cell {
        display: flex;
        align-items: center;
        gap: 0.6rem;
    }

    .coin-cell img { border-radius: 50%; }

    .muted { color: var(--muted-color); }

    input[type="search"] {
        width: 100%;
        padding: 0.5rem 0.75rem;
        margin-bottom: 1rem;
        border: 1px solid var(--card-border-color);
        border-radius: 6px;
    }

    progress { width: 100%; }
    "#;

    use_context_provider(AppState::from_env);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Coin Tracker" }
        style { "{app_css}" }
        Router::<Route> {}
    }
}
