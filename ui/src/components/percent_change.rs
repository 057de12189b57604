use dioxus::prelude::*;

use crate::format::{format_percent, PercentTone};

/// A signed percentage change, tinted by its direction. Metrics the API
/// had no figure for render as a muted dash.
#[component]
pub fn PercentChange(value: Option<f64>) -> Element {
    match value {
        Some(pct) => {
            let color = PercentTone::of(pct).css_color();
            let text = format_percent(pct);
            rsx! {
                span {
                    style: "color: {color}; white-space: nowrap;",
                    "{text}"
                }
            }
        }
        None => rsx! {
            span { class: "muted", "—" }
        },
    }
}
