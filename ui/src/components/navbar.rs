// File: src/components/navbar.rs
use dioxus::prelude::*;

use crate::components::pico::Container;
use crate::Route;

/// The top navigation bar, laid over every route by the router.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        header {
            nav {
                ul {
                    li {
                        Link {
                            to: Route::Listings {},
                            strong { "Coin Tracker" }
                        }
                    }
                }
                ul {
                    li {
                        Link {
                            to: Route::Listings {},
                            "Markets"
                        }
                    }
                }
            }
        }
        Container {
            Outlet::<Route> {}
        }
    }
}
