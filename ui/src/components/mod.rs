pub mod empty_state;
pub mod navbar;
pub mod percent_change;
pub mod pico;
