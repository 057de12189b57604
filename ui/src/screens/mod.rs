pub mod coin_detail;
pub mod listings;
