pub mod use_exchange_rate;
pub mod use_market_data;
