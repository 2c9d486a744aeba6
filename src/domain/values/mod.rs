pub mod credentials;
pub mod language;
pub mod market_query;
pub mod money;
