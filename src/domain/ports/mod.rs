pub mod contact_finder;
pub mod text_generator;
pub mod trade_stats_provider;
pub mod web_search;
