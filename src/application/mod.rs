pub mod lead_discovery;
pub mod market_stats;
pub mod narrative;
pub mod run_pipeline;
