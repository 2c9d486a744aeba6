pub mod lead;
pub mod run_report;
pub mod trade_stats;
