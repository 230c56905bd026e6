// crates/fortune-console/src/components/mod.rs

pub mod allocation;
pub mod backtest;
pub mod dashboard;
pub mod file_tree;
pub mod help;
pub mod holdings_table;
pub mod metrics;
pub mod scaffolder;
pub mod signals;
pub mod status_bar;
pub mod strategy;
pub mod trade_table;
