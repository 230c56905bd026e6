//! Backtest result value objects.
//!
//! Produced by the backend's backtest engine and read-only in the UI.
//! Field spelling follows the backend's JSON (camelCase).

use serde::{Deserialize, Serialize};

/// Long or short, as the backend spells it (`"long"` / `"short"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeDirection::Long => "long",
            TradeDirection::Short => "short",
        }
    }
}

/// One simulated trade out of a backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u64,
    /// Backend-formatted date string, displayed as-is.
    pub date: String,
    #[serde(rename = "type")]
    pub direction: TradeDirection,
    pub entry: f64,
    pub exit: f64,
    /// Signed profit/loss for this trade.
    pub pnl: f64,
}

/// One point of the equity curve: cumulative equity after `trade` trades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub trade: u64,
    pub equity: f64,
}

/// Aggregate backtest performance.
///
/// The equity curve's `trade` index is strictly increasing; that is a
/// property of the producing engine, assumed rather than enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub total_pnl: f64,
    /// Percentage, e.g. `62.5` for 62.5%.
    pub win_rate: f64,
    /// Percentage.
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    /// Percentage.
    pub cagr: f64,
    pub equity_curve: Vec<EquityPoint>,
}

/// Full `/api/backtest` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    pub trades: Vec<Trade>,
    pub metrics: PerformanceMetrics,
}
