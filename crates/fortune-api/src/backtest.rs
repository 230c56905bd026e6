//! Backtest execution against the backend simulator.

use fortune_core::BacktestReport;
use serde::Serialize;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::error::ApiError;

/// Parameters for one backtest run.
#[derive(Debug, Clone, Serialize)]
pub struct BacktestRequest {
    pub symbol: String,
    pub strategy: String,
}

/// Run a backtest for `symbol` with the named strategy.
///
/// Failures pass through untouched so callers can surface the backend's
/// `detail` message, for example when the symbol is unknown.
pub async fn run_backtest(
    client: &ApiClient,
    symbol: &str,
    strategy: &str,
) -> Result<BacktestReport, ApiError> {
    let request = BacktestRequest {
        symbol: symbol.to_string(),
        strategy: strategy.to_string(),
    };
    client.post_json(endpoints::BACKTEST, &request).await
}
