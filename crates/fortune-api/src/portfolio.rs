//! Portfolio and broker data services.
//!
//! Thin typed wrappers over the client. Errors pass through untouched;
//! the caller decides how each failure shows up in its view.

use fortune_core::{Holding, Signal};

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::error::ApiError;

/// Fetch the holdings currently tracked by the backend.
pub async fn portfolio_holdings(client: &ApiClient) -> Result<Vec<Holding>, ApiError> {
    client.get_json(endpoints::PORTFOLIO_HOLDINGS).await
}

/// Fetch the most recent trading signals.
pub async fn portfolio_signals(client: &ApiClient) -> Result<Vec<Signal>, ApiError> {
    client.get_json(endpoints::PORTFOLIO_SIGNALS).await
}

/// Fetch holdings refreshed from the connected broker account.
pub async fn broker_holdings(client: &ApiClient) -> Result<Vec<Holding>, ApiError> {
    client.get_json(endpoints::BROKER_HOLDINGS).await
}
