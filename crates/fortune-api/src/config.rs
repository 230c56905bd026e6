//! Backend location and route table.
//!
//! Every request the crate makes goes through one of the paths listed in
//! [`endpoints`], resolved against a single base URL. Callers override the
//! base URL at client construction time; the paths themselves are fixed by
//! the backend contract.

/// Default backend address used when the caller does not supply one.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Route paths understood by the Fortune backend.
pub mod endpoints {
    /// Current portfolio holdings.
    pub const PORTFOLIO_HOLDINGS: &str = "/api/portfolio/holdings";
    /// Recent trading signals.
    pub const PORTFOLIO_SIGNALS: &str = "/api/portfolio/signals";
    /// Run a backtest for a symbol and strategy.
    pub const BACKTEST: &str = "/api/backtest";
    /// AI text generation, proxied through the backend.
    pub const GEMINI: &str = "/api/gemini";
    /// Holdings refreshed from the connected broker.
    pub const BROKER_HOLDINGS: &str = "/api/broker/holdings";
}
