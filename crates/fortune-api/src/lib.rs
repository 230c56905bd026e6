//! Typed HTTP access to the Fortune backend.
//!
//! One [`ApiClient`] per backend, shared by every service call. The domain
//! services in [`generate`], [`backtest`] and [`portfolio`] own the route
//! knowledge and the user-facing failure messages; callers only see typed
//! values from `fortune-core` or an [`ApiError`].

pub mod backtest;
pub mod client;
pub mod config;
pub mod error;
pub mod generate;
pub mod portfolio;

pub use backtest::{run_backtest, BacktestRequest};
pub use client::ApiClient;
pub use config::{endpoints, DEFAULT_API_URL};
pub use error::ApiError;
pub use generate::{generate_file_system, generate_strategy};
pub use portfolio::{broker_holdings, portfolio_holdings, portfolio_signals};
