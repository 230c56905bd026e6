//! fortune-core
//!
//! Pure domain layer for the Fortune trading console:
//! - backend-owned value objects (file tree, trades, metrics, holdings, signals)
//! - the JSON guard (parse untrusted text without panicking)
//! - code-fence stripping / pretty-printing for AI replies
//! - allocation math for the portfolio view
//!
//! Everything the backend sends is treated as an immutable value: this
//! crate never mutates or persists any of it.

pub mod file_node;
pub mod parse;
pub mod portfolio;
pub mod trade;

pub use file_node::{FileNode, NodeKind, TreeShapeError};

pub use parse::{format_code, parse_json, strip_code_fences, ParseFailure, ParsedResult};

pub use portfolio::{allocation, AllocationSlice, Holding, Signal, SignalKind};

pub use trade::{BacktestReport, EquityPoint, PerformanceMetrics, Trade, TradeDirection};
