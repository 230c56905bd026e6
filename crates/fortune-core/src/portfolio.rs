//! Portfolio value objects: holdings and trading signals.
//!
//! Both come from the backend (`/api/portfolio/*`, `/api/broker/holdings`)
//! and are displayed as received. `Holding::value` is assumed to equal
//! `quantity × current_price` on the producing side; the UI does not
//! recompute or enforce it.

use serde::{Deserialize, Serialize};

/// A single portfolio position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub quantity: f64,
    pub avg_price: f64,
    pub current_price: f64,
    /// Market value of the position.
    pub value: f64,
    /// Unrealized profit/loss, signed.
    pub pnl: f64,
}

/// Buy or sell, as the backend spells it (`"BUY"` / `"SELL"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Buy,
    Sell,
}

impl SignalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
        }
    }
}

/// A generated trading alert for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: String,
    pub ticker: String,
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub price: f64,
    /// ISO-8601 timestamp string; parsed only for display.
    pub timestamp: String,
    /// Label of the strategy that produced the alert.
    pub strategy: String,
}

/// One slice of the allocation view: a holding's share of total value.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    pub ticker: String,
    pub value: f64,
    /// Share of total portfolio value, in percent.
    pub percent: f64,
}

/// Portfolio allocation by market value.
///
/// Percentages sum to ~100 over non-zero totals; an empty or all-zero
/// portfolio yields 0% slices rather than dividing by zero.
pub fn allocation(holdings: &[Holding]) -> Vec<AllocationSlice> {
    let total: f64 = holdings.iter().map(|h| h.value).sum();
    holdings
        .iter()
        .map(|h| AllocationSlice {
            ticker: h.ticker.clone(),
            value: h.value,
            percent: if total > 0.0 {
                h.value / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(ticker: &str, value: f64) -> Holding {
        Holding {
            id: ticker.to_lowercase(),
            name: ticker.to_string(),
            ticker: ticker.to_string(),
            quantity: 1.0,
            avg_price: value,
            current_price: value,
            value,
            pnl: 0.0,
        }
    }

    #[test]
    fn allocation_splits_by_value() {
        let slices = allocation(&[holding("INFY", 60.0), holding("TCS", 40.0)]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].ticker, "INFY");
        assert_eq!(slices[0].percent, 60.0);
        assert_eq!(slices[1].percent, 40.0);
    }

    #[test]
    fn allocation_of_empty_portfolio_is_empty() {
        assert!(allocation(&[]).is_empty());
    }

    #[test]
    fn allocation_handles_zero_total() {
        let slices = allocation(&[holding("ZERO", 0.0)]);
        assert_eq!(slices[0].percent, 0.0);
    }

    #[test]
    fn decodes_backend_spelling() {
        let holdings: Vec<Holding> = serde_json::from_str(
            r#"[{
                "id": "h1", "name": "Reliance Industries", "ticker": "RELIANCE",
                "quantity": 10, "avgPrice": 2850.0, "currentPrice": 2900.0,
                "value": 29000.0, "pnl": 500.0
            }]"#,
        )
        .unwrap();
        assert_eq!(holdings[0].avg_price, 2850.0);
        assert_eq!(holdings[0].current_price, 2900.0);

        let signals: Vec<Signal> = serde_json::from_str(
            r#"[{
                "id": "s1", "ticker": "TCS", "type": "SELL", "price": 4100.5,
                "timestamp": "2024-03-08T10:15:00Z", "strategy": "Mean Reversion"
            }]"#,
        )
        .unwrap();
        assert_eq!(signals[0].kind, SignalKind::Sell);
        assert_eq!(signals[0].strategy, "Mean Reversion");
    }
}
