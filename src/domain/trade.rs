//! Trade records parsed from the ledger and their computed results.

use serde::{Deserialize, Serialize};

use crate::domain::Token;

/// One parsed sell/buy pair.
///
/// Amounts may be NaN when the numeric part of a fragment has no valid
/// numeric prefix (e.g. `ARB-.`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub sell_token: Token,
    pub sell_amount: f64,
    pub buy_token: Token,
    pub buy_amount: f64,
    /// Trimmed input line the record was built from.
    #[serde(default)]
    pub source_line: String,
}

impl TradeRecord {
    pub fn new(
        sell_token: Token,
        sell_amount: f64,
        buy_token: Token,
        buy_amount: f64,
        source_line: impl Into<String>,
    ) -> Self {
        TradeRecord {
            sell_token,
            sell_amount,
            buy_token,
            buy_amount,
            source_line: source_line.into(),
        }
    }
}

/// A trade paired with its profit/loss.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResult {
    #[serde(flatten)]
    pub trade: TradeRecord,
    pub pl: f64,
}
