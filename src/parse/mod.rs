//! Text parsers for the price line and the trade ledger.
//!
//! Both parsers are permissive: malformed price entries and trade lines are
//! dropped rather than failing the whole input. The `*_with_diagnostics`
//! variants report what was dropped and why.

use serde::Serialize;
use std::fmt;

pub mod numeric;
pub mod prices;
pub mod trades;

pub use numeric::parse_float_prefix;
pub use prices::{parse_prices, parse_prices_with_diagnostics, PriceParseError};
pub use trades::{parse_trade_line, parse_trades, parse_trades_with_diagnostics};

/// Why a price entry or trade line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkipReason {
    /// Price entry has no `=`.
    MissingSeparator,
    /// Price entry has nothing before `=`.
    EmptySymbol,
    /// Price entry has nothing after `=`.
    EmptyValue,
    /// Trade line does not split into exactly two fragments.
    WrongFragmentCount { found: usize },
    /// Sell fragment does not contain `TOKEN-AMOUNT`.
    SellSideMismatch,
    /// Buy fragment does not contain `TOKEN-AMOUNT`.
    BuySideMismatch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSeparator => write!(f, "missing '='"),
            SkipReason::EmptySymbol => write!(f, "empty symbol"),
            SkipReason::EmptyValue => write!(f, "empty value"),
            SkipReason::WrongFragmentCount { found } => {
                write!(f, "expected 2 fragments, found {}", found)
            }
            SkipReason::SellSideMismatch => write!(f, "sell side is not TOKEN-AMOUNT"),
            SkipReason::BuySideMismatch => write!(f, "buy side is not TOKEN-AMOUNT"),
        }
    }
}

/// A dropped price entry or trade line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedInput {
    pub text: String,
    pub reason: SkipReason,
}

impl SkippedInput {
    pub fn new(text: impl Into<String>, reason: SkipReason) -> Self {
        SkippedInput {
            text: text.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::WrongFragmentCount { found: 3 }.to_string(),
            "expected 2 fragments, found 3"
        );
        assert_eq!(SkipReason::MissingSeparator.to_string(), "missing '='");
    }

    #[test]
    fn test_skipped_input_serialization() {
        let skipped = SkippedInput::new("A-1 B-2 C-3", SkipReason::WrongFragmentCount { found: 3 });
        let json = serde_json::to_value(&skipped).unwrap();
        assert_eq!(json["text"], "A-1 B-2 C-3");
        assert_eq!(json["reason"]["kind"], "wrongFragmentCount");
        assert_eq!(json["reason"]["found"], 3);
    }
}
