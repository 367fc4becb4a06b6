//! Domain types for the token swap P/L calculator.
//!
//! This module provides:
//! - Token symbols and profit/loss status
//! - The per-calculation PriceTable
//! - TradeRecord and TradeResult values

pub mod price_table;
pub mod primitives;
pub mod trade;

pub use price_table::PriceTable;
pub use primitives::{PlStatus, Token};
pub use trade::{TradeRecord, TradeResult};
