pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod parse;
pub mod presentation;

pub use config::Config;
pub use domain::{PlStatus, PriceTable, Token, TradeRecord, TradeResult};
pub use engine::{
    calculate, calculate_with_diagnostics, compute_pl, rank_results, CalcError, CalcOutcome,
    CalcReport, Diagnostics, RankedResults,
};
pub use error::AppError;
pub use parse::{parse_prices, parse_trades, PriceParseError, SkipReason, SkippedInput};
