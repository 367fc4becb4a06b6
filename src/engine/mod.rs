//! Pure computation engine: per-trade P/L, ranking and the calculation driver.

pub mod calculator;
pub mod pnl;

pub use calculator::{
    calculate, calculate_with_diagnostics, CalcError, CalcOutcome, CalcReport, Diagnostics,
};
pub use pnl::{compute_pl, rank_results, RankedResults};
