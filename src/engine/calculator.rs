//! Top-level driver: raw text in, ranked P/L out.

use thiserror::Error;

use super::pnl::{rank_results, RankedResults};
use crate::domain::{PriceTable, TradeResult};
use crate::parse::{
    parse_prices_with_diagnostics, parse_trades_with_diagnostics, PriceParseError, SkippedInput,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Please enter your trade data")]
    EmptyInput,
    #[error("Invalid data format")]
    InsufficientLines,
    #[error("Cannot read token prices from the first line")]
    InvalidPriceLine(#[source] PriceParseError),
}

/// Ranked trades for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcReport {
    pub prices: PriceTable,
    pub results: Vec<TradeResult>,
    pub total: f64,
}

/// Successful calculation: either no trade lines parsed, or a ranked report.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcOutcome {
    NoTrades { prices: PriceTable },
    Ranked(CalcReport),
}

impl CalcOutcome {
    pub fn prices(&self) -> &PriceTable {
        match self {
            CalcOutcome::NoTrades { prices } => prices,
            CalcOutcome::Ranked(report) => &report.prices,
        }
    }

    /// Ranked results; empty for `NoTrades`.
    pub fn results(&self) -> &[TradeResult] {
        match self {
            CalcOutcome::NoTrades { .. } => &[],
            CalcOutcome::Ranked(report) => &report.results,
        }
    }

    pub fn total(&self) -> f64 {
        match self {
            CalcOutcome::NoTrades { .. } => 0.0,
            CalcOutcome::Ranked(report) => report.total,
        }
    }

    pub fn has_trades(&self) -> bool {
        matches!(self, CalcOutcome::Ranked(_))
    }
}

/// Inputs dropped during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub skipped_prices: Vec<SkippedInput>,
    pub skipped_trades: Vec<SkippedInput>,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.skipped_prices.is_empty() && self.skipped_trades.is_empty()
    }
}

/// Parse `raw` (price line followed by trade lines) and rank every trade.
pub fn calculate(raw: &str) -> Result<CalcOutcome, CalcError> {
    calculate_with_diagnostics(raw).map(|(outcome, _)| outcome)
}

/// Same as [`calculate`], also returning the price entries and trade lines
/// that were dropped.
pub fn calculate_with_diagnostics(raw: &str) -> Result<(CalcOutcome, Diagnostics), CalcError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let lines: Vec<&str> = input.split('\n').collect();
    let [price_line, trade_lines @ ..] = lines.as_slice() else {
        return Err(CalcError::EmptyInput);
    };
    if trade_lines.is_empty() {
        return Err(CalcError::InsufficientLines);
    }

    let (prices, skipped_prices) =
        parse_prices_with_diagnostics(price_line).map_err(CalcError::InvalidPriceLine)?;
    let (trades, skipped_trades) = parse_trades_with_diagnostics(trade_lines);

    tracing::debug!(
        prices = prices.len(),
        trades = trades.len(),
        skipped_prices = skipped_prices.len(),
        skipped_trades = skipped_trades.len(),
        "Parsed calculation input"
    );

    let diagnostics = Diagnostics {
        skipped_prices,
        skipped_trades,
    };

    if trades.is_empty() {
        return Ok((CalcOutcome::NoTrades { prices }, diagnostics));
    }

    let RankedResults { results, total } = rank_results(&trades, &prices);

    Ok((
        CalcOutcome::Ranked(CalcReport {
            prices,
            results,
            total,
        }),
        diagnostics,
    ))
}
