//! Per-trade profit/loss and the ascending ranking of a trade list.

use std::cmp::Ordering;

use crate::domain::{PriceTable, TradeRecord, TradeResult};

/// Profit/loss of one trade: value bought minus value sold.
///
/// Tokens missing from `prices` (or priced at NaN) are valued at 0.
pub fn compute_pl(prices: &PriceTable, trade: &TradeRecord) -> f64 {
    let buy_value = trade.buy_amount * prices.price_or_zero(trade.buy_token.as_str());
    let sell_value = trade.sell_amount * prices.price_or_zero(trade.sell_token.as_str());
    buy_value - sell_value
}

/// Trades ranked by P/L plus the summed total.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResults {
    /// Ascending by `pl`; equal values keep input order.
    pub results: Vec<TradeResult>,
    pub total: f64,
}

/// Compute P/L for every trade, sort ascending (stable) and sum.
///
/// The total is accumulated in input order before sorting.
pub fn rank_results(trades: &[TradeRecord], prices: &PriceTable) -> RankedResults {
    let mut results: Vec<TradeResult> = trades
        .iter()
        .map(|trade| TradeResult {
            trade: trade.clone(),
            pl: compute_pl(prices, trade),
        })
        .collect();

    let total = results.iter().fold(0.0, |acc, r| acc + r.pl);

    results.sort_by(|a, b| cmp_pl(a.pl, b.pl));

    RankedResults { results, total }
}

/// Ascending numeric order with NaN after every number.
fn cmp_pl(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
