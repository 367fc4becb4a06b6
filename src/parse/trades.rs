//! Trade ledger parsing: one `SELL-AMOUNT BUY-AMOUNT` pair per line.

use super::numeric::parse_float_prefix;
use super::{SkipReason, SkippedInput};
use crate::domain::{Token, TradeRecord};

/// Parse trade lines in order. Blank and malformed lines are dropped.
pub fn parse_trades<I>(lines: I) -> Vec<TradeRecord>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    parse_trades_with_diagnostics(lines).0
}

/// Same as [`parse_trades`], also returning the non-blank lines that were dropped.
pub fn parse_trades_with_diagnostics<I>(lines: I) -> (Vec<TradeRecord>, Vec<SkippedInput>)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        match parse_trade_line(line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::debug!(line = %line, reason = %reason, "Skipping trade line");
                skipped.push(SkippedInput::new(line, reason));
            }
        }
    }

    (records, skipped)
}

/// Parse a single trade line such as `APT-50 NEAR-60`.
///
/// The line is split on single spaces with empty pieces dropped; exactly two
/// fragments must remain, each containing `[A-Z]+-[0-9.]+` somewhere in it.
pub fn parse_trade_line(line: &str) -> Result<TradeRecord, SkipReason> {
    let line = line.trim();
    let fragments: Vec<&str> = line
        .split(' ')
        .filter(|part| !part.trim().is_empty())
        .collect();

    let [sell_part, buy_part] = fragments.as_slice() else {
        return Err(SkipReason::WrongFragmentCount {
            found: fragments.len(),
        });
    };

    let (sell_token, sell_amount) =
        match_fragment(sell_part).ok_or(SkipReason::SellSideMismatch)?;
    let (buy_token, buy_amount) = match_fragment(buy_part).ok_or(SkipReason::BuySideMismatch)?;

    Ok(TradeRecord::new(
        Token::new(sell_token),
        parse_float_prefix(sell_amount),
        Token::new(buy_token),
        parse_float_prefix(buy_amount),
        line,
    ))
}

/// First `([A-Z]+)-([0-9.]+)` occurrence in `fragment`.
///
/// A run of capitals can only end where a non-capital starts, so the match
/// is the first maximal capital run followed by `-` and a digit or dot.
fn match_fragment(fragment: &str) -> Option<(&str, &str)> {
    let bytes = fragment.as_bytes();
    let len = bytes.len();
    let is_amount_byte = |b: u8| b.is_ascii_digit() || b == b'.';

    let mut i = 0;
    while i < len {
        if !bytes[i].is_ascii_uppercase() {
            i += 1;
            continue;
        }

        let symbol_start = i;
        while i < len && bytes[i].is_ascii_uppercase() {
            i += 1;
        }
        let symbol_end = i;

        let has_amount = symbol_end + 1 < len
            && bytes[symbol_end] == b'-'
            && is_amount_byte(bytes[symbol_end + 1]);
        if has_amount {
            let amount_start = symbol_end + 1;
            let mut amount_end = amount_start;
            while amount_end < len && is_amount_byte(bytes[amount_end]) {
                amount_end += 1;
            }
            return Some((
                &fragment[symbol_start..symbol_end],
                &fragment[amount_start..amount_end],
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_trade() {
        let trades = parse_trades(["STRK-1000 ARB-442.9"]);
        assert_eq!(trades.len(), 1);
        let t = &trades[0];
        assert_eq!(t.sell_token.as_str(), "STRK");
        assert_eq!(t.sell_amount, 1000.0);
        assert_eq!(t.buy_token.as_str(), "ARB");
        assert_eq!(t.buy_amount, 442.9);
        assert_eq!(t.source_line, "STRK-1000 ARB-442.9");
    }

    #[test]
    fn test_three_fragments_dropped() {
        assert!(parse_trades(["A-1 B-2 C-3"]).is_empty());
        assert_eq!(
            parse_trade_line("A-1 B-2 C-3").unwrap_err(),
            SkipReason::WrongFragmentCount { found: 3 }
        );
    }

    #[test]
    fn test_one_fragment_dropped() {
        assert_eq!(
            parse_trade_line("A-1").unwrap_err(),
            SkipReason::WrongFragmentCount { found: 1 }
        );
    }

    #[test]
    fn test_extra_spaces_and_padding_tolerated() {
        let trades = parse_trades(["   NEAR-50     ARB-440  "]);
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].sell_token.as_str(), "NEAR");
        assert_eq!(trades[0].buy_amount, 440.0);
        assert_eq!(trades[0].source_line, "NEAR-50     ARB-440");
    }

    #[test]
    fn test_blank_lines_skipped_and_order_kept() {
        let lines = vec![
            "STRK-1000 ARB-442.9".to_string(),
            "   ".to_string(),
            "".to_string(),
            "NEAR-50 ARB-440".to_string(),
        ];
        let (trades, skipped) = parse_trades_with_diagnostics(&lines);
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].sell_token.as_str(), "STRK");
        assert_eq!(trades[1].sell_token.as_str(), "NEAR");
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_lowercase_symbols_rejected() {
        assert_eq!(
            parse_trade_line("strk-10 ARB-1").unwrap_err(),
            SkipReason::SellSideMismatch
        );
        assert_eq!(
            parse_trade_line("STRK-10 arb-1").unwrap_err(),
            SkipReason::BuySideMismatch
        );
    }

    #[test]
    fn test_fragment_match_is_unanchored() {
        let t = parse_trade_line("xSTRK-10y (ARB-2.5)").unwrap();
        assert_eq!(t.sell_token.as_str(), "STRK");
        assert_eq!(t.sell_amount, 10.0);
        assert_eq!(t.buy_token.as_str(), "ARB");
        assert_eq!(t.buy_amount, 2.5);
    }

    #[test]
    fn test_first_matching_capital_run_wins() {
        let t = parse_trade_line("AB-CD-7 EF-1").unwrap();
        assert_eq!(t.sell_token.as_str(), "CD");
        assert_eq!(t.sell_amount, 7.0);
    }

    #[test]
    fn test_multiple_dots_parse_leading_number() {
        let t = parse_trade_line("NEAR-1.2.3 ARB-4").unwrap();
        assert_eq!(t.sell_amount, 1.2);
    }

    #[test]
    fn test_dot_only_amount_is_nan() {
        let t = parse_trade_line("NEAR-. ARB-4").unwrap();
        assert!(t.sell_amount.is_nan());
        assert_eq!(t.buy_amount, 4.0);
    }

    #[test]
    fn test_skipped_lines_reported_in_order() {
        let (trades, skipped) =
            parse_trades_with_diagnostics(["garbage", "A-1 B-2", "A-1 b-2", "A-1 B-2 C-3"]);
        assert_eq!(trades.len(), 1);
        assert_eq!(skipped.len(), 3);
        assert_eq!(skipped[0].text, "garbage");
        assert_eq!(skipped[0].reason, SkipReason::WrongFragmentCount { found: 1 });
        assert_eq!(skipped[1].reason, SkipReason::BuySideMismatch);
        assert_eq!(skipped[2].reason, SkipReason::WrongFragmentCount { found: 3 });
    }
}
