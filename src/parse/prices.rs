//! Price line parsing: `[SYM=NUM SYM=NUM ...]`.

use thiserror::Error;

use super::numeric::parse_float_prefix;
use super::{SkipReason, SkippedInput};
use crate::domain::{PriceTable, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceParseError {
    #[error("no [...] price block found")]
    MissingPriceBlock,
    #[error("price block contains no SYMBOL=VALUE entries")]
    EmptyPriceTable,
}

/// Parse the first bracketed block of `line` into a price table.
///
/// Malformed entries are skipped; values without a numeric prefix are
/// stored as NaN.
pub fn parse_prices(line: &str) -> Result<PriceTable, PriceParseError> {
    parse_prices_with_diagnostics(line).map(|(table, _)| table)
}

/// Same as [`parse_prices`], also returning the entries that were skipped.
pub fn parse_prices_with_diagnostics(
    line: &str,
) -> Result<(PriceTable, Vec<SkippedInput>), PriceParseError> {
    let block = price_block(line).ok_or(PriceParseError::MissingPriceBlock)?;

    let mut table = PriceTable::new();
    let mut skipped = Vec::new();

    for entry in block.split(' ') {
        if entry.is_empty() {
            continue;
        }
        match parse_entry(entry) {
            Ok((symbol, price)) => {
                table.insert(Token::new(symbol), price);
            }
            Err(reason) => {
                tracing::debug!(entry = %entry, reason = %reason, "Skipping price entry");
                skipped.push(SkippedInput::new(entry, reason));
            }
        }
    }

    if table.is_empty() {
        return Err(PriceParseError::EmptyPriceTable);
    }

    Ok((table, skipped))
}

/// Contents of the first `[...]`, stopping at the first `]` after the `[`.
fn price_block(line: &str) -> Option<&str> {
    let open = line.find('[')?;
    let rest = &line[open + 1..];
    let close = rest.find(']')?;
    Some(&rest[..close])
}

fn parse_entry(entry: &str) -> Result<(&str, f64), SkipReason> {
    let mut parts = entry.split('=');
    let symbol = parts.next().unwrap_or_default();
    let value = parts.next().ok_or(SkipReason::MissingSeparator)?;

    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(SkipReason::EmptySymbol);
    }
    if value.is_empty() {
        return Err(SkipReason::EmptyValue);
    }

    Ok((symbol, parse_float_prefix(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_basic_price_line() {
        let table = parse_prices("[NEAR=2.57 STRK=0.142]").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("NEAR"), Some(2.57));
        assert_eq!(table.get("STRK"), Some(0.142));
    }

    #[test]
    fn test_text_around_block_is_ignored() {
        let table = parse_prices("prices: [ARB=0.2760] as of today [ZK=1]").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ARB"), Some(0.276));
    }

    #[test]
    fn test_missing_block() {
        assert_eq!(
            parse_prices("NEAR=2.57").unwrap_err(),
            PriceParseError::MissingPriceBlock
        );
        assert_eq!(
            parse_prices("[NEAR=2.57").unwrap_err(),
            PriceParseError::MissingPriceBlock
        );
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(
            parse_prices("[]").unwrap_err(),
            PriceParseError::EmptyPriceTable
        );
        assert_eq!(
            parse_prices("[NEAR =5 STRK=]").unwrap_err(),
            PriceParseError::EmptyPriceTable
        );
    }

    #[test]
    fn test_duplicate_symbol_last_wins() {
        let table = parse_prices("[NEAR=1 STRK=2 NEAR=3]").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("NEAR"), Some(3.0));
    }

    #[test]
    fn test_invalid_number_is_stored_as_nan() {
        let table = parse_prices("[NEAR=abc STRK=0.5]").unwrap();
        assert!(table.get("NEAR").unwrap().is_nan());
        assert_eq!(table.get("STRK"), Some(0.5));
    }

    #[test]
    fn test_value_stops_at_second_separator() {
        let table = parse_prices("[NEAR=1=2]").unwrap();
        assert_eq!(table.get("NEAR"), Some(1.0));
    }

    #[test]
    fn test_skipped_entries_are_reported() {
        let (table, skipped) = parse_prices_with_diagnostics("[NEAR  BAD =1 ARB= STRK=2]").unwrap();
        assert_eq!(table.len(), 1);
        let reasons: Vec<SkipReason> = skipped.iter().map(|s| s.reason).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::MissingSeparator,
                SkipReason::MissingSeparator,
                SkipReason::EmptySymbol,
                SkipReason::EmptyValue,
            ]
        );
        assert_eq!(skipped[0].text, "NEAR");
    }
}
