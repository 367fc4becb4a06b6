//! Symbol → price mapping for one calculation.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

use crate::domain::Token;

/// Prices keyed by token symbol.
///
/// Entries keep first-insertion order; re-inserting a symbol overwrites its
/// value in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    entries: Vec<(Token, f64)>,
    index: HashMap<Token, usize>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the price for `token`.
    pub fn insert(&mut self, token: Token, price: f64) {
        match self.index.get(&token) {
            Some(&pos) => self.entries[pos].1 = price,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, price));
            }
        }
    }

    /// Stored value for `symbol`, NaN included.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.index.get(symbol).map(|&pos| self.entries[pos].1)
    }

    /// Price used for valuation: missing and NaN entries are worth 0.
    pub fn price_or_zero(&self, symbol: &str) -> f64 {
        match self.get(symbol) {
            Some(p) if !p.is_nan() => p,
            _ => 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, f64)> {
        self.entries.iter().map(|(t, p)| (t, *p))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Token> {
        self.entries.iter().map(|(t, _)| t)
    }
}

impl FromIterator<(Token, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (Token, f64)>>(iter: I) -> Self {
        let mut table = PriceTable::new();
        for (token, price) in iter {
            table.insert(token, price);
        }
        table
    }
}

impl<'a> FromIterator<(&'a str, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(symbol, price)| (Token::from(symbol), price))
            .collect()
    }
}

impl Serialize for PriceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, price) in &self.entries {
            map.serialize_entry(token.as_str(), price)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PriceTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(symbol, price)| (Token::new(symbol), price))
            .collect())
    }
}
