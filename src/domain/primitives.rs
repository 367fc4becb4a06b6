//! Domain primitives: Token, PlStatus.

use serde::{Deserialize, Serialize};

/// Tradable asset symbol (e.g., "NEAR", "STRK").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(pub String);

impl Token {
    /// Create a Token from a string.
    pub fn new(symbol: impl Into<String>) -> Self {
        Token(symbol.into())
    }

    /// Get the symbol as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(symbol: &str) -> Self {
        Token(symbol.to_string())
    }
}

/// Whether a trade made or lost value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlStatus {
    Profit,
    Loss,
}

impl PlStatus {
    /// Zero counts as profit; NaN counts as loss.
    pub fn from_pl(pl: f64) -> Self {
        if pl >= 0.0 {
            PlStatus::Profit
        } else {
            PlStatus::Loss
        }
    }
}

impl std::fmt::Display for PlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlStatus::Profit => write!(f, "profit"),
            PlStatus::Loss => write!(f, "loss"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_pl() {
        assert_eq!(PlStatus::from_pl(1.5), PlStatus::Profit);
        assert_eq!(PlStatus::from_pl(0.0), PlStatus::Profit);
        assert_eq!(PlStatus::from_pl(-0.01), PlStatus::Loss);
        assert_eq!(PlStatus::from_pl(f64::NAN), PlStatus::Loss);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&PlStatus::Profit).unwrap();
        assert_eq!(json, "\"profit\"");
        let json = serde_json::to_string(&PlStatus::Loss).unwrap();
        assert_eq!(json, "\"loss\"");
    }

    #[test]
    fn test_token_display_and_json() {
        let token = Token::new("NEAR");
        assert_eq!(token.to_string(), "NEAR");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"NEAR\"");
    }
}
