//! Token → display color assignment.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// Default palette: blue, orange, teal, pink, purple, light blue, green, red,
/// yellow, gray.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#0070f3", "#e67e22", "#16a085", "#e84393", "#8e44ad", "#2d98da", "#27ae60", "#c0392b",
    "#f1c40f", "#636e72",
];

/// Assigns a display color to each token symbol.
///
/// Implementations must return the same color for the same token for their
/// whole lifetime.
pub trait ColorAssigner: Send + Sync + fmt::Debug {
    fn color_for(&self, token: &str) -> String;
}

/// Tokens remembered by a [`PaletteColorAssigner`] unless configured otherwise.
pub const DEFAULT_COLOR_CAPACITY: usize = 1024;

/// Hands out palette colors in first-seen order, then falls back to colors
/// derived from the token's SHA-256 digest.
///
/// At most `capacity` tokens are remembered. Tokens first seen after that get
/// their derived color without being stored, so they stay stable too.
#[derive(Debug)]
pub struct PaletteColorAssigner {
    palette: Vec<String>,
    capacity: usize,
    assigned: Mutex<HashMap<String, String>>,
}

impl PaletteColorAssigner {
    pub fn new(palette: Vec<String>) -> Self {
        Self::with_capacity(palette, DEFAULT_COLOR_CAPACITY)
    }

    pub fn with_capacity(palette: Vec<String>, capacity: usize) -> Self {
        Self {
            palette,
            capacity,
            assigned: Mutex::new(HashMap::new()),
        }
    }

    /// Number of tokens that have been given a color so far.
    pub fn assigned_count(&self) -> usize {
        self.assigned
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// `#rrggbb` from the first three digest bytes.
    pub fn derived_color(token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        format!("#{}", hex::encode(&digest[..3]))
    }
}

impl Default for PaletteColorAssigner {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }
}

impl ColorAssigner for PaletteColorAssigner {
    fn color_for(&self, token: &str) -> String {
        let mut assigned = self
            .assigned
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(color) = assigned.get(token) {
            return color.clone();
        }

        if assigned.len() >= self.capacity {
            return Self::derived_color(token);
        }

        let color = match self.palette.get(assigned.len()) {
            Some(color) => color.clone(),
            None => Self::derived_color(token),
        };
        assigned.insert(token.to_string(), color.clone());
        color
    }
}
