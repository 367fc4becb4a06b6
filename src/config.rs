use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

use crate::presentation::{DEFAULT_COLOR_CAPACITY, DEFAULT_PALETTE};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_host: IpAddr,
    pub max_input_bytes: usize,
    pub token_palette: Vec<String>,
    pub color_capacity: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            bind_host: IpAddr::from([127, 0, 0, 1]),
            max_input_bytes: 64 * 1024,
            token_palette: default_palette(),
            color_capacity: DEFAULT_COLOR_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let bind_host = env_map
            .get("BIND_HOST")
            .map(|s| s.as_str())
            .unwrap_or("127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "BIND_HOST".to_string(),
                    "must be an IPv4 or IPv6 address".to_string(),
                )
            })?;

        let max_input_bytes = env_map
            .get("MAX_INPUT_BYTES")
            .map(|s| s.as_str())
            .unwrap_or("65536")
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "MAX_INPUT_BYTES".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        let token_palette = parse_palette_from_map(&env_map)?;

        let color_capacity = match env_map.get("TOKEN_COLOR_CAPACITY") {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                ConfigError::InvalidValue(
                    "TOKEN_COLOR_CAPACITY".to_string(),
                    "must be a non-negative integer".to_string(),
                )
            })?,
            None => DEFAULT_COLOR_CAPACITY,
        };

        Ok(Config {
            port,
            bind_host,
            max_input_bytes,
            token_palette,
            color_capacity,
        })
    }
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn parse_palette_from_map(env_map: &HashMap<String, String>) -> Result<Vec<String>, ConfigError> {
    let Some(raw) = env_map.get("TOKEN_PALETTE") else {
        return Ok(default_palette());
    };

    let colors: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if colors.is_empty() {
        return Err(ConfigError::InvalidValue(
            "TOKEN_PALETTE".to_string(),
            "must list at least one color".to_string(),
        ));
    }

    if let Some(bad) = colors.iter().find(|c| !is_hex_color(c)) {
        return Err(ConfigError::InvalidValue(
            "TOKEN_PALETTE".to_string(),
            format!("expected #rrggbb, got {}", bad),
        ));
    }

    Ok(colors)
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
