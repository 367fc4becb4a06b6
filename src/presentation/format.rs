//! Display formatting for prices and P/L values.

/// Fixed-point rendering with `decimals` digits. Negative zero prints as zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

/// Like [`format_fixed`] but with a leading `+` on non-negative values.
pub fn format_signed(value: f64, decimals: usize) -> String {
    let fixed = format_fixed(value, decimals);
    if value >= 0.0 {
        format!("+{}", fixed)
    } else {
        fixed
    }
}

/// Price as shown next to a token (4 decimals).
pub fn format_price(price: f64) -> String {
    format_fixed(price, 4)
}

/// P/L as shown in the results table (2 decimals, signed).
pub fn format_pl(pl: f64) -> String {
    format_signed(pl, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pl() {
        assert_eq!(format_pl(-19.7596), "-19.76");
        assert_eq!(format_pl(12.0), "+12.00");
        assert_eq!(format_pl(0.0), "+0.00");
        assert_eq!(format_pl(-0.0), "+0.00");
        assert_eq!(format_pl(-0.001), "-0.00");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2.57), "2.5700");
        assert_eq!(format_price(0.0515), "0.0515");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_pl(f64::NAN), "NaN");
        assert_eq!(format_pl(f64::INFINITY), "+Infinity");
        assert_eq!(format_price(f64::NEG_INFINITY), "-Infinity");
    }
}
