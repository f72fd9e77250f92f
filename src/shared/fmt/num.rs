//! Number formatting utilities for human-readable display.
//!
//! Mirrors the rendering rules of the reference web UI: dollar values with
//! comma separators and at most two decimals, spot prices with up to six
//! decimals, percentages signed and fixed to two decimals.

/// Trims trailing zeros, adds thousands separators.
fn group_thousands(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let parts = trimmed.split('.').collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    let integer_part = integer_part
        .strip_prefix("-,")
        .map(|rest| format!("-{rest}"))
        .unwrap_or(integer_part);

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

/// Format a USD value: `$` prefix, comma separators, at most two decimals.
pub fn format_usd(value: f64) -> String {
    format!("${}", group_thousands(format!("{:.2}", value)))
}

/// Format a spot price: `$` prefix, comma separators, up to six decimals.
///
/// Six decimals keep sub-cent assets legible without padding majors with
/// noise (trailing zeros are trimmed).
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(format!("{:.6}", price)))
}

/// Format a 24h percentage change, signed and fixed to two decimals.
pub fn format_pct(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_thousands() {
        assert_eq!(format_usd(100000.0), "$100,000");
        assert_eq!(format_usd(1234567.89), "$1,234,567.89");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn test_format_usd_trims_trailing_zeros() {
        assert_eq!(format_usd(1.5), "$1.5");
        assert_eq!(format_usd(1.0), "$1");
        assert_eq!(format_usd(1000.10), "$1,000.1");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1234.56), "$-1,234.56");
    }

    #[test]
    fn test_format_price_small_values() {
        assert_eq!(format_price(0.000123), "$0.000123");
        assert_eq!(format_price(0.5), "$0.5");
    }

    #[test]
    fn test_format_price_large_values() {
        assert_eq!(format_price(50000.0), "$50,000");
        assert_eq!(format_price(50000.123456), "$50,000.123456");
    }

    #[test]
    fn test_format_pct_signed() {
        assert_eq!(format_pct(10.0), "+10.00%");
        assert_eq!(format_pct(-2.5), "-2.50%");
        assert_eq!(format_pct(0.0), "+0.00%");
    }
}
