//! Currency and unit formatting
//!
//! Catalog prices are authored in USD and displayed in INR at a fixed rate.
//! Display follows the `en-IN` locale: rupee sign, no fractional digits and
//! Indian digit grouping (last three digits, then pairs: `₹1,00,200`).

use thiserror::Error;

/// Fixed USD → INR conversion rate used for every displayed price.
pub const USD_TO_INR: f64 = 83.5;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FormatError {
    #[error("cannot format non-finite amount {0}")]
    NonFinite(f64),
}

/// Convert a USD amount to INR at [`USD_TO_INR`].
#[inline]
pub fn usd_to_inr(usd: f64) -> f64 {
    usd * USD_TO_INR
}

/// Convert USD to INR and round to a whole rupee (half away from zero).
pub fn usd_to_inr_rounded(usd: f64) -> i64 {
    usd_to_inr(usd).round() as i64
}

/// Format an INR amount for display, e.g. `83.5 -> "₹84"`, `100200 -> "₹1,00,200"`.
pub fn format_inr(amount: f64) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite(amount));
    }
    let rounded = amount.round();
    // -0.4 rounds to -0; the locale prints that as plain "₹0"
    let sign = if rounded < 0.0 { "-" } else { "" };
    // Integer text of the f64 itself; casting to an integer type would
    // saturate above u64::MAX
    let digits = format!("{:.0}", rounded.abs());
    Ok(format!("{}₹{}", sign, group_indian_digits(&digits)))
}

/// Format a USD amount as INR.
pub fn format_usd_as_inr(usd: f64) -> Result<String, FormatError> {
    format_inr(usd_to_inr(usd))
}

/// Same as [`format_usd_as_inr`] with a unit suffix, e.g. `"₹23,380/ton"`.
pub fn format_usd_as_inr_per(usd: f64, unit: &str) -> Result<String, FormatError> {
    Ok(format!("{}/{}", format_usd_as_inr(usd)?, unit))
}

/// Indian digit grouping for a non-negative integer.
pub fn group_indian(value: u64) -> String {
    group_indian_digits(&value.to_string())
}

/// Indian digit grouping over a plain run of ASCII digits.
fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// File size in KiB with one decimal, as shown next to uploaded files.
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Percentage with one decimal, e.g. `-100.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_dollar_rounds_to_whole_rupee() {
        assert_eq!(format_usd_as_inr(1.0).unwrap(), "₹84");
        assert_eq!(format_inr(0.0).unwrap(), "₹0");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(23_380), "23,380");
        assert_eq!(group_indian(100_200), "1,00,200");
        assert_eq!(group_indian(12_345_678), "1,23,45,678");
    }

    #[test]
    fn test_catalog_prices() {
        assert_eq!(format_usd_as_inr_per(280.0, "ton").unwrap(), "₹23,380/ton");
        assert_eq!(format_usd_as_inr_per(2500.0, "ton").unwrap(), "₹2,08,750/ton");
        assert_eq!(format_usd_as_inr_per(45.0, "hectare").unwrap(), "₹3,758/hectare");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(-1500.0).unwrap(), "-₹1,500");
        assert_eq!(format_inr(-0.4).unwrap(), "₹0");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(format_inr(f64::NAN), Err(FormatError::NonFinite(_))));
        assert!(format_inr(f64::INFINITY).is_err());
    }

    #[test]
    fn test_amounts_beyond_u64_keep_their_digits() {
        assert_eq!(format_inr(1e20).unwrap(), "₹10,00,00,00,00,00,00,00,00,000");
        assert_eq!(format_inr(-1e20).unwrap(), "-₹10,00,00,00,00,00,00,00,00,000");
        let huge = format_inr(1e308).unwrap();
        assert_eq!(huge.chars().filter(|c| c.is_ascii_digit()).count(), 309);
        assert!(huge.starts_with("₹10,00,"));
    }

    #[test]
    fn test_kib() {
        assert_eq!(format_kib(2048), "2.0 KB");
        assert_eq!(format_kib(1536), "1.5 KB");
    }
}
