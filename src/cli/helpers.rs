//! Shared helper functions for CLI commands

use rust_decimal::Decimal;

/// Render a money amount with the catalog's currency symbol, rounded to
/// two places. Only display output rounds; stored and computed values
/// keep full precision.
pub fn format_amount(value: Decimal, currency: &str) -> String {
    format!("{} {:.2}", currency, value.round_dp(2))
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Parse one `NAME=QUANTITY` bill-of-materials argument.
pub fn parse_usage_entry(s: &str) -> Result<(String, Decimal), String> {
    let (name, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=QUANTITY, got '{s}'"))?;
    let quantity = quantity
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("bad quantity in '{s}': {e}"))?;
    Ok((name.trim().to_string(), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_rounds_for_display() {
        assert_eq!(format_amount(Decimal::from(130), "R$"), "R$ 130.00");
        assert_eq!(
            format_amount("168.4799".parse().unwrap(), "R$"),
            "R$ 168.48"
        );
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
    }

    #[test]
    fn test_parse_usage_entry() {
        assert_eq!(
            parse_usage_entry("Welder=2").unwrap(),
            ("Welder".to_string(), Decimal::from(2))
        );
        assert_eq!(
            parse_usage_entry("Steel = 3.5").unwrap(),
            ("Steel".to_string(), "3.5".parse().unwrap())
        );
        assert!(parse_usage_entry("Welder").is_err());
        assert!(parse_usage_entry("Welder=two").is_err());
    }
}
