//! Price display formatting.
//!
//! Prices arrive from the Admin API as decimal strings and are shown in
//! the article rounded to whole currency units, with thousands grouping
//! and a leading currency symbol (`¥1,235`). Amounts that fail to parse
//! render as zero rather than failing the article.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount string as a display price.
///
/// Rounds half-away-from-zero to whole units. Currency codes without a
/// known symbol fall back to a `CODE amount` prefix form. Display-only;
/// nothing downstream does arithmetic on the result.
pub fn format_price(amount: &str, currency: &str) -> String {
    let value = Decimal::from_str(amount.trim()).unwrap_or_default();
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let grouped = group_thousands(&rounded.abs().normalize().to_string());

    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{grouped}"),
        None => format!("{sign}{currency} {grouped}"),
    }
}

/// Display symbol for the currency codes the store actually sells in.
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "JPY" => Some("¥"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_fractional_yen_up() {
        assert_eq!(format_price("1234.6", "JPY"), "¥1,235");
    }

    #[test]
    fn rounds_fractional_yen_down() {
        assert_eq!(format_price("1234.4", "JPY"), "¥1,234");
    }

    #[test]
    fn half_rounds_away_from_zero() {
        assert_eq!(format_price("0.5", "JPY"), "¥1");
        assert_eq!(format_price("2.5", "JPY"), "¥3");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price("1234567", "JPY"), "¥1,234,567");
    }

    #[test]
    fn small_amount_has_no_separator() {
        assert_eq!(format_price("980", "JPY"), "¥980");
    }

    #[test]
    fn exact_thousand() {
        assert_eq!(format_price("1000", "JPY"), "¥1,000");
    }

    #[test]
    fn zero() {
        assert_eq!(format_price("0", "JPY"), "¥0");
    }

    #[test]
    fn unparseable_amount_degrades_to_zero() {
        assert_eq!(format_price("not-a-number", "JPY"), "¥0");
    }

    #[test]
    fn usd_symbol() {
        assert_eq!(format_price("44.99", "USD"), "$45");
    }

    #[test]
    fn unknown_currency_uses_code_prefix() {
        assert_eq!(format_price("1500", "AUD"), "AUD 1,500");
    }

    #[test]
    fn negative_amount() {
        assert_eq!(format_price("-1234.6", "JPY"), "-¥1,235");
    }

    #[test]
    fn trailing_zero_decimals_do_not_linger() {
        assert_eq!(format_price("1200.00", "JPY"), "¥1,200");
    }
}
