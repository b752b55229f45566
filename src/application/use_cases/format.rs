use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_NOISE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[()]").unwrap());

static PHONE_SEPARATOR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s./-]+").unwrap());

/// Thousands separators plus a leading dollar sign: 500000 -> "$500,000".
pub fn format_currency(value: u64) -> String {
    format!("${}", group_thousands(value))
}

/// Same as `format_currency` but keeps the sign ahead of the symbol, for
/// projection lines that can go negative: -1200000 -> "-$1,200,000".
pub fn format_currency_signed(value: i64) -> String {
    if value < 0 {
        format!("-${}", group_thousands(value.unsigned_abs()))
    } else {
        format_currency(value as u64)
    }
}

/// Trailing percent sign, up to two decimals with trailing zeros trimmed:
/// 30.0 -> "30%", 12.5 -> "12.5%".
pub fn format_percent(value: f64) -> String {
    let rendered = format!("{:.2}", value);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

/// RFC 3966 dial links use hyphens as visual separators, so parentheses are
/// dropped and spaces/dots/slashes collapse to single hyphens:
/// "+1 (555) 123 4567" -> "tel:+1-555-123-4567".
pub fn tel_href(phone: &str) -> String {
    let without_noise = PHONE_NOISE_PATTERN.replace_all(phone.trim(), "");
    let dialable = PHONE_SEPARATOR_PATTERN.replace_all(without_noise.trim(), "-");
    format!("tel:{}", dialable)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_thousands() {
        assert_eq!(format_currency(500000), "$500,000");
        assert_eq!(format_currency(1234567), "$1,234,567");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(0), "$0");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency_signed(-1200000), "-$1,200,000");
        assert_eq!(format_currency_signed(2500000), "$2,500,000");
    }

    #[test]
    fn test_percent_trims_zeros() {
        assert_eq!(format_percent(30.0), "30%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(33.33), "33.33%");
    }

    #[test]
    fn test_tel_href_separators() {
        assert_eq!(tel_href("+1 (555) 123 4567"), "tel:+1-555-123-4567");
        assert_eq!(tel_href("555-123-4567"), "tel:555-123-4567");
        assert_eq!(tel_href("555.123.4567"), "tel:555-123-4567");
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(mailto_href("ir@example.com"), "mailto:ir@example.com");
    }
}
