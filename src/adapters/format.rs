//! Display formatting for estimator figures.
//!
//! These helpers sit outside the engine. They abbreviate currency, round
//! large counts and render payback durations the way the summary output
//! shows them.

use crate::domain::analysis::Payback;

/// Placeholder shown when a figure has no finite value.
pub const NOT_AVAILABLE: &str = "—";

/// Formats a dollar amount with `K`/`M` suffixes.
///
/// `1_840_000` renders as `$1.84M`, `12_400` as `$12K`, `640` as `$640`.
/// Negative amounts carry a leading minus: `-$12K`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_currency(-value));
    }
    if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${}K", (value / 1e3).round())
    } else {
        format!("${}", group_thousands(value.round() as i64))
    }
}

/// Formats a currency delta with an explicit sign: `+$12K`, `-$3K`.
pub fn format_signed_currency(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

/// Formats a count without a currency symbol.
///
/// Millions keep one decimal (`2.5M`); thousands round to the nearest
/// hundred (`12,300`); smaller values round to a whole number.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_count(-value));
    }
    if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        group_thousands(((value / 100.0).round() * 100.0) as i64)
    } else {
        group_thousands(value.round() as i64)
    }
}

/// Formats a dollar amount in whole thousands, as the sensitivity table does.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("${}K", (value / 1000.0).round() as i64)
}

/// Formats a payback period: `< 1 mo`, `7 mo`, `1.5 yr`, or `—` when never.
pub fn format_payback(payback: Payback) -> String {
    match payback {
        Payback::Never => NOT_AVAILABLE.to_string(),
        Payback::Months(months) if months < 1.0 => "< 1 mo".to_string(),
        Payback::Months(months) if months < 12.0 => format!("{} mo", months.round()),
        Payback::Months(months) => format!("{:.1} yr", months / 12.0),
    }
}

/// Formats a percentage rounded to a whole number with an explicit sign.
pub fn format_signed_percent(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = value.round() as i64;
    if rounded >= 0 {
        format!("+{}%", rounded)
    } else {
        format!("{}%", rounded)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_suffixes() {
        assert_eq!(format_currency(1_840_000.0), "$1.84M");
        assert_eq!(format_currency(12_400.0), "$12K");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn currency_handles_negative_and_non_finite() {
        assert_eq!(format_currency(-12_400.0), "-$12K");
        assert_eq!(format_currency(f64::INFINITY), "—");
        assert_eq!(format_signed_currency(12_400.0), "+$12K");
        assert_eq!(format_signed_currency(-2_500_000.0), "-$2.50M");
    }

    #[test]
    fn count_rounds_thousands_to_hundreds() {
        assert_eq!(format_count(12_345.0), "12,300");
        assert_eq!(format_count(2_500_000.0), "2.5M");
        assert_eq!(format_count(87.6), "88");
        assert_eq!(format_count(999_949.0), "999,900");
    }

    #[test]
    fn thousands_rounds_to_whole_k() {
        assert_eq!(format_thousands(184_620.0), "$185K");
        assert_eq!(format_thousands(400.0), "$0K");
    }

    #[test]
    fn payback_durations() {
        assert_eq!(format_payback(Payback::Never), "—");
        assert_eq!(format_payback(Payback::Months(0.4)), "< 1 mo");
        assert_eq!(format_payback(Payback::Months(6.6)), "7 mo");
        assert_eq!(format_payback(Payback::Months(18.0)), "1.5 yr");
    }

    #[test]
    fn signed_percent() {
        assert_eq!(format_signed_percent(153.4), "+153%");
        assert_eq!(format_signed_percent(0.0), "+0%");
        assert_eq!(format_signed_percent(-42.0), "-42%");
        assert_eq!(format_signed_percent(f64::NAN), "—");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(-4_000), "-4,000");
    }
}
