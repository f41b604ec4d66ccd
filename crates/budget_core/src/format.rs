//! Display formatting for currency, percentages and durations

/// Decimal places used for percentages unless the caller asks otherwise
pub const DEFAULT_PERCENT_DECIMALS: usize = 1;

/// Durations longer than this are shown as "Never"
pub const NEVER_THRESHOLD_MONTHS: u32 = 999;

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a dollar amount the way en-US does: `$1,235` or `$1,234.56` with cents.
///
/// Non-finite values are shown as `$0`.
#[must_use]
pub fn format_currency(amount: f64, show_cents: bool) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };

    let (body, is_zero) = if show_cents {
        let cents = (amount.abs() * 100.0).round() as u64;
        (
            format!("{}.{:02}", group_thousands(cents / 100), cents % 100),
            cents == 0,
        )
    } else {
        let dollars = amount.abs().round() as u64;
        (group_thousands(dollars), dollars == 0)
    };

    if amount < 0.0 && !is_zero {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Short axis label, e.g. `$2.1M`, `$450K`, `$50`
#[must_use]
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{sign}${:.0}K", abs_value / 1_000.0)
    } else {
        format!("{sign}${abs_value:.0}")
    }
}

/// `value` is already a percentage (12.5 means 12.5%)
#[must_use]
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.decimals$}%")
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Human-readable duration: "Never", "Done!", "7 months", "1 year, 2 months".
#[must_use]
pub fn format_months(months: Option<u32>) -> String {
    let months = match months {
        Some(m) if m <= NEVER_THRESHOLD_MONTHS => m,
        _ => return "Never".to_string(),
    };

    if months == 0 {
        return "Done!".to_string();
    }
    if months < 12 {
        return plural(months, "month");
    }

    let years = months / 12;
    let remaining = months % 12;
    if remaining == 0 {
        plural(years, "year")
    } else {
        format!("{}, {}", plural(years, "year"), plural(remaining, "month"))
    }
}
