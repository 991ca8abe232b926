//! Display helpers and input parsing for the UI boundary.

use thiserror::Error;
use time::{macros::format_description, Date};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invoice value is required")]
    Empty,
    #[error("invoice value `{0}` is not a number")]
    NotANumber(String),
    #[error("invoice value cannot be negative")]
    Negative,
}

/// Parses the invoice field. Accepts `1,250.50` and a leading `$`.
pub fn parse_invoice_value(input: &str) -> Result<f64, InputError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(InputError::Empty);
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| InputError::NotANumber(input.trim().to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotANumber(input.trim().to_string()));
    }
    if value < 0.0 {
        return Err(InputError::Negative);
    }
    Ok(value)
}

/// `$1,234.56` style, two decimals, thousands separators.
pub fn format_usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = group_thousands(cents / 100);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${whole}.{:02}", cents % 100)
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Tariff rates print without trailing zeros: `20%`, `5.6%`.
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

pub fn format_date(date: Date) -> String {
    let format = format_description!("[day] [month repr:short] [year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}
