//! Salary text and number normalization.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tradecheck_types::{Amount, Result, TradeCheckError, constants};

/// A raw salary as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SalaryInput {
    /// Free-form text such as `"$12,500,000"` or `"12.5m"`.
    Text(String),
    /// An exact number of dollars.
    Decimal(Decimal),
    /// A floating-point number of dollars.
    Float(f64),
}

impl From<&str> for SalaryInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SalaryInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for SalaryInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<f64> for SalaryInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for SalaryInput {
    fn from(value: i64) -> Self {
        Self::Decimal(Decimal::from(value))
    }
}

impl From<u64> for SalaryInput {
    fn from(value: u64) -> Self {
        Self::Decimal(Decimal::from(value))
    }
}

/// Suffixes that mean "millions of dollars".
const MILLION_SUFFIXES: [&str; 3] = ["m", "mil", "million"];

/// Trailing words discarded after the figure.
const CURRENCY_WORDS: [&str; 2] = ["dollars", "dollar"];

/// Parse a single salary.
///
/// # Errors
/// - `MalformedAmount` if the input is negative, NaN, or text that is
///   neither a plain figure nor millions shorthand
/// - `AmountOutOfRange` if the value does not fit a decimal
pub fn parse_amount(raw: impl Into<SalaryInput>) -> Result<Amount> {
    match raw.into() {
        SalaryInput::Text(text) => parse_text(&text),
        SalaryInput::Decimal(value) => from_number(value, &value.to_string()),
        SalaryInput::Float(value) => {
            if value.is_nan() {
                return Err(malformed(&value.to_string()));
            }
            let decimal = Decimal::from_f64(value).ok_or_else(|| {
                TradeCheckError::AmountOutOfRange {
                    input: value.to_string(),
                }
            })?;
            from_number(decimal, &value.to_string())
        }
    }
}

/// Parse a comma-separated salary list (`"12m, 8.5m, 2000000"`).
///
/// Segments are trimmed and empty segments are skipped; order is preserved.
/// Thousands separators cannot be used here since `,` splits the list.
///
/// # Errors
/// The error of the first segment that fails [`parse_amount`].
pub fn parse_amount_list(raw: &str) -> Result<Vec<Amount>> {
    parse_amount_list_with(raw, constants::DEFAULT_LIST_DELIMITER)
}

/// Parse a salary list split on `delimiter`.
///
/// # Errors
/// The error of the first segment that fails [`parse_amount`].
pub fn parse_amount_list_with(raw: &str, delimiter: char) -> Result<Vec<Amount>> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_amount)
        .collect()
}

fn from_number(value: Decimal, input: &str) -> Result<Amount> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(malformed(input));
    }
    Amount::new(value)
}

fn parse_text(raw: &str) -> Result<Amount> {
    let lowered = raw.trim().to_ascii_lowercase();
    let cleaned: String = lowered.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let body = strip_currency_word(cleaned.trim());

    let split = body
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(body.len());
    let (figure, suffix) = body.split_at(split);
    let suffix = suffix.trim_start();

    if !is_plain_figure(figure) {
        tracing::debug!(input = raw, "Rejected malformed salary");
        return Err(malformed(raw));
    }

    let figure = if figure.starts_with('.') {
        format!("0{figure}")
    } else {
        figure.to_string()
    };
    let value = Decimal::from_str(&figure).map_err(|_| TradeCheckError::AmountOutOfRange {
        input: raw.to_string(),
    })?;

    let value = if suffix.is_empty() {
        value
    } else if MILLION_SUFFIXES.contains(&suffix) {
        value
            .checked_mul(constants::ONE_MILLION)
            .ok_or_else(|| TradeCheckError::AmountOutOfRange {
                input: raw.to_string(),
            })?
    } else {
        tracing::debug!(input = raw, suffix, "Rejected unknown salary suffix");
        return Err(malformed(raw));
    };

    Amount::new(value)
}

/// Drop one trailing `dollar` / `dollars` word.
fn strip_currency_word(text: &str) -> &str {
    CURRENCY_WORDS
        .iter()
        .find_map(|word| text.strip_suffix(word))
        .map_or(text, str::trim_end)
}

/// `digits`, `digits.digits` or `.digits`.
fn is_plain_figure(figure: &str) -> bool {
    let (whole, fraction) = match figure.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (figure, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    match fraction {
        None => !whole.is_empty() && all_digits(whole),
        Some(fraction) => !fraction.is_empty() && all_digits(whole) && all_digits(fraction),
    }
}

fn malformed(input: &str) -> TradeCheckError {
    TradeCheckError::MalformedAmount {
        input: input.to_string(),
    }
}
