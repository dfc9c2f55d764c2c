//! Argument validators used as clap value parsers

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Input format of birth dates
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Validate a CPF and return its 11 digits. Punctuation is ignored.
pub fn parse_tax_id(input: &str) -> Result<String, String> {
    let normalized: String = input.chars().filter(char::is_ascii_digit).collect();
    let digits: Vec<u32> = normalized.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return Err(format!("'{}' must contain 11 digits", input));
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return Err(format!("'{}' is not a valid CPF", input));
    }

    for check in 9..11 {
        let sum: u32 = digits[..check]
            .iter()
            .enumerate()
            .map(|(i, &d)| d * (check as u32 + 1 - i as u32))
            .sum();
        if (sum * 10) % 11 % 10 != digits[check] {
            return Err(format!("'{}' is not a valid CPF", input));
        }
    }

    Ok(normalized)
}

/// Parse a `dd-mm-yyyy` date
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| format!("'{}' is not a date in dd-mm-yyyy format", input))
}

/// Parse a money amount; `,` is accepted as decimal separator
pub fn parse_amount(input: &str) -> Result<Decimal, String> {
    let normalized = input.trim().replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| format!("'{}' is not a valid amount", input))
}

/// Parse a non-empty text field
pub fn parse_text(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
