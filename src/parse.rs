//! Line-based parser for bill list sources
//!
//! Each non-empty line describes one bill:
//!
//! ```text
//! amount name due-day
//! ```
//!
//! where `amount` is a dollar amount with an optional leading `$` and an
//! optional two-digit cents part (`$1325`, `262.62`), `name` is every
//! word between the amount and the due day, and `due-day` is a
//! day-of-month with an optional ordinal suffix (`1st`, `21st`, `5`).
//! Blank lines and lines starting with `#` are skipped.

use tracing::debug;

use crate::types::Bill;

/// Errors produced while parsing a bill list source
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected 'amount name due-day', found {found} field(s)")]
    MissingFields { line: usize, found: usize },
    #[error("line {line}: invalid amount '{value}'")]
    InvalidAmount { line: usize, value: String },
    #[error("line {line}: invalid due day '{value}'")]
    InvalidDueDay { line: usize, value: String },
    #[error("line {line}: due day {value} is outside 1-31")]
    DueDayOutOfRange { line: usize, value: u32 },
}

/// Parse a bill list source into bills
///
/// Bills are returned in source order, all unpaid. Parsing stops at the
/// first malformed line with an error naming the line and the offending
/// field.
pub fn parse_bills(source: &str) -> Result<Vec<Bill>, ParseError> {
    let mut bills = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(ParseError::MissingFields {
                line,
                found: tokens.len(),
            });
        }

        let amount_cents = parse_amount(line, tokens[0])?;
        let due_day = parse_due_day(line, tokens[tokens.len() - 1])?;
        let name = tokens[1..tokens.len() - 1].join(" ");

        debug!(%name, due_day, amount_cents, "parsed bill");
        bills.push(Bill::new(name, due_day, amount_cents));
    }

    Ok(bills)
}

/// Parse a dollar amount token into cents
fn parse_amount(line: usize, token: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidAmount {
        line,
        value: token.to_string(),
    };

    let value = token.strip_prefix('$').unwrap_or(token);

    let (dollars, cents) = match value.split_once('.') {
        Some((dollars, cents)) => {
            // Cents must be exactly two digits so "12.5" cannot be
            // silently read as 12 dollars 5 cents.
            if cents.len() != 2 {
                return Err(invalid());
            }
            (dollars, cents.parse::<u32>().map_err(|_| invalid())?)
        }
        None => (value, 0),
    };

    let dollars = dollars.parse::<u32>().map_err(|_| invalid())?;
    dollars
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .ok_or_else(invalid)
}

/// Parse a due day token, stripping any ordinal suffix
fn parse_due_day(line: usize, token: &str) -> Result<u32, ParseError> {
    let digits = token
        .strip_suffix("st")
        .or_else(|| token.strip_suffix("nd"))
        .or_else(|| token.strip_suffix("rd"))
        .or_else(|| token.strip_suffix("th"))
        .unwrap_or(token);

    let day = digits.parse::<u32>().map_err(|_| ParseError::InvalidDueDay {
        line,
        value: token.to_string(),
    })?;

    if !(1..=31).contains(&day) {
        return Err(ParseError::DueDayOutOfRange { line, value: day });
    }

    Ok(day)
}
