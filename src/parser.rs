//! Parsing of the free-form total and score text fields.

use std::num::IntErrorKind;

use crate::error::ValidationError;

/// A positive student count as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredTotal {
    Count(i64),
    /// Positive but wider than `i64`; holds the digits without sign or
    /// leading zeros. No score list can ever have this many entries.
    Overflow(String),
}

impl DeclaredTotal {
    /// The total as it appears in messages.
    pub fn digits(&self) -> String {
        match self {
            DeclaredTotal::Count(n) => n.to_string(),
            DeclaredTotal::Overflow(digits) => digits.clone(),
        }
    }
}

/// Parses the declared number of students.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTotal`] if the text is not an integer or
/// the integer is not strictly positive.
pub fn parse_total(text: &str) -> Result<DeclaredTotal, ValidationError> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(total) if total > 0 => Ok(DeclaredTotal::Count(total)),
        Ok(_) => Err(ValidationError::InvalidTotal),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            let digits = text.trim_start_matches('+').trim_start_matches('0');
            Ok(DeclaredTotal::Overflow(digits.to_string()))
        }
        Err(_) => Err(ValidationError::InvalidTotal),
    }
}

/// Splits `text` on whitespace and parses every token as an integer score.
///
/// Empty or all-whitespace input yields an empty list. Integers wider than
/// `i64` saturate to `i64::MAX` / `i64::MIN`, which no grade band contains.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidScore`] for the first token that is not
/// an integer.
pub fn parse_scores(text: &str) -> Result<Vec<i64>, ValidationError> {
    text.split_whitespace().map(parse_score).collect()
}

fn parse_score(token: &str) -> Result<i64, ValidationError> {
    token.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(ValidationError::InvalidScore {
            token: token.to_string(),
        }),
    })
}
