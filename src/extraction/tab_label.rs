//! Canonical tab labels.
//!
//! Roster tabs are titled with compact day/month pairs such as `"26-1"` or
//! `"2612-0101"`. Each hyphen-separated side is split into two numbers by
//! position and rendered as `N/D`, giving labels like `"2/6-1/2"`.

use thiserror::Error;

/// Denominator paired with a single-digit side.
pub const DEFAULT_DENOMINATOR: u64 = 2;

/// Why a tab title could not be canonicalised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabTitleError {
    /// The title did not have exactly two hyphen-separated parts.
    #[error("expected two hyphen-separated parts, found {0}")]
    WrongPartCount(usize),
    /// One side of the title was empty.
    #[error("empty part")]
    EmptyPart,
    /// One side of the title contained something other than ASCII digits.
    #[error("non-numeric part '{0}'")]
    NotNumeric(String),
}

/// Canonicalises a raw tab title into `"N/D-N/D"` form.
///
/// Each side is split by length:
/// - three or more digits: after the first two (`"123"` → `"12/3"`)
/// - two digits: after the first (`"12"` → `"1/2"`)
/// - one digit: paired with [`DEFAULT_DENOMINATOR`] (`"5"` → `"5/2"`)
///
/// Leading zeros are dropped from each number.
///
/// # Example
///
/// ```
/// use shift_calendar::extraction::canonicalize_tab_title;
///
/// assert_eq!(canonicalize_tab_title("26-1").unwrap(), "2/6-1/2");
/// assert_eq!(canonicalize_tab_title("123-4567").unwrap(), "12/3-45/67");
/// assert!(canonicalize_tab_title("Summary").is_err());
/// ```
pub fn canonicalize_tab_title(title: &str) -> Result<String, TabTitleError> {
    let parts: Vec<&str> = title.split('-').collect();
    if parts.len() != 2 {
        return Err(TabTitleError::WrongPartCount(parts.len()));
    }

    let left = format_part(parts[0])?;
    let right = format_part(parts[1])?;
    Ok(format!("{}-{}", left, right))
}

fn format_part(part: &str) -> Result<String, TabTitleError> {
    if part.is_empty() {
        return Err(TabTitleError::EmptyPart);
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TabTitleError::NotNumeric(part.to_string()));
    }

    // Digits are ASCII, so byte offsets are char boundaries.
    let (numerator, denominator) = match part.len() {
        1 => (parse_number(part)?, DEFAULT_DENOMINATOR),
        2 => (parse_number(&part[..1])?, parse_number(&part[1..])?),
        _ => (parse_number(&part[..2])?, parse_number(&part[2..])?),
    };
    Ok(format!("{}/{}", numerator, denominator))
}

fn parse_number(digits: &str) -> Result<u64, TabTitleError> {
    digits
        .parse::<u64>()
        .map_err(|_| TabTitleError::NotNumeric(digits.to_string()))
}
