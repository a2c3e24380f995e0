//! Shift scanning.
//!
//! Given a grid and its anchor at `(r, c)`, dates are read from row `r + 1`
//! (columns `c..`) and shift-time labels from column `c - 1` (rows `r + 1..`).
//! Every non-empty cell in that block whose text contains the target name,
//! ignoring case, is one shift.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Cell, Grid, ShiftRecord};

use super::anchor::Anchor;
use super::date_normalizer::normalize_date;
use super::shift_time::parse_shift_time;

/// The person whose shifts are being extracted.
///
/// Matching is a case-insensitive substring test, so `"alex"` matches
/// `"Alex M."` and `"ALEX (trainee)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    original: String,
    needle: String,
}

impl TargetName {
    /// Creates a target name, rejecting empty or whitespace-only input.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar::extraction::TargetName;
    /// use shift_calendar::models::Cell;
    ///
    /// let name = TargetName::new("Alex").unwrap();
    /// assert!(name.matches(&Cell::from("alex / Sam")));
    /// assert!(!name.matches(&Cell::from("Sam")));
    /// assert!(TargetName::new("   ").is_err());
    /// ```
    pub fn new(name: &str) -> EngineResult<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidName);
        }
        Ok(Self {
            original: trimmed.to_string(),
            needle: trimmed.to_lowercase(),
        })
    }

    /// The name as given, trimmed.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The lower-cased name used for matching.
    pub fn normalized(&self) -> &str {
        &self.needle
    }

    /// Returns true if the cell is non-empty and contains the name.
    pub fn matches(&self, cell: &Cell) -> bool {
        !cell.is_empty() && cell.text().to_lowercase().contains(&self.needle)
    }
}

/// An unparsed shift found during scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftCandidate<'a> {
    /// Row of the matching cell.
    pub row: usize,
    /// Column of the matching cell.
    pub col: usize,
    /// The date header for the column, if the grid has one.
    pub date_cell: Option<&'a Cell>,
    /// The shift-time label for the row, if the grid has one.
    pub shift_time_cell: Option<&'a Cell>,
}

/// Options applied when resolving candidates into records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Fail on shifts whose end time precedes their start time.
    pub reject_negative_durations: bool,
}

/// Enumerates shift candidates column by column, top to bottom.
pub fn find_candidates<'a>(
    grid: &'a Grid,
    anchor: Anchor,
    name: &TargetName,
) -> Vec<ShiftCandidate<'a>> {
    let date_row = anchor.row + 1;
    let shift_col = anchor.col.checked_sub(1);

    let mut candidates = Vec::new();
    for col in anchor.col..grid.cols() {
        for row in date_row..grid.rows() {
            let Some(cell) = grid.get(row, col) else {
                continue;
            };
            if !name.matches(cell) {
                continue;
            }
            candidates.push(ShiftCandidate {
                row,
                col,
                date_cell: grid.get(date_row, col),
                shift_time_cell: shift_col.and_then(|c| grid.get(row, c)),
            });
        }
    }
    candidates
}

/// Resolves one candidate into a [`ShiftRecord`].
///
/// Real date cells are used as they are; text date cells go through
/// [`normalize_date`] with `reference` as "today".
pub fn resolve_candidate(
    sheet: &str,
    anchor: Anchor,
    candidate: &ShiftCandidate<'_>,
    reference: NaiveDate,
    options: ScanOptions,
) -> EngineResult<ShiftRecord> {
    let date_cell = candidate.date_cell.ok_or_else(|| EngineError::MissingCell {
        sheet: sheet.to_string(),
        what: "date",
        row: anchor.row + 1,
        col: candidate.col as isize,
    })?;
    let shift_time_cell = candidate
        .shift_time_cell
        .ok_or_else(|| EngineError::MissingCell {
            sheet: sheet.to_string(),
            what: "shift time",
            row: candidate.row,
            col: anchor.col as isize - 1,
        })?;

    let date = match date_cell {
        Cell::Date(dt) => dt.date(),
        other => normalize_date(&other.text(), reference)?,
    };

    let shift_time = shift_time_cell.text().into_owned();
    let parsed = parse_shift_time(shift_time.trim())?;

    let record = ShiftRecord {
        sheet: sheet.to_string(),
        date,
        shift_time,
        start_time: parsed.start,
        duration_hours: parsed.duration_hours,
    };

    if record.has_negative_duration() {
        if options.reject_negative_durations {
            return Err(EngineError::InvalidShift {
                date: record.formatted_date(),
                message: format!(
                    "shift '{}' ends before it starts",
                    record.shift_time
                ),
            });
        }
        warn!(
            sheet = %sheet,
            date = %record.formatted_date(),
            shift_time = %record.shift_time,
            duration_hours = record.duration_hours,
            "Shift ends before it starts, keeping negative duration"
        );
    }

    Ok(record)
}

/// Scans one grid for the target name and resolves every candidate.
///
/// Any date or shift-time failure aborts the scan: a malformed header
/// downstream of a valid anchor means the grid does not have the expected
/// layout.
pub fn scan_grid(
    sheet: &str,
    grid: &Grid,
    anchor: Anchor,
    name: &TargetName,
    reference: NaiveDate,
    options: ScanOptions,
) -> EngineResult<Vec<ShiftRecord>> {
    find_candidates(grid, anchor, name)
        .iter()
        .map(|candidate| {
            debug!(
                sheet = %sheet,
                row = candidate.row,
                col = candidate.col,
                "Found shift candidate"
            );
            resolve_candidate(sheet, anchor, candidate, reference, options)
        })
        .collect()
}
