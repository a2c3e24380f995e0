//! Extraction entry points.
//!
//! [`ShiftExtractor`] ties the pipeline together: load the workbook, find
//! each grid's anchor, scan for the target name, and resolve every match
//! into a [`ShiftRecord`]. It holds only configuration, so one extractor
//! can serve any number of independent calls.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::calendar::{build_events, render_ics};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

use super::anchor::find_anchor;
use super::scanner::{ScanOptions, TargetName, scan_grid};
use super::sheet_loader::{SkippedTab, WorkbookGrids, load_workbook};

/// The outcome of extracting one workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    /// Shifts in grid order, then discovery order within each grid.
    pub records: Vec<ShiftRecord>,
    /// Tabs that were not loaded, with reasons.
    pub skipped_tabs: Vec<SkippedTab>,
    /// Number of grids that had an anchor and were scanned.
    pub sheets_scanned: usize,
}

/// Finds every shift for `name` across all grids.
///
/// Grids without an anchor are skipped. Returns the records and the number
/// of grids that were scanned.
pub fn find_shifts(
    grids: &WorkbookGrids,
    name: &TargetName,
    reference: NaiveDate,
    options: ScanOptions,
) -> EngineResult<(Vec<ShiftRecord>, usize)> {
    let mut records = Vec::new();
    let mut scanned = 0;

    for (label, grid) in grids.iter() {
        let Some(anchor) = find_anchor(grid) else {
            debug!(sheet = %label, "No anchor found, skipping sheet");
            continue;
        };
        scanned += 1;

        let found = scan_grid(label, grid, anchor, name, reference, options)?;
        debug!(sheet = %label, row = anchor.row, col = anchor.col, shifts = found.len(), "Scanned sheet");
        records.extend(found);
    }

    Ok((records, scanned))
}

/// Extracts shift records from roster workbooks.
///
/// # Example
///
/// ```no_run
/// use shift_calendar::config::EngineConfig;
/// use shift_calendar::extraction::ShiftExtractor;
/// use chrono::NaiveDate;
///
/// let extractor = ShiftExtractor::new(EngineConfig::default())?;
/// let bytes = std::fs::read("roster.xlsx").unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
/// let extraction = extractor.extract(&bytes, "Alex", today)?;
/// for shift in &extraction.records {
///     println!("{} {} ({}h)", shift.formatted_date(), shift.formatted_start(), shift.duration_hours);
/// }
/// # Ok::<(), shift_calendar::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShiftExtractor {
    config: EngineConfig,
}

impl ShiftExtractor {
    /// Creates an extractor, validating the configuration.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            reject_negative_durations: self.config.reject_negative_durations,
        }
    }

    /// Extracts every shift for `name` from workbook bytes.
    ///
    /// `reference` stands in for "today" when inferring years.
    ///
    /// # Errors
    ///
    /// Fails if the name is blank, the workbook is unreadable, or any
    /// matching cell has a malformed date or shift-time header. Finding no
    /// shifts is not an error here.
    pub fn extract(&self, bytes: &[u8], name: &str, reference: NaiveDate) -> EngineResult<Extraction> {
        self.extract_for(bytes, &TargetName::new(name)?, reference)
    }

    fn extract_for(
        &self,
        bytes: &[u8],
        name: &TargetName,
        reference: NaiveDate,
    ) -> EngineResult<Extraction> {
        let grids = load_workbook(bytes)?;
        let (records, sheets_scanned) = find_shifts(&grids, name, reference, self.scan_options())?;

        info!(
            name = %name.as_str(),
            sheets_loaded = grids.len(),
            sheets_skipped = grids.skipped().len(),
            sheets_scanned,
            shifts = records.len(),
            "Extraction complete"
        );

        Ok(Extraction {
            records,
            skipped_tabs: grids.skipped().to_vec(),
            sheets_scanned,
        })
    }

    /// Extracts shifts and renders them as an iCalendar document.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`extract`](Self::extract), returns
    /// [`EngineError::NoShiftsFound`] when nothing matched and
    /// `require_shifts` is set.
    pub fn to_calendar(
        &self,
        bytes: &[u8],
        name: &str,
        reference: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> EngineResult<String> {
        let target = TargetName::new(name)?;
        let extraction = self.extract_for(bytes, &target, reference)?;

        if extraction.records.is_empty() && self.config.require_shifts {
            return Err(EngineError::NoShiftsFound {
                name: target.as_str().to_string(),
            });
        }

        let events = build_events(&extraction.records, &target, &self.config)?;
        Ok(render_ics(&events, generated_at))
    }
}
