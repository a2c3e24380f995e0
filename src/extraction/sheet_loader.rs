//! Workbook loading.
//!
//! Turns raw `.xlsx` bytes into one [`Grid`] per visible worksheet, keyed by
//! canonical tab label. Tabs that are hidden, are not worksheets, cannot be
//! read, extend too far from `A1`, or carry a title that does not
//! canonicalise are skipped and
//! reported as [`SkippedTab`] values instead of failing the whole load.

use std::io::{Cursor, Read, Seek};

use calamine::{Data, Reader, Sheet, SheetType, SheetVisible, Xlsx, XlsxError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::EngineResult;
use crate::models::{Cell, Grid};

use super::tab_label::canonicalize_tab_title;

/// Why a tab did not produce a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The tab is hidden or very hidden.
    Hidden,
    /// The tab is a chart, dialog or macro sheet.
    NotAWorksheet,
    /// The tab title is not of the `AB-CD` digit form.
    InvalidTitle(String),
    /// The tab's cells could not be read.
    Unreadable(String),
    /// The tab's extent from `A1` exceeds [`MAX_GRID_CELLS`].
    TooLarge {
        /// Rows from `A1` to the last used cell.
        rows: usize,
        /// Columns from `A1` to the last used cell.
        cols: usize,
    },
}

/// Largest grid, in cells, a single tab may expand to.
pub const MAX_GRID_CELLS: usize = 1_000_000;

/// A tab that was left out of the loaded workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedTab {
    /// The raw tab title.
    pub title: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// The result of loading one tab.
#[derive(Debug, Clone, PartialEq)]
pub enum TabOutcome {
    /// The tab was read and labelled.
    Loaded {
        /// Canonical label of the tab.
        label: String,
        /// The tab's cells.
        grid: Grid,
    },
    /// The tab was skipped.
    Skipped(SkippedTab),
}

/// Grids of every loaded tab, in workbook order, plus the skipped tabs.
///
/// Labels are unique: inserting a grid under an existing label replaces the
/// earlier grid in place ("last wins", keeping the first tab's position).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookGrids {
    tabs: Vec<(String, Grid)>,
    skipped: Vec<SkippedTab>,
}

impl WorkbookGrids {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a grid, replacing any grid already stored under `label`.
    ///
    /// Returns the replaced grid, if any.
    pub fn insert(&mut self, label: impl Into<String>, grid: Grid) -> Option<Grid> {
        let label = label.into();
        match self.tabs.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => Some(std::mem::replace(slot, grid)),
            None => {
                self.tabs.push((label, grid));
                None
            }
        }
    }

    /// Records a skipped tab.
    pub fn record_skip(&mut self, skipped: SkippedTab) {
        self.skipped.push(skipped);
    }

    /// Returns the grid stored under `label`.
    pub fn get(&self, label: &str) -> Option<&Grid> {
        self.tabs
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, grid)| grid)
    }

    /// Iterates `(label, grid)` pairs in workbook order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Grid)> + '_ {
        self.tabs.iter().map(|(label, grid)| (label.as_str(), grid))
    }

    /// Returns the labels in workbook order.
    pub fn labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// Number of loaded grids.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns true if no grid was loaded.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tabs that were skipped, in workbook order.
    pub fn skipped(&self) -> &[SkippedTab] {
        &self.skipped
    }
}

/// Loads every visible worksheet of an `.xlsx` workbook.
///
/// # Errors
///
/// Returns [`EngineError::WorkbookUnreadable`](crate::error::EngineError::WorkbookUnreadable)
/// if the bytes are not a readable workbook. Individual tabs never fail
/// the load.
pub fn load_workbook(bytes: &[u8]) -> EngineResult<WorkbookGrids> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let sheets: Vec<Sheet> = workbook.sheets_metadata().to_vec();

    let mut grids = WorkbookGrids::new();
    for sheet in &sheets {
        match load_tab(&mut workbook, sheet) {
            TabOutcome::Loaded { label, grid } => {
                let (rows, cols) = grid.shape();
                info!(title = %sheet.name, label = %label, rows, cols, "Loaded sheet");
                if grids.insert(label.clone(), grid).is_some() {
                    warn!(title = %sheet.name, label = %label, "Sheet label collision, later sheet wins");
                }
            }
            TabOutcome::Skipped(skipped) => {
                match &skipped.reason {
                    SkipReason::Hidden => debug!(title = %skipped.title, "Skipping hidden sheet"),
                    reason => warn!(title = %skipped.title, reason = ?reason, "Skipping sheet"),
                }
                grids.record_skip(skipped);
            }
        }
    }

    Ok(grids)
}

fn load_tab<RS: Read + Seek>(workbook: &mut Xlsx<RS>, sheet: &Sheet) -> TabOutcome {
    let skip = |reason| {
        TabOutcome::Skipped(SkippedTab {
            title: sheet.name.clone(),
            reason,
        })
    };

    if sheet.visible != SheetVisible::Visible {
        return skip(SkipReason::Hidden);
    }
    if sheet.typ != SheetType::WorkSheet {
        return skip(SkipReason::NotAWorksheet);
    }

    let label = match canonicalize_tab_title(&sheet.name) {
        Ok(label) => label,
        Err(err) => return skip(SkipReason::InvalidTitle(err.to_string())),
    };

    let grid = read_cells(workbook, &sheet.name)
        .map_err(|err| SkipReason::Unreadable(err.to_string()))
        .and_then(|cells| grid_from_cells(&cells));

    match grid {
        Ok(grid) => TabOutcome::Loaded { label, grid },
        Err(reason) => skip(reason),
    }
}

/// Streams the non-empty cells of a worksheet with their absolute positions.
fn read_cells<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    name: &str,
) -> Result<Vec<(u32, u32, Data)>, XlsxError> {
    let mut reader = workbook.worksheet_cells_reader(name)?;
    let mut cells = Vec::new();
    while let Some(cell) = reader.next_cell()? {
        let value = Data::from(cell.get_value().clone());
        if value != Data::Empty {
            let (row, col) = cell.get_position();
            cells.push((row, col, value));
        }
    }
    Ok(cells)
}

/// Builds an absolute-coordinate grid from sparse cells.
///
/// Fails with [`SkipReason::TooLarge`] before allocating when the extent
/// from `A1` to the furthest cell exceeds [`MAX_GRID_CELLS`].
pub(crate) fn grid_from_cells(cells: &[(u32, u32, Data)]) -> Result<Grid, SkipReason> {
    if cells.is_empty() {
        return Ok(Grid::default());
    }

    let rows = cells.iter().map(|(r, _, _)| *r as usize).max().unwrap_or(0) + 1;
    let cols = cells.iter().map(|(_, c, _)| *c as usize).max().unwrap_or(0) + 1;
    if rows.saturating_mul(cols) > MAX_GRID_CELLS {
        return Err(SkipReason::TooLarge { rows, cols });
    }

    let mut grid = Grid::new(rows, cols);
    for (row, col, value) in cells {
        grid.set(*row as usize, *col as usize, cell_from_data(value));
    }
    Ok(grid)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) if dt.is_duration() => Cell::Number(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::Date)
            .unwrap_or(Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Text(s.clone())),
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
