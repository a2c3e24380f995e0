//! Shift extraction for roster workbooks.
//!
//! This module contains the extraction pipeline, leaves first: tab label
//! canonicalization, workbook loading, anchor location, date normalization,
//! shift-time parsing, grid scanning, and the [`ShiftExtractor`] entry point
//! that runs them in order.

mod anchor;
mod date_normalizer;
mod extractor;
mod scanner;
mod sheet_loader;
mod shift_time;
mod tab_label;

pub use anchor::{ANCHOR_TOKEN, Anchor, find_anchor};
pub use date_normalizer::{MONTH_ABBREVIATIONS, infer_year, month_number, normalize_date};
pub use extractor::{Extraction, ShiftExtractor, find_shifts};
pub use scanner::{
    ScanOptions, ShiftCandidate, TargetName, find_candidates, resolve_candidate, scan_grid,
};
pub use sheet_loader::{
    MAX_GRID_CELLS, SkipReason, SkippedTab, TabOutcome, WorkbookGrids, load_workbook,
};
pub use shift_time::{ShiftTime, parse_shift_time};
pub use tab_label::{DEFAULT_DENOMINATOR, TabTitleError, canonicalize_tab_title};
