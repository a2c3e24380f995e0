//! Anchor location.
//!
//! The anchor is the single cell reading `Sunday` (in any letter case). It
//! marks the corner of the roster: dates run along the row beneath it and
//! shift-time labels run down the column to its left.

use serde::{Deserialize, Serialize};

use crate::models::Grid;

/// The literal anchor token, lower-cased.
pub const ANCHOR_TOKEN: &str = "sunday";

/// Position of the anchor cell within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

/// Finds the first cell, in row-major order, whose text equals `sunday`
/// ignoring case.
///
/// Returns `None` when the grid has no such cell; the grid then contributes
/// no shifts.
///
/// # Example
///
/// ```
/// use shift_calendar::extraction::{find_anchor, Anchor};
/// use shift_calendar::models::Grid;
///
/// let grid = Grid::from_text_rows(&[&["", ""], &["", "SUNDAY"]]);
/// assert_eq!(find_anchor(&grid), Some(Anchor { row: 1, col: 1 }));
/// ```
pub fn find_anchor(grid: &Grid) -> Option<Anchor> {
    grid.iter()
        .find(|(_, _, cell)| cell.text().to_lowercase() == ANCHOR_TOKEN)
        .map(|(row, col, _)| Anchor { row, col })
}
