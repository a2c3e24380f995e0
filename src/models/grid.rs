//! Grid model for one roster tab.
//!
//! A [`Grid`] is the rectangular, zero-indexed cell matrix of a single
//! visible worksheet. Coordinates are absolute sheet coordinates, so `A1`
//! is always `(0, 0)` regardless of where the used range begins.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The value of a single grid cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// No value.
    #[default]
    Empty,
    /// Free-form text.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A real date (or date-time) value.
    Date(NaiveDateTime),
}

impl Cell {
    /// Returns true if the cell holds no value or only whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calendar::models::Cell;
    ///
    /// assert!(Cell::Empty.is_empty());
    /// assert!(Cell::Text("  ".to_string()).is_empty());
    /// assert!(!Cell::Number(0.0).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Date(_) => false,
        }
    }

    /// Renders the cell as text.
    ///
    /// Integral numbers are rendered without a fractional part.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calendar::models::Cell;
    ///
    /// assert_eq!(Cell::Number(5.0).text(), "5");
    /// assert_eq!(Cell::Number(7.5).text(), "7.5");
    /// assert_eq!(Cell::Empty.text(), "");
    /// ```
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Cell::Empty => Cow::Borrowed(""),
            Cell::Text(s) => Cow::Borrowed(s.as_str()),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Cow::Owned(format!("{}", *n as i64))
            }
            Cell::Number(n) => Cow::Owned(n.to_string()),
            Cell::Date(dt) => Cow::Owned(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// One tab's cell contents as a rectangular 2-D array.
///
/// Grids are immutable once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Builds a grid from rows of cells, padding short rows with empty cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calendar::models::{Cell, Grid};
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec![Cell::from("a")],
    ///     vec![Cell::from("b"), Cell::from("c")],
    /// ]);
    /// assert_eq!(grid.shape(), (2, 2));
    /// assert_eq!(grid.get(0, 1), Some(&Cell::Empty));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                grid.cells[r * cols + c] = cell;
            }
        }
        grid
    }

    /// Builds a grid of text cells; empty strings become empty cells.
    pub fn from_text_rows(rows: &[&[&str]]) -> Self {
        Self::from_rows(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|s| if s.is_empty() { Cell::Empty } else { Cell::from(*s) })
                        .collect()
                })
                .collect(),
        )
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }
}
