//! Core data models for the shift calendar engine.
//!
//! This module contains the grid representation of a roster tab and the
//! shift record produced by extraction.

mod grid;
mod shift;

pub use grid::{Cell, Grid};
pub use shift::ShiftRecord;
