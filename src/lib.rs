//! Shift Calendar Engine
//!
//! This crate extracts one person's work shifts from a roster workbook laid
//! out for humans (dates across the top, shift times down the side, names in
//! the cells) and turns them into calendar events.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod extraction;
pub mod models;
