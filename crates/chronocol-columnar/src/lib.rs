//! Compact columnar storage for temporal values.
//!
//! This crate focuses on:
//! - Packed integer encodings for dates, times and date-times, with an all-ones missing sentinel.
//! - Allocation-free component extractors that read calendar fields straight from packed values.
//! - The column kinds (date-time, date, time, number, string) that derived-column operations
//!   read from and write into.

#![forbid(unsafe_code)]

mod column;
mod date_column;
mod datetime_column;
mod format;
mod number_column;
pub mod packed;
mod stats;
mod string_column;
mod time_column;

pub use crate::column::{AppendColumn, Column, TemporalColumn};
pub use crate::date_column::DateColumn;
pub use crate::datetime_column::DateTimeColumn;
pub use crate::format::NumberFormatter;
pub use crate::number_column::NumberColumn;
pub use crate::packed::{PackError, WeekDefinition};
pub use crate::stats::ColumnStats;
pub use crate::string_column::StringColumn;
pub use crate::time_column::TimeColumn;
