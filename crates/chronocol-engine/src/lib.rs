//! Derived-column engine for packed date-time columns.
//!
//! Every operation reads a source [`chronocol_columnar::TemporalColumn`] row by row and builds a
//! new column of the matching kind. Missing source rows stay missing and are never handed to a
//! transform.
//!
//! ```
//! use chrono::NaiveDate;
//! use chronocol_columnar::{Column, DateTimeColumn};
//! use chronocol_engine::DateTimeMapFunctions;
//!
//! let mut events = DateTimeColumn::create("events");
//! events.append(NaiveDate::from_ymd_opt(2020, 3, 5).unwrap().and_hms_opt(9, 5, 0).unwrap())?;
//! events.append_missing();
//!
//! let labels = events.derive().year_month();
//! assert_eq!(labels.name(), "events year & month");
//! assert_eq!(labels.get(0), Some("2020-03"));
//! assert_eq!(labels.get(1), None);
//! # Ok::<(), chronocol_columnar::PackError>(())
//! ```

#![forbid(unsafe_code)]

pub mod difference;
mod error;
mod mapper;
mod options;
mod unit;
pub mod window;

pub use crate::error::{TemporalError, TemporalResult};
pub use crate::mapper::{
    map_column, try_map_column, try_map_pairs, DateTimeMapFunctions, DateTimeMapper,
};
pub use crate::options::DeriveOptions;
pub use crate::unit::TemporalUnit;
