#![forbid(unsafe_code)]

use chrono::NaiveDateTime;

use crate::column::{lag_name, shifted, AppendColumn, Column, TemporalColumn};
use crate::packed::{datetime as packed_datetime, PackError};
use crate::stats::ColumnStats;

/// A column of packed date-times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateTimeColumn {
    name: String,
    data: Vec<i64>,
}

impl DateTimeColumn {
    pub const MISSING_VALUE: i64 = packed_datetime::MISSING;

    pub fn create(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0)
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            data: Vec::with_capacity(capacity),
        }
    }

    /// Build a column from optional values, packing each one.
    pub fn from_values<I>(name: impl Into<String>, values: I) -> Result<Self, PackError>
    where
        I: IntoIterator<Item = Option<NaiveDateTime>>,
    {
        let values = values.into_iter();
        let mut column = Self::with_capacity(name, values.size_hint().0);
        for value in values {
            column.append_option(value)?;
        }
        Ok(column)
    }

    pub fn value_is_missing(packed: i64) -> bool {
        packed_datetime::is_missing(packed)
    }

    pub fn append(&mut self, value: NaiveDateTime) -> Result<(), PackError> {
        self.data.push(packed_datetime::pack(value)?);
        Ok(())
    }

    pub fn append_option(&mut self, value: Option<NaiveDateTime>) -> Result<(), PackError> {
        match value {
            Some(value) => self.append(value),
            None => {
                self.append_missing();
                Ok(())
            }
        }
    }

    pub fn append_missing(&mut self) {
        self.data.push(Self::MISSING_VALUE);
    }

    /// Append a value that is already packed (or the sentinel) without validating it.
    pub fn append_internal(&mut self, packed: i64) {
        self.data.push(packed);
    }

    pub fn get(&self, row: usize) -> Option<NaiveDateTime> {
        self.data.get(row).copied().and_then(packed_datetime::unpack)
    }

    pub fn packed_values(&self) -> &[i64] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<NaiveDateTime>> + '_ {
        self.data.iter().map(|&packed| packed_datetime::unpack(packed))
    }

    pub fn stats(&self) -> ColumnStats {
        ColumnStats::compute(self)
    }

    /// Earliest non-missing value.
    pub fn min(&self) -> Option<NaiveDateTime> {
        self.min_packed().and_then(packed_datetime::unpack)
    }

    /// Latest non-missing value.
    pub fn max(&self) -> Option<NaiveDateTime> {
        self.data
            .iter()
            .copied()
            .filter(|&packed| !packed_datetime::is_missing(packed))
            .max()
            .and_then(packed_datetime::unpack)
    }

    pub fn min_packed(&self) -> Option<i64> {
        self.data
            .iter()
            .copied()
            .filter(|&packed| !packed_datetime::is_missing(packed))
            .min()
    }
}

impl Column for DateTimeColumn {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn is_missing(&self, row: usize) -> bool {
        self.data
            .get(row)
            .map_or(true, |&packed| packed_datetime::is_missing(packed))
    }

    fn lag(&self, n: isize) -> Self {
        Self {
            name: lag_name(&self.name, n),
            data: shifted(&self.data, n, Self::MISSING_VALUE),
        }
    }
}

impl TemporalColumn for DateTimeColumn {
    fn packed_value(&self, row: usize) -> i64 {
        self.data.get(row).copied().unwrap_or(Self::MISSING_VALUE)
    }
}

impl AppendColumn for DateTimeColumn {
    type Value = i64;

    fn allocate(name: String, capacity: usize) -> Self {
        Self::with_capacity(name, capacity)
    }

    fn append_value(&mut self, value: i64) {
        self.append_internal(value);
    }

    fn append_missing(&mut self) {
        DateTimeColumn::append_missing(self);
    }
}
