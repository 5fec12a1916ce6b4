#![forbid(unsafe_code)]

use chrono::NaiveTime;

use crate::column::{lag_name, shifted, AppendColumn, Column};
use crate::packed::time as packed_time;

/// A column of packed times of day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeColumn {
    name: String,
    data: Vec<i32>,
}

impl TimeColumn {
    pub const MISSING_VALUE: i32 = packed_time::MISSING;

    pub fn create(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0)
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, value: NaiveTime) {
        self.data.push(packed_time::pack(value));
    }

    pub fn append_missing(&mut self) {
        self.data.push(Self::MISSING_VALUE);
    }

    /// Append an already packed time (or the sentinel) without validating it.
    pub fn append_internal(&mut self, packed: i32) {
        self.data.push(packed);
    }

    pub fn get(&self, row: usize) -> Option<NaiveTime> {
        self.data.get(row).copied().and_then(packed_time::unpack)
    }

    pub fn packed_value(&self, row: usize) -> i32 {
        self.data.get(row).copied().unwrap_or(Self::MISSING_VALUE)
    }

    pub fn packed_values(&self) -> &[i32] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<NaiveTime>> + '_ {
        self.data.iter().map(|&packed| packed_time::unpack(packed))
    }
}

impl Column for TimeColumn {
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
            .map_or(true, |&packed| packed_time::is_missing(packed))
    }

    fn lag(&self, n: isize) -> Self {
        Self {
            name: lag_name(&self.name, n),
            data: shifted(&self.data, n, Self::MISSING_VALUE),
        }
    }
}

impl AppendColumn for TimeColumn {
    type Value = i32;

    fn allocate(name: String, capacity: usize) -> Self {
        Self::with_capacity(name, capacity)
    }

    fn append_value(&mut self, value: i32) {
        self.append_internal(value);
    }

    fn append_missing(&mut self) {
        TimeColumn::append_missing(self);
    }
}
