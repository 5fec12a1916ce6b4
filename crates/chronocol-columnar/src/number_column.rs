#![forbid(unsafe_code)]

use crate::column::{lag_name, shifted, AppendColumn, Column};
use crate::format::NumberFormatter;

/// A column of `f64` values; `NaN` marks a missing row.
#[derive(Clone, Debug, Default)]
pub struct NumberColumn {
    name: String,
    data: Vec<f64>,
    formatter: NumberFormatter,
}

impl NumberColumn {
    pub const MISSING_VALUE: f64 = f64::NAN;

    pub fn create(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0)
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            data: Vec::with_capacity(capacity),
            formatter: NumberFormatter::default(),
        }
    }

    pub fn value_is_missing(value: f64) -> bool {
        value.is_nan()
    }

    /// Append a value; `NaN` is stored as missing.
    pub fn append(&mut self, value: f64) {
        self.data.push(value);
    }

    pub fn append_option(&mut self, value: Option<f64>) {
        self.data.push(value.unwrap_or(Self::MISSING_VALUE));
    }

    pub fn append_missing(&mut self) {
        self.data.push(Self::MISSING_VALUE);
    }

    pub fn get(&self, row: usize) -> Option<f64> {
        self.data.get(row).copied().filter(|v| !v.is_nan())
    }

    /// The value at `row` rendered with the column's print formatter.
    pub fn get_string(&self, row: usize) -> String {
        self.data
            .get(row)
            .map(|&v| self.formatter.format(v))
            .unwrap_or_default()
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.data.iter().map(|&v| (!v.is_nan()).then_some(v))
    }

    pub fn set_print_formatter(&mut self, formatter: NumberFormatter) {
        self.formatter = formatter;
    }

    pub fn print_formatter(&self) -> NumberFormatter {
        self.formatter
    }
}

impl PartialEq for NumberColumn {
    /// Missing rows compare equal to each other.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.formatter == other.formatter
            && self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }
}

impl Column for NumberColumn {
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
        self.data.get(row).map_or(true, |v| v.is_nan())
    }

    fn lag(&self, n: isize) -> Self {
        Self {
            name: lag_name(&self.name, n),
            data: shifted(&self.data, n, Self::MISSING_VALUE),
            formatter: self.formatter,
        }
    }
}

impl AppendColumn for NumberColumn {
    type Value = f64;

    fn allocate(name: String, capacity: usize) -> Self {
        Self::with_capacity(name, capacity)
    }

    fn append_value(&mut self, value: f64) {
        self.append(value);
    }

    fn append_missing(&mut self) {
        NumberColumn::append_missing(self);
    }
}
