#![allow(dead_code)]

use chrono::NaiveDateTime;
use chronocol_columnar::DateTimeColumn;

pub fn dt(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").unwrap()
}

/// Build a date-time column; `None` rows are missing.
pub fn column(name: &str, values: &[Option<&str>]) -> DateTimeColumn {
    DateTimeColumn::from_values(name, values.iter().map(|v| v.map(dt))).unwrap()
}

pub fn numbers(column: &chronocol_columnar::NumberColumn) -> Vec<Option<f64>> {
    column.iter().collect()
}

pub fn strings(column: &chronocol_columnar::StringColumn) -> Vec<Option<String>> {
    column.iter().map(|v| v.map(str::to_string)).collect()
}
