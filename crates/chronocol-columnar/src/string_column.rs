#![forbid(unsafe_code)]

use crate::column::{lag_name, shifted, AppendColumn, Column};

/// A column of text values; the empty string marks a missing row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringColumn {
    name: String,
    data: Vec<String>,
}

impl StringColumn {
    pub const MISSING_VALUE: &'static str = "";

    pub fn create(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0)
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, value: impl Into<String>) {
        self.data.push(value.into());
    }

    pub fn append_missing(&mut self) {
        self.data.push(String::from(Self::MISSING_VALUE));
    }

    pub fn get(&self, row: usize) -> Option<&str> {
        self.data
            .get(row)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn values(&self) -> &[String] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.data
            .iter()
            .map(|s| (!s.is_empty()).then_some(s.as_str()))
    }
}

impl Column for StringColumn {
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
        self.data.get(row).map_or(true, String::is_empty)
    }

    fn lag(&self, n: isize) -> Self {
        Self {
            name: lag_name(&self.name, n),
            data: shifted(&self.data, n, String::from(Self::MISSING_VALUE)),
        }
    }
}

impl AppendColumn for StringColumn {
    type Value = String;

    fn allocate(name: String, capacity: usize) -> Self {
        Self::with_capacity(name, capacity)
    }

    fn append_value(&mut self, value: String) {
        self.append(value);
    }

    fn append_missing(&mut self) {
        StringColumn::append_missing(self);
    }
}
