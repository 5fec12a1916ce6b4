#![forbid(unsafe_code)]

/// Behaviour shared by every column kind.
pub trait Column {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);

    /// Number of rows, missing rows included.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn is_missing(&self, row: usize) -> bool;

    fn count_missing(&self) -> usize {
        (0..self.size()).filter(|&row| self.is_missing(row)).count()
    }

    /// A copy shifted down by `n` rows (up for negative `n`), named `"<name> lag(<n>)"`.
    ///
    /// Rows with no source row are missing; the size is unchanged.
    fn lag(&self, n: isize) -> Self
    where
        Self: Sized;
}

/// Raw access to packed date-time values.
///
/// This is the only capability the derived-column engine needs from a source column.
pub trait TemporalColumn: Column {
    /// The packed value at `row`, or [`crate::packed::datetime::MISSING`] when the row is
    /// missing or out of bounds. Never fails.
    fn packed_value(&self, row: usize) -> i64;
}

/// Output side of the derived-column protocol: allocate, then append one value per row.
pub trait AppendColumn: Column + Sized {
    /// The already-encoded value appended for a non-missing row.
    type Value;

    fn allocate(name: String, capacity: usize) -> Self;
    fn append_value(&mut self, value: Self::Value);
    fn append_missing(&mut self);
}

pub(crate) fn lag_name(name: &str, n: isize) -> String {
    format!("{name} lag({n})")
}

pub(crate) fn shifted<T: Clone>(values: &[T], n: isize, missing: T) -> Vec<T> {
    let len = values.len();
    (0..len)
        .map(|row| {
            (row as isize)
                .checked_sub(n)
                .and_then(|src| usize::try_from(src).ok())
                .and_then(|src| values.get(src))
                .cloned()
                .unwrap_or_else(|| missing.clone())
        })
        .collect()
}
