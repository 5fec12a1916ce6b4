#![forbid(unsafe_code)]

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::column::TemporalColumn;
use crate::packed::datetime as packed_datetime;

/// Single-pass summary of a temporal column.
///
/// `min`/`max` hold packed values; they are `None` when the column has no non-missing row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnStats {
    pub row_count: usize,
    pub missing_count: usize,
    pub distinct_count: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl ColumnStats {
    pub fn compute<C: TemporalColumn + ?Sized>(column: &C) -> Self {
        let mut stats = Self {
            row_count: column.size(),
            ..Self::default()
        };
        let mut distinct = HashSet::new();
        for row in 0..column.size() {
            let packed = column.packed_value(row);
            if packed_datetime::is_missing(packed) {
                stats.missing_count += 1;
                continue;
            }
            distinct.insert(packed);
            // Packed order is chronological order.
            stats.min = Some(stats.min.map_or(packed, |m| m.min(packed)));
            stats.max = Some(stats.max.map_or(packed, |m| m.max(packed)));
        }
        stats.distinct_count = distinct.len();
        stats
    }

    pub fn min_datetime(&self) -> Option<NaiveDateTime> {
        self.min.and_then(packed_datetime::unpack)
    }

    pub fn max_datetime(&self) -> Option<NaiveDateTime> {
        self.max.and_then(packed_datetime::unpack)
    }
}
