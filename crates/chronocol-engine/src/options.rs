use chronocol_columnar::{NumberFormatter, WeekDefinition};
use serde::{Deserialize, Serialize};

/// Settings applied by a [`crate::DateTimeMapper`].
///
/// Missing fields fall back to [`DeriveOptions::default`] when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriveOptions {
    /// Week numbering used by `week_of_year` and `year_week`.
    pub week_definition: WeekDefinition,
    /// Print formatter attached to integer-valued numeric outputs.
    pub integer_formatter: NumberFormatter,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            week_definition: WeekDefinition::ISO,
            integer_formatter: NumberFormatter::Ints,
        }
    }
}
