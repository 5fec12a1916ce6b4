#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Display hint attached to a [`crate::NumberColumn`].
///
/// Formatting is purely presentational; stored values are never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormatter {
    /// Shortest representation that round-trips the `f64`.
    #[default]
    Standard,
    /// Rounded to a whole number, no fractional digits.
    Ints,
    /// A fixed number of fractional digits.
    Fixed(u8),
}

impl NumberFormatter {
    pub fn ints() -> Self {
        Self::Ints
    }

    /// Format a stored value. Missing values (`NaN`) render as an empty string.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return String::new();
        }
        match self {
            Self::Standard => value.to_string(),
            Self::Ints => format!("{value:.0}"),
            Self::Fixed(digits) => format!("{value:.prec$}", prec = usize::from(*digits)),
        }
    }
}
