use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar units understood by difference and window operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalUnit {
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl TemporalUnit {
    /// Exact length in milliseconds for units measured on the clock.
    pub fn millis(self) -> Option<i64> {
        match self {
            Self::Millis => Some(1),
            Self::Seconds => Some(1_000),
            Self::Minutes => Some(60_000),
            Self::Hours => Some(3_600_000),
            Self::HalfDays => Some(43_200_000),
            _ => None,
        }
    }

    pub fn is_time_based(self) -> bool {
        self.millis().is_some()
    }

    pub fn is_date_based(self) -> bool {
        !self.is_time_based()
    }
}

impl fmt::Display for TemporalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Millis => "Millis",
            Self::Seconds => "Seconds",
            Self::Minutes => "Minutes",
            Self::Hours => "Hours",
            Self::HalfDays => "HalfDays",
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
            Self::Decades => "Decades",
            Self::Centuries => "Centuries",
            Self::Millennia => "Millennia",
        };
        f.write_str(name)
    }
}
