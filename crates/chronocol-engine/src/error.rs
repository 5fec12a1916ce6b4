use chronocol_columnar::PackError;
use thiserror::Error;

use crate::unit::TemporalUnit;

pub type TemporalResult<T> = Result<T, TemporalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalError {
    #[error("the unit {unit} is not supported by {operation}")]
    UnsupportedUnit {
        unit: TemporalUnit,
        operation: &'static str,
    },

    #[error("column length mismatch: {left} rows vs {right} rows")]
    LengthMismatch { left: usize, right: usize },

    #[error("time windows must span at least one unit, got {0}")]
    InvalidWindowSize(i64),

    #[error(transparent)]
    Pack(#[from] PackError),
}
