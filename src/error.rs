use std::fmt;

use thiserror::Error;

/// Which BMI form field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Height,
    Weight,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Height => write!(f, "height"),
            Field::Weight => write!(f, "weight"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    #[error("{0} is required")]
    MissingInput(Field),
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: Field, value: String },
    #[error("{field} must be greater than zero")]
    NotPositive { field: Field },
    #[error("these measurements do not give a usable BMI")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("unknown page: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("IntersectionObserver is not available")]
    ObserverUnavailable,
    #[error("reveal target is not mounted")]
    TargetMissing,
}
