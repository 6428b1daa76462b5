use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidColor(String),
    InvalidFontSize(String),
    InvalidFlag(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidColor(raw) => {
                write!(f, "invalid color: {raw:?}")
            }
            ModelError::InvalidFontSize(raw) => {
                write!(f, "invalid font size: {raw:?}")
            }
            ModelError::InvalidFlag(raw) => {
                write!(f, "invalid boolean flag: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
