//! Crate-level error types.

use std::fmt;

/// Errors produced by the morphoviz crate.
#[derive(Debug)]
pub enum MorphovizError {
    /// A population references a component id that the registry does not
    /// know. The source model and its companion definitions disagree.
    UnknownComponent(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// JSON model document parsing/serialization failure.
    ModelParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MorphovizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownComponent(id) => {
                write!(f, "unknown component '{id}'")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ModelParse(msg) => write!(f, "model parse error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MorphovizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MorphovizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
