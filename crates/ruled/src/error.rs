//! Error types for table construction and rendering.

use thiserror::Error;

/// Errors raised while building a table style or rendering a table.
///
/// Everything except [`TableError::NoData`] is a configuration error and is
/// reported when the style is built, never while formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A glyph, padding or fill field has the wrong shape or value.
    #[error("{field} {reason}, but {value}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// An alignment descriptor contains a letter other than l, r, c or n.
    #[error("invalid char in {field} descriptor {descriptor:?}: {letter:?}")]
    InvalidAlignment {
        field: &'static str,
        descriptor: String,
        letter: char,
    },

    /// An alignment sequence must hold one or two descriptors.
    #[error("align must be sequence of len 1 or 2, not {0}")]
    AlignmentArity(usize),

    /// A template does not have exactly seven lines.
    #[error("template must have 7 lines, not {0}")]
    TemplateLineCount(usize),

    /// A template line is not exactly seven characters long.
    #[error("template line is not 7 chars: {len} (line {line})")]
    TemplateLineWidth { line: usize, len: usize },

    /// No built-in border style has this name.
    #[error("unknown border style {0:?}")]
    UnknownBorderStyle(String),

    /// `format` was called before any grid was supplied.
    #[error("table has no data yet")]
    NoData,

    /// A style configuration document could not be deserialized.
    #[error("invalid style configuration: {0}")]
    Config(String),
}

impl TableError {
    pub(crate) fn field(
        field: &'static str,
        value: impl std::fmt::Debug,
        reason: impl Into<String>,
    ) -> Self {
        TableError::InvalidField {
            field,
            value: format!("{:?}", value),
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
