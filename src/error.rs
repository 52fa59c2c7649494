use crate::registry::parameter::ParameterKind;
use thiserror::Error;

/// Error types for the paramreg-rs library.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A category name was registered twice.
    #[error("Category '{0}' is already defined")]
    DuplicateCategory(String),

    /// A parameter name was registered twice, regardless of kind.
    #[error("Parameter '{0}' is already defined")]
    DuplicateParameter(String),

    /// A definition referenced a category that was never registered.
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    /// A set, get, or command-line flag referenced a name that was never defined.
    #[error("Unknown parameter: '{0}'")]
    UnknownParameter(String),

    /// A typed operation was applied to a parameter of a different kind.
    #[error("Parameter '{name}' has kind {actual}, not {requested}")]
    KindMismatch {
        name: String,
        requested: ParameterKind,
        actual: ParameterKind,
    },

    /// A definition's default value violates its own declared constraint.
    #[error("Invalid default for parameter '{name}': {reason}")]
    InvalidDefault { name: String, reason: String },

    /// A definition declared bounds with min greater than max.
    #[error("Invalid bounds for parameter '{name}': min ({min}) must not exceed max ({max})")]
    InvalidBounds {
        name: String,
        min: String,
        max: String,
    },

    /// A numeric value fell outside the parameter's inclusive bounds.
    #[error("Value {value} for parameter '{name}' is outside bounds [{min}, {max}]")]
    OutOfBounds {
        name: String,
        value: String,
        min: String,
        max: String,
    },

    /// A string value is not a member of the parameter's allow-list.
    #[error("Value '{value}' for parameter '{name}' is not allowed (allowed values: {allowed:?})")]
    ValueNotAllowed {
        name: String,
        value: String,
        allowed: Vec<String>,
    },

    /// A command-line value token could not be converted to the parameter's kind.
    #[error("Cannot parse '{value}' as a {kind} value for parameter '{name}'")]
    MalformedValue {
        name: String,
        value: String,
        kind: ParameterKind,
    },

    /// A command-line flag had no following value token.
    #[error("Missing value for flag '-{0}'")]
    MissingValue(String),

    /// A token appeared where a flag was expected but does not start with '-'.
    #[error("Expected a flag beginning with '-', found '{0}'")]
    NotAFlag(String),

    /// I/O error wrapper for reporting sinks.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for paramreg-rs operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
