//! Error types for form-validator.
//!
//! Two families live here. [`FieldError`] is the user-facing validation
//! taxonomy: its `Display` output is the exact message shown beside a form
//! field. [`FormError`] covers everything else (loading rule settings,
//! parsing identifiers) and never comes out of a validation call.

use crate::core::Field;
use serde::Serialize;
use std::fmt;

/// Result type alias for form-validator operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors that can occur outside of field validation itself.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Failed to load rule settings from a source.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// Failed to deserialize rule settings.
    #[error("Failed to deserialize settings: {0}")]
    DeserializationError(String),

    /// The `config` crate rejected a settings source.
    #[error("Invalid settings source: {0}")]
    Config(#[from] config::ConfigError),

    /// Rule settings were loaded but are inconsistent.
    #[error("Settings validation failed: {0}")]
    InvalidSettings(String),

    /// A built-in pattern failed to compile.
    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A field identifier did not name one of the form fields.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A counter button label did not name a counter action.
    #[error("Unknown counter action: {0}")]
    UnknownAction(String),

    /// The handle was created without sources and cannot reload.
    #[error("No loader available for reload")]
    NoLoader,
}

/// Validation error reported for inconsistent rule settings.
#[derive(Debug)]
pub enum SettingsValidationError {
    /// Custom validation error with a message.
    Custom(String),

    /// A specific setting has an invalid value.
    InvalidField {
        /// The setting key
        field: String,
        /// The reason why it's invalid
        reason: String,
    },

    /// Multiple validation errors occurred.
    Multiple(Vec<SettingsValidationError>),
}

impl SettingsValidationError {
    /// Create a custom validation error.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(msg) => write!(f, "{}", msg),
            Self::InvalidField { field, reason } => {
                write!(f, "Setting '{}' is invalid: {}", field, reason)
            }
            Self::Multiple(errors) => {
                writeln!(f, "Multiple validation errors:")?;
                for (i, err) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SettingsValidationError {}

impl From<SettingsValidationError> for FormError {
    fn from(err: SettingsValidationError) -> Self {
        FormError::InvalidSettings(err.to_string())
    }
}

/// The kind of a [`FieldError`], without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value was empty.
    EmptyValue,
    /// The value was shorter than the minimum length.
    TooShort,
    /// The value did not have the required shape.
    InvalidFormat,
    /// The value was not a number, or not a whole one when required.
    NotANumber,
    /// The number was outside the accepted range.
    OutOfRange,
}

/// A shape requirement checked by an [`FieldError::InvalidFormat`] rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Only ASCII letters and whitespace.
    LettersAndSpaces,
    /// `local@domain.tld` with no whitespace and a single `@`.
    EmailAddress,
    /// At least one ASCII uppercase letter.
    Uppercase,
    /// At least one ASCII digit.
    Digit,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LettersAndSpaces => "Name can only contain letters and spaces",
            Self::EmailAddress => "Please enter a valid email address",
            Self::Uppercase => "Password must contain at least one uppercase letter",
            Self::Digit => "Password must contain at least one number",
        })
    }
}

/// The kind of number a [`FieldError::NotANumber`] rule expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    /// Any finite or infinite number.
    Any,
    /// A finite number with no fractional part.
    Whole,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any => "a number",
            Self::Whole => "a whole number",
        })
    }
}

/// Which side of the accepted range a number fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// Below the minimum.
    Below {
        /// Smallest accepted value
        min: u32,
    },
    /// Above the maximum.
    Above {
        /// Largest accepted value
        max: u32,
    },
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below { min } => write!(f, "You must be at least {} years old", min),
            Self::Above { .. } => f.write_str("Please enter a valid age"),
        }
    }
}

/// A failed rule. `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    /// The field was left empty.
    #[error("{} is required", .field.label())]
    EmptyValue {
        /// The field that failed
        field: Field,
    },

    /// The value has fewer characters than required.
    #[error("{} must be at least {min} characters", .field.label())]
    TooShort {
        /// The field that failed
        field: Field,
        /// Minimum number of characters
        min: usize,
    },

    /// The value does not have the required shape.
    #[error("{expected}")]
    InvalidFormat {
        /// The field that failed
        field: Field,
        /// The shape that was expected
        expected: Format,
    },

    /// The value could not be read as a number of the required kind.
    #[error("{} must be {expected}", .field.label())]
    NotANumber {
        /// The field that failed
        field: Field,
        /// The kind of number that was expected
        expected: NumberKind,
    },

    /// The number is outside the accepted range.
    #[error("{bound}")]
    OutOfRange {
        /// The field that failed
        field: Field,
        /// The bound that was crossed
        bound: Bound,
    },
}

impl FieldError {
    /// The field this error was reported for.
    pub fn field(&self) -> Field {
        match self {
            Self::EmptyValue { field }
            | Self::TooShort { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::NotANumber { field, .. }
            | Self::OutOfRange { field, .. } => *field,
        }
    }

    /// The taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyValue { .. } => ErrorKind::EmptyValue,
            Self::TooShort { .. } => ErrorKind::TooShort,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
