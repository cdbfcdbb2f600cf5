//! Settings validation support.

use crate::error::SettingsValidationError;

/// Trait for checking that loaded settings are internally consistent.
///
/// Settings are checked before a validator is built from them and before a
/// reload replaces the validator behind a handle.
///
/// # Examples
///
/// ```rust
/// use form_validator::core::Validate;
/// use form_validator::error::SettingsValidationError;
///
/// struct Limits {
///     min: u32,
///     max: u32,
/// }
///
/// impl Validate for Limits {
///     fn validate(&self) -> Result<(), SettingsValidationError> {
///         if self.min > self.max {
///             return Err(SettingsValidationError::invalid_field(
///                 "min",
///                 "must not exceed max",
///             ));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validate {
    /// Validate the settings.
    ///
    /// # Errors
    ///
    /// Should return a `SettingsValidationError` describing what failed.
    fn validate(&self) -> Result<(), SettingsValidationError>;
}
