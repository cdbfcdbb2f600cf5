//! Thresholds the field rules are parameterized by.

use crate::core::Validate;
use crate::error::SettingsValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Numeric thresholds for the field rules.
///
/// Every key is optional when loading; missing keys keep their defaults,
/// which reproduce the stock form.
///
/// # Examples
///
/// ```rust
/// use form_validator::core::RuleSettings;
///
/// let settings = RuleSettings::default();
/// assert_eq!(settings.age_min, 13);
/// assert_eq!(settings.age_max, 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Minimum name length in UTF-16 code units, after trimming.
    pub name_min_length: usize,
    /// Minimum password length in UTF-16 code units.
    pub password_min_length: usize,
    /// Youngest accepted age.
    pub age_min: u32,
    /// Oldest accepted age.
    pub age_max: u32,
    /// Reject ages with a fractional part.
    pub integer_age_only: bool,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            name_min_length: 2,
            password_min_length: 8,
            age_min: 13,
            age_max: 120,
            integer_age_only: false,
        }
    }
}

impl RuleSettings {
    /// Flatten the settings into source values keyed like the settings file.
    ///
    /// Lengths beyond `i64::MAX` are clamped to it.
    pub(crate) fn to_values(&self) -> HashMap<String, config::Value> {
        HashMap::from([
            (
                "name_min_length".to_string(),
                config::Value::from(length_value(self.name_min_length)),
            ),
            (
                "password_min_length".to_string(),
                config::Value::from(length_value(self.password_min_length)),
            ),
            ("age_min".to_string(), config::Value::from(i64::from(self.age_min))),
            ("age_max".to_string(), config::Value::from(i64::from(self.age_max))),
            (
                "integer_age_only".to_string(),
                config::Value::from(self.integer_age_only),
            ),
        ])
    }
}

fn length_value(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

impl Validate for RuleSettings {
    fn validate(&self) -> Result<(), SettingsValidationError> {
        let mut errors = Vec::new();

        if self.name_min_length == 0 {
            errors.push(SettingsValidationError::invalid_field(
                "name_min_length",
                "must be at least 1",
            ));
        }

        if self.password_min_length == 0 {
            errors.push(SettingsValidationError::invalid_field(
                "password_min_length",
                "must be at least 1",
            ));
        }

        if self.age_min > self.age_max {
            errors.push(SettingsValidationError::invalid_field(
                "age_min",
                format!("must not exceed age_max ({})", self.age_max),
            ));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(SettingsValidationError::Multiple(errors)),
        }
    }
}
