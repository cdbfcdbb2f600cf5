//! The form validator and its result types.

use crate::core::rules::{Patterns, RuleSet};
use crate::core::{Field, RuleSettings, Validate};
use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of applying all rules for one field to one value.
///
/// `message` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether every rule passed.
    pub valid: bool,
    /// The first failed rule's message, or empty.
    pub message: String,
    /// The first failed rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

impl ValidationResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
            error: None,
        }
    }

    /// A failing result carrying `error` and its message.
    pub fn fail(error: FieldError) -> Self {
        Self {
            valid: false,
            message: error.to_string(),
            error: Some(error),
        }
    }
}

impl From<std::result::Result<(), FieldError>> for ValidationResult {
    fn from(outcome: std::result::Result<(), FieldError>) -> Self {
        match outcome {
            Ok(()) => Self::ok(),
            Err(error) => Self::fail(error),
        }
    }
}

/// Raw values of the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    /// Value of the name field.
    pub name: String,
    /// Value of the email field.
    pub email: String,
    /// Value of the password field.
    pub password: String,
    /// Value of the age field.
    pub age: String,
}

impl FormValues {
    /// The value currently held for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Age => &self.age,
        }
    }

    /// Replace the value held for `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Age => &mut self.age,
        };
        *slot = value.into();
    }
}

/// Results for every field of one form, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    /// True iff every field is valid.
    pub all_valid: bool,
    /// Per-field results.
    pub results: BTreeMap<Field, ValidationResult>,
}

impl FormReport {
    /// The result for `field`.
    pub fn result(&self, field: Field) -> Option<&ValidationResult> {
        self.results.get(&field)
    }

    /// Fields whose result is invalid, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.results
            .iter()
            .filter(|(_, result)| !result.valid)
            .map(|(field, _)| *field)
            .collect()
    }
}

/// Validates form fields against ordered rule tables.
///
/// A validator holds no state besides its rules, so every call is a pure
/// function of the field and value passed in.
///
/// # Examples
///
/// ```rust
/// use form_validator::prelude::*;
///
/// # fn example() -> form_validator::error::Result<()> {
/// let validator = FormValidator::new(RuleSettings::default())?;
///
/// let result = validator.validate(Field::Password, "abcdefgh");
/// assert!(!result.valid);
/// assert_eq!(result.message, "Password must contain at least one uppercase letter");
///
/// assert!(validator.validate(Field::Age, "13").valid);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator {
    settings: RuleSettings,
    rule_sets: [RuleSet; 4],
    patterns: Patterns,
}

impl FormValidator {
    /// Create a validator from checked settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are inconsistent.
    pub fn new(settings: RuleSettings) -> Result<Self> {
        settings.validate()?;
        let patterns = Patterns::compile()?;
        let rule_sets = Field::ALL.map(|field| RuleSet::for_field(field, &settings));

        tracing::debug!(
            name_min_length = settings.name_min_length,
            password_min_length = settings.password_min_length,
            age_min = settings.age_min,
            age_max = settings.age_max,
            integer_age_only = settings.integer_age_only,
            "form validator ready"
        );

        Ok(Self {
            settings,
            rule_sets,
            patterns,
        })
    }

    /// The settings this validator was built from.
    pub fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    /// The ordered rules for `field`.
    pub fn rules(&self, field: Field) -> &RuleSet {
        // `Field::ALL` order matches the discriminants.
        &self.rule_sets[field as usize]
    }

    /// Validate one field value. Invalid input is a failing result, never an error.
    pub fn validate(&self, field: Field, value: &str) -> ValidationResult {
        let result = ValidationResult::from(self.rules(field).evaluate(value, &self.patterns));

        // Values are never logged: passwords pass through here.
        tracing::trace!(
            %field,
            valid = result.valid,
            kind = ?result.error.as_ref().map(FieldError::kind),
            "field validated"
        );
        result
    }

    /// Validate every field of `values`.
    pub fn validate_all(&self, values: &FormValues) -> FormReport {
        let results: BTreeMap<_, _> = Field::ALL
            .into_iter()
            .map(|field| (field, self.validate(field, values.get(field))))
            .collect();
        let all_valid = results.values().all(|result| result.valid);

        FormReport { all_valid, results }
    }
}
