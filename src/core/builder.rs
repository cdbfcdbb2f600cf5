//! Builder for constructing FormValidator instances.

use crate::core::{FormValidator, RuleSettings, SettingsLoader, ValidatorHandle};
use crate::error::Result;
use crate::sources::{EnvSource, FileSource, SettingsSource, StaticSource};
use std::path::PathBuf;

/// Builder for constructing a [`FormValidator`] or [`ValidatorHandle`].
///
/// Settings are layered lowest to highest: explicit base settings, files in
/// the order given, custom sources at their own priority, then environment
/// variables.
///
/// # Examples
///
/// ```rust,no_run
/// use form_validator::prelude::*;
///
/// # fn example() -> Result<()> {
/// let validator = FormValidator::builder()
///     .with_file("settings/form.yaml")
///     .with_env_overrides("FORM")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct FormValidatorBuilder {
    file_paths: Vec<PathBuf>,
    env_prefix: Option<String>,
    custom_sources: Vec<Box<dyn SettingsSource>>,
    base_settings: Option<RuleSettings>,
}

impl FormValidatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            file_paths: Vec::new(),
            env_prefix: None,
            custom_sources: Vec::new(),
            base_settings: None,
        }
    }

    /// Add a settings file. Later files override earlier ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push(path.into());
        self
    }

    /// Read overrides from environment variables named `<prefix>_<KEY>`.
    ///
    /// ```rust,no_run
    /// use form_validator::prelude::*;
    ///
    /// // FORM_AGE_MIN=18 -> age_min = 18
    /// let builder = FormValidator::builder().with_env_overrides("FORM");
    /// ```
    pub fn with_env_overrides(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Add a custom settings source.
    pub fn with_source<S: SettingsSource + 'static>(mut self, source: S) -> Self {
        self.custom_sources.push(Box::new(source));
        self
    }

    /// Start from `settings` instead of the built-in defaults.
    pub fn with_settings(mut self, settings: RuleSettings) -> Self {
        self.base_settings = Some(settings);
        self
    }

    /// Load, check, and build a validator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A settings source fails to load
    /// - Deserialization fails
    /// - The merged settings are inconsistent
    pub fn build(self) -> Result<FormValidator> {
        let loader = self.into_loader();
        FormValidator::new(loader.load()?)
    }

    /// Like [`build`](Self::build), but return a handle that can reload
    /// from the same sources later.
    ///
    /// # Errors
    ///
    /// Same conditions as [`build`](Self::build).
    pub fn build_handle(self) -> Result<ValidatorHandle> {
        let loader = self.into_loader();
        let validator = FormValidator::new(loader.load()?)?;
        Ok(ValidatorHandle::with_loader(validator, loader))
    }

    fn into_loader(self) -> SettingsLoader {
        let mut loader = SettingsLoader::new();

        if let Some(settings) = self.base_settings {
            loader.add_source(Box::new(StaticSource::new(settings)));
        }

        // Add file sources with increasing priority
        for (index, path) in self.file_paths.iter().enumerate() {
            let priority = 100 + (index as i32 * 10); // 100, 110, 120, etc.
            loader.add_source(Box::new(FileSource::new(path).with_priority(priority)));
        }

        for source in self.custom_sources {
            loader.add_source(source);
        }

        if let Some(prefix) = self.env_prefix {
            loader.add_source(Box::new(EnvSource::new(prefix)));
        }

        tracing::debug!(sources = ?loader.source_names(), "settings sources configured");
        loader
    }
}

impl Default for FormValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    /// Create a new builder for constructing a validator.
    pub fn builder() -> FormValidatorBuilder {
        FormValidatorBuilder::new()
    }
}
