//! Settings loader that merges multiple sources.

use crate::error::{FormError, Result};
use crate::sources::SettingsSource;
use serde::de::DeserializeOwned;

/// Loads and merges settings from multiple sources.
///
/// The loader handles precedence by sorting sources by priority and merging them
/// in order (lower priority first, higher priority sources override).
pub struct SettingsLoader {
    sources: Vec<Box<dyn SettingsSource>>,
}

impl SettingsLoader {
    /// Create a new settings loader.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a settings source.
    pub fn add_source(&mut self, source: Box<dyn SettingsSource>) {
        self.sources.push(source);
    }

    /// Load and merge settings from all sources.
    ///
    /// With no sources the target's default is returned.
    ///
    /// # Errors
    ///
    /// Returns the first source error unchanged. Merging failures are
    /// [`FormError::Config`], and merged values that do not fit `T` are
    /// [`FormError::DeserializationError`].
    pub fn load<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.sources.is_empty() {
            tracing::debug!("no settings sources, using defaults");
            return Ok(T::default());
        }

        let mut builder = config::Config::builder();
        for source in self.sorted_sources() {
            let values = source.load().inspect_err(|e| {
                tracing::debug!(source = %source.name(), error = %e, "settings source failed");
            })?;
            tracing::debug!(source = %source.name(), keys = values.len(), "merging settings source");

            for (key, value) in values {
                builder = builder.set_override(&key, value)?;
            }
        }

        builder
            .build()?
            .try_deserialize()
            .map_err(|e| FormError::DeserializationError(e.to_string()))
    }

    /// Get the list of source names in priority order.
    pub fn source_names(&self) -> Vec<String> {
        self.sorted_sources().iter().map(|s| s.name()).collect()
    }

    fn sorted_sources(&self) -> Vec<&dyn SettingsSource> {
        let mut sorted: Vec<&dyn SettingsSource> =
            self.sources.iter().map(|s| s.as_ref()).collect();
        // Stable: equal priorities keep insertion order.
        sorted.sort_by_key(|s| s.priority());
        sorted
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
