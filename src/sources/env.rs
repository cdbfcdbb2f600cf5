//! Environment variable settings source.

use super::SettingsSource;
use crate::error::Result;
use config::Environment;
use std::collections::HashMap;

/// Environment variable settings source.
///
/// Reads variables named `<PREFIX>_<KEY>`, where `KEY` is a settings key in
/// any case. Values are parsed as numbers or booleans where possible.
///
/// # Examples
///
/// ```rust
/// use form_validator::sources::EnvSource;
///
/// // FORM_AGE_MIN=18 -> age_min = 18
/// let source = EnvSource::new("FORM");
/// ```
pub struct EnvSource {
    prefix: String,
    priority: i32,
}

impl EnvSource {
    /// Create a source for variables starting with `prefix`.
    ///
    /// The default priority of 300 puts it above files and custom sources.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            priority: 300,
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl SettingsSource for EnvSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        // Settings keys contain underscores, so no nesting separator is set.
        let variables = Environment::with_prefix(&self.prefix)
            .prefix_separator("_")
            .try_parsing(true);

        let values = config::Config::builder()
            .add_source(variables)
            .build()?
            .try_deserialize()?;
        Ok(values)
    }

    fn name(&self) -> String {
        format!("env:{}_*", self.prefix)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
