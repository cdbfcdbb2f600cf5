//! File-based settings source.

use super::SettingsSource;
use crate::error::{FormError, Result};
use config::File;
use std::collections::HashMap;
use std::path::PathBuf;

/// File-based settings source.
///
/// Loads rule settings from YAML, TOML, or JSON files, picking the format
/// from the file extension. Each format is available when the cargo feature
/// of the same name is enabled (all three are by default).
///
/// # Examples
///
/// ```rust,no_run
/// use form_validator::sources::FileSource;
///
/// let source = FileSource::new("settings/form.yaml");
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
}

impl FileSource {
    /// Create a new file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: 100,
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the extension names a format enabled at compile time.
    fn has_enabled_format(&self) -> bool {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => true,
            #[cfg(feature = "toml")]
            Some("toml") => true,
            #[cfg(feature = "json")]
            Some("json") => true,
            _ => false,
        }
    }
}

impl SettingsSource for FileSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        if !self.has_enabled_format() {
            return Err(FormError::LoadError(format!(
                "no enabled settings format for {}",
                self.path.display()
            )));
        }
        if !self.path.exists() {
            return Err(FormError::LoadError(format!(
                "{} does not exist",
                self.path.display()
            )));
        }

        let values = config::Config::builder()
            .add_source(File::from(self.path.as_path()))
            .build()?
            .try_deserialize()?;
        Ok(values)
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
