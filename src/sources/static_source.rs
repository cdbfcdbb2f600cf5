//! Fixed in-memory settings source.

use super::SettingsSource;
use crate::core::RuleSettings;
use crate::error::Result;
use std::collections::HashMap;

/// A source that always yields the same settings.
///
/// Used as the base layer when a builder is given explicit settings, so
/// files and environment variables can still override individual keys.
pub struct StaticSource {
    settings: RuleSettings,
    priority: i32,
}

impl StaticSource {
    /// Create a source for `settings` with priority 0.
    pub fn new(settings: RuleSettings) -> Self {
        Self {
            settings,
            priority: 0,
        }
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl SettingsSource for StaticSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        Ok(self.settings.to_values())
    }

    fn name(&self) -> String {
        "static".to_string()
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
