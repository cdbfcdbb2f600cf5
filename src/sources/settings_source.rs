//! Settings source trait.

use crate::error::Result;
use std::collections::HashMap;

/// Trait for rule settings sources.
///
/// Implement this trait to feed settings from somewhere other than files or
/// the environment (a database row, a feature-flag service, a test fixture).
pub trait SettingsSource: Send + Sync {
    /// Load settings as a raw key-value map.
    ///
    /// The returned map will be merged with other sources according to precedence rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or parsed.
    fn load(&self) -> Result<HashMap<String, config::Value>>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;

    /// Get the priority of this source (higher = takes precedence).
    ///
    /// Default priorities:
    /// - Environment variables: 300
    /// - Files: 100, 110, 120, ... in the order they were added
    /// - Explicit base settings: 0
    fn priority(&self) -> i32 {
        100
    }
}
