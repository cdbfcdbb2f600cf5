//! A shared validator handle with lock-free reads and atomic settings swaps.

use crate::core::{FormValidator, RuleSettings, SettingsLoader};
use crate::error::{FormError, Result};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Shared access to a [`FormValidator`] whose settings can change at runtime.
///
/// Readers call [`get`](Self::get) and keep validating with the `Arc` they
/// got even while a reload swaps in a new validator. A failed reload leaves
/// the current validator in place.
///
/// # Examples
///
/// ```rust
/// use form_validator::prelude::*;
///
/// # fn example() -> Result<()> {
/// let handle = ValidatorHandle::new(FormValidator::new(RuleSettings::default())?);
/// assert!(handle.get().validate(Field::Age, "16").valid);
///
/// handle.update(RuleSettings { age_min: 18, ..RuleSettings::default() })?;
/// assert!(!handle.get().validate(Field::Age, "16").valid);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct ValidatorHandle {
    /// The current validator, wrapped in ArcSwap for atomic updates
    current: Arc<ArcSwap<FormValidator>>,
    /// Settings loader for reloading
    loader: Option<Arc<SettingsLoader>>,
}

impl ValidatorHandle {
    /// Create a handle around `validator`. The handle has no sources to reload from.
    pub fn new(validator: FormValidator) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(validator)),
            loader: None,
        }
    }

    /// Create a handle that can reload from `loader`.
    pub(crate) fn with_loader(validator: FormValidator, loader: SettingsLoader) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(validator)),
            loader: Some(Arc::new(loader)),
        }
    }

    /// Get a reference-counted handle to the current validator.
    ///
    /// This operation is lock-free. Readers never block writers or other readers.
    pub fn get(&self) -> Arc<FormValidator> {
        self.current.load_full()
    }

    /// Reload settings from the handle's sources and swap in a new validator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The handle was created with [`new`](Self::new) and has no sources
    /// - A source fails to load or deserialize
    /// - The new settings are inconsistent
    ///
    /// On error the current validator is kept.
    pub fn reload(&self) -> Result<()> {
        let loader = self.loader.as_ref().ok_or(FormError::NoLoader)?;

        let settings: RuleSettings = loader.load().inspect_err(|e| {
            tracing::debug!(error = %e, "settings reload failed, keeping current validator");
        })?;
        self.swap(settings)
    }

    /// Replace the settings directly, bypassing the sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are inconsistent. The current
    /// validator is kept in that case.
    pub fn update(&self, settings: RuleSettings) -> Result<()> {
        self.swap(settings)
    }

    fn swap(&self, settings: RuleSettings) -> Result<()> {
        let validator = FormValidator::new(settings).inspect_err(|e| {
            tracing::debug!(error = %e, "settings rejected, keeping current validator");
        })?;
        self.current.store(Arc::new(validator));
        tracing::debug!("validator settings swapped");
        Ok(())
    }

    /// Whether [`reload`](Self::reload) has sources to read from.
    pub fn can_reload(&self) -> bool {
        self.loader.is_some()
    }
}

impl Clone for ValidatorHandle {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            loader: self.loader.clone(),
        }
    }
}
