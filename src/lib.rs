//! # form-validator
//!
//! Ordered, first-failure validation for signup-style forms.
//!
//! ## Overview
//!
//! `form-validator` checks the four fields of a signup form (name, email,
//! password, age). It provides:
//! - Ordered rule tables per field, where the first failing rule's message
//!   is reported
//! - A pure, side-effect-free [`FormValidator`](core::FormValidator) that
//!   never errors on bad input
//! - Rule thresholds loaded from files and environment variables
//! - A lock-free [`ValidatorHandle`](core::ValidatorHandle) whose settings
//!   can be reloaded at runtime
//! - Presentation state ([`FormSession`](state::FormSession),
//!   [`Counter`](state::Counter)) that changes only through explicit
//!   transitions
//!
//! ## Quick Start
//!
//! ```rust
//! use form_validator::prelude::*;
//!
//! # fn example() -> form_validator::error::Result<()> {
//! let validator = FormValidator::builder().build()?;
//!
//! let result = validator.validate(Field::Name, "John123");
//! assert!(!result.valid);
//! assert_eq!(result.message, "Name can only contain letters and spaces");
//!
//! let report = validator.validate_all(&FormValues {
//!     name: "Jo".into(),
//!     email: "jo@example.com".into(),
//!     password: "Abc12345".into(),
//!     age: "13".into(),
//! });
//! assert!(report.all_valid);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Settings
//!
//! ```yaml
//! # settings/form.yaml: every key is optional
//! name_min_length: 2
//! password_min_length: 8
//! age_min: 13
//! age_max: 120
//! integer_age_only: false
//! ```
//!
//! ```rust,no_run
//! use form_validator::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let handle = FormValidator::builder()
//!     .with_file("settings/form.yaml")
//!     .with_env_overrides("FORM") // FORM_AGE_MIN=18
//!     .build_handle()?;
//!
//! handle.reload()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `yaml`, `toml`, `json` (default): settings file formats

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod sources;
pub mod state;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        Field, FormReport, FormValidator, FormValidatorBuilder, FormValues, RuleSettings,
        ValidationResult, ValidatorHandle,
    };
    pub use crate::error::{ErrorKind, FieldError, FormError, Result};
    pub use crate::state::{Counter, CounterAction, FormSession, SessionEvent, SessionOutcome};
}
