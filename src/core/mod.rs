//! Core validation types.

mod builder;
mod field;
mod handle;
mod loader;
mod rules;
mod settings;
mod validation;
mod validator;

pub use builder::FormValidatorBuilder;
pub use field::Field;
pub use handle::ValidatorHandle;
pub use loader::SettingsLoader;
pub use rules::{Rule, RuleSet};
pub use settings::RuleSettings;
pub use validation::Validate;
pub use validator::{FormReport, FormValidator, FormValues, ValidationResult};
