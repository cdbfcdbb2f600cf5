//! Form-level state owned by the presentation layer.
//!
//! A [`FormSession`] changes only through [`FormSession::apply`]. Live input
//! re-validates the edited field; submitting validates every field and
//! resets the form when all of them pass.

use crate::core::{Field, FormValidator, FormValues};
use crate::state::ErrorDisplay;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Banner text shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Something the user did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A field's value changed.
    Input {
        /// The edited field
        field: Field,
        /// Its new value
        value: String,
    },
    /// The form was submitted.
    Submit,
    /// The form was reset.
    Reset,
}

/// What an event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// One field was re-validated.
    Updated {
        /// The edited field
        field: Field,
        /// Whether its new value is valid
        valid: bool,
    },
    /// Every field was valid; the form was accepted and reset.
    Submitted,
    /// At least one field was invalid.
    Rejected {
        /// Invalid fields, in form order
        invalid_fields: Vec<Field>,
    },
    /// The form was cleared.
    Cleared,
}

/// State of one form instance.
#[derive(Debug, Clone)]
pub struct FormSession {
    validator: Arc<FormValidator>,
    values: FormValues,
    displays: BTreeMap<Field, ErrorDisplay>,
    banner: String,
}

impl FormSession {
    /// Create an empty session that validates with `validator`.
    pub fn new(validator: Arc<FormValidator>) -> Self {
        Self {
            validator,
            values: FormValues::default(),
            displays: Field::ALL
                .into_iter()
                .map(|field| (field, ErrorDisplay::default()))
                .collect(),
            banner: String::new(),
        }
    }

    /// Apply `event` and report what happened.
    pub fn apply(&mut self, event: SessionEvent) -> SessionOutcome {
        match event {
            SessionEvent::Input { field, value } => self.input(field, value),
            SessionEvent::Submit => self.submit(),
            SessionEvent::Reset => {
                self.reset();
                SessionOutcome::Cleared
            }
        }
    }

    /// Current field values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The error element state for `field`.
    pub fn display(&self, field: Field) -> &ErrorDisplay {
        &self.displays[&field]
    }

    /// The success banner, empty unless the last submission succeeded.
    pub fn banner(&self) -> &str {
        &self.banner
    }

    fn input(&mut self, field: Field, value: String) -> SessionOutcome {
        let result = self.validator.validate(field, &value);
        self.values.set(field, value);
        self.displays.insert(field, ErrorDisplay::from(&result));

        SessionOutcome::Updated {
            field,
            valid: result.valid,
        }
    }

    fn submit(&mut self) -> SessionOutcome {
        self.banner.clear();
        self.displays.values_mut().for_each(ErrorDisplay::clear);

        let report = self.validator.validate_all(&self.values);
        for (field, result) in &report.results {
            self.displays.insert(*field, ErrorDisplay::from(result));
        }

        if report.all_valid {
            tracing::debug!("form submitted");
            self.values = FormValues::default();
            self.banner.push_str(SUCCESS_MESSAGE);
            SessionOutcome::Submitted
        } else {
            let invalid_fields = report.invalid_fields();
            tracing::debug!(?invalid_fields, "form submission rejected");
            SessionOutcome::Rejected { invalid_fields }
        }
    }

    fn reset(&mut self) {
        self.values = FormValues::default();
        self.displays.values_mut().for_each(ErrorDisplay::clear);
        self.banner.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleSettings;

    fn session() -> FormSession {
        FormSession::new(Arc::new(FormValidator::new(RuleSettings::default()).unwrap()))
    }

    fn input(field: Field, value: &str) -> SessionEvent {
        SessionEvent::Input {
            field,
            value: value.to_string(),
        }
    }

    fn fill_valid(session: &mut FormSession) {
        session.apply(input(Field::Name, "Jane Doe"));
        session.apply(input(Field::Email, "jane@example.com"));
        session.apply(input(Field::Password, "Abc12345"));
        session.apply(input(Field::Age, "30"));
    }

    #[test]
    fn test_input_validates_only_that_field() {
        let mut session = session();
        let outcome = session.apply(input(Field::Email, "nope"));

        assert_eq!(
            outcome,
            SessionOutcome::Updated {
                field: Field::Email,
                valid: false,
            }
        );
        assert!(session.display(Field::Email).visible);
        assert!(!session.display(Field::Name).visible);
        assert_eq!(session.values().email, "nope");
    }

    #[test]
    fn test_correcting_input_hides_error() {
        let mut session = session();
        session.apply(input(Field::Age, "9"));
        assert!(session.display(Field::Age).visible);

        session.apply(input(Field::Age, "19"));
        assert_eq!(session.display(Field::Age), &ErrorDisplay::default());
    }

    #[test]
    fn test_submit_empty_form_shows_every_error() {
        let mut session = session();
        let outcome = session.apply(SessionEvent::Submit);

        assert_eq!(
            outcome,
            SessionOutcome::Rejected {
                invalid_fields: Field::ALL.to_vec(),
            }
        );
        for field in Field::ALL {
            let display = session.display(field);
            assert!(display.visible);
            assert_eq!(display.text, format!("{} is required", field.label()));
        }
        assert!(session.banner().is_empty());
    }

    #[test]
    fn test_successful_submit_resets_values() {
        let mut session = session();
        fill_valid(&mut session);

        assert_eq!(session.apply(SessionEvent::Submit), SessionOutcome::Submitted);
        assert_eq!(session.banner(), SUCCESS_MESSAGE);
        assert_eq!(session.values(), &FormValues::default());
        for field in Field::ALL {
            assert!(!session.display(field).visible);
        }
    }

    #[test]
    fn test_next_edit_keeps_banner_until_submit() {
        let mut session = session();
        fill_valid(&mut session);
        session.apply(SessionEvent::Submit);

        session.apply(input(Field::Name, "J"));
        assert_eq!(session.banner(), SUCCESS_MESSAGE);

        session.apply(SessionEvent::Submit);
        assert!(session.banner().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = session();
        session.apply(input(Field::Password, "short"));
        session.apply(SessionEvent::Submit);

        assert_eq!(session.apply(SessionEvent::Reset), SessionOutcome::Cleared);
        assert_eq!(session.values(), &FormValues::default());
        assert!(session.banner().is_empty());
        for field in Field::ALL {
            assert!(!session.display(field).visible);
        }
    }
}
