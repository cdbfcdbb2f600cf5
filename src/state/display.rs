//! Inline error element state.

use crate::core::ValidationResult;
use serde::Serialize;

/// Text and visibility of one inline error element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorDisplay {
    /// The message shown.
    pub text: String,
    /// Whether the element is shown.
    pub visible: bool,
}

impl ErrorDisplay {
    /// Show `message`.
    pub fn show(&mut self, message: impl Into<String>) {
        self.text = message.into();
        self.visible = true;
    }

    /// Empty the text and hide the element.
    pub fn clear(&mut self) {
        self.text.clear();
        self.visible = false;
    }
}

impl From<&ValidationResult> for ErrorDisplay {
    fn from(result: &ValidationResult) -> Self {
        let mut display = Self::default();
        if !result.valid {
            display.show(result.message.clone());
        }
        display
    }
}
