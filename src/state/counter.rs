//! Counter widget state as an explicit value with a reducer.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A button press on the counter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterAction {
    /// Add one.
    Increment,
    /// Subtract one.
    Decrement,
    /// Back to zero.
    Reset,
}

impl FromStr for CounterAction {
    type Err = FormError;

    /// Parse a button label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Increment" => Ok(Self::Increment),
            "Decrement" => Ok(Self::Decrement),
            "Reset" => Ok(Self::Reset),
            other => Err(FormError::UnknownAction(other.to_string())),
        }
    }
}

/// Sign of the count, used to pick the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    /// Count above zero.
    Positive,
    /// Count below zero.
    Negative,
    /// Count is zero.
    Neutral,
}

/// The counter value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Current count.
    pub count: i64,
}

impl Counter {
    /// The counter after `action`. Saturates at the `i64` bounds.
    #[must_use]
    pub fn reduce(self, action: CounterAction) -> Self {
        let count = match action {
            CounterAction::Increment => self.count.saturating_add(1),
            CounterAction::Decrement => self.count.saturating_sub(1),
            CounterAction::Reset => 0,
        };
        Self { count }
    }

    /// Sign of the current count.
    pub fn tone(&self) -> Tone {
        match self.count {
            n if n > 0 => Tone::Positive,
            n if n < 0 => Tone::Negative,
            _ => Tone::Neutral,
        }
    }
}
