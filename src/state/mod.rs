//! Presentation-owned state that changes through explicit transitions.

mod counter;
mod display;
mod session;

pub use counter::{Counter, CounterAction, Tone};
pub use display::ErrorDisplay;
pub use session::{FormSession, SUCCESS_MESSAGE, SessionEvent, SessionOutcome};
