use crate::domain::{dto::ToggleRequest, entity::LedState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The request carried a `mode` other than `toggle`
    UnsupportedMode,
}

impl CommandError {
    pub const fn as_str(self) -> &'static str {
        match self {
            CommandError::UnsupportedMode => "unsupported mode",
        }
    }
}

/// Hardware output driven with every LED state change
pub trait LedOutput {
    /// Drive the physical LED to the given state
    fn apply(&mut self, state: LedState);
}

/// Reader interface for the LED state
pub trait LedStateReader {
    /// Get the current LED state
    fn led_state(&self) -> LedState;
}

/// Toggle interface for the LED
pub trait LedToggler {
    /// Flip the LED and return the new state
    fn toggle(&self) -> LedState;

    /// Validate a decoded toggle request and apply it
    fn apply_request(
        &self,
        request: &ToggleRequest,
    ) -> Result<LedState, CommandError>;
}

/// Port interface for the LED usecases
pub trait LedUsecasesPort: LedStateReader + LedToggler + Sync {}

impl<T: LedStateReader + LedToggler + Sync> LedUsecasesPort for T {}
