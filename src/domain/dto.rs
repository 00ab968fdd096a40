use heapless::String;
use serde::{Deserialize, Serialize};

use crate::domain::{entity::LedState, ports::CommandError};

/// Longest `mode` value accepted in a toggle request.
pub const MAX_MODE_LEN: usize = 16;

/// Body of `POST /ledToggle`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleRequest {
    pub mode: String<MAX_MODE_LEN>,
}

/// The only command the toggle endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleCommand {
    Toggle,
}

impl TryFrom<&ToggleRequest> for ToggleCommand {
    type Error = CommandError;

    fn try_from(request: &ToggleRequest) -> Result<Self, Self::Error> {
        match request.mode.as_str() {
            "toggle" => Ok(ToggleCommand::Toggle),
            _ => Err(CommandError::UnsupportedMode),
        }
    }
}

/// Reply to a successful toggle.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleResponse {
    #[serde(rename = "buttonUpdate")]
    pub button_update: &'static str,
    #[serde(rename = "LEDStatus")]
    pub led_status: LedState,
}

impl ToggleResponse {
    pub const fn new(led_status: LedState) -> Self {
        Self {
            button_update: "true",
            led_status,
        }
    }
}

/// Reply to a rejected toggle.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleRejection {
    #[serde(rename = "buttonUpdate")]
    pub button_update: &'static str,
    pub error: &'static str,
}

impl ToggleRejection {
    pub const fn new(error: &'static str) -> Self {
        Self {
            button_update: "false",
            error,
        }
    }
}
