use core::fmt;

use serde::Serialize;

/// Represents the LED state.
///
/// Serialized as `"ON"` / `"OFF"`, the values the browser page expects in
/// `LEDStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LedState {
    On,
    #[default]
    Off,
}

impl LedState {
    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            LedState::On => LedState::Off,
            LedState::Off => LedState::On,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LedState::On => "ON",
            LedState::Off => "OFF",
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blink mode of the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkMode {
    #[default]
    On,
    Off,
}

impl BlinkMode {
    /// Parse the value of the `blinkStatus` form field.
    ///
    /// Only `ON` enables blinking, anything else disables it.
    pub fn from_form_value(value: &str) -> Self {
        if value == "ON" {
            BlinkMode::On
        } else {
            BlinkMode::Off
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, BlinkMode::On)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BlinkMode::On => "ON",
            BlinkMode::Off => "OFF",
        }
    }
}

impl fmt::Display for BlinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Longest peer address kept, fits `[ipv6]:port`.
pub const MAX_PEER_ADDR_LEN: usize = 48;

/// Peer address of a connected client, formatted as `address:port`.
pub type PeerAddr = heapless::String<MAX_PEER_ADDR_LEN>;
