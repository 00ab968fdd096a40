use core::cell::Cell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use crate::domain::{
    entity::BlinkMode,
    ports::{BlinkModeChanger, BlinkModeReader},
};

/// Holds the blink mode of the status LED. Blinking is enabled at boot.
pub struct BlinkService {
    mode: Mutex<CriticalSectionRawMutex, Cell<BlinkMode>>,
}

impl BlinkService {
    pub const fn new() -> Self {
        Self {
            mode: Mutex::new(Cell::new(BlinkMode::On)),
        }
    }
}

impl Default for BlinkService {
    fn default() -> Self {
        Self::new()
    }
}

impl BlinkModeReader for BlinkService {
    fn blink_mode(&self) -> BlinkMode {
        self.mode.lock(Cell::get)
    }
}

impl BlinkModeChanger for BlinkService {
    fn set_blink_mode(&self, mode: BlinkMode) {
        self.mode.lock(|cell| cell.set(mode));
        log::info!("blink: mode set to {}", mode);
    }
}
