use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use crate::domain::{
    dto::{ToggleCommand, ToggleRequest},
    entity::LedState,
    ports::{CommandError, LedOutput, LedStateReader, LedToggler},
};

struct ToggleCell<O: LedOutput> {
    state: LedState,
    output: O,
}

/// Owner of the LED state.
///
/// Every read-modify-write runs inside one critical section, so concurrent
/// toggles are serialized and the output is always driven with the state
/// that was stored.
pub struct ToggleService<O: LedOutput> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<ToggleCell<O>>>,
}

impl<O: LedOutput> ToggleService<O> {
    /// Create a new service. The LED starts `OFF` and the output is driven
    /// accordingly.
    pub fn new(mut output: O) -> Self {
        let state = LedState::default();
        output.apply(state);

        Self {
            inner: Mutex::new(RefCell::new(ToggleCell { state, output })),
        }
    }
}

impl<O: LedOutput> LedToggler for ToggleService<O> {
    fn toggle(&self) -> LedState {
        let state = self.inner.lock(|cell| {
            let mut cell = cell.borrow_mut();
            cell.state = cell.state.toggled();
            let state = cell.state;
            cell.output.apply(state);
            state
        });
        log::info!("led: toggled to {}", state);

        state
    }

    fn apply_request(
        &self,
        request: &ToggleRequest,
    ) -> Result<LedState, CommandError> {
        match ToggleCommand::try_from(request)? {
            ToggleCommand::Toggle => Ok(self.toggle()),
        }
    }
}

impl<O: LedOutput> LedStateReader for ToggleService<O> {
    fn led_state(&self) -> LedState {
        self.inner.lock(|cell| cell.borrow().state)
    }
}
