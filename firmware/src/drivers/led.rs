use esp_hal::gpio::Output;
use ledtoggle::domain::{entity::LedState, ports::LedOutput};

/// LED wired to a push-pull GPIO, active high.
pub(crate) struct GpioLed {
    pin: Output<'static>,
}

impl GpioLed {
    pub(crate) fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl LedOutput for GpioLed {
    fn apply(&mut self, state: LedState) {
        if state.is_on() {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
