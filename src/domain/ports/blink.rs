use crate::domain::entity::BlinkMode;

/// Reader interface for the status LED blink mode
pub trait BlinkModeReader {
    fn blink_mode(&self) -> BlinkMode;
}

/// Changer interface for the status LED blink mode
pub trait BlinkModeChanger {
    fn set_blink_mode(&self, mode: BlinkMode);
}

/// Port interface for the blink usecases
pub trait BlinkUsecasesPort: BlinkModeReader + BlinkModeChanger + Sync {}

impl<T: BlinkModeReader + BlinkModeChanger + Sync> BlinkUsecasesPort for T {}
