mod led;
mod wifi_sta;

pub(crate) use led::GpioLed;
pub(crate) use wifi_sta::{Hostname, start_wifi_sta};
