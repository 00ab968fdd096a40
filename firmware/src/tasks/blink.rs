use embassy_time::{Duration, Timer};
use esp_hal::gpio::Output;
use ledtoggle::{app::BlinkService, domain::ports::BlinkModeReader as _};

const ON_TIME: Duration = Duration::from_millis(500);
const OFF_TIME: Duration = Duration::from_millis(2000);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Blink the status LED while the blink mode is `ON`.
#[embassy_executor::task]
pub(crate) async fn status_led_task(
    mut led: Output<'static>,
    blink: &'static BlinkService,
) {
    loop {
        if blink.blink_mode().is_on() {
            led.set_high();
            Timer::after(ON_TIME).await;
            led.set_low();
            Timer::after(OFF_TIME).await;
        } else {
            led.set_low();
            Timer::after(IDLE_POLL).await;
        }
    }
}
