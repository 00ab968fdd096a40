//! LED toggle firmware
//!
//! - Joins the Wi-Fi network given by `WIFI_SSID` / `WIFI_PASSWORD`
//! - Serves the LED control page and the `/ledToggle` endpoint on port 80
//! - Blinks the status LED while blinking is enabled from the page

#![no_std]
#![no_main]

mod config;
mod drivers;
mod tasks;

use core::str::FromStr;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock,
    gpio::{Level, Output, OutputConfig},
    timer::timg::TimerGroup,
};
use ledtoggle::{
    app::{BlinkService, PeerRegistry, ToggleService},
    config::HTTP_WORKERS,
    controllers::LedHttpController,
    mk_static,
};

use drivers::{GpioLed, Hostname, start_wifi_sta};
use tasks::{AppHttpController, http_server_task, status_led_task};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(size: 72 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let led_pin = Output::new(
        crate::led_gpio!(peripherals),
        Level::Low,
        OutputConfig::default(),
    );
    let status_pin = Output::new(
        crate::status_led_gpio!(peripherals),
        Level::Low,
        OutputConfig::default(),
    );
    let mut link_pin = Output::new(
        crate::link_led_gpio!(peripherals),
        Level::Low,
        OutputConfig::default(),
    );

    let led: &'static ToggleService<GpioLed> = mk_static!(
        ToggleService<GpioLed>,
        ToggleService::new(GpioLed::new(led_pin))
    );
    let blink: &'static BlinkService =
        mk_static!(BlinkService, BlinkService::new());
    let peers: &'static PeerRegistry =
        mk_static!(PeerRegistry, PeerRegistry::new());

    spawner.must_spawn(status_led_task(status_pin, blink));

    let hostname = Hostname::from_str(config::DEVICE.hostname)
        .expect("hostname exceeds 32 characters");
    let (stack, ip) = start_wifi_sta(
        spawner,
        peripherals.WIFI,
        config::WIFI.ssid,
        config::WIFI.password,
        hostname,
    )
    .await
    .expect("failed to start Wi-Fi");
    link_pin.set_high();
    log::info!("network: connected, ip = {}", ip.address);

    let controller: &'static AppHttpController = mk_static!(
        AppHttpController,
        LedHttpController::new(led, blink, peers)
    );
    for id in 0..HTTP_WORKERS {
        spawner.must_spawn(http_server_task(id, stack, controller, peers));
    }

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
