pub(crate) struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
}

pub(crate) struct DeviceConfig {
    pub hostname: &'static str,
}

pub(crate) const WIFI: WifiConfig = WifiConfig {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
};

pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    hostname: "ledtoggle",
};

/// Pin of the LED switched by `/ledToggle`
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}

/// Pin of the blinking status LED
#[macro_export]
macro_rules! status_led_gpio {
    ($p:expr) => {
        $p.GPIO26
    };
}

/// Pin of the LED lit once Wi-Fi is connected
#[macro_export]
macro_rules! link_led_gpio {
    ($p:expr) => {
        $p.GPIO2
    };
}
