use embassy_executor::Spawner;
use embassy_net::{DhcpConfig, Runner, Stack, StackResources};
use embassy_time::{Duration, Timer};
use esp_hal::{peripherals::WIFI, rng::Rng};
use esp_radio::wifi::{
    AuthMethod,
    ClientConfig,
    Config,
    ModeConfig,
    WifiController,
    WifiDevice,
    WifiEvent,
    WifiStaState,
};
use heapless::String;
use ledtoggle::{config::HTTP_WORKERS, mk_static};

/// Maximum length of the hostname
const MAX_HOSTNAME_LEN: usize = 32;

/// One socket per HTTP worker plus DHCP and a spare
const MAX_NETWORK_CONNECTIONS: usize = HTTP_WORKERS + 2;

/// Type alias for the hostname
pub(crate) type Hostname = String<MAX_HOSTNAME_LEN>;

#[derive(Debug)]
pub(crate) enum WifiError {
    RadioInit,
    Controller,
    Spawn,
}

/// Start the Wi-Fi STA (Station) mode
///
/// It connects to the `WiFi` network and waits for the connection to be
/// established. If the connection is lost, it tries to reconnect.
pub(crate) async fn start_wifi_sta(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    ssid: &'static str,
    password: &'static str,
    hostname: Hostname,
) -> Result<(Stack<'static>, embassy_net::StaticConfigV4), WifiError> {
    let radio = esp_radio::init().map_err(|_| WifiError::RadioInit)?;
    let esp_radio_ctrl = &*mk_static!(esp_radio::Controller<'static>, radio);
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default())
            .map_err(|_| WifiError::Controller)?;
    let mut dhcp_config = DhcpConfig::default();
    dhcp_config.hostname = Some(hostname);

    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let network_resources = mk_static!(
        StackResources<MAX_NETWORK_CONNECTIONS>,
        StackResources::<MAX_NETWORK_CONNECTIONS>::new()
    );
    let (stack, runner) = embassy_net::new(
        interfaces.sta,
        net_config,
        network_resources,
        get_seed(),
    );

    spawner
        .spawn(wifi_connection_task(controller, ssid, password))
        .map_err(|_| WifiError::Spawn)?;
    spawner
        .spawn(network_runner_task(runner))
        .map_err(|_| WifiError::Spawn)?;

    let ip = wait_for_connection(stack).await;

    Ok((stack, ip))
}

/// Background task for connecting to the `WiFi` network and reconnecting if
/// needed
#[embassy_executor::task]
async fn wifi_connection_task(
    mut controller: WifiController<'static>,
    ssid: &'static str,
    password: &'static str,
) {
    loop {
        // Wait until we're no longer connected
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            log::warn!("network: disconnected");
            Timer::after(Duration::from_millis(2000)).await;
        }
        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = if password.is_empty() {
                ClientConfig::default()
                    .with_ssid(ssid.into())
                    .with_auth_method(AuthMethod::None)
            } else {
                ClientConfig::default()
                    .with_ssid(ssid.into())
                    .with_password(password.into())
            };
            let mode_config = ModeConfig::Client(client_config);
            if let Err(e) = controller.set_config(&mode_config) {
                log::error!("network: invalid client config: {:?}", e);
                Timer::after(Duration::from_millis(5000)).await;
                continue;
            }
            if let Err(e) = controller.start_async().await {
                log::error!("network: error starting controller: {:?}", e);
                Timer::after(Duration::from_millis(5000)).await;
                continue;
            }
        }

        log::info!("network: connecting to {}", ssid);
        if let Err(e) = controller.connect_async().await {
            log::warn!("network: error connecting: {:?}", e);
            Timer::after(Duration::from_millis(5000)).await;
        }
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

fn get_seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}

/// Wait for full network connectivity (link + IP address)
/// Returns the obtained IPv4 configuration
async fn wait_for_connection(stack: Stack<'_>) -> embassy_net::StaticConfigV4 {
    // Wait for the network link to become active
    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }

    // Wait for the network stack to obtain an IPv4 address via DHCP
    loop {
        if let Some(config) = stack.config_v4() {
            return config;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
}
