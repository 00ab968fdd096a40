//! HTTP Server Task
//!
//! Each worker owns one socket: accept, serve a single request, close, repeat.
//! The peer stays in the connected clients list while its request is served.

use core::fmt::Write as _;

use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::Duration;
use ledtoggle::{
    app::{BlinkService, PeerRegistry, ToggleService},
    config::{HTTP, HTTP_WORKERS},
    controllers::LedHttpController,
    domain::{entity::PeerAddr, ports::PeerTracker as _},
    http::HttpServer,
};

use crate::drivers::GpioLed;

const RX_BUFFER_SIZE: usize = HTTP.rx_buffer_size;
const TX_BUFFER_SIZE: usize = HTTP.tx_buffer_size;

pub(crate) type AppHttpController = LedHttpController<
    'static,
    ToggleService<GpioLed>,
    BlinkService,
    PeerRegistry,
>;

#[embassy_executor::task(pool_size = HTTP_WORKERS)]
pub(crate) async fn http_server_task(
    id: usize,
    stack: Stack<'static>,
    handler: &'static AppHttpController,
    peers: &'static PeerRegistry,
) {
    let server = HttpServer::new(handler);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    log::info!("http[{}]: listening on port {}", id, HTTP.port);
    loop {
        let mut socket = TcpSocket::new(stack, &mut rx_buffer, &mut tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(HTTP.socket_timeout_secs)));

        if let Err(e) = socket.accept(HTTP.port).await {
            log::warn!("http[{}]: accept error: {:?}", id, e);
            continue;
        }

        let mut peer = PeerAddr::new();
        let tracked = match socket.remote_endpoint() {
            Some(endpoint) => {
                write!(peer, "{}", endpoint).is_ok()
                    && peers.peer_connected(&peer)
            }
            None => false,
        };

        if let Err(e) = server.serve(&mut socket).await {
            log::debug!("http[{}]: connection error: {:?}", id, e);
        }

        socket.close();
        if let Err(e) = socket.flush().await {
            log::debug!("http[{}]: flush on close failed: {:?}", id, e);
        }
        if tracked {
            peers.peer_disconnected(&peer);
        }
    }
}
