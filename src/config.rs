pub struct HttpConfig {
    /// TCP port the workers listen on
    pub port: u16,
    /// Idle timeout applied to every accepted socket
    pub socket_timeout_secs: u64,
    /// Size of the socket RX buffer of one worker
    pub rx_buffer_size: usize,
    /// Size of the socket TX buffer of one worker
    pub tx_buffer_size: usize,
}

/// Number of HTTP worker tasks serving connections in parallel.
pub const HTTP_WORKERS: usize = 2;

pub const HTTP: HttpConfig = HttpConfig {
    port: 80,
    socket_timeout_secs: 30,
    rx_buffer_size: 2048,
    tx_buffer_size: 2048,
};
