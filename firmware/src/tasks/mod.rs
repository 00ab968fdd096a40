mod blink;
mod http_server;

pub(crate) use blink::status_led_task;
pub(crate) use http_server::{AppHttpController, http_server_task};
