mod blink;
mod peers;
mod toggle;

pub use blink::BlinkService;
pub use peers::PeerRegistry;
pub use toggle::ToggleService;
