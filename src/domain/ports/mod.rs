pub mod blink;
pub mod led;
pub mod peers;

pub use blink::*;
pub use led::*;
pub use peers::*;
