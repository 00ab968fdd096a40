mod usecases;

pub use usecases::{BlinkService, PeerRegistry, ToggleService};
