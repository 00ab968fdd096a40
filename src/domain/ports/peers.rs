use crate::domain::entity::PeerAddr;

/// Upper bound of clients tracked at the same time
pub const MAX_PEERS: usize = 8;

/// Snapshot of the connected clients, oldest first
pub type PeerList = heapless::Vec<PeerAddr, MAX_PEERS>;

/// Reader interface for the connected clients
pub trait PeerListReader {
    fn connected_peers(&self) -> PeerList;
}

/// Tracker interface for client connections
pub trait PeerTracker {
    /// Register an opened connection.
    ///
    /// Returns `false` when the peer could not be tracked.
    fn peer_connected(&self, peer: &str) -> bool;

    /// Forget a closed connection.
    fn peer_disconnected(&self, peer: &str);
}

/// Port interface for the connected clients usecases
pub trait PeersUsecasesPort: PeerListReader + PeerTracker + Sync {}

impl<T: PeerListReader + PeerTracker + Sync> PeersUsecasesPort for T {}
