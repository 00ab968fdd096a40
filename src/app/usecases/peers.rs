use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use crate::domain::{
    entity::PeerAddr,
    ports::{PeerList, PeerListReader, PeerTracker},
};

/// Clients with an open HTTP connection.
pub struct PeerRegistry {
    peers: Mutex<CriticalSectionRawMutex, RefCell<PeerList>>,
}

impl PeerRegistry {
    pub const fn new() -> Self {
        Self {
            peers: Mutex::new(RefCell::new(PeerList::new())),
        }
    }
}

impl Default for PeerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PeerListReader for PeerRegistry {
    fn connected_peers(&self) -> PeerList {
        self.peers.lock(|peers| peers.borrow().clone())
    }
}

impl PeerTracker for PeerRegistry {
    fn peer_connected(&self, peer: &str) -> bool {
        let Ok(addr) = PeerAddr::try_from(peer) else {
            log::warn!("peers: address too long: {}", peer);
            return false;
        };
        let tracked =
            self.peers.lock(|peers| peers.borrow_mut().push(addr).is_ok());
        if tracked {
            log::debug!("peers: {} connected", peer);
        } else {
            log::warn!("peers: registry full, {} not tracked", peer);
        }
        tracked
    }

    fn peer_disconnected(&self, peer: &str) {
        let removed = self.peers.lock(|peers| {
            let mut peers = peers.borrow_mut();
            let position = peers.iter().position(|p| p.as_str() == peer)?;
            Some(peers.remove(position))
        });
        if removed.is_some() {
            log::debug!("peers: {} disconnected", peer);
        }
    }
}
