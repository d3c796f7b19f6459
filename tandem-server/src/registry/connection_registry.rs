use crate::registry::{ClientConnection, ConnectionPhase};
use dashmap::DashMap;
use tandem_core::{PeerId, RoomId, SignalMessage};
use tokio::sync::mpsc;
use tracing::warn;

/// Process-wide map of live connections. Insertion and removal follow the
/// transport lifecycle; all other mutation goes through the matchmaker.
pub struct ConnectionRegistry {
    connections: DashMap<PeerId, ClientConnection>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    pub(crate) fn add(&self, peer_id: PeerId, outbound: mpsc::UnboundedSender<SignalMessage>) {
        self.connections
            .insert(peer_id.clone(), ClientConnection::new(peer_id, outbound));
    }

    pub(crate) fn remove(&self, peer_id: &PeerId) -> Option<ClientConnection> {
        self.connections.remove(peer_id).map(|(_, conn)| conn)
    }

    pub fn contains(&self, peer_id: &PeerId) -> bool {
        self.connections.contains_key(peer_id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn phase(&self, peer_id: &PeerId) -> Option<ConnectionPhase> {
        self.connections.get(peer_id).map(|conn| conn.phase)
    }

    pub fn room_of(&self, peer_id: &PeerId) -> Option<RoomId> {
        self.connections.get(peer_id).and_then(|conn| conn.room)
    }

    /// Deliver a message to a connection's outbound channel. Returns false
    /// if the peer is gone or its channel is closed; the message is dropped,
    /// never retried.
    pub fn send(&self, peer_id: &PeerId, msg: SignalMessage) -> bool {
        match self.connections.get(peer_id) {
            Some(conn) => conn.send(msg),
            None => {
                warn!(
                    "Attempted to send signal to disconnected peer {:?}",
                    peer_id
                );
                false
            }
        }
    }

    pub(crate) fn set_waiting(&self, peer_id: &PeerId) {
        if let Some(mut conn) = self.connections.get_mut(peer_id) {
            conn.phase = ConnectionPhase::Waiting;
        }
    }

    pub(crate) fn set_room(&self, peer_id: &PeerId, room_id: RoomId) {
        if let Some(mut conn) = self.connections.get_mut(peer_id) {
            conn.phase = ConnectionPhase::InRoom;
            conn.room = Some(room_id);
        }
    }

    /// Reset a member to the plain connected phase. Returns false if the
    /// entry is already gone.
    pub(crate) fn clear_room(&self, peer_id: &PeerId) -> bool {
        match self.connections.get_mut(peer_id) {
            Some(mut conn) => {
                conn.phase = ConnectionPhase::Connected;
                conn.room = None;
                true
            }
            None => false,
        }
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
