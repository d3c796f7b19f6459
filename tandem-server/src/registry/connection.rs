use tandem_core::{PeerId, RoomId, SignalMessage};
use tokio::sync::mpsc;

/// Coarse server-side view of where a connection is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    /// Connected, neither queued nor paired.
    Connected,
    /// Sitting in the waiting queue.
    Waiting,
    /// Member of an active room.
    InRoom,
}

/// One live signaling connection and its session metadata. Entries are
/// created on connect and destroyed on disconnect; phase and room reference
/// are mutated only by the matchmaker.
pub struct ClientConnection {
    pub peer_id: PeerId,
    pub(crate) phase: ConnectionPhase,
    pub(crate) room: Option<RoomId>,
    outbound: mpsc::UnboundedSender<SignalMessage>,
}

impl ClientConnection {
    pub(crate) fn new(peer_id: PeerId, outbound: mpsc::UnboundedSender<SignalMessage>) -> Self {
        Self {
            peer_id,
            phase: ConnectionPhase::Connected,
            room: None,
            outbound,
        }
    }

    pub fn phase(&self) -> ConnectionPhase {
        self.phase
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub(crate) fn send(&self, msg: SignalMessage) -> bool {
        self.outbound.send(msg).is_ok()
    }
}
