use tandem_core::{PeerId, RoomId};

/// Commands processed by the matchmaker task. The task is the single
/// mutation path for the waiting queue, the room registry and each
/// connection's phase, so concurrent requests serialize here.
#[derive(Debug)]
pub enum MatchCommand {
    /// A connection asked to be paired with the next available peer.
    RequestMatch { peer_id: PeerId },

    /// A connection is leaving its current room but staying connected.
    Leave { peer_id: PeerId, room_id: RoomId },

    /// A connection went away. Drop it from the queue and tear down its
    /// room, if it had one.
    Disconnect {
        peer_id: PeerId,
        room_id: Option<RoomId>,
    },
}
