use tandem_core::{PeerId, RoomId};

/// Conditions the signaling layer recovers from locally. None of these is
/// fatal to the process; a single connection's fault never affects other
/// rooms.
#[derive(Debug, thiserror::Error)]
pub enum SignalingError {
    /// A match was requested for a connection that is already in a room.
    #[error("peer {0} is already matched into a room")]
    AlreadyMatched(PeerId),

    /// A message named a room the sender does not currently belong to.
    #[error("peer {0} is not a member of room {1}")]
    NotInRoom(PeerId, RoomId),
}
