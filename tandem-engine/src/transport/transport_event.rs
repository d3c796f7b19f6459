use tandem_core::RoomId;

/// What a transport reports back into the engine loop. Every event names
/// the room its transport was built for, so events from a torn-down
/// session are recognizably stale.
#[derive(Debug)]
pub enum TransportEvent {
    Connected(RoomId),
    Disconnected(RoomId),
    CandidateDiscovered(RoomId, String),
}

impl TransportEvent {
    pub fn room_id(&self) -> RoomId {
        match self {
            TransportEvent::Connected(room_id)
            | TransportEvent::Disconnected(room_id)
            | TransportEvent::CandidateDiscovered(room_id, _) => *room_id,
        }
    }
}
