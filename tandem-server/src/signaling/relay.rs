use crate::error::SignalingError;
use crate::registry::ConnectionRegistry;
use crate::room::RoomRegistry;
use std::sync::Arc;
use tandem_core::{PeerId, RoomId, SignalMessage};
use tracing::debug;

/// Forwards negotiation messages between the two members of a room. Holds
/// no state of its own; the room registry decides who the receiver is.
#[derive(Clone)]
pub struct SignalRelay {
    registry: Arc<ConnectionRegistry>,
    rooms: Arc<RoomRegistry>,
}

impl SignalRelay {
    pub fn new(registry: Arc<ConnectionRegistry>, rooms: Arc<RoomRegistry>) -> Self {
        Self { registry, rooms }
    }

    /// Deliver `msg` unchanged to the other member of `room_id`, at most
    /// once. Fails with `NotInRoom` if the room is gone or the sender is
    /// not one of its members.
    pub fn forward(
        &self,
        sender: &PeerId,
        room_id: RoomId,
        msg: SignalMessage,
    ) -> Result<(), SignalingError> {
        let Some(room) = self.rooms.get(&room_id) else {
            return Err(SignalingError::NotInRoom(sender.clone(), room_id));
        };
        let Some(receiver) = room.other_member(sender) else {
            return Err(SignalingError::NotInRoom(sender.clone(), room_id));
        };

        if !self.registry.send(receiver, msg) {
            // The receiver dropped mid-flight; teardown will follow from its
            // disconnect. Nothing to retry.
            debug!("Dropped relay message for disconnected peer {:?}", receiver);
        }
        Ok(())
    }
}
