use tandem_core::{PeerId, Role, RoomId};

/// One active pairing: exactly two members with roles fixed at creation.
/// Rooms are created only by the matchmaker and removed on the first
/// teardown; there is no partially-populated state.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub initiator: PeerId,
    pub responder: PeerId,
}

impl Room {
    pub(crate) fn new(initiator: PeerId, responder: PeerId) -> Self {
        let id = RoomId::for_pair(&initiator, &responder);
        Self {
            id,
            initiator,
            responder,
        }
    }

    pub fn members(&self) -> [&PeerId; 2] {
        [&self.initiator, &self.responder]
    }

    pub fn contains(&self, peer_id: &PeerId) -> bool {
        self.initiator == *peer_id || self.responder == *peer_id
    }

    pub fn other_member(&self, peer_id: &PeerId) -> Option<&PeerId> {
        if self.initiator == *peer_id {
            Some(&self.responder)
        } else if self.responder == *peer_id {
            Some(&self.initiator)
        } else {
            None
        }
    }

    pub fn role_of(&self, peer_id: &PeerId) -> Option<Role> {
        if self.initiator == *peer_id {
            Some(Role::Initiator)
        } else if self.responder == *peer_id {
            Some(Role::Responder)
        } else {
            None
        }
    }
}
