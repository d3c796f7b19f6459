use crate::room::Room;
use dashmap::DashMap;
use tandem_core::RoomId;

/// All active rooms, readable from any task. Writes happen only inside the
/// matchmaker's pairing and teardown operations.
pub struct RoomRegistry {
    rooms: DashMap<RoomId, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    pub fn get(&self, room_id: &RoomId) -> Option<Room> {
        self.rooms.get(room_id).map(|room| room.clone())
    }

    pub fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub(crate) fn insert(&self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    /// Remove a room. Returns None if it was already gone, which makes
    /// teardown idempotent.
    pub(crate) fn remove(&self, room_id: &RoomId) -> Option<Room> {
        self.rooms.remove(room_id).map(|(_, room)| room)
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}
