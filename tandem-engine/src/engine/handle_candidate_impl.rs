use crate::engine::CallEngine;
use tandem_core::RoomId;
use tracing::{debug, warn};

impl CallEngine {
    /// Apply a remote candidate if the remote description is already in
    /// place, otherwise buffer it. A candidate the transport rejects is
    /// logged and skipped; the session keeps going.
    pub(super) async fn handle_candidate(&mut self, room_id: RoomId, candidate: String) {
        let Some(session) = self.session.as_mut() else {
            debug!("Discarding candidate for unknown room {}", room_id);
            return;
        };
        if session.room_id() != room_id {
            debug!("Discarding candidate for stale room {}", room_id);
            return;
        }

        if session.state().remote_description_set() {
            if let Err(e) = session.transport().add_remote_candidate(&candidate).await {
                warn!("Failed to apply candidate: {}", e);
            }
        } else {
            debug!(
                "Buffering candidate for room {} (no remote description yet)",
                room_id
            );
            session.buffer_candidate(candidate);
        }
    }
}
