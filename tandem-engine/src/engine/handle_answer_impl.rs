use crate::engine::{CallEngine, CallStatus, SessionState};
use tandem_core::RoomId;
use tracing::{error, warn};

impl CallEngine {
    /// Initiator path: apply the answer and drain any buffered candidates.
    /// An answer in a signaling-incompatible state is stale or duplicated;
    /// it is logged and dropped without touching the live negotiation.
    pub(super) async fn handle_answer(&mut self, room_id: RoomId, sdp: String) {
        let Some(session) = self.session.as_mut() else {
            warn!("Discarding answer for unknown room {}", room_id);
            return;
        };
        if session.room_id() != room_id || !session.state().accepts_answer() {
            warn!(
                "Discarding answer for room {} in state {:?}",
                room_id,
                session.state()
            );
            return;
        }

        if let Err(e) = session.transport().set_remote_description(&sdp).await {
            error!("Failed to apply remote answer: {}", e);
            self.close_session().await;
            self.set_status(CallStatus::Error);
            return;
        }

        session.set_state(SessionState::RemoteDescriptionSet);
        session.drain_pending().await;
    }
}
