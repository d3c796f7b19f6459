use crate::engine::{CallEngine, CallStatus, SessionState};
use tandem_core::{RoomId, SignalMessage};
use tracing::{error, info, warn};

impl CallEngine {
    /// Responder path: apply the remote offer, answer it, and move to
    /// `RemoteDescriptionSet`. Offers for an unknown room or in an
    /// incompatible state are stale and dropped.
    pub(super) async fn handle_offer(&mut self, room_id: RoomId, sdp: String) {
        let Some(session) = self.session.as_mut() else {
            warn!("Discarding offer for unknown room {}", room_id);
            return;
        };
        if session.room_id() != room_id || session.state() != SessionState::AwaitingOffer {
            warn!(
                "Discarding stale offer for room {} in state {:?}",
                room_id,
                session.state()
            );
            return;
        }

        if let Err(e) = session.transport().set_remote_description(&sdp).await {
            error!("Failed to apply remote offer: {}", e);
            self.close_session().await;
            self.set_status(CallStatus::Error);
            return;
        }

        // Candidates that raced ahead of the offer become applicable now.
        session.drain_pending().await;

        let answer = match session.transport().create_answer().await {
            Ok(answer) => answer,
            Err(e) => {
                error!("Failed to create answer: {}", e);
                self.close_session().await;
                self.set_status(CallStatus::Error);
                return;
            }
        };

        if let Err(e) = session.transport().set_local_description(&answer).await {
            error!("Failed to set local description: {}", e);
            self.close_session().await;
            self.set_status(CallStatus::Error);
            return;
        }

        session.set_state(SessionState::RemoteDescriptionSet);

        info!("Sending answer for room {}", room_id);
        self.send_signal(SignalMessage::Answer { sdp: answer, room_id });
    }
}
