use crate::engine::{CallEngine, CallStatus};
use tandem_core::SignalMessage;
use tracing::{debug, info, warn};

impl CallEngine {
    /// Single entry point for everything the server sends.
    pub async fn handle_signal(&mut self, msg: SignalMessage) {
        match msg {
            SignalMessage::Waiting => {
                info!("Waiting for a partner...");
                self.set_status(CallStatus::Waiting);
            }

            SignalMessage::Matched { room_id, role } => {
                self.begin_session(room_id, role).await;
            }

            SignalMessage::Offer { sdp, room_id } => {
                self.handle_offer(room_id, sdp).await;
            }

            SignalMessage::Answer { sdp, room_id } => {
                self.handle_answer(room_id, sdp).await;
            }

            SignalMessage::Candidate { candidate, room_id } => {
                self.handle_candidate(room_id, candidate).await;
            }

            SignalMessage::PeerLeft => {
                info!("Partner left the call");
                self.close_session().await;
                self.set_status(CallStatus::Disconnected);
            }

            SignalMessage::RoomFull => {
                warn!("Room is full");
                self.set_status(CallStatus::RoomFull);
            }

            SignalMessage::RequestMatch => {
                debug!("Ignoring client-bound op from server");
            }
        }
    }
}
