use crate::engine::{CallEngine, CallStatus, SessionState};
use crate::transport::TransportEvent;
use tandem_core::SignalMessage;
use tracing::{debug, info};

impl CallEngine {
    /// React to the transport layer. Events are tagged with the room their
    /// transport was created for; anything from a torn-down session is
    /// ignored.
    pub async fn handle_transport_event(&mut self, event: TransportEvent) {
        let Some(session) = self.session.as_mut() else {
            debug!("Ignoring transport event with no live session: {:?}", event);
            return;
        };
        if session.room_id() != event.room_id() {
            debug!("Ignoring stale transport event: {:?}", event);
            return;
        }

        match event {
            // Local candidates go out the moment they are found, whatever
            // the negotiation state.
            TransportEvent::CandidateDiscovered(room_id, candidate) => {
                self.send_signal(SignalMessage::Candidate { candidate, room_id });
            }

            TransportEvent::Connected(room_id) => {
                info!("Transport connected for room {}", room_id);
                session.set_state(SessionState::Established);
                self.set_status(CallStatus::Connected);
            }

            TransportEvent::Disconnected(room_id) => {
                info!("Transport disconnected for room {}", room_id);
                self.close_session().await;
                self.set_status(CallStatus::Disconnected);
            }
        }
    }
}
