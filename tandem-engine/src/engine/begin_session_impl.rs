use crate::engine::{CallEngine, CallStatus, NegotiationSession, SessionState};
use tandem_core::{Role, RoomId, SignalMessage};
use tracing::{error, info};

impl CallEngine {
    /// Start a fresh negotiation for `room_id`. Any previous session is
    /// closed first; partial state from a stale negotiation is never
    /// carried over.
    pub(super) async fn begin_session(&mut self, room_id: RoomId, role: Role) {
        self.close_session().await;

        info!("Matched into room {} as {}", room_id, role);
        self.set_status(CallStatus::Connecting);

        let media = match self.media.acquire().await {
            Ok(media) => media,
            Err(e) => {
                error!("Failed to acquire local media: {}", e);
                self.set_status(CallStatus::Error);
                return;
            }
        };

        let transport = match self
            .transports
            .create(
                room_id,
                media.clone(),
                &self.config.ice_servers,
                self.transport_tx.clone(),
            )
            .await
        {
            Ok(transport) => transport,
            Err(e) => {
                error!("Failed to create transport for room {}: {}", room_id, e);
                media.stop();
                self.set_status(CallStatus::Error);
                return;
            }
        };

        let mut session = NegotiationSession::new(room_id, role, transport, media);

        match role {
            Role::Responder => {
                session.set_state(SessionState::AwaitingOffer);
            }

            Role::Initiator => {
                session.set_state(SessionState::CreatingOffer);

                let sdp = match session.transport().create_offer().await {
                    Ok(sdp) => sdp,
                    Err(e) => {
                        error!("Failed to create offer: {}", e);
                        session.close().await;
                        self.set_status(CallStatus::Error);
                        return;
                    }
                };

                if let Err(e) = session.transport().set_local_description(&sdp).await {
                    error!("Failed to set local description: {}", e);
                    session.close().await;
                    self.set_status(CallStatus::Error);
                    return;
                }
                session.set_state(SessionState::LocalDescriptionSet);

                info!("Sending offer for room {}", room_id);
                self.send_signal(SignalMessage::Offer { sdp, room_id });
                session.set_state(SessionState::RemoteDescriptionPending);
            }
        }

        self.session = Some(session);
    }
}
