use crate::media::LocalMedia;
use crate::transport::PeerTransport;
use std::sync::Arc;
use tandem_core::{Role, RoomId};
use tracing::{debug, warn};

/// Progress of one room's offer/answer/candidate exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Responder, waiting for the initiator's offer.
    AwaitingOffer,
    /// Initiator, producing the offer.
    CreatingOffer,
    LocalDescriptionSet,
    /// Initiator, offer sent, answer not yet received.
    RemoteDescriptionPending,
    RemoteDescriptionSet,
    Established,
    Closed,
}

impl SessionState {
    /// Candidates can only be applied once the remote description exists.
    pub fn remote_description_set(&self) -> bool {
        matches!(
            self,
            SessionState::RemoteDescriptionSet | SessionState::Established
        )
    }

    /// States in which an incoming answer is signaling-compatible.
    pub fn accepts_answer(&self) -> bool {
        matches!(
            self,
            SessionState::LocalDescriptionSet | SessionState::RemoteDescriptionPending
        )
    }
}

/// Per-room negotiation state. Owned by the engine, created on `matched`,
/// destroyed on teardown; candidates that arrive before the remote
/// description are parked in `pending_candidates` in receipt order.
pub struct NegotiationSession {
    room_id: RoomId,
    role: Role,
    state: SessionState,
    transport: Arc<dyn PeerTransport>,
    media: Arc<dyn LocalMedia>,
    pending_candidates: Vec<String>,
}

impl NegotiationSession {
    pub(crate) fn new(
        room_id: RoomId,
        role: Role,
        transport: Arc<dyn PeerTransport>,
        media: Arc<dyn LocalMedia>,
    ) -> Self {
        Self {
            room_id,
            role,
            state: SessionState::Idle,
            transport,
            media,
            pending_candidates: Vec::new(),
        }
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pending_candidates(&self) -> &[String] {
        &self.pending_candidates
    }

    pub(crate) fn transport(&self) -> &Arc<dyn PeerTransport> {
        &self.transport
    }

    pub(crate) fn set_state(&mut self, state: SessionState) {
        debug!(
            "Session for room {}: {:?} -> {:?}",
            self.room_id, self.state, state
        );
        self.state = state;
    }

    pub(crate) fn buffer_candidate(&mut self, candidate: String) {
        self.pending_candidates.push(candidate);
    }

    /// Apply every buffered candidate in receipt order. A failing candidate
    /// is logged and skipped; the rest still go through.
    pub(crate) async fn drain_pending(&mut self) {
        if self.pending_candidates.is_empty() {
            return;
        }

        debug!(
            "Draining {} buffered candidates for room {}",
            self.pending_candidates.len(),
            self.room_id
        );

        for candidate in std::mem::take(&mut self.pending_candidates) {
            if let Err(e) = self.transport.add_remote_candidate(&candidate).await {
                warn!("Failed to apply buffered candidate: {}", e);
            }
        }
    }

    /// Close the transport, release the capture and drop any buffered
    /// candidates. Terminal; repeated calls are no-ops.
    pub(crate) async fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }

        self.transport.close().await;
        self.media.stop();
        self.pending_candidates.clear();
        self.set_state(SessionState::Closed);
    }
}
