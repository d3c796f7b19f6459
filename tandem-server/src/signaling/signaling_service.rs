use crate::config::ServerConfig;
use crate::matchmaker::{MatchCommand, Matchmaker};
use crate::registry::ConnectionRegistry;
use crate::room::RoomRegistry;
use crate::signaling::SignalRelay;
use std::sync::Arc;
use tandem_core::{PeerId, RoomId, SignalMessage};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

struct ServiceInner {
    registry: Arc<ConnectionRegistry>,
    rooms: Arc<RoomRegistry>,
    relay: SignalRelay,
    match_tx: mpsc::Sender<MatchCommand>,
}

/// Composition root of the signaling server: the connection registry, the
/// room registry, the relay and a handle to the matchmaker task. Cheap to
/// clone; every WebSocket task gets its own copy.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<ServiceInner>,
}

impl SignalingService {
    /// Build the service and spawn its matchmaker task.
    pub fn spawn(config: &ServerConfig) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        let rooms = Arc::new(RoomRegistry::new());

        let (match_tx, match_rx) = mpsc::channel(config.match_buffer);
        let matchmaker = Matchmaker::new(registry.clone(), rooms.clone(), match_rx);
        tokio::spawn(matchmaker.run());

        let relay = SignalRelay::new(registry.clone(), rooms.clone());

        Self {
            inner: Arc::new(ServiceInner {
                registry,
                rooms,
                relay,
                match_tx,
            }),
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.inner.registry
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.inner.rooms
    }

    /// Register a connection and hand back the channel its outbound
    /// signals arrive on.
    pub fn connect(&self, peer_id: PeerId) -> mpsc::UnboundedReceiver<SignalMessage> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.registry.add(peer_id, tx);
        rx
    }

    /// Unregister a connection and let the matchmaker reap its queue entry
    /// and room. Removing the registry entry first makes the liveness check
    /// during pairing fail fast for this peer.
    pub async fn disconnect(&self, peer_id: &PeerId) {
        let room_id = self
            .inner
            .registry
            .remove(peer_id)
            .and_then(|conn| conn.room());

        let _ = self
            .inner
            .match_tx
            .send(MatchCommand::Disconnect {
                peer_id: peer_id.clone(),
                room_id,
            })
            .await;
    }

    /// Single dispatch point for everything a client sends. Registered once
    /// per connection; per-room state lives in the registries, not in the
    /// handler.
    pub async fn handle_message(&self, peer_id: &PeerId, msg: SignalMessage) {
        match msg {
            SignalMessage::RequestMatch => self.request_match(peer_id).await,

            SignalMessage::Offer { sdp, room_id } => {
                self.forward(peer_id, room_id, SignalMessage::Offer { sdp, room_id });
            }
            SignalMessage::Answer { sdp, room_id } => {
                self.forward(peer_id, room_id, SignalMessage::Answer { sdp, room_id });
            }
            SignalMessage::Candidate { candidate, room_id } => {
                self.forward(
                    peer_id,
                    room_id,
                    SignalMessage::Candidate { candidate, room_id },
                );
            }

            other => {
                debug!("Ignoring unexpected op from {:?}: {:?}", peer_id, other);
            }
        }
    }

    /// A match request from a peer that is already paired means "next
    /// partner": the current room is torn down (the partner hears
    /// `peer-left`) before the peer goes back through the queue.
    async fn request_match(&self, peer_id: &PeerId) {
        if let Some(room_id) = self.inner.registry.room_of(peer_id) {
            info!("Peer {:?} is leaving room {} to re-match", peer_id, room_id);
            let _ = self
                .inner
                .match_tx
                .send(MatchCommand::Leave {
                    peer_id: peer_id.clone(),
                    room_id,
                })
                .await;
        }

        let _ = self
            .inner
            .match_tx
            .send(MatchCommand::RequestMatch {
                peer_id: peer_id.clone(),
            })
            .await;
    }

    fn forward(&self, peer_id: &PeerId, room_id: RoomId, msg: SignalMessage) {
        if let Err(e) = self.inner.relay.forward(peer_id, room_id, msg) {
            warn!("Relay refused message from {:?}: {}", peer_id, e);
        }
    }
}
