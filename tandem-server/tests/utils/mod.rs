use std::time::Duration;

use tandem_core::{PeerId, Role, RoomId, SignalMessage};
use tandem_server::{ServerConfig, SignalingService};
use tokio::sync::mpsc;
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn spawn_service() -> SignalingService {
    SignalingService::spawn(&ServerConfig::default())
}

/// A signaling client registered directly with the service, backed by a
/// plain channel instead of a WebSocket.
pub struct TestClient {
    pub peer_id: PeerId,
    service: SignalingService,
    rx: mpsc::UnboundedReceiver<SignalMessage>,
}

impl TestClient {
    pub fn connect(service: &SignalingService) -> Self {
        let peer_id = PeerId::new();
        let rx = service.connect(peer_id.clone());
        Self {
            peer_id,
            service: service.clone(),
            rx,
        }
    }

    pub async fn send(&self, msg: SignalMessage) {
        self.service.handle_message(&self.peer_id, msg).await;
    }

    pub async fn request_match(&self) {
        self.send(SignalMessage::RequestMatch).await;
    }

    pub async fn disconnect(&self) {
        self.service.disconnect(&self.peer_id).await;
    }

    pub async fn recv(&mut self) -> SignalMessage {
        tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("timed out waiting for signal")
            .expect("signal channel closed")
    }

    pub fn try_recv(&mut self) -> Option<SignalMessage> {
        self.rx.try_recv().ok()
    }

    pub async fn expect_waiting(&mut self) {
        let msg = self.recv().await;
        assert_eq!(msg, SignalMessage::Waiting, "expected waiting, got {:?}", msg);
    }

    pub async fn expect_matched(&mut self) -> (RoomId, Role) {
        match self.recv().await {
            SignalMessage::Matched { room_id, role } => (room_id, role),
            other => panic!("expected matched, got {:?}", other),
        }
    }

    pub async fn expect_peer_left(&mut self) {
        let msg = self.recv().await;
        assert_eq!(
            msg,
            SignalMessage::PeerLeft,
            "expected peer-left, got {:?}",
            msg
        );
    }
}
