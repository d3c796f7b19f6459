use crate::error::TransportError;
use crate::media::LocalMedia;
use crate::transport::TransportEvent;
use async_trait::async_trait;
use std::sync::Arc;
use tandem_core::{IceServerConfig, RoomId};
use tokio::sync::mpsc;

/// One peer-to-peer connection under negotiation. Implemented by the
/// host's WebRTC backend; the engine only sequences the calls.
#[async_trait]
pub trait PeerTransport: Send + Sync {
    async fn create_offer(&self) -> Result<String, TransportError>;

    async fn create_answer(&self) -> Result<String, TransportError>;

    async fn set_local_description(&self, sdp: &str) -> Result<(), TransportError>;

    async fn set_remote_description(&self, sdp: &str) -> Result<(), TransportError>;

    async fn add_remote_candidate(&self, candidate: &str) -> Result<(), TransportError>;

    async fn close(&self);
}

/// Builds one transport per room. Implementations attach the local media
/// tracks and report lifecycle changes and locally discovered candidates
/// into `events`, tagged with `room_id`.
#[async_trait]
pub trait PeerTransportFactory: Send + Sync {
    async fn create(
        &self,
        room_id: RoomId,
        media: Arc<dyn LocalMedia>,
        ice_servers: &[IceServerConfig],
        events: mpsc::Sender<TransportEvent>,
    ) -> Result<Arc<dyn PeerTransport>, TransportError>;
}
