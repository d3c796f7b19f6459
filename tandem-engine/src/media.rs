use crate::error::MediaError;
use async_trait::async_trait;
use std::sync::Arc;

/// Handle to the local audio/video capture attached to a call. Opaque to
/// the engine; only the transport backend looks inside.
pub trait LocalMedia: Send + Sync {
    /// Release the capture devices.
    fn stop(&self);
}

/// Supplies the local media source before negotiation starts.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    async fn acquire(&self) -> Result<Arc<dyn LocalMedia>, MediaError>;
}
