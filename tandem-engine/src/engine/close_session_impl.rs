use crate::engine::CallEngine;
use tracing::info;

impl CallEngine {
    /// Tear down the live session, if any. Safe to call repeatedly.
    pub(super) async fn close_session(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };

        info!("Closing session for room {}", session.room_id());
        session.close().await;
    }
}
