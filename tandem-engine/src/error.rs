/// Failures reported by a transport backend. The engine treats most of
/// them as recoverable: a bad candidate is skipped, a bad description
/// closes only the affected session.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("session description failed: {0}")]
    Description(String),

    #[error("network-path candidate failed: {0}")]
    Candidate(String),

    #[error("transport is closed")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("media capture failed: {0}")]
    Capture(String),
}
