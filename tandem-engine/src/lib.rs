mod engine;
mod error;
mod media;
mod transport;

pub use engine::{
    CallEngine, CallStatus, EngineCommand, EngineConfig, NegotiationSession, SessionState,
};
pub use error::{MediaError, TransportError};
pub use media::{LocalMedia, MediaProvider};
pub use transport::{PeerTransport, PeerTransportFactory, TransportEvent};
