mod config;
mod error;
mod matchmaker;
mod registry;
mod room;
mod signaling;

pub use config::ServerConfig;
pub use error::SignalingError;
pub use matchmaker::{MatchCommand, Matchmaker};
pub use registry::{ClientConnection, ConnectionPhase, ConnectionRegistry};
pub use room::{Room, RoomRegistry};
pub use signaling::{SignalRelay, SignalingService, ws_handler};
