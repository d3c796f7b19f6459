mod peer;
mod room;
mod signaling;

pub use peer::PeerId;
pub use room::{Role, RoomId};
pub use signaling::{IceServerConfig, SignalMessage};
