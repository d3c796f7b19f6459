pub mod model;

pub use model::{IceServerConfig, PeerId, Role, RoomId, SignalMessage};
