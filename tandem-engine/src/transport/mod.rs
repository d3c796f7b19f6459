mod peer_transport;
mod transport_event;

pub use peer_transport::*;
pub use transport_event::*;
