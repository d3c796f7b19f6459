pub use tandem_core::model::PeerId;

pub mod model {
    pub use tandem_core::model::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use tandem_server::*;
}

#[cfg(feature = "engine")]
pub mod engine {
    pub use tandem_engine::*;
}
