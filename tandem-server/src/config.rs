use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the signaling endpoint binds to.
    pub bind_addr: SocketAddr,
    /// Capacity of the matchmaker command channel.
    pub match_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            match_buffer: 256,
        }
    }
}
