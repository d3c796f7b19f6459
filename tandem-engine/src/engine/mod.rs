use crate::media::MediaProvider;
use crate::transport::{PeerTransportFactory, TransportEvent};
use std::sync::Arc;
use tandem_core::{IceServerConfig, SignalMessage};
use tokio::sync::mpsc;
use tracing::{info, warn};

mod begin_session_impl;
mod close_session_impl;
mod handle_answer_impl;
mod handle_candidate_impl;
mod handle_offer_impl;
mod handle_signal_impl;
mod handle_transport_impl;
mod session;

pub use session::{NegotiationSession, SessionState};

#[derive(Clone)]
pub struct EngineConfig {
    /// STUN/TURN servers handed to the transport factory.
    pub ice_servers: Vec<IceServerConfig>,
    /// Capacity of the transport event channel.
    pub transport_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ice_servers: IceServerConfig::default_stun(),
            transport_buffer: 64,
        }
    }
}

/// Call status as the host application sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Idle,
    Waiting,
    Connecting,
    Connected,
    Disconnected,
    RoomFull,
    Error,
}

#[derive(Debug)]
pub enum EngineCommand {
    /// Ask the server for a partner. Closes any live session first.
    RequestMatch,
    /// Tear the current session down without requesting a new partner.
    HangUp,
}

/// One endpoint's side of the pairing and negotiation protocol. The engine
/// owns at most one `NegotiationSession` at a time and is addressed through
/// its command channel, so message handlers always see current state.
pub struct CallEngine {
    config: EngineConfig,
    media: Arc<dyn MediaProvider>,
    transports: Arc<dyn PeerTransportFactory>,
    outbound: mpsc::UnboundedSender<SignalMessage>,
    status_tx: mpsc::UnboundedSender<CallStatus>,
    transport_tx: mpsc::Sender<TransportEvent>,
    transport_rx: mpsc::Receiver<TransportEvent>,
    session: Option<NegotiationSession>,
}

impl CallEngine {
    pub fn new(
        config: EngineConfig,
        media: Arc<dyn MediaProvider>,
        transports: Arc<dyn PeerTransportFactory>,
        outbound: mpsc::UnboundedSender<SignalMessage>,
        status_tx: mpsc::UnboundedSender<CallStatus>,
    ) -> Self {
        let (transport_tx, transport_rx) = mpsc::channel(config.transport_buffer);

        Self {
            config,
            media,
            transports,
            outbound,
            status_tx,
            transport_tx,
            transport_rx,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&NegotiationSession> {
        self.session.as_ref()
    }

    /// Drive the engine until the host drops its command channel or the
    /// signaling channel closes.
    pub async fn run(
        mut self,
        mut command_rx: mpsc::Receiver<EngineCommand>,
        mut signal_rx: mpsc::Receiver<SignalMessage>,
    ) {
        info!("Call engine loop started");

        loop {
            tokio::select! {
                cmd = command_rx.recv() => {
                    match cmd {
                        Some(c) => self.handle_command(c).await,
                        None => break,
                    }
                }

                sig = signal_rx.recv() => {
                    match sig {
                        Some(s) => self.handle_signal(s).await,
                        None => {
                            info!("Signaling channel closed. Shutting down engine.");
                            break;
                        }
                    }
                }

                evt = self.transport_rx.recv() => {
                    if let Some(e) = evt {
                        self.handle_transport_event(e).await;
                    }
                }
            }
        }

        self.close_session().await;
        info!("Call engine loop finished");
    }

    pub async fn handle_command(&mut self, cmd: EngineCommand) {
        match cmd {
            EngineCommand::RequestMatch => self.request_match().await,
            EngineCommand::HangUp => {
                self.close_session().await;
                self.set_status(CallStatus::Idle);
            }
        }
    }

    /// Ask the server for a new partner. Any live session is closed first;
    /// a fresh negotiation never reuses stale state.
    pub async fn request_match(&mut self) {
        self.close_session().await;
        self.send_signal(SignalMessage::RequestMatch);
    }

    fn send_signal(&self, msg: SignalMessage) {
        if self.outbound.send(msg).is_err() {
            warn!("Signaling channel gone; dropping outbound message");
        }
    }

    fn set_status(&self, status: CallStatus) {
        let _ = self.status_tx.send(status);
    }
}
