use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tandem_core::{IceServerConfig, PeerId, RoomId};
use tandem_engine::{
    CallEngine, CallStatus, EngineCommand, EngineConfig, LocalMedia, MediaError, MediaProvider,
    PeerTransport, PeerTransportFactory, TransportError, TransportEvent,
};
use tandem_server::SignalingService;
use tokio::sync::mpsc;
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Poll `probe` until it yields a value or five seconds pass.
pub async fn wait_for<T, F>(mut probe: F) -> T
where
    F: FnMut() -> Option<T>,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if let Some(value) = probe() {
                return value;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("timed out waiting for condition")
}

pub async fn wait_until<F>(mut probe: F)
where
    F: FnMut() -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if probe() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("timed out waiting for condition");
}

struct NullMedia;

impl LocalMedia for NullMedia {
    fn stop(&self) {}
}

struct NullMediaProvider;

#[async_trait]
impl MediaProvider for NullMediaProvider {
    async fn acquire(&self) -> Result<Arc<dyn LocalMedia>, MediaError> {
        Ok(Arc::new(NullMedia))
    }
}

pub struct FakePeerTransport {
    pub room_id: RoomId,
    pub local_description: Mutex<Option<String>>,
    pub remote_description: Mutex<Option<String>>,
    pub applied_candidates: Mutex<Vec<String>>,
    pub closed: AtomicBool,
    events: mpsc::Sender<TransportEvent>,
}

impl FakePeerTransport {
    pub fn local(&self) -> Option<String> {
        self.local_description.lock().unwrap().clone()
    }

    pub fn remote(&self) -> Option<String> {
        self.remote_description.lock().unwrap().clone()
    }

    pub fn candidates(&self) -> Vec<String> {
        self.applied_candidates.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub async fn emit_connected(&self) {
        let _ = self
            .events
            .send(TransportEvent::Connected(self.room_id))
            .await;
    }

    pub async fn emit_candidate(&self, candidate: &str) {
        let _ = self
            .events
            .send(TransportEvent::CandidateDiscovered(
                self.room_id,
                candidate.to_string(),
            ))
            .await;
    }
}

#[async_trait]
impl PeerTransport for FakePeerTransport {
    async fn create_offer(&self) -> Result<String, TransportError> {
        Ok(format!("offer-sdp-{}", self.room_id))
    }

    async fn create_answer(&self) -> Result<String, TransportError> {
        Ok(format!("answer-sdp-{}", self.room_id))
    }

    async fn set_local_description(&self, sdp: &str) -> Result<(), TransportError> {
        *self.local_description.lock().unwrap() = Some(sdp.to_string());
        Ok(())
    }

    async fn set_remote_description(&self, sdp: &str) -> Result<(), TransportError> {
        *self.remote_description.lock().unwrap() = Some(sdp.to_string());
        Ok(())
    }

    async fn add_remote_candidate(&self, candidate: &str) -> Result<(), TransportError> {
        self.applied_candidates
            .lock()
            .unwrap()
            .push(candidate.to_string());
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

pub struct FakeTransportFactory {
    created: Mutex<Vec<Arc<FakePeerTransport>>>,
}

impl FakeTransportFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            created: Mutex::new(Vec::new()),
        })
    }

    pub fn last(&self) -> Option<Arc<FakePeerTransport>> {
        self.created.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PeerTransportFactory for FakeTransportFactory {
    async fn create(
        &self,
        room_id: RoomId,
        _media: Arc<dyn LocalMedia>,
        _ice_servers: &[IceServerConfig],
        events: mpsc::Sender<TransportEvent>,
    ) -> Result<Arc<dyn PeerTransport>, TransportError> {
        let transport = Arc::new(FakePeerTransport {
            room_id,
            local_description: Mutex::new(None),
            remote_description: Mutex::new(None),
            applied_candidates: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
            events,
        });
        self.created.lock().unwrap().push(transport.clone());
        Ok(transport)
    }
}

/// A full client: a running `CallEngine` wired to the in-process service
/// the way the WebSocket layer would wire it, with fake media and
/// transports underneath.
pub struct CallClient {
    pub peer_id: PeerId,
    pub transports: Arc<FakeTransportFactory>,
    commands: mpsc::Sender<EngineCommand>,
    status: mpsc::UnboundedReceiver<CallStatus>,
}

impl CallClient {
    pub fn connect(service: &SignalingService) -> Self {
        let peer_id = PeerId::new();
        let mut inbound = service.connect(peer_id.clone());

        let (signal_tx, signal_rx) = mpsc::channel(64);
        let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel();
        let (status_tx, status) = mpsc::unbounded_channel();
        let (commands, command_rx) = mpsc::channel(8);

        // Server -> engine pump.
        tokio::spawn(async move {
            while let Some(msg) = inbound.recv().await {
                if signal_tx.send(msg).await.is_err() {
                    break;
                }
            }
        });

        // Engine -> server pump.
        {
            let service = service.clone();
            let peer_id = peer_id.clone();
            tokio::spawn(async move {
                while let Some(msg) = outbound_rx.recv().await {
                    service.handle_message(&peer_id, msg).await;
                }
            });
        }

        let transports = FakeTransportFactory::new();
        let engine = CallEngine::new(
            EngineConfig::default(),
            Arc::new(NullMediaProvider),
            transports.clone(),
            outbound_tx,
            status_tx,
        );
        tokio::spawn(engine.run(command_rx, signal_rx));

        Self {
            peer_id,
            transports,
            commands,
            status,
        }
    }

    pub async fn request_match(&self) {
        self.commands
            .send(EngineCommand::RequestMatch)
            .await
            .expect("engine gone");
    }

    pub async fn wait_status(&mut self, want: CallStatus) {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                match self.status.recv().await {
                    Some(status) if status == want => return,
                    Some(_) => continue,
                    None => panic!("status channel closed before {:?}", want),
                }
            }
        })
        .await
        .unwrap_or_else(|_| panic!("timed out waiting for status {:?}", want));
    }

    pub async fn transport(&self) -> Arc<FakePeerTransport> {
        wait_for(|| self.transports.last()).await
    }
}
