use crate::error::SignalingError;
use crate::matchmaker::MatchCommand;
use crate::registry::{ConnectionPhase, ConnectionRegistry};
use crate::room::{Room, RoomRegistry};
use std::collections::VecDeque;
use std::sync::Arc;
use tandem_core::{PeerId, Role, RoomId, SignalMessage};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Pairs waiting connections in FIFO order. Owns the waiting queue outright
/// and is the only writer of room registry entries and connection phases,
/// which makes pairing and teardown atomic without any locking.
pub struct Matchmaker {
    queue: VecDeque<PeerId>,
    registry: Arc<ConnectionRegistry>,
    rooms: Arc<RoomRegistry>,
    command_rx: mpsc::Receiver<MatchCommand>,
}

impl Matchmaker {
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        rooms: Arc<RoomRegistry>,
        command_rx: mpsc::Receiver<MatchCommand>,
    ) -> Self {
        Self {
            queue: VecDeque::new(),
            registry,
            rooms,
            command_rx,
        }
    }

    pub async fn run(mut self) {
        info!("Matchmaker loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }

        info!("Matchmaker loop finished");
    }

    fn handle_command(&mut self, cmd: MatchCommand) {
        match cmd {
            MatchCommand::RequestMatch { peer_id } => {
                if let Err(e) = self.request_match(&peer_id) {
                    debug!("Match request ignored: {}", e);
                }
            }

            MatchCommand::Leave { peer_id, room_id } => {
                self.teardown(room_id, &peer_id);
            }

            MatchCommand::Disconnect { peer_id, room_id } => {
                self.queue.retain(|id| id != &peer_id);
                if let Some(room_id) = room_id {
                    self.teardown(room_id, &peer_id);
                }
            }
        }
    }

    /// Pair `peer_id` with the head of the queue, skipping entries whose
    /// connection died while waiting, or enqueue it if nobody is available.
    fn request_match(&mut self, peer_id: &PeerId) -> Result<(), SignalingError> {
        match self.registry.phase(peer_id) {
            // Disconnected between sending the request and us processing it.
            None => return Ok(()),
            Some(ConnectionPhase::InRoom) => {
                return Err(SignalingError::AlreadyMatched(peer_id.clone()));
            }
            Some(ConnectionPhase::Waiting) => {
                // Already queued; keep the position, just repeat the status.
                self.registry.send(peer_id, SignalMessage::Waiting);
                return Ok(());
            }
            Some(ConnectionPhase::Connected) => {}
        }

        while let Some(partner_id) = self.queue.pop_front() {
            if partner_id == *peer_id {
                continue;
            }
            if self.registry.phase(&partner_id) != Some(ConnectionPhase::Waiting) {
                debug!("Skipping dead queue entry {:?}", partner_id);
                continue;
            }
            self.pair(partner_id, peer_id.clone());
            return Ok(());
        }

        self.queue.push_back(peer_id.clone());
        self.registry.set_waiting(peer_id);
        self.registry.send(peer_id, SignalMessage::Waiting);
        Ok(())
    }

    /// The peer that was already waiting becomes the initiator; the new
    /// arrival responds. Fixing this here keeps both sides from ever
    /// believing they are the offerer at once.
    fn pair(&mut self, initiator: PeerId, responder: PeerId) {
        let room = Room::new(initiator.clone(), responder.clone());
        let room_id = room.id;
        self.rooms.insert(room);
        self.registry.set_room(&initiator, room_id);
        self.registry.set_room(&responder, room_id);

        info!(
            "Paired {:?} (initiator) with {:?} (responder) in room {}",
            initiator, responder, room_id
        );

        self.registry.send(
            &initiator,
            SignalMessage::Matched {
                room_id,
                role: Role::Initiator,
            },
        );
        self.registry.send(
            &responder,
            SignalMessage::Matched {
                room_id,
                role: Role::Responder,
            },
        );
    }

    /// Remove the room and notify the member that did not trigger the
    /// teardown. Running this twice for the same room is a no-op.
    fn teardown(&mut self, room_id: RoomId, leaving: &PeerId) {
        let Some(room) = self.rooms.remove(&room_id) else {
            return;
        };

        self.registry.clear_room(&room.initiator);
        self.registry.clear_room(&room.responder);

        if let Some(other) = room.other_member(leaving) {
            if self.registry.send(other, SignalMessage::PeerLeft) {
                info!("Notified {:?} that its partner left room {}", other, room_id);
            }
        }

        info!("Room {} torn down", room_id);
    }
}
