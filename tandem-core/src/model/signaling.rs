use crate::model::peer::PeerId;
use crate::model::room::{Role, RoomId};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STUN_ADDR: &str = "stun:stun.l.google.com:19302";
pub const DEFAULT_STUN_ADDR_2: &str = "stun:stun1.l.google.com:19302";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    pub username: Option<String>,
    pub credential: Option<String>,
}

impl IceServerConfig {
    pub fn default_stun() -> Vec<Self> {
        vec![Self {
            urls: vec![DEFAULT_STUN_ADDR.to_string(), DEFAULT_STUN_ADDR_2.to_string()],
            username: None,
            credential: None,
        }]
    }
}

/// Every message exchanged over the signaling socket, in both directions.
/// `offer`, `answer` and `candidate` are relayed verbatim to the other
/// member of the room named in the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum SignalMessage {
    RequestMatch,
    Waiting,
    Matched {
        room_id: RoomId,
        role: Role,
    },
    Offer {
        sdp: String,
        room_id: RoomId,
    },
    Answer {
        sdp: String,
        room_id: RoomId,
    },
    Candidate {
        candidate: String,
        room_id: RoomId,
    },
    PeerLeft,
    /// Reserved for fixed-capacity room variants; random matchmaking never
    /// emits it.
    RoomFull,
}
