//! Per-(case, NPC) chat history with a hard cap.
//!
//! The cap counts player and NPC entries combined, so 20 entries means 10
//! exchanges. A chat call reserves both slots of its exchange up front, which
//! keeps the cap exact even when two calls for the same NPC race.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::ids::NpcId;

/// Combined player + NPC entries allowed per NPC per case.
pub const CHAT_CAP: usize = 20;
/// Longest accepted player message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 280;

/// Boundary validation for a player message (length 1-280 inclusive).
pub fn validate_player_message(text: &str) -> Result<(), GameError> {
    if text.is_empty() {
        return Err(GameError::EmptyMessage);
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(GameError::MessageTooLong);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcChatMessage {
    pub npc_id: NpcId,
    pub npc_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub from_player: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcChatHistory {
    messages: Vec<NpcChatMessage>,
}

impl NpcChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[NpcChatMessage] {
        &self.messages
    }

    pub fn remaining(&self) -> usize {
        CHAT_CAP.saturating_sub(self.messages.len())
    }

    /// Append the player half of an exchange, reserving room for the reply.
    /// Fails without appending anything once the cap would be exceeded.
    pub fn push_player(&mut self, message: NpcChatMessage) -> Result<usize, GameError> {
        if self.messages.len() + 2 > CHAT_CAP {
            return Err(GameError::ChatCapReached);
        }
        self.messages.push(message);
        Ok(self.messages.len())
    }

    /// Append the NPC half of an exchange. The slot was reserved by
    /// `push_player`.
    pub fn push_reply(&mut self, message: NpcChatMessage) -> usize {
        self.messages.push(message);
        self.messages.len()
    }
}
