//! Chat history store keyed by (case, NPC).
//!
//! Histories are created lazily on first message. The player append runs
//! under the entry lock and reserves the reply slot, so the cap check never
//! races with a concurrent chat for the same NPC. The reply append happens
//! after the generator call, outside any lock window held during I/O.

use dashmap::DashMap;
use gumshoe_domain::{CaseId, GameError, NpcChatHistory, NpcChatMessage, NpcId};

#[derive(Default)]
pub struct ChatStore {
    histories: DashMap<(CaseId, NpcId), NpcChatHistory>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the player half of an exchange, enforcing the cap.
    /// Returns the history length after the append.
    pub fn append_player(
        &self,
        case_id: &CaseId,
        npc_id: &NpcId,
        message: NpcChatMessage,
    ) -> Result<usize, GameError> {
        let mut history = self
            .histories
            .entry((case_id.clone(), npc_id.clone()))
            .or_default();
        history.push_player(message)
    }

    /// Append the NPC half of an exchange into its reserved slot.
    pub fn append_reply(&self, case_id: &CaseId, npc_id: &NpcId, message: NpcChatMessage) -> usize {
        let mut history = self
            .histories
            .entry((case_id.clone(), npc_id.clone()))
            .or_default();
        history.push_reply(message)
    }

    pub fn message_count(&self, case_id: &CaseId, npc_id: &NpcId) -> usize {
        self.histories
            .get(&(case_id.clone(), npc_id.clone()))
            .map(|h| h.len())
            .unwrap_or(0)
    }
}
