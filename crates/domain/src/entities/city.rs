use serde::{Deserialize, Serialize};

use crate::ids::{CityId, NpcId};

/// A city the trail can pass through, with its resident NPCs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub region: String,
    pub continent: String,
    pub background_key: String,
    pub npcs: Vec<Npc>,
}

impl City {
    pub fn npc(&self, npc_id: &NpcId) -> Option<&Npc> {
        self.npcs.iter().find(|n| &n.id == npc_id)
    }
}

/// An interviewable character tied to one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub role: String,
}
