use serde::{Deserialize, Serialize};

use crate::ids::SuspectId;

/// A suspect the player can name in a warrant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suspect {
    pub id: SuspectId,
    pub name: String,
    pub photo_key: String,
    pub traits: SuspectTraits,
}

/// Dossier traits shown to the player while narrowing down the culprit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspectTraits {
    pub hair_color: String,
    pub eye_color: String,
    pub hobby: String,
    pub favorite_food: String,
    pub vehicle: String,
    pub distinguishing_feature: String,
}
