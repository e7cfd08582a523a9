//! Wire types for the HTTP surface.
//!
//! Response shapes are hand-built rather than serialized straight from the
//! domain aggregates so internal fields never leak by accident.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gumshoe_domain::{
    CaseStatus, City, CityId, GameCase, GameSession, Npc, NpcId, SessionStatus, StolenTreasure,
    Suspect, SuspectId,
};

use crate::use_cases::{CityView, SummaryView, TravelOption, TravelResult};

// =============================================================================
// Requests
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    #[serde(default)]
    pub city_id: Option<CityId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantRequest {
    #[serde(default)]
    pub suspect_id: Option<SuspectId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Sessions
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedDto {
    pub id: String,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<GameSession> for SessionCreatedDto {
    fn from(session: GameSession) -> Self {
        Self {
            id: session.id.to_string(),
            status: session.status,
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub id: String,
    pub status: SessionStatus,
    pub last_accessed_at: DateTime<Utc>,
}

impl From<GameSession> for SessionDto {
    fn from(session: GameSession) -> Self {
        Self {
            id: session.id.to_string(),
            status: session.status,
            last_accessed_at: session.last_accessed_at,
        }
    }
}

// =============================================================================
// Cases
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDto {
    pub id: String,
    pub title: String,
    pub briefing: String,
    pub stolen_treasure: StolenTreasure,
    pub current_city: CityId,
    pub remaining_steps: u32,
    pub status: CaseStatus,
    pub trail: Vec<CityId>,
    pub correct_suspect_id: SuspectId,
    pub current_city_index: usize,
    pub visited_cities: Vec<CityId>,
    pub warrant_issued: bool,
}

impl From<GameCase> for CaseDto {
    fn from(case: GameCase) -> Self {
        Self {
            id: case.id.to_string(),
            title: case.title,
            briefing: case.briefing,
            stolen_treasure: case.stolen_treasure,
            current_city: case.current_city,
            remaining_steps: case.remaining_steps,
            status: case.status,
            trail: case.trail,
            correct_suspect_id: case.correct_suspect_id,
            current_city_index: case.current_city_index,
            visited_cities: case.visited_cities,
            warrant_issued: case.warrant_issued,
        }
    }
}

// =============================================================================
// Cities and travel
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfoDto {
    pub id: CityId,
    pub name: String,
    pub region: String,
    pub continent: String,
    pub background_key: String,
}

impl From<&City> for CityInfoDto {
    fn from(city: &City) -> Self {
        Self {
            id: city.id.clone(),
            name: city.name.clone(),
            region: city.region.clone(),
            continent: city.continent.clone(),
            background_key: city.background_key.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelOptionDto {
    pub city_id: CityId,
    pub city_name: String,
    pub description: String,
}

impl From<TravelOption> for TravelOptionDto {
    fn from(option: TravelOption) -> Self {
        Self {
            city_id: option.city_id,
            city_name: option.city_name,
            description: option.description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityViewDto {
    pub city: CityInfoDto,
    pub npcs: Vec<Npc>,
    pub travel_options: Vec<TravelOptionDto>,
    pub remaining_steps: u32,
    pub is_final_city: bool,
}

impl From<CityView> for CityViewDto {
    fn from(view: CityView) -> Self {
        Self {
            city: CityInfoDto::from(&view.city),
            npcs: view.city.npcs.clone(),
            travel_options: view.travel_options.into_iter().map(Into::into).collect(),
            remaining_steps: view.remaining_steps,
            is_final_city: view.is_final_city,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelResponseDto {
    pub city: Option<CityInfoDto>,
    pub remaining_steps: u32,
    pub case_status: CaseStatus,
}

impl From<TravelResult> for TravelResponseDto {
    fn from(result: TravelResult) -> Self {
        Self {
            city: result.city.as_ref().map(CityInfoDto::from),
            remaining_steps: result.remaining_steps,
            case_status: result.status,
        }
    }
}

// =============================================================================
// Suspects and warrants
// =============================================================================

#[derive(Debug, Serialize)]
pub struct SuspectsDto {
    pub suspects: Vec<Suspect>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspectRefDto {
    pub id: SuspectId,
    pub name: String,
}

impl From<Suspect> for SuspectRefDto {
    fn from(suspect: Suspect) -> Self {
        Self {
            id: suspect.id,
            name: suspect.name,
        }
    }
}

/// Warrant echo. Win responses carry all fields; a wrong-city loss only
/// reveals the city the warrant was filed in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspect_id: Option<SuspectId>,
    pub city_id: CityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantResponseDto {
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    pub case_status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warrant: Option<WarrantDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_suspect: Option<SuspectRefDto>,
}

// =============================================================================
// Summary
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWarrantDto {
    pub suspect_id: SuspectId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDto {
    pub outcome: CaseStatus,
    pub cities_visited: Vec<CityId>,
    pub steps_used: u32,
    pub total_steps: u32,
    pub correct_suspect: Option<SuspectRefDto>,
    pub player_warrant: Option<PlayerWarrantDto>,
    pub stolen_treasure: StolenTreasure,
}

impl From<SummaryView> for SummaryDto {
    fn from(view: SummaryView) -> Self {
        Self {
            outcome: view.outcome,
            cities_visited: view.cities_visited,
            steps_used: view.steps_used,
            total_steps: view.total_steps,
            correct_suspect: view.correct_suspect.map(Into::into),
            player_warrant: view.player_warrant.map(|w| PlayerWarrantDto {
                suspect_id: w.suspect_id,
            }),
            stolen_treasure: view.stolen_treasure,
        }
    }
}

// =============================================================================
// Chat
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcMessageDto {
    pub npc_id: NpcId,
    pub npc_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryDto {
    pub message_count: usize,
    pub remaining_messages: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseDto {
    pub npc_message: NpcMessageDto,
    pub chat_history: ChatHistoryDto,
}
