//! The central case aggregate: hidden trail, step budget, travel options,
//! and warrant adjudication.
//!
//! ## Invariants
//!
//! - `trail` holds 4-6 distinct cities; `trail[0]` is the starting city.
//! - `current_city_index` only advances when the player lands on
//!   `trail[current_city_index + 1]`; it never moves backwards.
//! - `current_city` may diverge from `trail[current_city_index]` while the
//!   player is on a decoy detour.
//! - `remaining_steps` decrements by exactly 1 per successful travel and
//!   forces `status = lost` on reaching 0.
//! - `status` transitions only `active -> won` or `active -> lost`; both are
//!   terminal.
//! - `warrant_issued` is set exactly once, together with `warrant`, and always
//!   ends the case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::ids::{CaseId, CityId, SessionId, SuspectId};
use crate::PickIndex;

/// Step budget granted at case creation.
pub const STARTING_STEPS: u32 = 10;
/// Inclusive bounds on trail length.
pub const MIN_TRAIL_LEN: usize = 4;
pub const MAX_TRAIL_LEN: usize = 6;
/// Decoys offered alongside the correct next trail city.
const DECOY_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Active,
    Won,
    Lost,
}

/// The narrative framing of a case, fixed at creation.
#[derive(Debug, Clone)]
pub struct CaseBrief {
    pub title: String,
    pub briefing: String,
    pub stolen_treasure: StolenTreasure,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StolenTreasure {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warrant {
    pub suspect_id: SuspectId,
    pub city_id: CityId,
    pub issued_at: DateTime<Utc>,
}

/// How a warrant resolved. Every variant is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantOutcome {
    Won,
    LostWrongSuspect,
    LostWrongCity,
}

impl WarrantOutcome {
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Won => None,
            Self::LostWrongSuspect => Some("wrong_suspect"),
            Self::LostWrongCity => Some("wrong_city"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCase {
    pub id: CaseId,
    pub session_id: SessionId,
    pub title: String,
    pub briefing: String,
    pub stolen_treasure: StolenTreasure,
    pub trail: Vec<CityId>,
    pub current_city_index: usize,
    pub current_city: CityId,
    pub visited_cities: Vec<CityId>,
    pub remaining_steps: u32,
    pub travel_options: Vec<CityId>,
    pub correct_suspect_id: SuspectId,
    pub status: CaseStatus,
    pub warrant_issued: bool,
    pub warrant: Option<Warrant>,
}

impl GameCase {
    /// Open a new case: random trail over distinct catalog cities, the player
    /// placed at `trail[0]` with a full step budget and initial options.
    pub fn open(
        id: CaseId,
        session_id: SessionId,
        brief: CaseBrief,
        correct_suspect_id: SuspectId,
        catalog: &[CityId],
        pick: PickIndex<'_>,
    ) -> Result<Self, GameError> {
        let trail = generate_trail(catalog, pick);
        let current_city = trail.first().cloned().ok_or(GameError::CityNotFound)?;
        let travel_options = travel_options_for(&trail, 0, catalog, pick);

        Ok(Self {
            id,
            session_id,
            title: brief.title,
            briefing: brief.briefing,
            stolen_treasure: brief.stolen_treasure,
            visited_cities: vec![current_city.clone()],
            current_city,
            trail,
            current_city_index: 0,
            remaining_steps: STARTING_STEPS,
            travel_options,
            correct_suspect_id,
            status: CaseStatus::Active,
            warrant_issued: false,
            warrant: None,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == CaseStatus::Active
    }

    /// Whether the player stands at the last trail city.
    pub fn is_final_city(&self) -> bool {
        self.current_city_index + 1 >= self.trail.len()
    }

    pub fn steps_used(&self) -> u32 {
        STARTING_STEPS - self.remaining_steps
    }

    /// Move to a destination. First failing check wins; a rejected travel
    /// mutates nothing.
    pub fn travel(
        &mut self,
        destination: &CityId,
        catalog: &[CityId],
        pick: PickIndex<'_>,
    ) -> Result<(), GameError> {
        if !self.is_active() {
            return Err(GameError::CaseCompleted);
        }
        if self.remaining_steps == 0 {
            return Err(GameError::NoSteps);
        }
        if destination == &self.current_city {
            return Err(GameError::SameCity);
        }
        if !self.travel_options.contains(destination) {
            return Err(GameError::InvalidDestination);
        }

        self.current_city = destination.clone();
        self.remaining_steps -= 1;
        self.visited_cities.push(destination.clone());

        let next = self.current_city_index + 1;
        if self.trail.get(next) == Some(destination) {
            self.current_city_index = next;
        }

        self.travel_options = travel_options_for(&self.trail, self.current_city_index, catalog, pick);

        // Losing by exhaustion takes priority over any pending action.
        if self.remaining_steps == 0 {
            self.status = CaseStatus::Lost;
        }

        Ok(())
    }

    /// One-shot terminal action: record the warrant and resolve the outcome.
    ///
    /// The caller resolves the suspect against the catalog first; this method
    /// only guards against double issuance.
    pub fn issue_warrant(
        &mut self,
        suspect_id: SuspectId,
        issued_at: DateTime<Utc>,
    ) -> Result<WarrantOutcome, GameError> {
        if self.warrant_issued {
            return Err(GameError::WarrantAlreadyIssued);
        }

        self.warrant_issued = true;
        self.warrant = Some(Warrant {
            suspect_id: suspect_id.clone(),
            city_id: self.current_city.clone(),
            issued_at,
        });

        let correct_suspect = suspect_id == self.correct_suspect_id;
        let at_final_city = self.trail.last() == Some(&self.current_city);

        let outcome = if correct_suspect && at_final_city {
            self.status = CaseStatus::Won;
            WarrantOutcome::Won
        } else {
            self.status = CaseStatus::Lost;
            if correct_suspect {
                WarrantOutcome::LostWrongCity
            } else {
                WarrantOutcome::LostWrongSuspect
            }
        };

        Ok(outcome)
    }
}

/// Pick a trail of 4-6 distinct cities, uniformly without replacement.
/// Stops early only if the catalog runs out.
fn generate_trail(catalog: &[CityId], pick: PickIndex<'_>) -> Vec<CityId> {
    let target_len = MIN_TRAIL_LEN + pick(MAX_TRAIL_LEN - MIN_TRAIL_LEN + 1);
    let mut pool: Vec<CityId> = catalog.to_vec();
    let mut trail = Vec::with_capacity(target_len);
    while trail.len() < target_len && !pool.is_empty() {
        let idx = pick(pool.len());
        trail.push(pool.swap_remove(idx));
    }
    trail
}

/// The correct next trail city plus up to two random decoys, excluding the
/// already-offered option and the trail's current city. Empty once the trail
/// is exhausted.
fn travel_options_for(
    trail: &[CityId],
    current_index: usize,
    catalog: &[CityId],
    pick: PickIndex<'_>,
) -> Vec<CityId> {
    let Some(correct) = trail.get(current_index + 1) else {
        return Vec::new();
    };
    let mut options = vec![correct.clone()];

    let mut decoy_pool: Vec<&CityId> = catalog
        .iter()
        .filter(|c| !options.contains(c) && Some(*c) != trail.get(current_index))
        .collect();
    for _ in 0..DECOY_COUNT {
        if decoy_pool.is_empty() {
            break;
        }
        let idx = pick(decoy_pool.len());
        options.push(decoy_pool.swap_remove(idx).clone());
    }

    options
}
