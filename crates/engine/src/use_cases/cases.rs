//! Case lifecycle operations: creation, travel, warrants, summaries.
//!
//! All mutations run under the case's store entry lock via
//! `CaseStore::with_case`, so concurrent requests against one case serialize
//! and validation order is preserved.

use std::sync::Arc;

use gumshoe_domain::{
    CaseId, CaseStatus, City, CityId, GameCase, GameError, SessionId, StolenTreasure, Suspect,
    SuspectId, Warrant, WarrantOutcome, STARTING_STEPS,
};
use tracing::info;

use crate::infrastructure::catalog::GameCatalog;
use crate::infrastructure::ports::{ClockPort, RandomPort};
use crate::stores::CaseStore;

/// The travel endpoint's view: where the player landed and what it cost.
#[derive(Debug)]
pub struct TravelResult {
    pub city: Option<City>,
    pub remaining_steps: u32,
    pub status: CaseStatus,
}

/// A warrant resolution with everything the response needs hydrated.
#[derive(Debug)]
pub struct WarrantResult {
    pub outcome: WarrantOutcome,
    pub status: CaseStatus,
    pub warrant: Warrant,
    pub suspect_name: String,
    pub correct_suspect: Option<Suspect>,
}

/// The current-city endpoint's view.
pub struct CityView {
    pub city: City,
    pub travel_options: Vec<TravelOption>,
    pub remaining_steps: u32,
    pub is_final_city: bool,
}

/// A travel option hydrated with display fields.
pub struct TravelOption {
    pub city_id: CityId,
    pub city_name: String,
    pub description: String,
}

/// Post-game debrief, only available once the case is terminal.
#[derive(Debug)]
pub struct SummaryView {
    pub outcome: CaseStatus,
    pub cities_visited: Vec<CityId>,
    pub steps_used: u32,
    pub total_steps: u32,
    pub correct_suspect: Option<Suspect>,
    pub player_warrant: Option<Warrant>,
    pub stolen_treasure: StolenTreasure,
}

pub struct CaseOps {
    cases: Arc<CaseStore>,
    catalog: Arc<GameCatalog>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl CaseOps {
    pub fn new(
        cases: Arc<CaseStore>,
        catalog: Arc<GameCatalog>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            cases,
            catalog,
            clock,
            random,
        }
    }

    /// Open a new case for the session: one active case at a time.
    pub fn create(&self, session_id: &SessionId) -> Result<GameCase, GameError> {
        if let Some(active_id) = self.cases.active_case_id(session_id) {
            if self.cases.get(&active_id).is_some_and(|c| c.is_active()) {
                return Err(GameError::ActiveCaseExists);
            }
        }

        let id = CaseId::generate(self.random.gen_uuid());
        let mut pick = |bound: usize| self.random.pick(bound);
        let case = GameCase::open(
            id,
            session_id.clone(),
            self.catalog.default_brief(),
            self.catalog.culprit(),
            &self.catalog.city_ids(),
            &mut pick,
        )?;

        info!(case_id = %case.id, session_id = %session_id, trail_len = case.trail.len(), "case opened");
        self.cases.insert(case.clone());
        Ok(case)
    }

    pub fn get(&self, case_id: &CaseId) -> Result<GameCase, GameError> {
        self.cases.get(case_id).ok_or(GameError::CaseNotFound)
    }

    /// Apply a travel move and report the landing city.
    pub fn travel(
        &self,
        case_id: &CaseId,
        destination: Option<CityId>,
    ) -> Result<TravelResult, GameError> {
        let catalog_ids = self.catalog.city_ids();
        let (landed, remaining_steps, status) = self
            .cases
            .with_case(case_id, |case| {
                let destination = destination
                    .as_ref()
                    .filter(|c| !c.as_str().is_empty())
                    .ok_or(GameError::MissingCityId)?;
                let mut pick = |bound: usize| self.random.pick(bound);
                case.travel(destination, &catalog_ids, &mut pick)?;
                Ok::<_, GameError>((case.current_city.clone(), case.remaining_steps, case.status))
            })
            .ok_or(GameError::CaseNotFound)??;

        Ok(TravelResult {
            city: self.catalog.city(&landed).cloned(),
            remaining_steps,
            status,
        })
    }

    /// Issue the one-shot warrant and resolve the outcome.
    pub fn issue_warrant(
        &self,
        case_id: &CaseId,
        suspect_id: Option<SuspectId>,
    ) -> Result<WarrantResult, GameError> {
        let suspect_id = suspect_id
            .filter(|s| !s.as_str().is_empty())
            .ok_or(GameError::MissingSuspectId)?;
        let now = self.clock.now();

        let (outcome, status, city_id, suspect_name, correct_suspect_id) = self
            .cases
            .with_case(case_id, |case| {
                // Duplicate warrants win over suspect validation so the
                // one-shot rule holds no matter what is submitted.
                if case.warrant_issued {
                    return Err(GameError::WarrantAlreadyIssued);
                }
                let suspect = self
                    .catalog
                    .suspect(&suspect_id)
                    .ok_or(GameError::InvalidSuspect)?;
                let name = suspect.name.clone();
                let outcome = case.issue_warrant(suspect_id.clone(), now)?;
                Ok::<_, GameError>((
                    outcome,
                    case.status,
                    case.current_city.clone(),
                    name,
                    case.correct_suspect_id.clone(),
                ))
            })
            .ok_or(GameError::CaseNotFound)??;

        info!(case_id = %case_id, outcome = ?outcome, "warrant issued");

        Ok(WarrantResult {
            outcome,
            status,
            warrant: Warrant {
                suspect_id,
                city_id,
                issued_at: now,
            },
            suspect_name,
            correct_suspect: self.catalog.suspect(&correct_suspect_id).cloned(),
        })
    }

    /// Post-game debrief; rejected while the case is still running.
    pub fn summary(&self, case_id: &CaseId) -> Result<SummaryView, GameError> {
        let case = self.get(case_id)?;
        if case.is_active() {
            return Err(GameError::CaseStillActive);
        }

        Ok(SummaryView {
            outcome: case.status,
            steps_used: case.steps_used(),
            total_steps: STARTING_STEPS,
            correct_suspect: self.catalog.suspect(&case.correct_suspect_id).cloned(),
            player_warrant: case.warrant,
            cities_visited: case.visited_cities,
            stolen_treasure: case.stolen_treasure,
        })
    }

    /// The player's current surroundings, with hydrated travel options.
    pub fn current_city(&self, case_id: &CaseId) -> Result<CityView, GameError> {
        let case = self.get(case_id)?;
        let city = self
            .catalog
            .city(&case.current_city)
            .ok_or(GameError::CityNotFound)?
            .clone();

        let travel_options = if case.is_active() && !case.is_final_city() {
            case.travel_options
                .iter()
                .filter_map(|id| self.catalog.city(id))
                .map(|c| TravelOption {
                    city_id: c.id.clone(),
                    city_name: c.name.clone(),
                    description: format!("Travel to {}, {}", c.name, c.region),
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(CityView {
            city,
            travel_options,
            remaining_steps: case.remaining_steps,
            is_final_city: case.is_final_city(),
        })
    }

    /// The full rogues' gallery, gated on the case existing.
    pub fn suspects(&self, case_id: &CaseId) -> Result<Vec<Suspect>, GameError> {
        self.get(case_id)?;
        Ok(self.catalog.suspects().to_vec())
    }
}
