//! Gumshoe domain - core game types and invariants.
//!
//! Everything in this crate is pure logic: no I/O, no clocks, no RNG.
//! Time is passed in as `chrono::DateTime<Utc>` values and randomness is
//! injected as a pick-an-index closure, so the case/travel/warrant rules
//! are fully deterministic under test.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{
    validate_player_message, CaseBrief, CaseStatus, City, GameCase, GameSession, Npc,
    NpcChatHistory, NpcChatMessage, SessionStatus, StolenTreasure, Suspect, SuspectTraits,
    Warrant, WarrantOutcome, CHAT_CAP, MAX_MESSAGE_CHARS, MAX_TRAIL_LEN, MIN_TRAIL_LEN,
    SESSION_TTL_HOURS, STARTING_STEPS,
};
pub use error::GameError;
pub use ids::{CaseId, CityId, NpcId, SessionId, SuspectId};

/// Uniform index picker injected into trail and decoy generation.
///
/// Implementations must return a value in `0..bound` for `bound > 0`.
pub type PickIndex<'a> = &'a mut dyn FnMut(usize) -> usize;
