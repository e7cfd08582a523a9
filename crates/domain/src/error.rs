//! Closed error taxonomy for game operations.
//!
//! Every domain failure is a value from this enum; nothing in the domain or
//! the stores panics across a boundary. The HTTP facade's only job is mapping
//! `code()` to a status.

use thiserror::Error;

/// Unified error type for session, case, and chat operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    // Sessions
    #[error("Session not found")]
    SessionNotFound,
    #[error("Session expired")]
    SessionExpired,
    #[error("Session ID required")]
    MissingSession,
    #[error("Invalid session ID format")]
    InvalidSession,
    #[error("Server at capacity")]
    MaxSessionsReached,

    // Cases
    #[error("Case not found")]
    CaseNotFound,
    #[error("Active case already exists")]
    ActiveCaseExists,
    #[error("Case is already completed")]
    CaseCompleted,
    #[error("Case is still active")]
    CaseStillActive,

    // Travel
    #[error("No remaining steps")]
    NoSteps,
    #[error("Already in this city")]
    SameCity,
    #[error("Invalid travel destination")]
    InvalidDestination,
    #[error("City ID is required")]
    MissingCityId,
    #[error("City not found")]
    CityNotFound,

    // Warrants
    #[error("Suspect ID is required")]
    MissingSuspectId,
    #[error("Suspect not found")]
    InvalidSuspect,
    #[error("Warrant already issued for this case")]
    WarrantAlreadyIssued,

    // NPC chat
    #[error("NPC not found")]
    NpcNotFound,
    #[error("NPC is not in your current city")]
    NpcWrongCity,
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Message exceeds 280 character limit")]
    MessageTooLong,
    #[error("Conversation limit reached with this NPC")]
    ChatCapReached,
}

impl GameError {
    /// Stable machine-readable code carried in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::MissingSession => "MISSING_SESSION",
            Self::InvalidSession => "INVALID_SESSION",
            Self::MaxSessionsReached => "MAX_SESSIONS_REACHED",
            Self::CaseNotFound => "CASE_NOT_FOUND",
            Self::ActiveCaseExists => "ACTIVE_CASE_EXISTS",
            Self::CaseCompleted => "CASE_COMPLETED",
            Self::CaseStillActive => "CASE_STILL_ACTIVE",
            Self::NoSteps => "NO_STEPS",
            Self::SameCity => "SAME_CITY",
            Self::InvalidDestination => "INVALID_DESTINATION",
            Self::MissingCityId => "MISSING_CITY_ID",
            Self::CityNotFound => "CITY_NOT_FOUND",
            Self::MissingSuspectId => "MISSING_SUSPECT_ID",
            Self::InvalidSuspect => "INVALID_SUSPECT",
            Self::WarrantAlreadyIssued => "WARRANT_ALREADY_ISSUED",
            Self::NpcNotFound => "NPC_NOT_FOUND",
            Self::NpcWrongCity => "NPC_WRONG_CITY",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::MessageTooLong => "MESSAGE_TOO_LONG",
            Self::ChatCapReached => "CHAT_CAP_REACHED",
        }
    }
}
