pub mod chat;
pub mod city;
pub mod game_case;
pub mod session;
pub mod suspect;

pub use chat::{
    validate_player_message, NpcChatHistory, NpcChatMessage, CHAT_CAP, MAX_MESSAGE_CHARS,
};
pub use city::{City, Npc};
pub use game_case::{
    CaseBrief, CaseStatus, GameCase, StolenTreasure, Warrant, WarrantOutcome, MAX_TRAIL_LEN,
    MIN_TRAIL_LEN, STARTING_STEPS,
};
pub use session::{GameSession, SessionStatus, SESSION_TTL_HOURS};
pub use suspect::{Suspect, SuspectTraits};
