//! Player session with idle expiry.
//!
//! A session is an opaque bearer token scoping one player's in-progress game.
//! Every authenticated access refreshes `last_accessed_at`, restarting the
//! 24h expiry window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// Idle hours after which a session counts as expired.
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Deleted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: SessionId,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(id: SessionId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            status: SessionStatus::Active,
            created_at: now,
            last_accessed_at: now,
        }
    }

    /// Refresh the idle window.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed_at = now;
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.last_accessed_at >= Duration::hours(SESSION_TTL_HOURS)
    }
}
