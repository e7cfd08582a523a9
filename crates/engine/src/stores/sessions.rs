//! Session registry with a global capacity ceiling.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use gumshoe_domain::{GameError, GameSession, SessionId};

/// Registry-wide ceiling on concurrent sessions.
pub const MAX_SESSIONS: usize = 1000;

#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, GameSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Register a freshly minted session. Fails once the registry is full.
    pub fn create(&self, id: SessionId, now: DateTime<Utc>) -> Result<GameSession, GameError> {
        if self.sessions.len() >= MAX_SESSIONS {
            return Err(GameError::MaxSessionsReached);
        }
        let session = GameSession::new(id.clone(), now);
        self.sessions.insert(id, session.clone());
        Ok(session)
    }

    pub fn get(&self, id: &SessionId) -> Option<GameSession> {
        self.sessions.get(id).map(|s| s.clone())
    }

    /// Refresh the idle window. Returns the refreshed session if present.
    pub fn touch(&self, id: &SessionId, now: DateTime<Utc>) -> Option<GameSession> {
        self.sessions.get_mut(id).map(|mut s| {
            s.touch(now);
            s.clone()
        })
    }

    /// Adopt an externally supplied id: create the session if absent,
    /// otherwise refresh it. Bypasses the capacity ceiling, matching the
    /// create-on-first-touch contract for valid-format unknown tokens.
    pub fn ensure(&self, id: &SessionId, now: DateTime<Utc>) -> GameSession {
        self.sessions
            .entry(id.clone())
            .and_modify(|s| s.touch(now))
            .or_insert_with(|| GameSession::new(id.clone(), now))
            .clone()
    }

    pub fn delete(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Absent sessions count as expired: an unknown token and a reaped one
    /// are indistinguishable to the caller.
    pub fn is_expired(&self, id: &SessionId, now: DateTime<Utc>) -> bool {
        match self.sessions.get(id) {
            Some(session) => session.is_expired(now),
            None => true,
        }
    }
}
