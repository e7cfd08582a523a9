//! Session lifecycle operations.

use std::sync::Arc;

use gumshoe_domain::{GameError, GameSession, SessionId};
use tracing::debug;

use crate::infrastructure::ports::{ClockPort, RandomPort};
use crate::stores::SessionStore;

pub struct SessionOps {
    store: Arc<SessionStore>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl SessionOps {
    pub fn new(
        store: Arc<SessionStore>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            store,
            clock,
            random,
        }
    }

    /// Mint a fresh session. Fails with `MaxSessionsReached` at capacity.
    pub fn create(&self) -> Result<GameSession, GameError> {
        let id = SessionId::generate(self.random.gen_uuid());
        let session = self.store.create(id, self.clock.now())?;
        debug!(session_id = %session.id, "session created");
        Ok(session)
    }

    /// Look up and refresh a session.
    ///
    /// Absent sessions report expired rather than not-found: an unknown
    /// token and a reaped one are deliberately indistinguishable.
    pub fn resume(&self, id: &SessionId) -> Result<GameSession, GameError> {
        let now = self.clock.now();
        if self.store.is_expired(id, now) {
            return Err(GameError::SessionExpired);
        }
        self.store.touch(id, now).ok_or(GameError::SessionNotFound)
    }

    pub fn delete(&self, id: &SessionId) -> bool {
        self.store.delete(id)
    }

    /// Gate for the case routes: validate the raw header token, reject
    /// expired sessions, and adopt valid-format unknown tokens.
    pub fn authorize(&self, raw: Option<&str>) -> Result<SessionId, GameError> {
        let raw = match raw {
            Some(value) if !value.is_empty() => value,
            _ => return Err(GameError::MissingSession),
        };
        if !SessionId::is_valid_format(raw) {
            return Err(GameError::InvalidSession);
        }

        let id = SessionId::new(raw);
        let now = self.clock.now();
        if let Some(session) = self.store.get(&id) {
            if session.is_expired(now) {
                return Err(GameError::SessionExpired);
            }
        }
        self.store.ensure(&id, now);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::ManualClock;
    use chrono::{DateTime, Duration, Utc};
    use uuid::Uuid;

    struct SeqRandom;

    impl RandomPort for SeqRandom {
        fn pick(&self, _bound: usize) -> usize {
            0
        }

        fn gen_uuid(&self) -> Uuid {
            Uuid::new_v4()
        }
    }

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
    }

    fn ops_with_clock(clock: Arc<ManualClock>) -> SessionOps {
        SessionOps::new(Arc::new(SessionStore::new()), clock, Arc::new(SeqRandom))
    }

    #[test]
    fn created_sessions_have_valid_ids_and_resume() {
        let ops = ops_with_clock(Arc::new(ManualClock::at(start())));
        let session = ops.create().expect("below capacity");
        assert!(SessionId::is_valid_format(session.id.as_str()));

        let resumed = ops.resume(&session.id).expect("fresh session");
        assert_eq!(resumed.id, session.id);
    }

    #[test]
    fn resume_reports_unknown_ids_as_expired() {
        let ops = ops_with_clock(Arc::new(ManualClock::at(start())));
        let err = ops
            .resume(&SessionId::new("sess-00000000-0000-0000-0000-000000000009"))
            .expect_err("never created");
        assert_eq!(err, GameError::SessionExpired);
    }

    #[test]
    fn idle_session_expires_after_24_hours() {
        let clock = Arc::new(ManualClock::at(start()));
        let ops = ops_with_clock(clock.clone());
        let session = ops.create().expect("below capacity");

        clock.advance(Duration::hours(24));
        let err = ops.resume(&session.id).expect_err("idle past the window");
        assert_eq!(err, GameError::SessionExpired);
    }

    #[test]
    fn resume_restarts_the_idle_window() {
        let clock = Arc::new(ManualClock::at(start()));
        let ops = ops_with_clock(clock.clone());
        let session = ops.create().expect("below capacity");

        clock.advance(Duration::hours(23));
        ops.resume(&session.id).expect("still fresh");
        clock.advance(Duration::hours(23));
        ops.resume(&session.id).expect("window restarted");
    }

    #[test]
    fn authorize_validates_then_adopts() {
        let clock = Arc::new(ManualClock::at(start()));
        let ops = ops_with_clock(clock.clone());

        assert_eq!(
            ops.authorize(None).expect_err("no header"),
            GameError::MissingSession
        );
        assert_eq!(
            ops.authorize(Some("")).expect_err("empty header"),
            GameError::MissingSession
        );
        assert_eq!(
            ops.authorize(Some("not-a-session")).expect_err("bad shape"),
            GameError::InvalidSession
        );

        let unknown = "sess-00000000-0000-0000-0000-000000000001";
        let id = ops.authorize(Some(unknown)).expect("adopted");
        assert_eq!(id.as_str(), unknown);
        // Adopted sessions behave like created ones.
        ops.resume(&id).expect("present now");
    }

    #[test]
    fn authorize_rejects_expired_sessions() {
        let clock = Arc::new(ManualClock::at(start()));
        let ops = ops_with_clock(clock.clone());
        let session = ops.create().expect("below capacity");

        clock.advance(Duration::hours(25));
        let err = ops
            .authorize(Some(session.id.as_str()))
            .expect_err("idle past the window");
        assert_eq!(err, GameError::SessionExpired);
    }
}
