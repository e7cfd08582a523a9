//! Application composition root.

use std::sync::Arc;

use crate::infrastructure::catalog::GameCatalog;
use crate::infrastructure::clock::{SystemClock, SystemRandom};
use crate::infrastructure::ports::{ClockPort, LlmPort, RandomPort};
use crate::stores::{CaseStore, ChatStore, SessionStore};
use crate::use_cases::{CaseOps, ChatOps, SessionOps};

/// The wired application: every operation group sharing one set of stores.
pub struct App {
    pub sessions: SessionOps,
    pub cases: CaseOps,
    pub chat: ChatOps,
}

impl App {
    /// Production wiring: real clock and RNG, optional LLM generator.
    pub fn new(llm: Option<Arc<dyn LlmPort>>) -> Self {
        Self::with_ports(Arc::new(SystemClock), Arc::new(SystemRandom), llm)
    }

    /// Wiring with injectable clock and randomness, used by tests.
    pub fn with_ports(
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        llm: Option<Arc<dyn LlmPort>>,
    ) -> Self {
        let catalog = Arc::new(GameCatalog::new());
        let sessions = Arc::new(SessionStore::new());
        let cases = Arc::new(CaseStore::new());
        let chats = Arc::new(ChatStore::new());

        Self {
            sessions: SessionOps::new(sessions, clock.clone(), random.clone()),
            cases: CaseOps::new(cases.clone(), catalog.clone(), clock.clone(), random),
            chat: ChatOps::new(cases, chats, catalog, clock, llm),
        }
    }
}
