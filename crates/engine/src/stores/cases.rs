//! Case store with a session -> active case side index.

use dashmap::DashMap;
use gumshoe_domain::{CaseId, GameCase, SessionId};

#[derive(Default)]
pub struct CaseStore {
    cases: DashMap<CaseId, GameCase>,
    // Updated on every insert; never removed, only overwritten. Whether the
    // indexed case is still active is re-checked against the case itself.
    active_by_session: DashMap<SessionId, CaseId>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, case: GameCase) {
        self.active_by_session
            .insert(case.session_id.clone(), case.id.clone());
        self.cases.insert(case.id.clone(), case);
    }

    pub fn get(&self, id: &CaseId) -> Option<GameCase> {
        self.cases.get(id).map(|c| c.clone())
    }

    /// The id most recently registered for this session. The case it points
    /// at may have finished since.
    pub fn active_case_id(&self, session_id: &SessionId) -> Option<CaseId> {
        self.active_by_session.get(session_id).map(|c| c.clone())
    }

    /// Run a closure under the case's entry lock. This is the only mutation
    /// path, so concurrent travels or warrants on one case serialize here.
    pub fn with_case<R>(&self, id: &CaseId, f: impl FnOnce(&mut GameCase) -> R) -> Option<R> {
        self.cases.get_mut(id).map(|mut case| f(&mut case))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gumshoe_domain::{CaseBrief, CityId, StolenTreasure, SuspectId};

    fn sample_case(case_id: &str, session_id: &str) -> GameCase {
        let catalog: Vec<CityId> = ["bangkok", "tokyo", "paris", "cairo", "rio", "london"]
            .into_iter()
            .map(CityId::from)
            .collect();
        let mut pick = |_: usize| 0;
        GameCase::open(
            CaseId::new(case_id),
            SessionId::new(session_id),
            CaseBrief {
                title: "t".into(),
                briefing: "b".into(),
                stolen_treasure: StolenTreasure {
                    name: "n".into(),
                    description: "d".into(),
                },
            },
            SuspectId::new("suspect-carmen"),
            &catalog,
            &mut pick,
        )
        .expect("catalog is non-empty")
    }

    #[test]
    fn insert_indexes_the_session() {
        let store = CaseStore::new();
        store.insert(sample_case("case-1", "sess-a"));

        assert_eq!(
            store.active_case_id(&SessionId::new("sess-a")),
            Some(CaseId::new("case-1"))
        );
        assert!(store.get(&CaseId::new("case-1")).is_some());
        assert!(store.get(&CaseId::new("case-2")).is_none());
    }

    #[test]
    fn a_new_case_overwrites_the_session_index() {
        let store = CaseStore::new();
        store.insert(sample_case("case-1", "sess-a"));
        store.insert(sample_case("case-2", "sess-a"));

        assert_eq!(
            store.active_case_id(&SessionId::new("sess-a")),
            Some(CaseId::new("case-2"))
        );
    }

    #[test]
    fn with_case_mutations_persist() {
        let store = CaseStore::new();
        store.insert(sample_case("case-1", "sess-a"));
        let id = CaseId::new("case-1");

        store
            .with_case(&id, |case| case.remaining_steps -= 1)
            .expect("present");

        let case = store.get(&id).expect("present");
        assert_eq!(case.remaining_steps, 9);
    }
}
