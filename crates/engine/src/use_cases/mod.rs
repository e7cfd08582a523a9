//! Application operations: one struct per area, each holding the shared
//! stores and ports it needs. The HTTP layer only ever calls these.

pub mod cases;
pub mod chat;
pub mod sessions;

pub use cases::{CaseOps, CityView, SummaryView, TravelOption, TravelResult, WarrantResult};
pub use chat::{ChatOps, ChatOutcome};
pub use sessions::SessionOps;
