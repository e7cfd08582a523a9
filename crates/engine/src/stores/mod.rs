//! In-memory stores backing the game.
//!
//! Each store wraps a `DashMap`, so per-key mutations go through the map's
//! entry locks and concurrent requests touching the same case, session, or
//! chat history cannot interleave a read-modify-write. Different keys never
//! contend.

pub mod cases;
pub mod chats;
pub mod sessions;

pub use cases::CaseStore;
pub use chats::ChatStore;
pub use sessions::{SessionStore, MAX_SESSIONS};
