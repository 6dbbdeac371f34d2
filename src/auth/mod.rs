pub mod cookies;
pub mod routes;
pub mod session_manager;
pub mod session_store;
pub mod user;

// re-export
pub use session_manager::{PasswordSessions, SessionAuthResult, SessionManager};
pub use session_store::{MemorySessionStore, SessionStore};
