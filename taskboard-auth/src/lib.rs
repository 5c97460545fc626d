// Client setup: settings and credential persistence
mod client;
mod error;

// Session state and route guarding
pub mod session;

pub use client::{connect, connect_with_store, FileTokenStore, Settings};
pub use error::AuthError;
pub use session::{MemoryNavigator, Navigator, RoutePolicy, SessionGuard, SessionPhase, SessionState};
