//! Core profile and relationship state for a Bluesky-style bot actor.
//!
//! The crate normalizes raw profile view payloads fetched by a session
//! client into canonical [`Profile`] entities, and keeps locally cached
//! relationship state (follow, block, mute) in step with remote mutation
//! calls so callers never need a re-fetch just to read a predicate.
//!
//! Network access lives entirely behind the [`AgentSession`] trait; this
//! crate never talks to the wire itself.

use tracing_subscriber::EnvFilter;

pub mod skylark;

pub use skylark::error::{Result, SkylarkError};
pub use skylark::profile::{Profile, ProfileData};
pub use skylark::session::{
    AgentSession, Page, PageOptions, RecordRef, SessionError, DEFAULT_PAGE_LIMIT,
};
pub use skylark::views::{Label, ListView, PostView, ProfileView, ViewerState};

/// Installs the global tracing subscriber for bot applications.
///
/// The filter is read from `RUST_LOG`, falling back to `info`. Returns an
/// error when a subscriber is already installed.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|e| SkylarkError::LoggingSetup(e.to_string()))
}
