//! Boundary contract with the network/session client.
//!
//! The bot's authenticated session performs all network actions on the
//! actor's behalf. Entities hold an `Arc<dyn AgentSession>` and call
//! through it; authentication, rate limiting, retries, and cancellation
//! all live on the implementor's side of this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::skylark::views::{ListView, PostView};

/// Page size applied when the caller does not provide a limit.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Errors surfaced by the session client.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session is not (or no longer) authorized for the action.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The referenced user or record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited by the service")]
    RateLimited,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Reference to a relationship record created on the actor's behalf.
///
/// The `uri` is the opaque marker entities cache locally; the `cid` is the
/// record's content hash, carried along because the wire always pairs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    pub uri: String,
    pub cid: String,
}

/// Caller-supplied pagination options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl PageOptions {
    /// Fills in [`DEFAULT_PAGE_LIMIT`] when the caller did not set a limit.
    /// A caller-supplied limit and cursor always win.
    pub(crate) fn or_default_limit(mut self) -> Self {
        self.limit = self.limit.or(Some(DEFAULT_PAGE_LIMIT));
        self
    }
}

/// One page of results. `cursor` is absent when no further pages exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// The authenticated session acting for the bot.
///
/// Implementations are expected to be idempotent at the protocol level
/// (re-following an already-followed user should not error); callers of
/// this trait assume, but do not enforce, that property.
#[async_trait]
pub trait AgentSession: Send + Sync {
    /// Creates a follow record for `did` and returns its reference.
    async fn follow(&self, did: &str) -> Result<RecordRef, SessionError>;

    /// Deletes the actor's follow record for `did`.
    async fn unfollow(&self, did: &str) -> Result<(), SessionError>;

    /// Mutes `did` for the actor.
    async fn mute(&self, did: &str) -> Result<(), SessionError>;

    /// Unmutes `did` for the actor.
    async fn unmute(&self, did: &str) -> Result<(), SessionError>;

    /// Creates a block record for `did` and returns its reference.
    async fn block(&self, did: &str) -> Result<RecordRef, SessionError>;

    /// Deletes the actor's block record for `did`.
    async fn unblock(&self, did: &str) -> Result<(), SessionError>;

    /// Fetches a page of posts authored by `did`.
    async fn get_user_posts(
        &self,
        did: &str,
        options: PageOptions,
    ) -> Result<Page<PostView>, SessionError>;

    /// Fetches a page of posts liked by `did`.
    async fn get_user_likes(
        &self,
        did: &str,
        options: PageOptions,
    ) -> Result<Page<PostView>, SessionError>;

    /// Fetches a page of lists owned by `did`.
    async fn get_user_lists(
        &self,
        did: &str,
        options: PageOptions,
    ) -> Result<Page<ListView>, SessionError>;
}
