//! Canonical profile entity and view normalization.
//!
//! A [`Profile`] is a passive snapshot of a remote user plus the actor's
//! relationship to them. It never fetches or refreshes itself; collaborators
//! construct it (usually via [`Profile::from_view`]) and mutation methods
//! keep the cached relationship fields in step with the session's network
//! calls, so predicate reads stay current without a re-fetch.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::skylark::error::Result;
use crate::skylark::session::{AgentSession, Page, PageOptions};
use crate::skylark::utils::parse_datetime;
use crate::skylark::views::{Label, ListView, PostView, ProfileView};

/// Plain attribute set used to construct a [`Profile`] directly.
///
/// All optional fields default to absent; `labels: None` means the snapshot
/// did not carry labels and the entity stores an empty list.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    pub did: String,
    pub handle: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub follower_count: Option<u64>,
    pub following_count: Option<u64>,
    pub posts_count: Option<u64>,
    pub labels: Option<Vec<Label>>,
    pub indexed_at: Option<DateTime<Utc>>,
    pub follow_uri: Option<String>,
    pub followed_by_uri: Option<String>,
    pub block_uri: Option<String>,
    pub is_muted: bool,
    pub is_blocked_by: bool,
}

/// Canonical snapshot of a remote user's profile as seen by the bot actor.
///
/// Relationship predicates ([`Profile::is_following`] and friends) are
/// always computed from the backing fields, never stored, so they cannot
/// drift from the cached record URIs.
#[derive(Clone)]
pub struct Profile {
    /// Decentralized identifier of the user. Immutable.
    pub did: String,
    /// Current handle. Updated only by an external refresh.
    pub handle: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub follower_count: Option<u64>,
    pub following_count: Option<u64>,
    pub posts_count: Option<u64>,
    /// Moderation labels. Always present, possibly empty.
    pub labels: Vec<Label>,
    /// When the remote system last indexed this profile.
    pub indexed_at: Option<DateTime<Utc>>,
    /// URI of the actor's follow record, present iff the actor follows the user.
    pub follow_uri: Option<String>,
    /// URI of the user's follow record for the actor.
    pub followed_by_uri: Option<String>,
    /// URI of the actor's block record, present iff the actor blocks the user.
    pub block_uri: Option<String>,
    pub is_muted: bool,
    pub is_blocked_by: bool,
    session: Arc<dyn AgentSession>,
}

/// Manual Debug impl: the session handle has nothing useful to print.
impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("did", &self.did)
            .field("handle", &self.handle)
            .field("follow_uri", &self.follow_uri)
            .field("followed_by_uri", &self.followed_by_uri)
            .field("block_uri", &self.block_uri)
            .field("is_muted", &self.is_muted)
            .field("is_blocked_by", &self.is_blocked_by)
            .finish()
    }
}

impl Profile {
    /// Builds a profile from already-canonical attributes.
    ///
    /// Pure value construction with no error paths: provided fields are
    /// stored, absent ones stay absent, and `labels` defaults to empty.
    pub fn new(data: ProfileData, session: Arc<dyn AgentSession>) -> Self {
        Self {
            did: data.did,
            handle: data.handle,
            display_name: data.display_name,
            description: data.description,
            avatar_url: data.avatar_url,
            banner_url: data.banner_url,
            follower_count: data.follower_count,
            following_count: data.following_count,
            posts_count: data.posts_count,
            labels: data.labels.unwrap_or_default(),
            indexed_at: data.indexed_at,
            follow_uri: data.follow_uri,
            followed_by_uri: data.followed_by_uri,
            block_uri: data.block_uri,
            is_muted: data.is_muted,
            is_blocked_by: data.is_blocked_by,
            session,
        }
    }

    /// Normalizes a raw profile view into a canonical profile.
    ///
    /// Total over its input: malformed optional data degrades to absent,
    /// never to an error. Counts are accepted only when numeric, `indexedAt`
    /// only when it parses as RFC 3339, and a missing viewer sub-object
    /// leaves every relationship field absent.
    pub fn from_view(view: ProfileView, session: Arc<dyn AgentSession>) -> Self {
        let viewer = view.viewer.unwrap_or_default();
        Self {
            did: view.did,
            handle: view.handle,
            display_name: view.display_name,
            description: view.description,
            avatar_url: view.avatar,
            banner_url: view.banner,
            // as_u64 rejects strings, floats with a fraction, and negatives.
            follower_count: view.followers_count.as_ref().and_then(Value::as_u64),
            following_count: view.follows_count.as_ref().and_then(Value::as_u64),
            posts_count: view.posts_count.as_ref().and_then(Value::as_u64),
            labels: view.labels.unwrap_or_default(),
            indexed_at: view.indexed_at.as_deref().and_then(parse_datetime),
            follow_uri: viewer.following,
            followed_by_uri: viewer.followed_by,
            block_uri: viewer.blocking,
            is_muted: viewer.muted.unwrap_or(false),
            is_blocked_by: viewer.blocked_by.unwrap_or(false),
            session,
        }
    }

    /// True when the actor follows this user.
    pub fn is_following(&self) -> bool {
        self.follow_uri.is_some()
    }

    /// True when this user follows the actor.
    pub fn followed_by(&self) -> bool {
        self.followed_by_uri.is_some()
    }

    /// True when the actor blocks this user.
    pub fn is_blocking(&self) -> bool {
        self.block_uri.is_some()
    }

    /// True when the actor and this user follow each other.
    pub fn is_mutual(&self) -> bool {
        self.is_following() && self.followed_by()
    }

    /// Follows this user on the actor's behalf.
    ///
    /// On success the returned follow record URI is cached in `follow_uri`
    /// and also returned. On failure the field is untouched and the error
    /// propagates; the entity is never left partially updated.
    pub async fn follow(&mut self) -> Result<String> {
        let record = self.session.follow(&self.did).await?;
        self.follow_uri = Some(record.uri.clone());
        tracing::debug!(target: "skylark::profile", "Followed {}: {}", self.did, record.uri);
        Ok(record.uri)
    }

    /// Unfollows this user.
    ///
    /// The cached `follow_uri` is intentionally left as-is: it is advisory
    /// until the next full refresh.
    pub async fn unfollow(&self) -> Result<()> {
        self.session.unfollow(&self.did).await?;
        tracing::debug!(target: "skylark::profile", "Unfollowed {}", self.did);
        Ok(())
    }

    /// Mutes this user. Does not alter the cached `is_muted` flag.
    pub async fn mute(&self) -> Result<()> {
        self.session.mute(&self.did).await?;
        tracing::debug!(target: "skylark::profile", "Muted {}", self.did);
        Ok(())
    }

    /// Unmutes this user. Does not alter the cached `is_muted` flag.
    pub async fn unmute(&self) -> Result<()> {
        self.session.unmute(&self.did).await?;
        tracing::debug!(target: "skylark::profile", "Unmuted {}", self.did);
        Ok(())
    }

    /// Blocks this user on the actor's behalf.
    ///
    /// On success the returned block record URI is cached in `block_uri`
    /// and also returned.
    pub async fn block(&mut self) -> Result<String> {
        let record = self.session.block(&self.did).await?;
        self.block_uri = Some(record.uri.clone());
        tracing::debug!(target: "skylark::profile", "Blocked {}: {}", self.did, record.uri);
        Ok(record.uri)
    }

    /// Unblocks this user. Does not alter the cached `block_uri`.
    pub async fn unblock(&self) -> Result<()> {
        self.session.unblock(&self.did).await?;
        tracing::debug!(target: "skylark::profile", "Unblocked {}", self.did);
        Ok(())
    }

    /// Fetches a page of this user's posts.
    ///
    /// A missing limit defaults to
    /// [`DEFAULT_PAGE_LIMIT`](crate::skylark::session::DEFAULT_PAGE_LIMIT);
    /// the session enforces the bound.
    pub async fn get_posts(&self, options: PageOptions) -> Result<Page<PostView>> {
        let page = self
            .session
            .get_user_posts(&self.did, options.or_default_limit())
            .await?;
        Ok(page)
    }

    /// Fetches a page of posts this user has liked.
    pub async fn get_liked_posts(&self, options: PageOptions) -> Result<Page<PostView>> {
        let page = self
            .session
            .get_user_likes(&self.did, options.or_default_limit())
            .await?;
        Ok(page)
    }

    /// Fetches a page of this user's lists.
    pub async fn get_lists(&self, options: PageOptions) -> Result<Page<ListView>> {
        let page = self
            .session
            .get_user_lists(&self.did, options.or_default_limit())
            .await?;
        Ok(page)
    }
}
