//! Raw wire payload types.
//!
//! These mirror what the upstream service actually sends, optionality and
//! all. Counts are kept as raw JSON values because partially-typed payloads
//! sometimes carry strings where numbers belong; the normalizer in
//! `profile.rs` decides what is acceptable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Moderation label attached to a subject by a labeler service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// DID of the labeler that emitted this label.
    pub src: String,
    /// URI of the labeled subject.
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    /// Label value, e.g. "spam".
    pub val: String,
    /// True when this label negates an earlier one with the same value.
    #[serde(default)]
    pub neg: bool,
    /// Creation timestamp, kept verbatim from the wire.
    pub cts: String,
}

/// The authenticated actor's relationship to the profiled user, as nested
/// inside a profile view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    /// URI of the actor's follow record, when the actor follows the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<String>,
    /// URI of the user's follow record, when the user follows the actor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    /// URI of the actor's block record, when the actor blocks the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_by: Option<bool>,
}

/// A user profile as returned by an upstream query, loosely typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub did: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Raw count values; may hold anything in a partially-typed payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follows_count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<Value>,
    /// When the service last indexed this profile, as a raw ISO-8601 string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<ViewerState>,
}

/// A post as returned by the session's feed queries.
///
/// Post semantics live outside this crate; the record body is carried as
/// raw JSON for the caller to interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub uri: String,
    pub cid: String,
    #[serde(default)]
    pub record: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<String>,
}

/// A user list as returned by the session's list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub uri: String,
    pub cid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}
