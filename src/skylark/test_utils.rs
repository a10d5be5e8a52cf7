//! Shared test fixtures.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::skylark::session::{AgentSession, Page, PageOptions, RecordRef, SessionError};
use crate::skylark::views::{ListView, PostView};

pub(crate) const FOLLOW_URI: &str = "at://did:plc:bot/app.bsky.graph.follow/3kfollow";
pub(crate) const BLOCK_URI: &str = "at://did:plc:bot/app.bsky.graph.block/3kblock";

/// A single call observed by [`MockSession`], in the order issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionCall {
    Follow { did: String },
    Unfollow { did: String },
    Mute { did: String },
    Unmute { did: String },
    Block { did: String },
    Unblock { did: String },
    GetUserPosts { did: String, options: PageOptions },
    GetUserLikes { did: String, options: PageOptions },
    GetUserLists { did: String, options: PageOptions },
}

/// Recording fake for the session boundary.
///
/// Every call is appended to the log before the configured outcome is
/// applied, so tests can assert both "what was asked" and "what happened."
#[derive(Default)]
pub(crate) struct MockSession {
    calls: Mutex<Vec<SessionCall>>,
    /// When set, every call fails with a transport error after being logged.
    fail: bool,
    /// Items returned by the post/like queries.
    pub posts: Vec<PostView>,
    /// Items returned by the list query.
    pub lists: Vec<ListView>,
    /// Cursor returned with every page.
    pub cursor: Option<String>,
}

impl MockSession {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub(crate) fn with_page(
        posts: Vec<PostView>,
        lists: Vec<ListView>,
        cursor: Option<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            posts,
            lists,
            cursor,
            ..Self::default()
        })
    }

    pub(crate) async fn calls(&self) -> Vec<SessionCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: SessionCall) -> Result<(), SessionError> {
        self.calls.lock().await.push(call);
        if self.fail {
            return Err(SessionError::Transport("mock session failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AgentSession for MockSession {
    async fn follow(&self, did: &str) -> Result<RecordRef, SessionError> {
        self.record(SessionCall::Follow {
            did: did.to_string(),
        })
        .await?;
        Ok(RecordRef {
            uri: FOLLOW_URI.to_string(),
            cid: "bafyfollow".to_string(),
        })
    }

    async fn unfollow(&self, did: &str) -> Result<(), SessionError> {
        self.record(SessionCall::Unfollow {
            did: did.to_string(),
        })
        .await
    }

    async fn mute(&self, did: &str) -> Result<(), SessionError> {
        self.record(SessionCall::Mute {
            did: did.to_string(),
        })
        .await
    }

    async fn unmute(&self, did: &str) -> Result<(), SessionError> {
        self.record(SessionCall::Unmute {
            did: did.to_string(),
        })
        .await
    }

    async fn block(&self, did: &str) -> Result<RecordRef, SessionError> {
        self.record(SessionCall::Block {
            did: did.to_string(),
        })
        .await?;
        Ok(RecordRef {
            uri: BLOCK_URI.to_string(),
            cid: "bafyblock".to_string(),
        })
    }

    async fn unblock(&self, did: &str) -> Result<(), SessionError> {
        self.record(SessionCall::Unblock {
            did: did.to_string(),
        })
        .await
    }

    async fn get_user_posts(
        &self,
        did: &str,
        options: PageOptions,
    ) -> Result<Page<PostView>, SessionError> {
        self.record(SessionCall::GetUserPosts {
            did: did.to_string(),
            options,
        })
        .await?;
        Ok(Page {
            items: self.posts.clone(),
            cursor: self.cursor.clone(),
        })
    }

    async fn get_user_likes(
        &self,
        did: &str,
        options: PageOptions,
    ) -> Result<Page<PostView>, SessionError> {
        self.record(SessionCall::GetUserLikes {
            did: did.to_string(),
            options,
        })
        .await?;
        Ok(Page {
            items: self.posts.clone(),
            cursor: self.cursor.clone(),
        })
    }

    async fn get_user_lists(
        &self,
        did: &str,
        options: PageOptions,
    ) -> Result<Page<ListView>, SessionError> {
        self.record(SessionCall::GetUserLists {
            did: did.to_string(),
            options,
        })
        .await?;
        Ok(Page {
            items: self.lists.clone(),
            cursor: self.cursor.clone(),
        })
    }
}
