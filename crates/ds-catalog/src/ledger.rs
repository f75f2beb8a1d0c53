//! # Interaction Ledger
//!
//! Durable per-id "liked" membership and append-only comment lists over
//! the `KvStore` port, plus the user-submitted record collections.
//!
//! Every mutation is a full read-modify-write of one logical collection;
//! there is no atomicity across keys. A single mutex serializes writers so
//! two concurrent toggles cannot lose each other's update. Reads fail
//! open: a missing or unparsable collection is treated as empty and only
//! logged, never surfaced.

use std::sync::Arc;

use chrono::Utc;
use ds_core::error::{AppError, Result};
use ds_core::models::{CommentScope, LedgerComment, LikeTarget, Project, UserDiscussion};
use ds_core::traits::{IdSource, KvStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

/// Durable store keys, one per logical collection.
pub mod keys {
    pub const LIKED_PROJECTS: &str = "liked-project-ids";
    pub const LIKED_DISCUSSIONS: &str = "liked-discussion-ids";
    pub const LIKED_COMMENTS: &str = "liked-comment-ids";
    pub const PROJECT_COMMENTS: &str = "project-comments";
    pub const DISCUSSION_COMMENTS: &str = "discussion-comments";
    pub const USER_PROJECTS: &str = "user-projects";
    pub const USER_DISCUSSIONS: &str = "user-discussions";
}

fn comment_collection_key(scope: CommentScope) -> &'static str {
    match scope {
        CommentScope::Project => keys::PROJECT_COMMENTS,
        CommentScope::Discussion => keys::DISCUSSION_COMMENTS,
    }
}

pub struct Ledger {
    store: Arc<dyn KvStore>,
    pub(crate) ids: Arc<dyn IdSource>,
    write_lock: Mutex<()>,
}

impl Ledger {
    pub fn new(store: Arc<dyn KvStore>, ids: Arc<dyn IdSource>) -> Self {
        Self {
            store,
            ids,
            write_lock: Mutex::new(()),
        }
    }

    // ── Likes ───────────────────────────────────────────────────────────

    /// Current membership; false if the store has no entry yet.
    pub async fn is_liked(&self, target: &LikeTarget) -> bool {
        match target {
            LikeTarget::Project(id) => self.contains(keys::LIKED_PROJECTS, id).await,
            LikeTarget::Discussion(id) => self.contains(keys::LIKED_DISCUSSIONS, id).await,
            LikeTarget::Comment(id) => self.contains(keys::LIKED_COMMENTS, id).await,
        }
    }

    /// Flips membership, persists the full set, and returns the new state.
    /// Two toggles restore the original membership.
    pub async fn toggle_liked(&self, target: &LikeTarget) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        match target {
            LikeTarget::Project(id) => self.toggle_in(keys::LIKED_PROJECTS, *id).await,
            LikeTarget::Discussion(id) => self.toggle_in(keys::LIKED_DISCUSSIONS, id.clone()).await,
            LikeTarget::Comment(id) => self.toggle_in(keys::LIKED_COMMENTS, id.clone()).await,
        }
    }

    // ── Comments ────────────────────────────────────────────────────────

    /// Appends a comment with a freshly generated id and the current
    /// timestamp, persists the full list, and returns the created comment.
    pub async fn add_comment(
        &self,
        scope: CommentScope,
        parent_id: &str,
        author: &str,
        text: &str,
    ) -> Result<LedgerComment> {
        let comment = LedgerComment {
            id: self.ids.next_token(),
            parent_id: parent_id.to_string(),
            author: author.to_string(),
            text: text.to_string(),
            date: Utc::now(),
        };

        let key = comment_collection_key(scope);
        let _guard = self.write_lock.lock().await;
        let mut all: Vec<LedgerComment> = self.read_collection(key).await;
        all.push(comment.clone());
        self.write_collection(key, &all).await?;
        Ok(comment)
    }

    /// Comments under one parent, insertion order (oldest first).
    pub async fn comments_for(&self, scope: CommentScope, parent_id: &str) -> Vec<LedgerComment> {
        let key = comment_collection_key(scope);
        let all: Vec<LedgerComment> = self.read_collection(key).await;
        all.into_iter()
            .filter(|c| c.parent_id == parent_id)
            .collect()
    }

    // ── User-submitted records ──────────────────────────────────────────

    pub async fn user_projects(&self) -> Vec<Project> {
        self.read_collection(keys::USER_PROJECTS).await
    }

    pub(crate) async fn push_user_project(&self, project: Project) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut all = self.user_projects().await;
        all.push(project);
        self.write_collection(keys::USER_PROJECTS, &all).await
    }

    pub async fn user_discussions(&self) -> Vec<UserDiscussion> {
        self.read_collection(keys::USER_DISCUSSIONS).await
    }

    pub(crate) async fn push_user_discussion(&self, discussion: UserDiscussion) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut all = self.user_discussions().await;
        all.push(discussion);
        self.write_collection(keys::USER_DISCUSSIONS, &all).await
    }

    // ── Collection plumbing ─────────────────────────────────────────────

    async fn contains<T>(&self, key: &str, id: &T) -> bool
    where
        T: DeserializeOwned + PartialEq,
    {
        let set: Vec<T> = self.read_collection(key).await;
        set.iter().any(|x| x == id)
    }

    async fn toggle_in<T>(&self, key: &str, id: T) -> Result<bool>
    where
        T: Serialize + DeserializeOwned + PartialEq,
    {
        let mut set: Vec<T> = self.read_collection(key).await;
        let liked = match set.iter().position(|x| *x == id) {
            Some(pos) => {
                set.remove(pos);
                false
            }
            None => {
                set.push(id);
                true
            }
        };
        self.write_collection(key, &set).await?;
        Ok(liked)
    }

    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("store read for {key} failed, treating as empty: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("corrupt collection under {key}, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    async fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items).map_err(|e| AppError::Internal(e.to_string()))?;
        self.store
            .put(key, raw)
            .await
            .map_err(|e| AppError::Store(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::ids::SystemIds;
    use ds_kv_memory::MemoryKvStore;

    fn ledger() -> Ledger {
        Ledger::new(
            Arc::new(MemoryKvStore::default()),
            Arc::new(SystemIds::new()),
        )
    }

    #[tokio::test]
    async fn like_defaults_to_false_on_first_access() {
        let ledger = ledger();
        assert!(!ledger.is_liked(&LikeTarget::Project(1)).await);
    }

    #[tokio::test]
    async fn toggling_twice_restores_the_original_state() {
        let ledger = ledger();
        let target = LikeTarget::Project(7);

        assert!(ledger.toggle_liked(&target).await.unwrap());
        assert!(ledger.is_liked(&target).await);
        assert!(!ledger.toggle_liked(&target).await.unwrap());
        assert!(!ledger.is_liked(&target).await);
    }

    #[tokio::test]
    async fn like_kinds_are_independent() {
        let ledger = ledger();
        ledger
            .toggle_liked(&LikeTarget::Discussion("1-3".to_string()))
            .await
            .unwrap();

        assert!(!ledger.is_liked(&LikeTarget::Project(1)).await);
        assert!(!ledger.is_liked(&LikeTarget::Comment("1-3".to_string())).await);
        assert!(ledger.is_liked(&LikeTarget::Discussion("1-3".to_string())).await);
    }

    #[tokio::test]
    async fn appended_comment_lands_last_with_a_fresh_id() {
        let ledger = ledger();
        let first = ledger
            .add_comment(CommentScope::Project, "42", "Bob", "first!")
            .await
            .unwrap();
        let second = ledger
            .add_comment(CommentScope::Project, "42", "Alice", "nice work")
            .await
            .unwrap();
        // A comment under a different parent must not leak in.
        ledger
            .add_comment(CommentScope::Project, "43", "Mallory", "elsewhere")
            .await
            .unwrap();

        let comments = ledger.comments_for(CommentScope::Project, "42").await;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, first.id);
        let last = comments.last().unwrap();
        assert_eq!(last.author, "Alice");
        assert_eq!(last.text, "nice work");
        assert_ne!(last.id, first.id);
    }

    #[tokio::test]
    async fn comment_scopes_use_separate_collections() {
        let ledger = ledger();
        ledger
            .add_comment(CommentScope::Discussion, "42", "Alice", "hello")
            .await
            .unwrap();

        assert!(ledger.comments_for(CommentScope::Project, "42").await.is_empty());
        assert_eq!(ledger.comments_for(CommentScope::Discussion, "42").await.len(), 1);
    }

    #[tokio::test]
    async fn corrupt_collection_reads_as_empty() {
        let store = Arc::new(MemoryKvStore::default());
        store
            .put(keys::LIKED_PROJECTS, "{not json".to_string())
            .await
            .unwrap();
        let ledger = Ledger::new(store, Arc::new(SystemIds::new()));

        assert!(!ledger.is_liked(&LikeTarget::Project(1)).await);
        // The next toggle writes a clean set over the corrupt value.
        assert!(ledger.toggle_liked(&LikeTarget::Project(1)).await.unwrap());
        assert!(ledger.is_liked(&LikeTarget::Project(1)).await);
    }
}
