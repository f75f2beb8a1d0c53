//! # Domain Models
//!
//! These structs represent the core entities of the showcase catalog.
//! Serde field names follow the camelCase layout of the durable store
//! collections, so a write/read round-trip yields an equal collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A showcased project. Seed projects are immutable; user-submitted
/// projects are materialized by the submission intake and live in the
/// durable store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique across the union of seed and user-submitted projects.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub timeline: Timeline,
    /// Order-preserving list of technology tags.
    pub tech_stack: Vec<String>,
    pub problem_solved: String,
    pub features: Vec<String>,
    pub development_challenges: String,
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub links: ProjectLinks,
    pub owner: Owner,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub team_work: bool,
    /// Seed comments embedded on the record itself. Ledger comments are
    /// stored separately and unioned at display time.
    pub comments: Vec<SeedComment>,
}

/// Outbound links for a project. The live URL is required at submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLinks {
    pub live: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Display name plus avatar URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub avatar: String,
}

/// Seed data carries pre-formatted timeline strings ("Oct 2022 - Jan 2023");
/// the submission form collects a start/end date pair. Both shapes survive
/// a store round-trip via the untagged representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timeline {
    Range { start: String, end: String },
    Freeform(String),
}

/// A comment embedded in seed project data, with nested replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedComment {
    pub id: i64,
    pub author: Owner,
    pub text: String,
    /// Relative display string in seed data, e.g. "2 days ago".
    pub date: String,
    #[serde(default)]
    pub replies: Vec<SeedComment>,
}

/// A job listing. Static fixture data only; there is no submission path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub logo: String,
    pub location: String,
    pub remote: bool,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub contact: String,
    pub posted_at: DateTime<Utc>,
    pub status: JobStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Interviewing,
    Hired,
    Confidential,
}

/// A comment tracked by the interaction ledger, keyed by its parent
/// record id. Created by append; never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerComment {
    pub id: String,
    pub parent_id: String,
    pub author: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

/// Which durable comment collection a ledger comment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentScope {
    Project,
    Discussion,
}

/// A likeable record, carrying both the kind and the id. The three kinds
/// map to three independent durable like sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeTarget {
    Project(i64),
    Discussion(String),
    Comment(String),
}

/// A discussion-feed entry. Derived at read time, never stored: seed
/// project comments are flattened into entries with id
/// `"{project_id}-{comment_id}"`, then unioned with stored user-authored
/// discussions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_image: Option<String>,
    pub author: Owner,
    pub text: String,
    /// Recency sort key: how long ago the entry was posted, in ms.
    pub posted_ms_ago: i64,
    pub likes: u64,
    pub replies: u64,
}

/// A user-authored discussion, stored directly (unlike project-derived
/// feed entries, which are a pure projection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDiscussion {
    pub id: String,
    pub title: String,
    pub text: String,
    pub author: Owner,
    pub created_at: DateTime<Utc>,
    pub likes: u64,
    pub replies: u64,
}

/// The submission-form payload: everything a `Project` carries except the
/// fields the intake assigns (`id`, `created_at`, `rating`, `comments`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub timeline: Timeline,
    pub tech_stack: Vec<String>,
    pub problem_solved: String,
    pub features: Vec<String>,
    pub development_challenges: String,
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub links: ProjectLinks,
    pub owner: Owner,
    pub team_work: bool,
}
