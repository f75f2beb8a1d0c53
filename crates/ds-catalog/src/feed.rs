//! # Discussion Feed
//!
//! Read-time projection of the discussion feed: every project's seed
//! comments flattened into feed entries, unioned with stored user-authored
//! discussions. Project-derived entries have no storage of their own;
//! their like counts come from real ledger membership.

use chrono::Utc;
use ds_core::models::{Discussion, LikeTarget, Project};

use crate::ledger::Ledger;
use crate::query::parse_time_ago;

/// Feed-entry id for a seed comment: `"{project_id}-{comment_id}"`.
pub fn derived_id(project_id: i64, comment_id: i64) -> String {
    format!("{project_id}-{comment_id}")
}

pub async fn discussion_feed(projects: &[Project], ledger: &Ledger) -> Vec<Discussion> {
    let mut feed = Vec::new();

    for project in projects {
        for comment in &project.comments {
            let id = derived_id(project.id, comment.id);
            let liked = ledger
                .is_liked(&LikeTarget::Discussion(id.clone()))
                .await;
            feed.push(Discussion {
                id,
                title: None,
                project_id: Some(project.id),
                project_title: Some(project.title.clone()),
                project_image: project.image_urls.first().cloned(),
                author: comment.author.clone(),
                text: comment.text.clone(),
                posted_ms_ago: parse_time_ago(&comment.date),
                likes: liked as u64,
                replies: comment.replies.len() as u64,
            });
        }
    }

    for discussion in ledger.user_discussions().await {
        let liked = ledger
            .is_liked(&LikeTarget::Discussion(discussion.id.clone()))
            .await;
        let posted_ms_ago = (Utc::now() - discussion.created_at)
            .num_milliseconds()
            .max(0);
        feed.push(Discussion {
            id: discussion.id,
            title: Some(discussion.title),
            project_id: None,
            project_title: None,
            project_image: None,
            author: discussion.author,
            text: discussion.text,
            posted_ms_ago,
            likes: discussion.likes + liked as u64,
            replies: discussion.replies,
        });
    }

    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ds_core::ids::SystemIds;
    use ds_core::models::Owner;
    use ds_kv_memory::MemoryKvStore;

    use crate::fixtures::PROJECTS;
    use crate::intake::submit_discussion;

    fn ledger() -> Ledger {
        Ledger::new(
            Arc::new(MemoryKvStore::default()),
            Arc::new(SystemIds::new()),
        )
    }

    #[tokio::test]
    async fn seed_comments_flatten_into_one_entry_each() {
        let ledger = ledger();
        let feed = discussion_feed(&PROJECTS, &ledger).await;

        let top_level: usize = PROJECTS.iter().map(|p| p.comments.len()).sum();
        assert_eq!(feed.len(), top_level);

        // The first project's first comment carries one nested reply.
        let first = feed
            .iter()
            .find(|d| d.id == derived_id(1, 1))
            .expect("derived entry for project 1, comment 1");
        assert_eq!(first.replies, 1);
        assert_eq!(first.project_title.as_deref(), Some("Personal Finance Tracker"));
        assert_eq!(first.likes, 0);
    }

    #[tokio::test]
    async fn ledger_likes_back_the_derived_like_count() {
        let ledger = ledger();
        let id = derived_id(1, 3);
        ledger
            .toggle_liked(&LikeTarget::Discussion(id.clone()))
            .await
            .unwrap();

        let feed = discussion_feed(&PROJECTS, &ledger).await;
        let entry = feed.iter().find(|d| d.id == id).unwrap();
        assert_eq!(entry.likes, 1);
    }

    #[tokio::test]
    async fn user_discussions_join_the_feed_without_a_project() {
        let ledger = ledger();
        let author = Owner {
            name: "Nina Patel".to_string(),
            avatar: String::new(),
        };
        let created = submit_discussion(&ledger, "Hiring advice", "How do you vet freelancers?", author)
            .await
            .unwrap();

        let feed = discussion_feed(&PROJECTS, &ledger).await;
        let entry = feed.iter().find(|d| d.id == created.id).unwrap();
        assert_eq!(entry.title.as_deref(), Some("Hiring advice"));
        assert!(entry.project_id.is_none());
        assert_eq!(entry.likes, 0);
        // Stored moments ago, so it sorts as the most recent entry.
        assert!(entry.posted_ms_ago < 1_000);
    }
}
