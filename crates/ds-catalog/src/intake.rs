//! # Submission Intake
//!
//! Validates a draft submission and, on success, materializes it as a
//! record in the durable user-submitted collection. Validation collects
//! every missing field before reporting, and a failed draft mutates
//! nothing.

use chrono::Utc;
use ds_core::error::{AppError, Result};
use ds_core::models::{Owner, Project, ProjectDraft, Timeline, UserDiscussion};

use crate::ledger::Ledger;

/// Minimum uploaded images per submission.
pub const MIN_IMAGES: usize = 3;

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Returns the wire names of every missing or invalid draft field.
fn missing_fields(draft: &ProjectDraft) -> Vec<String> {
    let mut missing = Vec::new();
    let mut require = |ok: bool, field: &str| {
        if !ok {
            missing.push(field.to_string());
        }
    };

    require(!blank(&draft.title), "title");
    require(!blank(&draft.description), "description");
    require(!blank(&draft.short_description), "shortDescription");
    require(!blank(&draft.owner.name), "owner.name");
    require(!draft.tech_stack.is_empty(), "techStack");
    require(!blank(&draft.problem_solved), "problemSolved");
    require(
        !draft.features.iter().any(|f| blank(f)),
        "features",
    );
    require(
        !blank(&draft.development_challenges),
        "developmentChallenges",
    );
    match &draft.timeline {
        Timeline::Range { start, end } => {
            require(!blank(start), "timeline.start");
            require(!blank(end), "timeline.end");
        }
        Timeline::Freeform(s) => require(!blank(s), "timeline"),
    }
    require(draft.image_urls.len() >= MIN_IMAGES, "imageUrls");
    require(!blank(&draft.links.live), "links.live");

    missing
}

/// Validates and materializes a project submission. The returned record
/// appears in subsequent catalog reads.
pub async fn submit_project(ledger: &Ledger, draft: ProjectDraft) -> Result<Project> {
    let missing = missing_fields(&draft);
    if !missing.is_empty() {
        return Err(AppError::Validation(missing));
    }

    let project = Project {
        id: ledger.ids.next_record_id(),
        title: draft.title,
        description: draft.description,
        short_description: draft.short_description,
        timeline: draft.timeline,
        tech_stack: draft.tech_stack,
        problem_solved: draft.problem_solved,
        features: draft.features,
        development_challenges: draft.development_challenges,
        image_urls: draft.image_urls,
        video_url: draft.video_url,
        links: draft.links,
        owner: draft.owner,
        rating: 0.0,
        created_at: Utc::now(),
        team_work: draft.team_work,
        comments: Vec::new(),
    };

    ledger.push_user_project(project.clone()).await?;
    Ok(project)
}

/// Validates and stores a user-authored discussion.
pub async fn submit_discussion(
    ledger: &Ledger,
    title: &str,
    text: &str,
    author: Owner,
) -> Result<UserDiscussion> {
    let mut missing = Vec::new();
    if blank(title) {
        missing.push("title".to_string());
    }
    if blank(text) {
        missing.push("text".to_string());
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(missing));
    }

    let discussion = UserDiscussion {
        id: ledger.ids.next_token(),
        title: title.to_string(),
        text: text.to_string(),
        author,
        created_at: Utc::now(),
        likes: 0,
        replies: 0,
    };

    ledger.push_user_discussion(discussion.clone()).await?;
    Ok(discussion)
}
