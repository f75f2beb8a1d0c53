//! # Query Engine
//!
//! Pure filter and sort functions over record snapshots. Filters compose
//! with logical AND; an empty result is a valid outcome, not an error.

use ds_core::models::{Discussion, JobListing, JobStatus, Project};

use crate::fixtures::ALL_TECH;

/// Query parameters for the project grid.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    /// Free-text query; empty or whitespace matches everything.
    pub search: String,
    /// Exact tech tag; the `"All"` sentinel matches everything.
    pub tech: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            tech: ALL_TECH.to_string(),
        }
    }
}

/// Query parameters for the job board.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub search: String,
    /// `None` matches every status.
    pub status: Option<JobStatus>,
    /// `None` matches both on-site and remote listings.
    pub remote: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent first.
    Latest,
    /// Most liked first.
    Popular,
}

/// Case-insensitive substring match, trimming the query first.
fn text_matches(query: &str, fields: &[&str]) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&q))
}

fn project_matches(project: &Project, filter: &ProjectFilter) -> bool {
    if filter.tech != ALL_TECH && !project.tech_stack.iter().any(|t| t == &filter.tech) {
        return false;
    }

    let mut fields: Vec<&str> = vec![
        &project.title,
        &project.short_description,
        &project.description,
        &project.owner.name,
    ];
    fields.extend(project.tech_stack.iter().map(String::as_str));
    text_matches(&filter.search, &fields)
}

pub fn filter_projects(projects: &[Project], filter: &ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| project_matches(p, filter))
        .cloned()
        .collect()
}

fn job_matches(job: &JobListing, filter: &JobFilter) -> bool {
    let searchable = [
        job.title.as_str(),
        job.company.as_str(),
        job.description.as_str(),
        job.location.as_str(),
    ];
    text_matches(&filter.search, &searchable)
        && filter.status.map_or(true, |s| job.status == s)
        && filter.remote.map_or(true, |r| job.remote == r)
}

pub fn filter_jobs(jobs: &[JobListing], filter: &JobFilter) -> Vec<JobListing> {
    jobs.iter().filter(|j| job_matches(j, filter)).cloned().collect()
}

/// Search over a discussion feed: body text, project title, author name.
pub fn filter_discussions(feed: &[Discussion], search: &str) -> Vec<Discussion> {
    feed.iter()
        .filter(|d| {
            let title = d.project_title.as_deref().unwrap_or_default();
            text_matches(search, &[&d.text, title, &d.author.name])
        })
        .cloned()
        .collect()
}

/// Sorts a feed. Stable: entries with equal keys keep their input order.
pub fn sort_discussions(mut feed: Vec<Discussion>, order: SortOrder) -> Vec<Discussion> {
    match order {
        SortOrder::Latest => feed.sort_by_key(|d| d.posted_ms_ago),
        SortOrder::Popular => feed.sort_by_key(|d| std::cmp::Reverse(d.likes)),
    }
    feed
}

/// Parses relative display strings ("2 days ago") into milliseconds-ago
/// for recency sorting. Unknown units parse as 0 (i.e. "just now").
pub fn parse_time_ago(time_ago: &str) -> i64 {
    const MINUTE: i64 = 60 * 1000;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const WEEK: i64 = 7 * DAY;
    const MONTH: i64 = 30 * DAY;

    let n: i64 = time_ago
        .split_whitespace()
        .next()
        .and_then(|w| w.parse().ok())
        .unwrap_or(0);

    if time_ago.contains("minute") {
        n * MINUTE
    } else if time_ago.contains("hour") {
        n * HOUR
    } else if time_ago.contains("day") {
        n * DAY
    } else if time_ago.contains("week") {
        n * WEEK
    } else if time_ago.contains("month") {
        n * MONTH
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::models::Owner;

    use crate::fixtures::PROJECTS;

    fn entry(id: &str, posted_ms_ago: i64, likes: u64) -> Discussion {
        Discussion {
            id: id.to_string(),
            title: None,
            project_id: None,
            project_title: None,
            project_image: None,
            author: Owner {
                name: "Test".to_string(),
                avatar: String::new(),
            },
            text: String::new(),
            posted_ms_ago,
            likes,
            replies: 0,
        }
    }

    #[test]
    fn filters_compose_with_and() {
        let filter = ProjectFilter {
            search: "react".to_string(),
            tech: "Python".to_string(),
        };
        let result = filter_projects(&PROJECTS, &filter);
        for p in &result {
            assert!(p.tech_stack.iter().any(|t| t == "Python"));
            let fields_contain = p.title.to_lowercase().contains("react")
                || p.short_description.to_lowercase().contains("react")
                || p.description.to_lowercase().contains("react")
                || p.owner.name.to_lowercase().contains("react")
                || p.tech_stack.iter().any(|t| t.to_lowercase().contains("react"));
            assert!(fields_contain);
        }
        // The AI Image Generator (Python + React) must survive both legs.
        assert!(result.iter().any(|p| p.id == 4));
    }

    #[test]
    fn search_is_case_insensitive_and_spans_owner_name() {
        let filter = ProjectFilter {
            search: "ERIC chen".to_string(),
            ..Default::default()
        };
        let result = filter_projects(&PROJECTS, &filter);
        assert!(result.iter().any(|p| p.id == 1));
    }

    #[test]
    fn tech_match_is_exact_and_case_sensitive() {
        let filter = ProjectFilter {
            tech: "react".to_string(),
            ..Default::default()
        };
        assert!(filter_projects(&PROJECTS, &filter).is_empty());

        let filter = ProjectFilter {
            tech: "React".to_string(),
            ..Default::default()
        };
        assert!(!filter_projects(&PROJECTS, &filter).is_empty());
    }

    #[test]
    fn blank_search_and_all_sentinel_match_everything() {
        let filter = ProjectFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_projects(&PROJECTS, &filter).len(), PROJECTS.len());
    }

    #[test]
    fn no_match_yields_an_empty_result_not_an_error() {
        let filter = ProjectFilter {
            search: "zzzz-no-such-project".to_string(),
            ..Default::default()
        };
        assert!(filter_projects(&PROJECTS, &filter).is_empty());
    }

    #[test]
    fn job_filters_narrow_by_status_and_remote() {
        use crate::fixtures::JOB_LISTINGS;

        let open_only = filter_jobs(
            &JOB_LISTINGS,
            &JobFilter {
                status: Some(JobStatus::Open),
                ..Default::default()
            },
        );
        assert!(open_only.iter().all(|j| j.status == JobStatus::Open));
        assert!(!open_only.is_empty());

        let on_site = filter_jobs(
            &JOB_LISTINGS,
            &JobFilter {
                remote: Some(false),
                ..Default::default()
            },
        );
        assert!(on_site.iter().all(|j| !j.remote));

        let searched = filter_jobs(
            &JOB_LISTINGS,
            &JobFilter {
                search: "boston".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].company, "DataVision");
    }

    #[test]
    fn latest_sort_puts_most_recent_first() {
        let feed = vec![entry("a", 5_000, 0), entry("b", 1_000, 0), entry("c", 9_000, 0)];
        let sorted = sort_discussions(feed, SortOrder::Latest);
        let ids: Vec<&str> = sorted.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn popular_sort_is_stable_for_equal_like_counts() {
        let feed = vec![
            entry("a", 0, 2),
            entry("b", 0, 5),
            entry("c", 0, 2),
            entry("d", 0, 2),
        ];
        let sorted = sort_discussions(feed, SortOrder::Popular);
        let ids: Vec<&str> = sorted.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c", "d"]);
    }

    #[test]
    fn time_ago_parsing_follows_the_unit_table() {
        assert_eq!(parse_time_ago("2 days ago"), 2 * 24 * 60 * 60 * 1000);
        assert_eq!(parse_time_ago("1 week ago"), 7 * 24 * 60 * 60 * 1000);
        assert_eq!(parse_time_ago("45 minutes ago"), 45 * 60 * 1000);
        assert_eq!(parse_time_ago("3 months ago"), 3 * 30 * 24 * 60 * 60 * 1000);
        assert_eq!(parse_time_ago("just now"), 0);
    }
}
