//! devshowcase/crates/ds-catalog/src/lib.rs
//!
//! The catalog engine: seed fixtures, record store, interaction ledger,
//! query engine, pagination, submission intake, and the discussion-feed
//! projection.

pub mod feed;
pub mod fixtures;
pub mod intake;
pub mod ledger;
pub mod page;
pub mod query;
pub mod store;

// Re-exporting for easier access in other crates
pub use feed::{derived_id, discussion_feed};
pub use intake::{submit_discussion, submit_project, MIN_IMAGES};
pub use ledger::Ledger;
pub use page::{page_links, paginate, Page, PageLink, PROJECTS_PER_PAGE};
pub use query::{
    filter_discussions, filter_jobs, filter_projects, parse_time_ago, sort_discussions, JobFilter,
    ProjectFilter, SortOrder,
};
pub use store::Catalog;
