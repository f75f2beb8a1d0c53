//! # Devshowcase Binary
//!
//! The entry point that assembles the catalog based on compile-time
//! features and walks one representative read path.

use std::sync::Arc;

use ds_catalog::{
    discussion_feed, filter_projects, paginate, sort_discussions, Catalog, Ledger, ProjectFilter,
    SortOrder, PROJECTS_PER_PAGE,
};
use ds_core::ids::SystemIds;
use ds_core::traits::KvStore;

// Feature-gated imports: exactly one store backend gets assembled.
#[cfg(feature = "kv-sqlite")]
use ds_kv_sqlite::SqliteKvStore;

#[cfg(all(feature = "kv-file", not(feature = "kv-sqlite")))]
use ds_kv_file::FileKvStore;

#[cfg(all(feature = "kv-memory", not(any(feature = "kv-file", feature = "kv-sqlite"))))]
use ds_kv_memory::MemoryKvStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    #[cfg(feature = "kv-sqlite")]
    let store: Arc<dyn KvStore> = {
        let url = std::env::var("DEVSHOWCASE_DB")
            .unwrap_or_else(|_| "sqlite:devshowcase.db?mode=rwc".to_string());
        Arc::new(SqliteKvStore::new(&url).await?)
    };

    #[cfg(all(feature = "kv-file", not(feature = "kv-sqlite")))]
    let store: Arc<dyn KvStore> = {
        let root = std::env::var("DEVSHOWCASE_DATA").unwrap_or_else(|_| "./data/store".to_string());
        Arc::new(FileKvStore::new(root.into()))
    };

    #[cfg(all(feature = "kv-memory", not(any(feature = "kv-file", feature = "kv-sqlite"))))]
    let store: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());

    let ledger = Arc::new(Ledger::new(store, Arc::new(SystemIds::new())));
    let catalog = Catalog::new(Arc::clone(&ledger));

    let projects = catalog.projects().await;
    log::info!(
        "catalog ready: {} projects ({} seed), {} job listings",
        projects.len(),
        ds_catalog::fixtures::PROJECTS.len(),
        catalog.jobs().len()
    );

    let page = paginate(
        &filter_projects(&projects, &ProjectFilter::default()),
        1,
        PROJECTS_PER_PAGE,
    );
    log::info!(
        "page {}/{}: showing {}-{} of {}",
        page.current_page,
        page.total_pages,
        page.first_item,
        page.last_item,
        page.total_items
    );

    let feed = sort_discussions(
        discussion_feed(&projects, &ledger).await,
        SortOrder::Latest,
    );
    log::info!("discussion feed: {} entries", feed.len());
    if let Some(latest) = feed.first() {
        log::info!("most recent: {} on {:?}", latest.author.name, latest.project_title);
    }

    Ok(())
}
