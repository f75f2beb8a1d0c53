//! # Record Store
//!
//! Read access to the catalog records: seed fixtures in declaration
//! order, unioned at read time with user-submitted projects from the
//! ledger. Listings are seed-only; no submission path exists for them.

use std::sync::Arc;

use ds_core::error::{AppError, Result};
use ds_core::models::{JobListing, Project};

use crate::fixtures;
use crate::ledger::Ledger;

pub struct Catalog {
    ledger: Arc<Ledger>,
}

impl Catalog {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    /// All projects: seed records first, then user submissions in the
    /// order they were accepted.
    pub async fn projects(&self) -> Vec<Project> {
        let mut all: Vec<Project> = fixtures::PROJECTS.iter().cloned().collect();
        all.extend(self.ledger.user_projects().await);
        all
    }

    pub async fn project(&self, id: i64) -> Result<Project> {
        if let Some(seed) = fixtures::PROJECTS.iter().find(|p| p.id == id) {
            return Ok(seed.clone());
        }
        self.ledger
            .user_projects()
            .await
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("project".to_string(), id.to_string()))
    }

    pub fn jobs(&self) -> &'static [JobListing] {
        &fixtures::JOB_LISTINGS
    }

    pub fn job(&self, id: i64) -> Result<&'static JobListing> {
        fixtures::JOB_LISTINGS
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound("job listing".to_string(), id.to_string()))
    }
}
