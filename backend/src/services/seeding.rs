//! Catalog seeding: static bootstrap and derived generation.

use log::info;

use crate::catalog::{default_catalog_checksum, derive_tasks, StaticSource, TaskSource};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{HouseProfile, Task};

/// What a seeding pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Insert the built-in default catalog, skipping tasks whose name
/// already exists. Safe to call on every startup.
pub async fn seed_default_catalog(repo: &dyn FullRepository) -> RepositoryResult<SeedOutcome> {
    let outcome = seed_from_source(repo, &StaticSource, false).await?;
    info!(
        "default catalog seeded: {} inserted, {} already present",
        outcome.inserted, outcome.skipped
    );
    Ok(outcome)
}

/// Derive tasks from a house profile and upsert them into the catalog
/// by name: existing rows keep their ids and take the derived fields.
pub async fn seed_derived_catalog(
    repo: &dyn FullRepository,
    profile: &HouseProfile,
) -> RepositoryResult<SeedOutcome> {
    let source = DerivedProfileSource {
        tasks: derive_tasks(profile),
    };
    let outcome = seed_from_source(repo, &source, true).await?;
    info!(
        "derived catalog seeded: {} inserted, {} updated",
        outcome.inserted, outcome.updated
    );
    Ok(outcome)
}

/// All persisted catalog tasks.
pub async fn list_catalog(repo: &dyn FullRepository) -> RepositoryResult<Vec<Task>> {
    repo.list_tasks().await
}

/// Checksum of the built-in catalog content, for change detection.
pub fn catalog_checksum() -> String {
    default_catalog_checksum()
}

struct DerivedProfileSource {
    tasks: Vec<Task>,
}

impl TaskSource for DerivedProfileSource {
    fn origin(&self) -> &'static str {
        "derived"
    }

    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }
}

async fn seed_from_source(
    repo: &dyn FullRepository,
    source: &dyn TaskSource,
    update_existing: bool,
) -> RepositoryResult<SeedOutcome> {
    let mut outcome = SeedOutcome::default();
    for task in source.list_tasks() {
        match repo.find_task_by_name(&task.name).await? {
            Some(existing) => {
                if update_existing {
                    let mut replacement = task.clone();
                    replacement.id = existing.id;
                    repo.update_task(&replacement).await?;
                    outcome.updated += 1;
                } else {
                    outcome.skipped += 1;
                }
            }
            None => {
                repo.store_task(&task).await?;
                outcome.inserted += 1;
            }
        }
    }
    Ok(outcome)
}
