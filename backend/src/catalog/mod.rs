//! Task catalog sources.
//!
//! The catalog is either the fixed default task list or a set derived
//! from a structural house profile. Both sit behind [`TaskSource`] so
//! seeding and scheduling never branch on where tasks came from.

pub mod defaults;
pub mod derived;

pub use defaults::{default_catalog, default_catalog_checksum, StaticSource};
pub use derived::{derive_tasks, DerivedSource};

use crate::models::Task;

/// A provider of catalog tasks.
///
/// Implementations return fresh task values without ids; persistence
/// assigns ids when the tasks are seeded into the repository.
pub trait TaskSource: Send + Sync {
    /// Short origin tag used in logs ("static", "derived").
    fn origin(&self) -> &'static str;

    /// Produce the source's task list.
    fn list_tasks(&self) -> Vec<Task>;
}
