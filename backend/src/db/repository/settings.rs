//! Settings repository trait: preferences and capacity overrides.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Capacity, CapacityTable, Preferences, Role};

/// Repository trait for the single preferences record and the per-role
/// capacity override table.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The current preferences record. Backends return defaults when no
    /// record has been saved yet.
    async fn get_preferences(&self) -> RepositoryResult<Preferences>;

    /// Replace the preferences record.
    async fn save_preferences(&self, preferences: &Preferences) -> RepositoryResult<()>;

    /// The capacity override table. Roles without an override are `None`
    /// and fall back to built-in defaults during derivation.
    async fn get_capacity_overrides(&self) -> RepositoryResult<CapacityTable>;

    /// Set the capacity override for one role.
    async fn save_capacity_override(
        &self,
        role: Role,
        capacity: &Capacity,
    ) -> RepositoryResult<()>;
}
