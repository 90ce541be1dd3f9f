//! Preference and capacity-override management.

use log::info;

use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{Capacity, CapacityTable, Preferences, Role, MAX_DIFFICULTY, MIN_DIFFICULTY};

/// The current preferences record (defaults when never saved).
pub async fn get_preferences(repo: &dyn FullRepository) -> RepositoryResult<Preferences> {
    repo.get_preferences().await
}

/// Validate and replace the preferences record.
pub async fn save_preferences(
    repo: &dyn FullRepository,
    preferences: &Preferences,
) -> RepositoryResult<()> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&preferences.max_difficulty) {
        return Err(RepositoryError::validation(format!(
            "max_difficulty must be between {} and {}, got {}",
            MIN_DIFFICULTY, MAX_DIFFICULTY, preferences.max_difficulty
        )));
    }
    repo.save_preferences(preferences).await?;
    info!(
        "preferences saved: auto_assign={} workdays={:?} policy={}",
        preferences.auto_assign, preferences.workdays, preferences.policy
    );
    Ok(())
}

/// The per-role capacity override table.
pub async fn get_capacity_overrides(repo: &dyn FullRepository) -> RepositoryResult<CapacityTable> {
    repo.get_capacity_overrides().await
}

/// Validate and store one role's capacity override.
pub async fn save_capacity_override(
    repo: &dyn FullRepository,
    role: Role,
    capacity: &Capacity,
) -> RepositoryResult<()> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&capacity.max_difficulty) {
        return Err(RepositoryError::validation(format!(
            "max_difficulty must be between {} and {}, got {}",
            MIN_DIFFICULTY, MAX_DIFFICULTY, capacity.max_difficulty
        )));
    }
    repo.save_capacity_override(role, capacity).await?;
    info!(
        "capacity override saved for {}: difficulty<={} minutes<={}",
        role, capacity.max_difficulty, capacity.max_weekly_minutes
    );
    Ok(())
}
