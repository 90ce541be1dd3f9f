//! Assignment repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{AssignmentId, DateRange};
use crate::models::Assignment;

/// Repository trait for persisted assignments.
///
/// The storage key is the assignment's upsert key: (task, member, slot).
/// At most one row exists per key; writing the same key again replaces
/// the row in place.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Insert or replace the assignment for its (task, member, slot) key.
    ///
    /// When a row already exists for the key, the row id, completion
    /// flag, notes and creation timestamp are preserved; the member role
    /// and weekday are refreshed from the new value.
    ///
    /// # Returns
    /// The id of the stored row (existing or newly assigned).
    async fn upsert_assignment(&self, assignment: &Assignment) -> RepositoryResult<AssignmentId>;

    /// Retrieve an assignment by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the assignment doesn't exist
    async fn get_assignment(&self, assignment_id: AssignmentId) -> RepositoryResult<Assignment>;

    /// All assignments belonging to the week starting at `week_start`,
    /// regardless of slot kind. Calendar slots count toward the week
    /// they reference. Ordered by id.
    async fn assignments_for_week(&self, week_start: NaiveDate) -> RepositoryResult<Vec<Assignment>>;

    /// Only the weekly-slot assignments keyed on `week_start`. This is
    /// the scope of a weekly driver run. Ordered by id.
    async fn weekly_assignments(&self, week_start: NaiveDate) -> RepositoryResult<Vec<Assignment>>;

    /// Calendar-slot assignments whose date falls inside `range`. This
    /// is the scope of a calendar driver run. Ordered by id.
    async fn calendar_assignments(&self, range: DateRange) -> RepositoryResult<Vec<Assignment>>;

    /// Calendar-slot assignments for one specific date. Ordered by id.
    async fn assignments_for_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Assignment>>;

    /// Delete an assignment by id. Deleting a missing id is not an error.
    async fn delete_assignment(&self, assignment_id: AssignmentId) -> RepositoryResult<()>;

    /// Set the completion flag, and replace the notes when provided.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the assignment doesn't exist
    async fn set_completion(
        &self,
        assignment_id: AssignmentId,
        completed: bool,
        notes: Option<String>,
    ) -> RepositoryResult<()>;
}
