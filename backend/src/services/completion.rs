//! Completion tracking.

use log::info;

use crate::api::AssignmentId;
use crate::db::repository::{FullRepository, RepositoryResult};

/// Set the completion flag on an assignment, replacing its notes when
/// provided. Unknown ids are a NotFound error.
pub async fn complete_assignment(
    repo: &dyn FullRepository,
    assignment_id: AssignmentId,
    completed: bool,
    notes: Option<String>,
) -> RepositoryResult<()> {
    repo.set_completion(assignment_id, completed, notes).await?;
    info!("assignment {} marked {}", assignment_id, if completed { "done" } else { "open" });
    Ok(())
}
