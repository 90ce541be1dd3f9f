//! Error taxonomy for scheduling runs.

use chrono::NaiveDate;

use super::report::RunReport;
use crate::db::repository::RepositoryError;

/// Result type for driver runs.
pub type ScheduleRunResult<T> = Result<T, ScheduleRunError>;

/// What can stop a scheduling run.
///
/// Configuration problems surface immediately with actionable messages.
/// A task nobody is eligible for is NOT an error; it shows up as an
/// unassigned marker inside the run report.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleRunError {
    #[error("automatic assignment is disabled in preferences; enable it and re-run")]
    AutoAssignDisabled,

    #[error("no tasks configured; seed a catalog before scheduling")]
    NoTasks,

    #[error("no schedulable members in the roster; check member records and the minimum age")]
    NoMembers,

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A repository call failed before any assignment was written.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Persistence failed mid-run. The report carries everything that
    /// was written before the failure.
    #[error("persistence failed after {} assignments: {source}", report.assigned)]
    Persistence {
        source: RepositoryError,
        report: Box<RunReport>,
    },
}
