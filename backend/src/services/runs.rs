//! Run triggers for the web/API layer.

use chrono::NaiveDate;

use crate::config::SchedulingConfig;
use crate::db::repository::FullRepository;
use crate::scheduler::{run_calendar, run_weekly, RunOptions, RunReport, ScheduleRunResult};

/// Trigger a weekly assignment run for the given week (or the current
/// week when `None`).
pub async fn assign_week(
    repo: &dyn FullRepository,
    week_start: Option<NaiveDate>,
    config: &SchedulingConfig,
) -> ScheduleRunResult<RunReport> {
    run_weekly(repo, week_start, config, RunOptions::default()).await
}

/// Trigger a calendar assignment run over an inclusive date range.
pub async fn assign_calendar(
    repo: &dyn FullRepository,
    start: NaiveDate,
    end: NaiveDate,
    config: &SchedulingConfig,
) -> ScheduleRunResult<RunReport> {
    run_calendar(repo, start, end, config, RunOptions::default()).await
}
