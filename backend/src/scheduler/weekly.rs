//! The weekly scheduling driver.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use log::info;

use super::allocator::RunState;
use super::driver::{prune_stale, run_day, RetryPolicy, RunOptions};
use super::error::{ScheduleRunError, ScheduleRunResult};
use super::expansion::WeekPlanner;
use super::locks::ScopeLocks;
use super::report::{RunReport, RunScope};
use super::roster::build_roster;
use crate::config::SchedulingConfig;
use crate::db::repository::FullRepository;
use crate::models::{date_for, week_start_for, AssignmentSlot};

/// Assign tasks across the designated workdays of one week.
///
/// `week_start` may be any date in the target week (it is normalized to
/// its Monday); `None` means the current week. The run is transactional
/// over its scope: after a complete allocation, previously persisted
/// weekly assignments the run did not reproduce are deleted. A deadline
/// abort skips that deletion and flags the report as partial.
pub async fn run_weekly(
    repo: &dyn FullRepository,
    week_start: Option<NaiveDate>,
    config: &SchedulingConfig,
    options: RunOptions,
) -> ScheduleRunResult<RunReport> {
    let week_start = week_start_for(week_start.unwrap_or_else(|| Utc::now().date_naive()));

    let preferences = repo.get_preferences().await?;
    if !preferences.auto_assign {
        return Err(ScheduleRunError::AutoAssignDisabled);
    }
    let tasks = repo.list_tasks().await?;
    if tasks.is_empty() {
        return Err(ScheduleRunError::NoTasks);
    }
    let roster = build_roster(repo, config.min_child_age).await?;
    if roster.is_empty() {
        return Err(ScheduleRunError::NoMembers);
    }

    let policy = options.policy.unwrap_or(preferences.policy);
    let retry = options.retry.unwrap_or_else(|| RetryPolicy::from_config(config));
    let scope = RunScope::Week { week_start };
    let _guard = ScopeLocks::global().acquire(&scope.lock_key()).await;

    info!(
        "weekly run: {} policy={} tasks={} roster={}",
        scope,
        policy,
        tasks.len(),
        roster.len()
    );

    let slot = AssignmentSlot::Weekly { week_start };
    let mut planner = WeekPlanner::new(week_start);
    let mut state = RunState::new();
    let mut report = RunReport::new(scope, policy);
    let mut fresh = HashSet::new();

    for weekday in preferences.effective_workdays() {
        if options.deadline_passed() {
            report.partial = true;
            info!("deadline reached; stopping before {}", weekday);
            break;
        }

        let indices = planner.tasks_for_day(&tasks, weekday);
        let day = run_day(
            repo,
            &tasks,
            &indices,
            &roster,
            &mut state,
            policy,
            weekday,
            Some(date_for(week_start, weekday)),
            slot,
            &retry,
        )
        .await;

        match day {
            Ok(day) => {
                for entry in &day.entries {
                    if let Some(member_id) = entry.outcome.member_id() {
                        fresh.insert((entry.task_id, member_id, slot));
                    }
                }
                report.push_day(day);
            }
            Err((day, source)) => {
                report.push_day(day);
                report.partial = true;
                return Err(ScheduleRunError::Persistence {
                    source,
                    report: Box::new(report),
                });
            }
        }
    }

    if !report.partial {
        let existing = match repo.weekly_assignments(week_start).await {
            Ok(existing) => existing,
            Err(source) => {
                return Err(ScheduleRunError::Persistence {
                    source,
                    report: Box::new(report),
                })
            }
        };
        if let Err(source) = prune_stale(repo, existing, &fresh, &retry).await {
            return Err(ScheduleRunError::Persistence {
                source,
                report: Box::new(report),
            });
        }
    }

    info!(
        "weekly run done: {} assigned, {} unassigned{}",
        report.assigned,
        report.unassigned,
        if report.partial { " (partial)" } else { "" }
    );
    Ok(report)
}
