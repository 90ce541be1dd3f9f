//! The calendar scheduling driver.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use log::info;

use super::allocator::RunState;
use super::driver::{prune_stale, run_day, RetryPolicy, RunOptions};
use super::error::{ScheduleRunError, ScheduleRunResult};
use super::expansion::WeekPlanner;
use super::locks::ScopeLocks;
use super::report::{RunReport, RunScope};
use super::roster::build_roster;
use crate::api::DateRange;
use crate::config::SchedulingConfig;
use crate::db::repository::FullRepository;
use crate::models::{week_start_for, AssignmentSlot};

/// Assign tasks across every date of an inclusive range.
///
/// Each date maps to its weekday and follows the same per-day procedure
/// as the weekly driver; assignments persist under calendar slots
/// (specific date plus reference week). The report covers exactly every
/// date in the range, in order; dates with nothing due appear with zero
/// entries. Run state (minutes, load, rotation) spans the whole range;
/// the once-per-week expansion resets at each Monday boundary.
pub async fn run_calendar(
    repo: &dyn FullRepository,
    start: NaiveDate,
    end: NaiveDate,
    config: &SchedulingConfig,
    options: RunOptions,
) -> ScheduleRunResult<RunReport> {
    let range =
        DateRange::new(start, end).ok_or(ScheduleRunError::InvalidDateRange { start, end })?;

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
    let scope = RunScope::Range { start, end };
    let _guard = ScopeLocks::global().acquire(&scope.lock_key()).await;

    info!(
        "calendar run: {} ({} days) policy={} tasks={} roster={}",
        scope,
        range.num_days(),
        policy,
        tasks.len(),
        roster.len()
    );

    let mut state = RunState::new();
    let mut planner = WeekPlanner::new(week_start_for(start));
    let mut report = RunReport::new(scope, policy);
    let mut fresh = HashSet::new();

    for date in range.iter() {
        if options.deadline_passed() {
            report.partial = true;
            info!("deadline reached; stopping before {}", date);
            break;
        }

        let week_start = week_start_for(date);
        if planner.week_start() != week_start {
            planner = WeekPlanner::new(week_start);
        }

        let weekday = date.weekday();
        let slot = AssignmentSlot::Calendar { date, week_start };
        let indices = planner.tasks_for_day(&tasks, weekday);
        let day = run_day(
            repo,
            &tasks,
            &indices,
            &roster,
            &mut state,
            policy,
            weekday,
            Some(date),
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
        let existing = match repo.calendar_assignments(range).await {
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
        "calendar run done: {} days, {} assigned, {} unassigned{}",
        report.days.len(),
        report.assigned,
        report.unassigned,
        if report.partial { " (partial)" } else { "" }
    );
    Ok(report)
}
