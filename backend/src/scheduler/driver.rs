//! Machinery shared by the weekly and calendar drivers.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Weekday};
use log::{info, warn};

use super::allocator::{assign, RosterMember, RunState};
use super::report::{AllocationOutcome, RunDay, RunEntry};
use crate::api::{AssignmentId, MemberId, TaskId};
use crate::config::SchedulingConfig;
use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{Assignment, AssignmentSlot, FairnessPolicy, Task};

/// Bounded retry for transient persistence failures.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &SchedulingConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&SchedulingConfig::default())
    }
}

/// Caller-tunable knobs for one driver run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Override the fairness policy from preferences.
    pub policy: Option<FairnessPolicy>,
    /// Stop allocating before the next day once this instant passes;
    /// the run returns partial results with the partial flag set.
    pub deadline: Option<Instant>,
    /// Persistence retry policy; defaults come from configuration.
    pub retry: Option<RetryPolicy>,
}

impl RunOptions {
    pub fn with_policy(mut self, policy: FairnessPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub(crate) fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Upsert one assignment, retrying transient failures with doubling
/// backoff up to the policy's attempt cap.
pub(crate) async fn upsert_with_retry(
    repo: &dyn FullRepository,
    assignment: &Assignment,
    retry: &RetryPolicy,
) -> RepositoryResult<AssignmentId> {
    let mut attempt = 0u32;
    let mut delay = retry.delay;
    loop {
        match repo.upsert_assignment(assignment).await {
            Ok(id) => return Ok(id),
            Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                attempt += 1;
                warn!(
                    "transient failure upserting assignment (attempt {}/{}): {}",
                    attempt, retry.max_retries, e
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

pub(crate) async fn delete_with_retry(
    repo: &dyn FullRepository,
    id: AssignmentId,
    retry: &RetryPolicy,
) -> RepositoryResult<()> {
    let mut attempt = 0u32;
    let mut delay = retry.delay;
    loop {
        match repo.delete_assignment(id).await {
            Ok(()) => return Ok(()),
            Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                attempt += 1;
                warn!(
                    "transient failure deleting assignment {} (attempt {}/{}): {}",
                    id, attempt, retry.max_retries, e
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Allocate and persist one scheduled day.
///
/// Entries are produced in hardest-first order as handed over in
/// `indices`. On a permanent persistence failure the day built so far is
/// returned alongside the error so the driver can report what succeeded.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn run_day(
    repo: &dyn FullRepository,
    tasks: &[Task],
    indices: &[usize],
    roster: &[RosterMember],
    state: &mut RunState,
    policy: FairnessPolicy,
    weekday: Weekday,
    date: Option<NaiveDate>,
    slot: AssignmentSlot,
    retry: &RetryPolicy,
) -> Result<RunDay, (RunDay, RepositoryError)> {
    let mut day = RunDay {
        weekday,
        date,
        entries: Vec::new(),
    };

    for &index in indices {
        let task = &tasks[index];
        let Some(task_id) = task.id else {
            warn!("skipping unpersisted task in run: {}", task.name);
            continue;
        };

        let outcome = match assign(task, roster, state, policy) {
            Some(member_id) => {
                let member = roster.iter().find(|m| m.id == member_id);
                let assignment = Assignment::new(
                    task_id,
                    member_id,
                    member.map(|m| m.role).unwrap_or(crate::models::Role::Adult),
                    weekday,
                    slot,
                );
                if let Err(e) = upsert_with_retry(repo, &assignment, retry).await {
                    return Err((day, e));
                }
                AllocationOutcome::Assigned {
                    member_id,
                    member_name: member.map(|m| m.name.clone()).unwrap_or_default(),
                }
            }
            None => {
                info!("no eligible member for '{}' on {}", task.name, weekday);
                AllocationOutcome::Unassigned
            }
        };

        day.entries.push(RunEntry {
            task_id,
            task_name: task.name.clone(),
            area: task.area.clone(),
            difficulty: task.difficulty,
            estimated_minutes: task.estimated_minutes,
            outcome,
        });
    }

    Ok(day)
}

/// Delete persisted scope rows whose upsert key was not reproduced by
/// this run. Only called after a complete (non-partial) allocation.
pub(crate) async fn prune_stale(
    repo: &dyn FullRepository,
    existing: Vec<Assignment>,
    fresh: &HashSet<(TaskId, MemberId, AssignmentSlot)>,
    retry: &RetryPolicy,
) -> RepositoryResult<usize> {
    let mut removed = 0usize;
    for assignment in existing {
        if fresh.contains(&assignment.upsert_key()) {
            continue;
        }
        if let Some(id) = assignment.id {
            info!(
                "removing stale assignment {} (task {}, member {})",
                id, assignment.task_id, assignment.member_id
            );
            delete_with_retry(repo, id, retry).await?;
            removed += 1;
        }
    }
    Ok(removed)
}
