//! Schedule views: one week grouped by day, or one calendar date.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::api::{AssignmentId, MemberId, TaskId};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{week_start_for, weekdays_monday_first, Assignment, Role, Task};
use crate::services::statistics::completion_rate;

/// One assignment joined with its task and member for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledItem {
    pub assignment_id: AssignmentId,
    pub task_id: TaskId,
    pub task_name: String,
    pub area: String,
    pub difficulty: u8,
    pub estimated_minutes: u32,
    pub member_id: MemberId,
    pub member_name: String,
    pub member_role: Role,
    pub weekday: Weekday,
    pub date: Option<NaiveDate>,
    pub completed: bool,
    pub notes: Option<String>,
}

/// The items of one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayView {
    pub weekday: Weekday,
    pub items: Vec<ScheduledItem>,
}

/// Per-member aggregates across one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberWeekStats {
    pub member_id: MemberId,
    pub member_name: String,
    pub total_difficulty: u32,
    pub total_minutes: u32,
    pub task_count: usize,
    pub completed_count: usize,
    pub completion_rate: f64,
}

/// One week's schedule: all seven days Monday-first, member aggregates,
/// and the global completion rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub week_start: NaiveDate,
    pub days: Vec<DayView>,
    pub member_stats: Vec<MemberWeekStats>,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
}

/// The calendar-slot schedule of a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub items: Vec<ScheduledItem>,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
}

/// The full schedule for the week containing `week_start`.
pub async fn schedule_for_week(
    repo: &dyn FullRepository,
    week_start: NaiveDate,
) -> RepositoryResult<WeekSchedule> {
    let week_start = week_start_for(week_start);
    let assignments = repo.assignments_for_week(week_start).await?;
    let (tasks, names) = lookup_maps(repo).await?;

    let mut days: BTreeMap<u32, Vec<ScheduledItem>> = BTreeMap::new();
    let mut member_stats: BTreeMap<MemberId, MemberWeekStats> = BTreeMap::new();
    let mut total = 0usize;
    let mut completed = 0usize;

    for assignment in assignments {
        let Some(item) = join_item(&assignment, &tasks, &names) else {
            continue;
        };
        total += 1;
        if item.completed {
            completed += 1;
        }

        let stats = member_stats
            .entry(item.member_id)
            .or_insert_with(|| MemberWeekStats {
                member_id: item.member_id,
                member_name: item.member_name.clone(),
                total_difficulty: 0,
                total_minutes: 0,
                task_count: 0,
                completed_count: 0,
                completion_rate: 0.0,
            });
        stats.total_difficulty += item.difficulty as u32;
        stats.total_minutes += item.estimated_minutes;
        stats.task_count += 1;
        if item.completed {
            stats.completed_count += 1;
        }

        days.entry(item.weekday.num_days_from_monday())
            .or_default()
            .push(item);
    }

    let days = weekdays_monday_first()
        .into_iter()
        .map(|weekday| DayView {
            weekday,
            items: days
                .remove(&weekday.num_days_from_monday())
                .unwrap_or_default(),
        })
        .collect();

    let member_stats = member_stats
        .into_values()
        .map(|mut stats| {
            stats.completion_rate = completion_rate(stats.completed_count, stats.task_count);
            stats
        })
        .collect();

    Ok(WeekSchedule {
        week_start,
        days,
        member_stats,
        total,
        completed,
        completion_rate: completion_rate(completed, total),
    })
}

/// The calendar-slot schedule for one specific date.
pub async fn schedule_for_date(
    repo: &dyn FullRepository,
    date: NaiveDate,
) -> RepositoryResult<DaySchedule> {
    let assignments = repo.assignments_for_date(date).await?;
    let (tasks, names) = lookup_maps(repo).await?;

    let items: Vec<ScheduledItem> = assignments
        .iter()
        .filter_map(|a| join_item(a, &tasks, &names))
        .collect();
    let total = items.len();
    let completed = items.iter().filter(|i| i.completed).count();

    Ok(DaySchedule {
        date,
        items,
        total,
        completed,
        completion_rate: completion_rate(completed, total),
    })
}

async fn lookup_maps(
    repo: &dyn FullRepository,
) -> RepositoryResult<(BTreeMap<i64, Task>, BTreeMap<MemberId, String>)> {
    let mut tasks = BTreeMap::new();
    for task in repo.list_tasks().await? {
        if let Some(id) = task.id {
            tasks.insert(id.value(), task);
        }
    }
    let mut names = BTreeMap::new();
    for member in repo
        .list_adults()
        .await?
        .into_iter()
        .chain(repo.list_children().await?)
    {
        if let Some(id) = member.id {
            names.insert(id, member.name);
        }
    }
    Ok((tasks, names))
}

/// Join one assignment with catalog and roster data. Rows referencing
/// deleted tasks or members keep placeholder fields so history remains
/// visible. A row that never got an id is dropped: its item could not
/// be handed back to completion.
fn join_item(
    assignment: &Assignment,
    tasks: &BTreeMap<i64, Task>,
    names: &BTreeMap<MemberId, String>,
) -> Option<ScheduledItem> {
    let assignment_id = assignment.id?;
    let task = tasks.get(&assignment.task_id.value());
    Some(ScheduledItem {
        assignment_id,
        task_id: assignment.task_id,
        task_name: task
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("task {}", assignment.task_id)),
        area: task
            .map(|t| t.area.clone())
            .unwrap_or_else(|| "general".to_string()),
        difficulty: task.map(|t| t.difficulty).unwrap_or(0),
        estimated_minutes: task.map(|t| t.estimated_minutes).unwrap_or(0),
        member_id: assignment.member_id,
        member_name: names
            .get(&assignment.member_id)
            .cloned()
            .unwrap_or_else(|| format!("member {}", assignment.member_id)),
        member_role: assignment.member_role,
        weekday: assignment.weekday,
        date: assignment.slot.calendar_date(),
        completed: assignment.completed,
        notes: assignment.notes.clone(),
    })
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod views_tests;
