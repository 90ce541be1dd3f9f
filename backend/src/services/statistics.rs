//! Rolling completion statistics.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::MemberId;
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::week_start_for;

/// Completion ratio as a percentage in [0, 100]. Zero when nothing was
/// scheduled; never a division error.
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * completed as f64 / total as f64
    }
}

/// Completion counts for one member across the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCompletion {
    pub member_id: MemberId,
    pub member_name: String,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
}

/// Completion counts for one area across the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaCompletion {
    pub area: String,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
}

/// Rolling statistics over the last N weeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub weeks: u32,
    /// The week-start dates covered, most recent first.
    pub week_starts: Vec<NaiveDate>,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
    pub members: Vec<MemberCompletion>,
    pub areas: Vec<AreaCompletion>,
}

/// Statistics over the last `n_weeks` weeks, anchored at today (UTC).
pub async fn statistics_over(
    repo: &dyn FullRepository,
    n_weeks: u32,
) -> RepositoryResult<StatisticsReport> {
    statistics_over_from(repo, n_weeks, Utc::now().date_naive()).await
}

/// Statistics over the `n_weeks` week-starts ending at the week that
/// contains `anchor`. An empty window (`n_weeks == 0`) yields zeroed
/// aggregates.
pub async fn statistics_over_from(
    repo: &dyn FullRepository,
    n_weeks: u32,
    anchor: NaiveDate,
) -> RepositoryResult<StatisticsReport> {
    let current = week_start_for(anchor);
    let week_starts: Vec<NaiveDate> = (0..n_weeks)
        .map(|offset| current - Duration::weeks(offset as i64))
        .collect();

    // Member names resolve through the roster; deleted members keep a
    // placeholder so their history stays visible.
    let mut names: BTreeMap<MemberId, String> = BTreeMap::new();
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
    let mut task_areas: BTreeMap<i64, String> = BTreeMap::new();
    for task in repo.list_tasks().await? {
        if let Some(id) = task.id {
            task_areas.insert(id.value(), task.area);
        }
    }

    let mut total = 0usize;
    let mut completed = 0usize;
    let mut per_member: BTreeMap<MemberId, (usize, usize)> = BTreeMap::new();
    let mut per_area: BTreeMap<String, (usize, usize)> = BTreeMap::new();

    for week_start in &week_starts {
        for assignment in repo.assignments_for_week(*week_start).await? {
            total += 1;
            let done = assignment.completed;
            if done {
                completed += 1;
            }

            let member = per_member.entry(assignment.member_id).or_insert((0, 0));
            member.0 += 1;
            if done {
                member.1 += 1;
            }

            let area = task_areas
                .get(&assignment.task_id.value())
                .cloned()
                .unwrap_or_else(|| "general".to_string());
            let entry = per_area.entry(area).or_insert((0, 0));
            entry.0 += 1;
            if done {
                entry.1 += 1;
            }
        }
    }

    let members = per_member
        .into_iter()
        .map(|(member_id, (total, completed))| MemberCompletion {
            member_id,
            member_name: names
                .get(&member_id)
                .cloned()
                .unwrap_or_else(|| format!("member {}", member_id)),
            total,
            completed,
            completion_rate: completion_rate(completed, total),
        })
        .collect();
    let areas = per_area
        .into_iter()
        .map(|(area, (total, completed))| AreaCompletion {
            area,
            total,
            completed,
            completion_rate: completion_rate(completed, total),
        })
        .collect();

    Ok(StatisticsReport {
        weeks: n_weeks,
        week_starts,
        total,
        completed,
        completion_rate: completion_rate(completed, total),
        members,
        areas,
    })
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod statistics_tests;
