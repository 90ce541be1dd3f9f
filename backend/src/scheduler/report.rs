//! Structured results of a scheduling run.
//!
//! A run always returns a [`RunReport`], including the tasks nobody was
//! eligible for. Operators read the unassigned markers out of the report;
//! they are never an error and never persisted.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::api::{MemberId, TaskId};
use crate::models::FairnessPolicy;

/// The persistence scope a run owns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RunScope {
    Week { week_start: NaiveDate },
    Range { start: NaiveDate, end: NaiveDate },
}

impl RunScope {
    /// Key under which concurrent runs over this scope serialize.
    ///
    /// Range keys are exact: two overlapping ranges get distinct keys
    /// and run concurrently, last writer winning on any upsert keys
    /// they share. Callers needing exclusion across overlapping ranges
    /// must serialize them externally.
    pub fn lock_key(&self) -> String {
        match self {
            RunScope::Week { week_start } => format!("week:{}", week_start),
            RunScope::Range { start, end } => format!("range:{}:{}", start, end),
        }
    }
}

impl std::fmt::Display for RunScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunScope::Week { week_start } => write!(f, "week of {}", week_start),
            RunScope::Range { start, end } => write!(f, "{}..{}", start, end),
        }
    }
}

/// Outcome of allocating one task on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AllocationOutcome {
    Assigned {
        member_id: MemberId,
        member_name: String,
    },
    Unassigned,
}

impl AllocationOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, AllocationOutcome::Assigned { .. })
    }

    pub fn member_id(&self) -> Option<MemberId> {
        match self {
            AllocationOutcome::Assigned { member_id, .. } => Some(*member_id),
            AllocationOutcome::Unassigned => None,
        }
    }
}

/// One task resolved on one scheduled day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEntry {
    pub task_id: TaskId,
    pub task_name: String,
    pub area: String,
    pub difficulty: u8,
    pub estimated_minutes: u32,
    pub outcome: AllocationOutcome,
}

/// All entries of one scheduled day. Days with no due tasks appear with
/// an empty entry list, so calendar coverage is visible in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDay {
    pub weekday: Weekday,
    pub date: Option<NaiveDate>,
    pub entries: Vec<RunEntry>,
}

/// The structured result of a driver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub scope: RunScope,
    pub policy: FairnessPolicy,
    pub days: Vec<RunDay>,
    pub assigned: usize,
    pub unassigned: usize,
    /// Set when a deadline stopped the run before all days were covered.
    pub partial: bool,
}

impl RunReport {
    pub fn new(scope: RunScope, policy: FairnessPolicy) -> Self {
        Self {
            scope,
            policy,
            days: Vec::new(),
            assigned: 0,
            unassigned: 0,
            partial: false,
        }
    }

    /// Append a day and fold its entries into the counters.
    pub fn push_day(&mut self, day: RunDay) {
        for entry in &day.entries {
            if entry.outcome.is_assigned() {
                self.assigned += 1;
            } else {
                self.unassigned += 1;
            }
        }
        self.days.push(day);
    }

    /// Total entries, assigned plus unassigned.
    pub fn total(&self) -> usize {
        self.assigned + self.unassigned
    }

    /// Iterate all entries across all days.
    pub fn entries(&self) -> impl Iterator<Item = &RunEntry> {
        self.days.iter().flat_map(|d| d.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, outcome: AllocationOutcome) -> RunEntry {
        RunEntry {
            task_id: TaskId::new(1),
            task_name: name.to_string(),
            area: "general".to_string(),
            difficulty: 2,
            estimated_minutes: 30,
            outcome,
        }
    }

    #[test]
    fn test_counters_follow_outcomes() {
        let scope = RunScope::Week {
            week_start: NaiveDate::from_ymd_opt(2026, 8, 17).unwrap(),
        };
        let mut report = RunReport::new(scope, FairnessPolicy::LoadBalanced);
        report.push_day(RunDay {
            weekday: Weekday::Tue,
            date: None,
            entries: vec![
                entry(
                    "a",
                    AllocationOutcome::Assigned {
                        member_id: MemberId::new(1),
                        member_name: "Ana".to_string(),
                    },
                ),
                entry("b", AllocationOutcome::Unassigned),
            ],
        });

        assert_eq!(report.assigned, 1);
        assert_eq!(report.unassigned, 1);
        assert_eq!(report.total(), 2);
        assert!(!report.partial);
        assert_eq!(report.entries().count(), 2);
    }

    #[test]
    fn test_lock_keys_distinguish_scopes() {
        let week = RunScope::Week {
            week_start: NaiveDate::from_ymd_opt(2026, 8, 17).unwrap(),
        };
        let range = RunScope::Range {
            start: NaiveDate::from_ymd_opt(2026, 8, 17).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        };
        assert_ne!(week.lock_key(), range.lock_key());
    }
}
