//! Day expansion: which tasks are due on which scheduled day.
//!
//! The weekday set on a task constrains the days it may land on (empty
//! set = every scheduled day). The frequency label is authoritative for
//! how often it actually recurs within the week: daily tasks repeat on
//! each applicable day, weekly tasks land once on the first applicable
//! day, and biweekly/monthly tasks land once on their on-weeks, phased
//! against a fixed Monday anchor.

use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};

use crate::models::{week_offset, Frequency, Task};

/// Per-week expansion state.
///
/// One planner covers one week; drivers feed it the week's scheduled
/// days in chronological order and it tracks which once-per-week tasks
/// have already been placed.
#[derive(Debug)]
pub struct WeekPlanner {
    week_start: NaiveDate,
    placed: HashSet<usize>,
}

impl WeekPlanner {
    pub fn new(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            placed: HashSet::new(),
        }
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Whether the week is an on-week for a cadence.
    fn on_week(&self, frequency: Frequency) -> bool {
        match frequency {
            Frequency::Daily | Frequency::Weekly => true,
            Frequency::Biweekly => week_offset(self.week_start) % 2 == 0,
            Frequency::Monthly => week_offset(self.week_start) % 4 == 0,
        }
    }

    /// Indices into `tasks` of the tasks due on `weekday`, hardest
    /// first (ties broken by task id, then position).
    ///
    /// Non-daily tasks are consumed: once returned for a day they will
    /// not be returned again this week.
    pub fn tasks_for_day(&mut self, tasks: &[Task], weekday: Weekday) -> Vec<usize> {
        let mut due: Vec<usize> = Vec::new();
        for (index, task) in tasks.iter().enumerate() {
            if !task.runs_on(weekday) || !self.on_week(task.frequency.base) {
                continue;
            }
            match task.frequency.base {
                Frequency::Daily => due.push(index),
                Frequency::Weekly | Frequency::Biweekly | Frequency::Monthly => {
                    if self.placed.insert(index) {
                        due.push(index);
                    }
                }
            }
        }

        due.sort_by(|&a, &b| {
            tasks[b]
                .difficulty
                .cmp(&tasks[a].difficulty)
                .then_with(|| sort_id(&tasks[a], a).cmp(&sort_id(&tasks[b], b)))
        });
        due
    }
}

fn sort_id(task: &Task, index: usize) -> i64 {
    task.id.map(|id| id.value()).unwrap_or(index as i64)
}
