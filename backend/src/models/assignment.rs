//! Assignment records produced by scheduling runs.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::api::{AssignmentId, MemberId, TaskId};
use crate::models::member::Role;

/// The persisted time key of an assignment.
///
/// Weekly runs key rows on the week-start date alone; calendar runs key
/// rows on the specific date and also carry the reference week so weekly
/// views and statistics can pick them up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AssignmentSlot {
    Weekly { week_start: NaiveDate },
    Calendar { date: NaiveDate, week_start: NaiveDate },
}

impl AssignmentSlot {
    /// The week this slot belongs to.
    pub fn week_start(&self) -> NaiveDate {
        match self {
            AssignmentSlot::Weekly { week_start } => *week_start,
            AssignmentSlot::Calendar { week_start, .. } => *week_start,
        }
    }

    /// The concrete date for calendar slots.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        match self {
            AssignmentSlot::Weekly { .. } => None,
            AssignmentSlot::Calendar { date, .. } => Some(*date),
        }
    }

    pub fn is_calendar(&self) -> bool {
        matches!(self, AssignmentSlot::Calendar { .. })
    }
}

/// One task assigned to one member for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Option<AssignmentId>,
    pub task_id: TaskId,
    pub member_id: MemberId,
    pub member_role: Role,
    pub weekday: Weekday,
    pub slot: AssignmentSlot,
    pub completed: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(
        task_id: TaskId,
        member_id: MemberId,
        member_role: Role,
        weekday: Weekday,
        slot: AssignmentSlot,
    ) -> Self {
        Self {
            id: None,
            task_id,
            member_id,
            member_role,
            weekday,
            slot,
            completed: false,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Uniqueness key: at most one assignment per (task, member, slot).
    pub fn upsert_key(&self) -> (TaskId, MemberId, AssignmentSlot) {
        (self.task_id, self.member_id, self.slot)
    }
}
