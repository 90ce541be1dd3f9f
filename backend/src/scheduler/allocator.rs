//! The core allocation algorithm.
//!
//! [`assign`] resolves one task against a roster under a fairness policy,
//! mutating only the caller-supplied run state. Rosters are sorted by
//! member id and tasks are fed hardest-first by the drivers, so results
//! are deterministic for a given input.

use std::collections::HashMap;

use crate::api::MemberId;
use crate::models::{Capacity, FairnessPolicy, Role, Task};

/// A member as the allocator sees it: identity plus derived capacity.
#[derive(Debug, Clone)]
pub struct RosterMember {
    pub id: MemberId,
    pub name: String,
    pub role: Role,
    pub capacity: Capacity,
}

/// Mutable state scoped to a single scheduling run.
///
/// Tracks accumulated minutes and difficulty-load per member, and the
/// member last assigned in each area for rotation fairness. Nothing here
/// is persisted; every run starts from zero.
#[derive(Debug, Default)]
pub struct RunState {
    minutes: HashMap<MemberId, u32>,
    load: HashMap<MemberId, u32>,
    last_by_area: HashMap<String, MemberId>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimated minutes accumulated by a member so far this run.
    pub fn minutes_for(&self, member: MemberId) -> u32 {
        self.minutes.get(&member).copied().unwrap_or(0)
    }

    /// Difficulty-load accumulated by a member so far this run.
    pub fn load_for(&self, member: MemberId) -> u32 {
        self.load.get(&member).copied().unwrap_or(0)
    }

    /// The member last assigned in an area, if any.
    pub fn last_for_area(&self, area: &str) -> Option<MemberId> {
        self.last_by_area.get(area).copied()
    }

    fn record(&mut self, member: MemberId, task: &Task) {
        *self.minutes.entry(member).or_insert(0) += task.estimated_minutes;
        *self.load.entry(member).or_insert(0) += task.difficulty as u32;
        self.last_by_area.insert(task.area.clone(), member);
    }
}

/// Members allowed to take the task: difficulty within their ceiling and
/// accumulated minutes strictly under their weekly cap. The cap is
/// checked before assigning, so a member already at or over it never
/// receives another task.
fn eligible<'a>(
    task: &Task,
    roster: &'a [RosterMember],
    state: &RunState,
) -> Vec<&'a RosterMember> {
    roster
        .iter()
        .filter(|m| m.capacity.allows_difficulty(task.difficulty))
        .filter(|m| state.minutes_for(m.id) < m.capacity.max_weekly_minutes)
        .collect()
}

/// Assign one task to one member, or return `None` when nobody is
/// eligible. `None` is the unassigned marker, a normal terminal state.
///
/// On success the run state is updated: the member's minutes and load
/// grow by the task's estimates and the member becomes the last assignee
/// for the task's area.
pub fn assign(
    task: &Task,
    roster: &[RosterMember],
    state: &mut RunState,
    policy: FairnessPolicy,
) -> Option<MemberId> {
    let candidates = eligible(task, roster, state);
    if candidates.is_empty() {
        return None;
    }

    let last = state.last_for_area(&task.area);
    let chosen = match policy {
        FairnessPolicy::Rotation => pick_by_rotation(&candidates, last),
        FairnessPolicy::LoadBalanced => pick_by_load(&candidates, last, state),
    };

    state.record(chosen, task);
    Some(chosen)
}

/// Rotation: skip whoever had this area last; first remaining candidate
/// in roster order. Falls back to the full eligible set when the
/// exclusion empties it.
fn pick_by_rotation(candidates: &[&RosterMember], last: Option<MemberId>) -> MemberId {
    candidates
        .iter()
        .find(|m| Some(m.id) != last)
        .unwrap_or(&candidates[0])
        .id
}

/// Load-balanced: lightest accumulated difficulty-load first, avoiding
/// the area's last assignee when possible. Stable sort keeps roster
/// (id) order among equal loads.
fn pick_by_load(
    candidates: &[&RosterMember],
    last: Option<MemberId>,
    state: &RunState,
) -> MemberId {
    let mut ordered: Vec<&RosterMember> = candidates.to_vec();
    ordered.sort_by_key(|m| state.load_for(m.id));
    ordered
        .iter()
        .find(|m| Some(m.id) != last)
        .unwrap_or(&ordered[0])
        .id
}
