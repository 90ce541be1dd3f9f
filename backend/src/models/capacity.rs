//! Work-capacity derivation.
//!
//! One canonical age/role curve maps every member to a capacity profile.
//! All entry points go through [`capacity_for`]; there is deliberately no
//! second place where age brackets are interpreted.

use serde::{Deserialize, Serialize};

use crate::models::member::{Member, Role};

/// Ceiling on what a member may be assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub max_difficulty: u8,
    pub max_weekly_minutes: u32,
    pub preferred_areas: Vec<String>,
    pub can_do_complex: bool,
}

impl Capacity {
    /// Baseline for adults: full difficulty range, 40 h/week.
    pub fn adult_default() -> Self {
        Self {
            max_difficulty: 5,
            max_weekly_minutes: 2400,
            preferred_areas: vec![
                "kitchen".to_string(),
                "bathroom".to_string(),
                "living room".to_string(),
                "exterior".to_string(),
            ],
            can_do_complex: true,
        }
    }

    /// Baseline for children before age-bracket narrowing.
    pub fn child_default() -> Self {
        Self {
            max_difficulty: 4,
            max_weekly_minutes: 1800,
            preferred_areas: vec!["bedrooms".to_string(), "toys".to_string()],
            can_do_complex: false,
        }
    }

    pub fn allows_difficulty(&self, difficulty: u8) -> bool {
        difficulty <= self.max_difficulty
    }
}

/// Per-role capacity baselines, overridable through settings.
///
/// A `None` entry falls back to the built-in default for that role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityTable {
    pub adult: Option<Capacity>,
    pub child: Option<Capacity>,
}

impl CapacityTable {
    /// Baseline capacity for a role, override-aware.
    pub fn baseline(&self, role: Role) -> Capacity {
        match role {
            Role::Adult => self.adult.clone().unwrap_or_else(Capacity::adult_default),
            Role::Child => self.child.clone().unwrap_or_else(Capacity::child_default),
        }
    }

    pub fn set(&mut self, role: Role, capacity: Capacity) {
        match role {
            Role::Adult => self.adult = Some(capacity),
            Role::Child => self.child = Some(capacity),
        }
    }

    pub fn get(&self, role: Role) -> Option<&Capacity> {
        match role {
            Role::Adult => self.adult.as_ref(),
            Role::Child => self.child.as_ref(),
        }
    }
}

/// Age-bracket ceilings for children: (max difficulty, max weekly minutes).
fn child_bracket(age: u32) -> Option<(u8, u32)> {
    match age {
        0..=6 => Some((1, 300)),
        7..=10 => Some((2, 480)),
        11..=14 => Some((3, 720)),
        _ => None,
    }
}

/// Derive the effective capacity for a member.
///
/// Adults get the adult baseline unchanged. Children get the child
/// baseline narrowed componentwise by their age bracket; from fifteen
/// on no bracket applies and the baseline stands. A child without a
/// recorded age is treated at the adult baseline.
pub fn capacity_for(member: &Member, table: &CapacityTable) -> Capacity {
    match (member.role, member.age) {
        (Role::Adult, _) => table.baseline(Role::Adult),
        (Role::Child, None) => table.baseline(Role::Adult),
        (Role::Child, Some(age)) => {
            let mut capacity = table.baseline(Role::Child);
            if let Some((max_difficulty, max_minutes)) = child_bracket(age) {
                capacity.max_difficulty = capacity.max_difficulty.min(max_difficulty);
                capacity.max_weekly_minutes = capacity.max_weekly_minutes.min(max_minutes);
            }
            capacity
        }
    }
}
