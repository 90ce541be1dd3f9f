//! Household scheduling preferences.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::week::sort_monday_first;

/// Workdays used when the preferences record leaves the set empty.
pub const DEFAULT_WORKDAYS: [Weekday; 2] = [Weekday::Tue, Weekday::Sat];

/// How the allocator distributes tasks among eligible members.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessPolicy {
    /// Never repeat the last member assigned in the same area.
    Rotation,
    /// Prefer the member with the lowest accumulated difficulty load.
    #[default]
    LoadBalanced,
}

impl std::fmt::Display for FairnessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FairnessPolicy::Rotation => write!(f, "rotation"),
            FairnessPolicy::LoadBalanced => write!(f, "load_balanced"),
        }
    }
}

/// The single mutable preferences record read at the start of each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub auto_assign: bool,
    pub workdays: Vec<Weekday>,
    pub preferred_areas: Vec<String>,
    pub avoided_areas: Vec<String>,
    pub max_difficulty: u8,
    pub policy: FairnessPolicy,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            auto_assign: true,
            workdays: Vec::new(),
            preferred_areas: Vec::new(),
            avoided_areas: Vec::new(),
            max_difficulty: 3,
            policy: FairnessPolicy::LoadBalanced,
        }
    }
}

impl Preferences {
    /// Designated workdays in Monday-first order, falling back to the
    /// default pair when the stored set is empty.
    pub fn effective_workdays(&self) -> Vec<Weekday> {
        if self.workdays.is_empty() {
            return DEFAULT_WORKDAYS.to_vec();
        }
        let mut days = self.workdays.clone();
        sort_monday_first(&mut days);
        days
    }
}
