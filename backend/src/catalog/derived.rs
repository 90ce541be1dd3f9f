//! Catalog derivation from a structural house profile.
//!
//! Each structural unit of the home (bathroom, kitchen, bedroom, living
//! room) yields one task with fixed base difficulty and duration. Names
//! are disambiguated by ordinal so a three-bathroom home produces three
//! distinct tasks. Derivation is deterministic: the same profile always
//! yields the same list.

use crate::catalog::TaskSource;
use crate::models::{Frequency, FrequencyLabel, HouseProfile, Task};

/// Ordinal label for the n-th unit of a kind (0-based input).
fn ordinal(index: u32) -> String {
    if index == 0 {
        "primary".to_string()
    } else {
        format!("secondary {}", index + 1)
    }
}

/// Weekly tasks in large homes carry an advisory frequency adjustment.
/// The numeric duration is left untouched.
fn weekly_label(profile: &HouseProfile) -> FrequencyLabel {
    let factor = profile.area_factor();
    if factor > 1.0 {
        FrequencyLabel::adjusted(Frequency::Weekly, factor)
    } else {
        FrequencyLabel::plain(Frequency::Weekly)
    }
}

/// Derive the task list for a house profile.
pub fn derive_tasks(profile: &HouseProfile) -> Vec<Task> {
    let mut tasks = Vec::new();

    for i in 0..profile.bathrooms {
        tasks.push(
            Task::new(
                format!("Clean {} bathroom", ordinal(i)),
                "bathroom",
                4,
                Frequency::Weekly,
                30,
            )
            .with_description("Toilet, shower, sink and mirror")
            .with_frequency_label(weekly_label(profile)),
        );
    }

    for i in 0..profile.kitchens {
        tasks.push(
            Task::new(
                format!("Clean {} kitchen", ordinal(i)),
                "kitchen",
                3,
                Frequency::Daily,
                30,
            )
            .with_description("Counters, sink, stove and floor"),
        );
    }

    for i in 0..profile.bedrooms {
        tasks.push(
            Task::new(
                format!("Tidy {} bedroom", ordinal(i)),
                "bedrooms",
                1,
                Frequency::Daily,
                15,
            )
            .with_description("Make bed and pick up clothes"),
        );
    }

    for i in 0..profile.living_rooms {
        tasks.push(
            Task::new(
                format!("Clean {} living room", ordinal(i)),
                "living room",
                2,
                Frequency::Weekly,
                60,
            )
            .with_description("Tidy up, vacuum and dust")
            .with_frequency_label(weekly_label(profile)),
        );
    }

    if profile.has_pets {
        let description = profile
            .pet_description
            .clone()
            .unwrap_or_else(|| "Litter, bedding and feeding area".to_string());
        tasks.push(
            Task::new("Pet care", "exterior", 5, Frequency::Biweekly, 120)
                .with_description(description),
        );
    }

    tasks
}

/// [`TaskSource`] deriving tasks from a captured house profile.
#[derive(Debug, Clone)]
pub struct DerivedSource {
    profile: HouseProfile,
}

impl DerivedSource {
    pub fn new(profile: HouseProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &HouseProfile {
        &self.profile
    }
}

impl TaskSource for DerivedSource {
    fn origin(&self) -> &'static str {
        "derived"
    }

    fn list_tasks(&self) -> Vec<Task> {
        derive_tasks(&self.profile)
    }
}
