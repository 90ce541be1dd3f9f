//! Recurring household task definitions.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::api::TaskId;

/// Difficulty scale bounds for tasks and capacity ceilings.
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// How often a task recurs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Frequency plus the optional surface-area adjustment annotation.
///
/// The adjustment is advisory only. It is recorded on the label during
/// catalog derivation for large homes and never changes the numeric
/// duration or the expansion cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyLabel {
    pub base: Frequency,
    pub adjustment: Option<f64>,
}

impl FrequencyLabel {
    pub fn plain(base: Frequency) -> Self {
        Self {
            base,
            adjustment: None,
        }
    }

    pub fn adjusted(base: Frequency, factor: f64) -> Self {
        Self {
            base,
            adjustment: Some(factor),
        }
    }

    pub fn is_adjusted(&self) -> bool {
        self.adjustment.is_some()
    }
}

impl std::fmt::Display for FrequencyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.adjustment {
            Some(factor) => write!(f, "{} (adjusted x{})", self.base, factor),
            None => write!(f, "{}", self.base),
        }
    }
}

/// A recurring household task.
///
/// `weekdays` restricts the days the task may be scheduled on; an empty
/// set means the task is applicable on every designated scheduling day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<TaskId>,
    pub name: String,
    pub description: String,
    pub area: String,
    pub difficulty: u8,
    pub frequency: FrequencyLabel,
    pub estimated_minutes: u32,
    pub weekdays: Vec<Weekday>,
    pub required_tools: Vec<String>,
}

impl Task {
    /// Create a task with the difficulty clamped to the 1..=5 scale.
    pub fn new(
        name: impl Into<String>,
        area: impl Into<String>,
        difficulty: u8,
        frequency: Frequency,
        estimated_minutes: u32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            area: area.into(),
            difficulty: difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY),
            frequency: FrequencyLabel::plain(frequency),
            estimated_minutes,
            weekdays: Vec::new(),
            required_tools: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_weekdays(mut self, weekdays: Vec<Weekday>) -> Self {
        self.weekdays = weekdays;
        self
    }

    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.required_tools = tools;
        self
    }

    pub fn with_frequency_label(mut self, label: FrequencyLabel) -> Self {
        self.frequency = label;
        self
    }

    /// Whether the task is applicable on the given weekday.
    pub fn runs_on(&self, weekday: Weekday) -> bool {
        self.weekdays.is_empty() || self.weekdays.contains(&weekday)
    }
}
