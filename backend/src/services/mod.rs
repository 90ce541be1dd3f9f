//! Service layer for business logic and orchestration.
//!
//! These are the operations the web/API layer consumes: preference and
//! capacity-override management, catalog seeding, run triggers, schedule
//! views, completion tracking and rolling statistics. Services
//! orchestrate repository calls; the scheduling algorithms themselves
//! live in [`crate::scheduler`].

pub mod completion;
pub mod runs;
pub mod seeding;
pub mod settings;
pub mod statistics;
pub mod views;

pub use completion::complete_assignment;
pub use runs::{assign_calendar, assign_week};
pub use seeding::{catalog_checksum, list_catalog, seed_default_catalog, seed_derived_catalog, SeedOutcome};
pub use settings::{
    get_capacity_overrides, get_preferences, save_capacity_override, save_preferences,
};
pub use statistics::{statistics_over, statistics_over_from, AreaCompletion, MemberCompletion, StatisticsReport};
pub use views::{schedule_for_date, schedule_for_week, DaySchedule, DayView, MemberWeekStats, ScheduledItem, WeekSchedule};
