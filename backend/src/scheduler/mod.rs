//! The chore scheduling engine.
//!
//! Turns the persisted task catalog and member roster into fair,
//! capacity-respecting assignments. The allocator itself is a pure
//! function over caller-held run state; the two drivers wrap it with
//! preference reading, day expansion, scope locking and transactional
//! persistence.
//!
//! - [`allocator`]: eligibility filter + the two fairness policies
//! - [`expansion`]: weekday filtering and frequency-authoritative day
//!   expansion
//! - [`roster`]: roster assembly with the age floor and capacity curve
//! - [`weekly`] / [`calendar`]: the two entry points
//! - [`report`]: structured run results, including unassigned markers
//! - [`locks`]: per-scope run serialization

pub mod allocator;
pub mod calendar;
pub mod driver;
pub mod error;
pub mod expansion;
pub mod locks;
pub mod report;
pub mod roster;
pub mod weekly;

pub use allocator::{assign, RosterMember, RunState};
pub use calendar::run_calendar;
pub use driver::{RetryPolicy, RunOptions};
pub use error::{ScheduleRunError, ScheduleRunResult};
pub use expansion::WeekPlanner;
pub use locks::ScopeLocks;
pub use report::{AllocationOutcome, RunDay, RunEntry, RunReport, RunScope};
pub use roster::build_roster;
pub use weekly::run_weekly;
