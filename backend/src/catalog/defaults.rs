//! The fixed default task catalog.
//!
//! Ten recurring tasks covering a typical home, used to bootstrap the
//! task table on first run. The list is versioned by a checksum over
//! its serialized content so changes are detectable.

use chrono::Weekday;

use crate::catalog::TaskSource;
use crate::db::checksum::calculate_checksum;
use crate::models::{Frequency, Task};

/// The built-in ten-task catalog.
pub fn default_catalog() -> Vec<Task> {
    vec![
        Task::new("Clean kitchen", "kitchen", 3, Frequency::Daily, 30)
            .with_description("Counters, sink, stove and floor")
            .with_weekdays(vec![Weekday::Tue, Weekday::Sat]),
        Task::new("Clean main bathroom", "bathroom", 4, Frequency::Weekly, 45)
            .with_description("Toilet, shower, sink and mirror")
            .with_weekdays(vec![Weekday::Sat]),
        Task::new("Clean upstairs bathroom", "bathroom", 3, Frequency::Weekly, 30)
            .with_description("Toilet, sink and mirror")
            .with_weekdays(vec![Weekday::Tue]),
        Task::new("Vacuum and mop floors", "general", 4, Frequency::Weekly, 60)
            .with_description("All rooms and hallways")
            .with_weekdays(vec![Weekday::Sat])
            .with_tools(vec!["vacuum".to_string(), "mop".to_string()]),
        Task::new("Dust surfaces", "general", 2, Frequency::Weekly, 30)
            .with_description("Shelves, furniture and electronics")
            .with_weekdays(vec![Weekday::Tue]),
        Task::new("Clean living room", "living room", 2, Frequency::Daily, 20)
            .with_description("Tidy up, cushions and table")
            .with_weekdays(vec![Weekday::Tue, Weekday::Sat]),
        Task::new("Tidy bedrooms", "bedrooms", 2, Frequency::Daily, 15)
            .with_description("Make beds and pick up clothes")
            .with_weekdays(vec![Weekday::Tue, Weekday::Sat]),
        Task::new("Clean windows", "general", 3, Frequency::Biweekly, 90)
            .with_description("Interior glass and frames")
            .with_weekdays(vec![Weekday::Sat])
            .with_tools(vec!["glass cleaner".to_string()]),
        Task::new("Change bed sheets", "bedrooms", 2, Frequency::Weekly, 30)
            .with_description("All beds in use")
            .with_weekdays(vec![Weekday::Sat]),
        Task::new("Organize wardrobes", "organization", 3, Frequency::Monthly, 120)
            .with_description("Sort, fold and store by season")
            .with_weekdays(vec![Weekday::Sat]),
    ]
}

/// Checksum of the serialized default catalog, for change detection.
pub fn default_catalog_checksum() -> String {
    let payload = serde_json::to_string(&default_catalog()).unwrap_or_default();
    calculate_checksum(&payload)
}

/// [`TaskSource`] serving the built-in catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSource;

impl TaskSource for StaticSource {
    fn origin(&self) -> &'static str {
        "static"
    }

    fn list_tasks(&self) -> Vec<Task> {
        default_catalog()
    }
}
