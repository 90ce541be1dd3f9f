//! In-memory local repository implementation.
//!
//! Implements all repository traits over plain maps behind an `RwLock`,
//! giving fast, deterministic, isolated execution for unit tests and
//! local development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::api::{AssignmentId, DateRange, MemberId, TaskId};
use crate::db::repository::{
    AssignmentRepository, ErrorContext, MemberRepository, RepositoryError, RepositoryResult,
    SettingsRepository, TaskRepository,
};
use crate::models::{
    Assignment, Capacity, CapacityTable, Member, Preferences, Role, Task,
};

/// In-memory local repository.
///
/// Cloning is cheap; clones share the same underlying data.
///
/// # Example
/// ```
/// use hogar_rust::db::repositories::LocalRepository;
/// use hogar_rust::db::repository::TaskRepository;
/// use hogar_rust::models::{Frequency, Task};
///
/// # async fn example() {
/// let repo = LocalRepository::new();
/// let id = repo
///     .store_task(&Task::new("Clean kitchen", "kitchen", 3, Frequency::Daily, 30))
///     .await
///     .unwrap();
/// assert_eq!(repo.get_task(id).await.unwrap().name, "Clean kitchen");
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    tasks: HashMap<i64, Task>,
    members: HashMap<i64, Member>,
    assignments: HashMap<i64, Assignment>,

    preferences: Option<Preferences>,
    capacity_overrides: CapacityTable,

    // ID counters
    next_task_id: i64,
    next_member_id: i64,
    next_assignment_id: i64,

    // Connection health
    is_healthy: bool,

    // Assignment-write fault injection
    transient_write_faults: u32,
    writes_until_failure: Option<u32>,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
            members: HashMap::new(),
            assignments: HashMap::new(),
            preferences: None,
            capacity_overrides: CapacityTable::default(),
            next_task_id: 1,
            next_member_id: 1,
            next_assignment_id: 1,
            is_healthy: true,
            transient_write_faults: 0,
            writes_until_failure: None,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Fail the next `count` assignment writes with a retryable error,
    /// then let writes succeed again. For testing retry behavior.
    pub fn fail_next_assignment_writes(&self, count: u32) {
        self.data.write().transient_write_faults = count;
    }

    /// Let `count` more assignment writes succeed, then fail every
    /// subsequent one until [`Self::clear`] resets the counter. For
    /// testing mid-run persistence failures.
    pub fn fail_assignment_writes_after(&self, count: u32) {
        self.data.write().writes_until_failure = Some(count);
    }

    /// Clear all data, keeping the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..LocalData::default()
        };
    }

    /// Number of tasks stored.
    pub fn task_count(&self) -> usize {
        self.data.read().tasks.len()
    }

    /// Number of assignments stored.
    pub fn assignment_count(&self) -> usize {
        self.data.read().assignments.len()
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "local repository marked unhealthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }

    fn take_write_fault(data: &mut LocalData, operation: &str) -> RepositoryResult<()> {
        if data.transient_write_faults > 0 {
            data.transient_write_faults -= 1;
            return Err(RepositoryError::query_with_context(
                "injected transient write failure",
                ErrorContext::new(operation).retryable(),
            ));
        }
        match data.writes_until_failure {
            Some(0) => Err(RepositoryError::query_with_context(
                "injected write failure",
                ErrorContext::new(operation).retryable(),
            )),
            Some(remaining) => {
                data.writes_until_failure = Some(remaining - 1);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn sorted_by_id<T: Clone>(map: &HashMap<i64, T>) -> Vec<T> {
        let mut keys: Vec<_> = map.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter()
            .filter_map(|k| map.get(&k).cloned())
            .collect()
    }

    fn collect_assignments(
        &self,
        filter: impl Fn(&Assignment) -> bool,
    ) -> Vec<Assignment> {
        let data = self.data.read();
        let mut rows: Vec<_> = data
            .assignments
            .iter()
            .filter(|(_, a)| filter(a))
            .map(|(id, a)| (*id, a.clone()))
            .collect();
        rows.sort_unstable_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, a)| a).collect()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_task(&self, task: &Task) -> RepositoryResult<TaskId> {
        self.check_health("store_task")?;
        let mut data = self.data.write();
        let id = data.next_task_id;
        data.next_task_id += 1;
        let mut stored = task.clone();
        stored.id = Some(TaskId(id));
        data.tasks.insert(id, stored);
        Ok(TaskId(id))
    }

    async fn get_task(&self, task_id: TaskId) -> RepositoryResult<Task> {
        self.check_health("get_task")?;
        self.data.read().tasks.get(&task_id.0).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("task {} not found", task_id),
                ErrorContext::new("get_task")
                    .with_entity("task")
                    .with_entity_id(task_id),
            )
        })
    }

    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>> {
        self.check_health("list_tasks")?;
        Ok(Self::sorted_by_id(&self.data.read().tasks))
    }

    async fn find_task_by_name(&self, name: &str) -> RepositoryResult<Option<Task>> {
        self.check_health("find_task_by_name")?;
        let data = self.data.read();
        let mut matches: Vec<_> = data
            .tasks
            .iter()
            .filter(|(_, t)| t.name == name)
            .collect();
        matches.sort_unstable_by_key(|(id, _)| **id);
        Ok(matches.first().map(|(_, t)| (*t).clone()))
    }

    async fn update_task(&self, task: &Task) -> RepositoryResult<()> {
        self.check_health("update_task")?;
        let id = task.id.ok_or_else(|| {
            RepositoryError::validation_with_context(
                "cannot update a task without an id",
                ErrorContext::new("update_task").with_entity("task"),
            )
        })?;
        let mut data = self.data.write();
        if !data.tasks.contains_key(&id.0) {
            return Err(RepositoryError::not_found_with_context(
                format!("task {} not found", id),
                ErrorContext::new("update_task")
                    .with_entity("task")
                    .with_entity_id(id),
            ));
        }
        data.tasks.insert(id.0, task.clone());
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for LocalRepository {
    async fn list_adults(&self) -> RepositoryResult<Vec<Member>> {
        self.check_health("list_adults")?;
        let data = self.data.read();
        let mut adults: Vec<_> = data
            .members
            .iter()
            .filter(|(_, m)| m.role == Role::Adult)
            .map(|(id, m)| (*id, m.clone()))
            .collect();
        adults.sort_unstable_by_key(|(id, _)| *id);
        Ok(adults.into_iter().map(|(_, m)| m).collect())
    }

    async fn list_children(&self) -> RepositoryResult<Vec<Member>> {
        self.check_health("list_children")?;
        let data = self.data.read();
        let mut children: Vec<_> = data
            .members
            .iter()
            .filter(|(_, m)| m.role == Role::Child)
            .map(|(id, m)| (*id, m.clone()))
            .collect();
        children.sort_unstable_by_key(|(id, _)| *id);
        Ok(children.into_iter().map(|(_, m)| m).collect())
    }

    async fn get_member(&self, member_id: MemberId) -> RepositoryResult<Member> {
        self.check_health("get_member")?;
        self.data
            .read()
            .members
            .get(&member_id.0)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("member {} not found", member_id),
                    ErrorContext::new("get_member")
                        .with_entity("member")
                        .with_entity_id(member_id),
                )
            })
    }

    async fn store_member(&self, member: &Member) -> RepositoryResult<MemberId> {
        self.check_health("store_member")?;
        let mut data = self.data.write();
        let id = data.next_member_id;
        data.next_member_id += 1;
        let mut stored = member.clone();
        stored.id = Some(MemberId(id));
        data.members.insert(id, stored);
        Ok(MemberId(id))
    }
}

#[async_trait]
impl AssignmentRepository for LocalRepository {
    async fn upsert_assignment(&self, assignment: &Assignment) -> RepositoryResult<AssignmentId> {
        self.check_health("upsert_assignment")?;
        let mut data = self.data.write();
        Self::take_write_fault(&mut data, "upsert_assignment")?;
        let key = assignment.upsert_key();
        let existing = data
            .assignments
            .iter()
            .find(|(_, a)| a.upsert_key() == key)
            .map(|(id, a)| (*id, a.clone()));

        match existing {
            Some((row_id, previous)) => {
                // Replace in place: completion state, notes and creation
                // timestamp survive the rewrite.
                let mut updated = assignment.clone();
                updated.id = Some(AssignmentId(row_id));
                updated.completed = previous.completed;
                updated.notes = previous.notes;
                updated.created_at = previous.created_at;
                data.assignments.insert(row_id, updated);
                Ok(AssignmentId(row_id))
            }
            None => {
                let id = data.next_assignment_id;
                data.next_assignment_id += 1;
                let mut stored = assignment.clone();
                stored.id = Some(AssignmentId(id));
                data.assignments.insert(id, stored);
                Ok(AssignmentId(id))
            }
        }
    }

    async fn get_assignment(&self, assignment_id: AssignmentId) -> RepositoryResult<Assignment> {
        self.check_health("get_assignment")?;
        self.data
            .read()
            .assignments
            .get(&assignment_id.0)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("assignment {} not found", assignment_id),
                    ErrorContext::new("get_assignment")
                        .with_entity("assignment")
                        .with_entity_id(assignment_id),
                )
            })
    }

    async fn assignments_for_week(
        &self,
        week_start: NaiveDate,
    ) -> RepositoryResult<Vec<Assignment>> {
        self.check_health("assignments_for_week")?;
        Ok(self.collect_assignments(|a| a.slot.week_start() == week_start))
    }

    async fn weekly_assignments(&self, week_start: NaiveDate) -> RepositoryResult<Vec<Assignment>> {
        self.check_health("weekly_assignments")?;
        Ok(self.collect_assignments(|a| {
            !a.slot.is_calendar() && a.slot.week_start() == week_start
        }))
    }

    async fn calendar_assignments(&self, range: DateRange) -> RepositoryResult<Vec<Assignment>> {
        self.check_health("calendar_assignments")?;
        Ok(self.collect_assignments(|a| {
            a.slot
                .calendar_date()
                .is_some_and(|d| d >= range.start() && d <= range.end())
        }))
    }

    async fn assignments_for_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Assignment>> {
        self.check_health("assignments_for_date")?;
        Ok(self.collect_assignments(|a| a.slot.calendar_date() == Some(date)))
    }

    async fn delete_assignment(&self, assignment_id: AssignmentId) -> RepositoryResult<()> {
        self.check_health("delete_assignment")?;
        let mut data = self.data.write();
        Self::take_write_fault(&mut data, "delete_assignment")?;
        data.assignments.remove(&assignment_id.0);
        Ok(())
    }

    async fn set_completion(
        &self,
        assignment_id: AssignmentId,
        completed: bool,
        notes: Option<String>,
    ) -> RepositoryResult<()> {
        self.check_health("set_completion")?;
        let mut data = self.data.write();
        let assignment = data.assignments.get_mut(&assignment_id.0).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("assignment {} not found", assignment_id),
                ErrorContext::new("set_completion")
                    .with_entity("assignment")
                    .with_entity_id(assignment_id),
            )
        })?;
        assignment.completed = completed;
        if notes.is_some() {
            assignment.notes = notes;
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for LocalRepository {
    async fn get_preferences(&self) -> RepositoryResult<Preferences> {
        self.check_health("get_preferences")?;
        Ok(self.data.read().preferences.clone().unwrap_or_default())
    }

    async fn save_preferences(&self, preferences: &Preferences) -> RepositoryResult<()> {
        self.check_health("save_preferences")?;
        self.data.write().preferences = Some(preferences.clone());
        Ok(())
    }

    async fn get_capacity_overrides(&self) -> RepositoryResult<CapacityTable> {
        self.check_health("get_capacity_overrides")?;
        Ok(self.data.read().capacity_overrides.clone())
    }

    async fn save_capacity_override(
        &self,
        role: Role,
        capacity: &Capacity,
    ) -> RepositoryResult<()> {
        self.check_health("save_capacity_override")?;
        self.data
            .write()
            .capacity_overrides
            .set(role, capacity.clone());
        Ok(())
    }
}
