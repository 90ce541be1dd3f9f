use chrono::{Duration, NaiveDate, Weekday};

use crate::api::{MemberId, TaskId};
use crate::db::repositories::LocalRepository;
use crate::db::repository::{AssignmentRepository, MemberRepository, TaskRepository};
use crate::models::{Assignment, AssignmentSlot, Frequency, Member, Role, Task};
use crate::services::statistics::{completion_rate, statistics_over_from};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 17).unwrap()
}

async fn seed(repo: &LocalRepository) -> (TaskId, TaskId, MemberId, MemberId) {
    let kitchen = repo
        .store_task(&Task::new("Clean kitchen", "kitchen", 3, Frequency::Daily, 30))
        .await
        .unwrap();
    let bathroom = repo
        .store_task(&Task::new("Clean bathroom", "bathroom", 4, Frequency::Weekly, 45))
        .await
        .unwrap();
    let ana = repo.store_member(&Member::adult("Ana")).await.unwrap();
    let ben = repo.store_member(&Member::adult("Ben")).await.unwrap();
    (kitchen, bathroom, ana, ben)
}

async fn put(
    repo: &LocalRepository,
    task: TaskId,
    member: MemberId,
    week_start: NaiveDate,
    completed: bool,
) {
    let assignment = Assignment::new(
        task,
        member,
        Role::Adult,
        Weekday::Tue,
        AssignmentSlot::Weekly { week_start },
    );
    let id = repo.upsert_assignment(&assignment).await.unwrap();
    if completed {
        repo.set_completion(id, true, None).await.unwrap();
    }
}

#[test]
fn test_completion_rate_bounds() {
    assert_eq!(completion_rate(0, 0), 0.0);
    assert_eq!(completion_rate(0, 4), 0.0);
    assert_eq!(completion_rate(2, 4), 50.0);
    assert_eq!(completion_rate(4, 4), 100.0);
}

#[tokio::test]
async fn test_empty_window_yields_zeroed_report() {
    let repo = LocalRepository::new();
    let report = statistics_over_from(&repo, 0, monday()).await.unwrap();
    assert_eq!(report.weeks, 0);
    assert_eq!(report.total, 0);
    assert_eq!(report.completion_rate, 0.0);
    assert!(report.members.is_empty());
    assert!(report.areas.is_empty());
}

#[tokio::test]
async fn test_rates_by_member_and_area() {
    let repo = LocalRepository::new();
    let (kitchen, bathroom, ana, ben) = seed(&repo).await;

    put(&repo, kitchen, ana, monday(), true).await;
    put(&repo, bathroom, ana, monday(), false).await;
    put(&repo, kitchen, ben, monday() - Duration::weeks(1), true).await;

    let report = statistics_over_from(&repo, 4, monday()).await.unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.completed, 2);
    assert!((report.completion_rate - 200.0 / 3.0).abs() < 1e-9);

    let ana_stats = report.members.iter().find(|m| m.member_id == ana).unwrap();
    assert_eq!(ana_stats.member_name, "Ana");
    assert_eq!(ana_stats.total, 2);
    assert_eq!(ana_stats.completed, 1);
    assert_eq!(ana_stats.completion_rate, 50.0);

    let kitchen_stats = report.areas.iter().find(|a| a.area == "kitchen").unwrap();
    assert_eq!(kitchen_stats.total, 2);
    assert_eq!(kitchen_stats.completion_rate, 100.0);
    let bathroom_stats = report.areas.iter().find(|a| a.area == "bathroom").unwrap();
    assert_eq!(bathroom_stats.completion_rate, 0.0);
}

#[tokio::test]
async fn test_window_excludes_older_weeks() {
    let repo = LocalRepository::new();
    let (kitchen, _, ana, _) = seed(&repo).await;

    put(&repo, kitchen, ana, monday(), true).await;
    put(&repo, kitchen, ana, monday() - Duration::weeks(5), true).await;

    let report = statistics_over_from(&repo, 2, monday()).await.unwrap();
    assert_eq!(report.total, 1);
    assert_eq!(report.week_starts.len(), 2);
    assert_eq!(report.week_starts[0], monday());
    assert_eq!(report.week_starts[1], monday() - Duration::weeks(1));
}

#[tokio::test]
async fn test_calendar_slots_count_toward_their_reference_week() {
    let repo = LocalRepository::new();
    let (kitchen, _, ana, _) = seed(&repo).await;

    let date = monday() + Duration::days(2);
    let assignment = Assignment::new(
        kitchen,
        ana,
        Role::Adult,
        Weekday::Wed,
        AssignmentSlot::Calendar {
            date,
            week_start: monday(),
        },
    );
    let id = repo.upsert_assignment(&assignment).await.unwrap();
    repo.set_completion(id, true, None).await.unwrap();

    let report = statistics_over_from(&repo, 1, monday()).await.unwrap();
    assert_eq!(report.total, 1);
    assert_eq!(report.completion_rate, 100.0);
}

#[tokio::test]
async fn test_rates_always_within_bounds() {
    let repo = LocalRepository::new();
    let (kitchen, bathroom, ana, ben) = seed(&repo).await;

    for (i, week) in (0..4).map(|o| monday() - Duration::weeks(o)).enumerate() {
        put(&repo, kitchen, ana, week, i % 2 == 0).await;
        put(&repo, bathroom, ben, week, i % 3 == 0).await;
    }

    let report = statistics_over_from(&repo, 4, monday()).await.unwrap();
    assert!((0.0..=100.0).contains(&report.completion_rate));
    for member in &report.members {
        assert!((0.0..=100.0).contains(&member.completion_rate));
    }
    for area in &report.areas {
        assert!((0.0..=100.0).contains(&area.completion_rate));
    }
}
