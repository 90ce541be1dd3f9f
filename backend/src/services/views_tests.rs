use chrono::{Duration, NaiveDate, Weekday};

use crate::api::{MemberId, TaskId};
use crate::db::repositories::LocalRepository;
use crate::db::repository::{AssignmentRepository, MemberRepository, TaskRepository};
use crate::models::{Assignment, AssignmentSlot, Frequency, Member, Role, Task};
use crate::services::views::{schedule_for_date, schedule_for_week};

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

fn weekly(task: TaskId, member: MemberId, weekday: Weekday, week_start: NaiveDate) -> Assignment {
    Assignment::new(task, member, Role::Adult, weekday, AssignmentSlot::Weekly { week_start })
}

#[tokio::test]
async fn test_week_schedule_covers_all_seven_days() {
    let repo = LocalRepository::new();
    let (kitchen, _, ana, _) = seed(&repo).await;
    repo.upsert_assignment(&weekly(kitchen, ana, Weekday::Tue, monday()))
        .await
        .unwrap();

    let schedule = schedule_for_week(&repo, monday()).await.unwrap();
    assert_eq!(schedule.week_start, monday());
    assert_eq!(schedule.days.len(), 7);
    assert_eq!(schedule.days[0].weekday, Weekday::Mon);
    assert_eq!(schedule.days[6].weekday, Weekday::Sun);
    assert!(schedule.days[0].items.is_empty());
    assert_eq!(schedule.days[1].items.len(), 1);
    assert_eq!(schedule.days[1].items[0].task_name, "Clean kitchen");
    assert_eq!(schedule.days[1].items[0].member_name, "Ana");
}

#[tokio::test]
async fn test_week_schedule_normalizes_to_monday() {
    let repo = LocalRepository::new();
    let (kitchen, _, ana, _) = seed(&repo).await;
    repo.upsert_assignment(&weekly(kitchen, ana, Weekday::Tue, monday()))
        .await
        .unwrap();

    let thursday = monday() + Duration::days(3);
    let schedule = schedule_for_week(&repo, thursday).await.unwrap();
    assert_eq!(schedule.week_start, monday());
    assert_eq!(schedule.total, 1);
}

#[tokio::test]
async fn test_member_stats_aggregate_difficulty_and_minutes() {
    let repo = LocalRepository::new();
    let (kitchen, bathroom, ana, ben) = seed(&repo).await;
    repo.upsert_assignment(&weekly(kitchen, ana, Weekday::Tue, monday()))
        .await
        .unwrap();
    let done = repo
        .upsert_assignment(&weekly(bathroom, ana, Weekday::Sat, monday()))
        .await
        .unwrap();
    repo.set_completion(done, true, None).await.unwrap();
    repo.upsert_assignment(&weekly(kitchen, ben, Weekday::Sat, monday()))
        .await
        .unwrap();

    let schedule = schedule_for_week(&repo, monday()).await.unwrap();
    assert_eq!(schedule.total, 3);
    assert_eq!(schedule.completed, 1);

    let ana_stats = schedule
        .member_stats
        .iter()
        .find(|m| m.member_id == ana)
        .unwrap();
    assert_eq!(ana_stats.total_difficulty, 7);
    assert_eq!(ana_stats.total_minutes, 75);
    assert_eq!(ana_stats.task_count, 2);
    assert_eq!(ana_stats.completed_count, 1);
    assert_eq!(ana_stats.completion_rate, 50.0);

    let ben_stats = schedule
        .member_stats
        .iter()
        .find(|m| m.member_id == ben)
        .unwrap();
    assert_eq!(ben_stats.total_minutes, 30);
    assert_eq!(ben_stats.completion_rate, 0.0);
}

#[tokio::test]
async fn test_calendar_rows_appear_in_weekly_view() {
    let repo = LocalRepository::new();
    let (kitchen, _, ana, _) = seed(&repo).await;
    let wednesday = monday() + Duration::days(2);
    let assignment = Assignment::new(
        kitchen,
        ana,
        Role::Adult,
        Weekday::Wed,
        AssignmentSlot::Calendar {
            date: wednesday,
            week_start: monday(),
        },
    );
    repo.upsert_assignment(&assignment).await.unwrap();

    let schedule = schedule_for_week(&repo, monday()).await.unwrap();
    assert_eq!(schedule.total, 1);
    assert_eq!(schedule.days[2].items[0].date, Some(wednesday));
}

#[tokio::test]
async fn test_day_schedule_only_sees_its_date() {
    let repo = LocalRepository::new();
    let (kitchen, bathroom, ana, _) = seed(&repo).await;
    let wednesday = monday() + Duration::days(2);
    let thursday = monday() + Duration::days(3);

    for (task, date, weekday) in [(kitchen, wednesday, Weekday::Wed), (bathroom, thursday, Weekday::Thu)] {
        let assignment = Assignment::new(
            task,
            ana,
            Role::Adult,
            weekday,
            AssignmentSlot::Calendar {
                date,
                week_start: monday(),
            },
        );
        repo.upsert_assignment(&assignment).await.unwrap();
    }

    let day = schedule_for_date(&repo, wednesday).await.unwrap();
    assert_eq!(day.date, wednesday);
    assert_eq!(day.total, 1);
    assert_eq!(day.items[0].task_name, "Clean kitchen");
    assert_eq!(day.completion_rate, 0.0);
}

#[test]
fn test_idless_rows_never_surface() {
    let row = Assignment::new(
        TaskId::new(1),
        MemberId::new(1),
        Role::Adult,
        Weekday::Tue,
        AssignmentSlot::Weekly { week_start: monday() },
    );
    assert!(row.id.is_none());
    let tasks = std::collections::BTreeMap::new();
    let names = std::collections::BTreeMap::new();
    assert!(super::join_item(&row, &tasks, &names).is_none());
}

#[tokio::test]
async fn test_orphaned_rows_keep_placeholders() {
    let repo = LocalRepository::new();
    let (_, _, ana, _) = seed(&repo).await;
    repo.upsert_assignment(&weekly(TaskId::new(99), ana, Weekday::Tue, monday()))
        .await
        .unwrap();

    let schedule = schedule_for_week(&repo, monday()).await.unwrap();
    let item = &schedule.days[1].items[0];
    assert_eq!(item.task_name, "task 99");
    assert_eq!(item.area, "general");
    assert_eq!(item.difficulty, 0);
    assert_eq!(item.member_name, "Ana");
}
