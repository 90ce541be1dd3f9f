//! End-to-end weekly driver runs against the local repository.

use std::time::Instant;

use chrono::{Duration, NaiveDate, Weekday};

use hogar_rust::api::{MemberId, TaskId};
use hogar_rust::config::SchedulingConfig;
use hogar_rust::db::repositories::LocalRepository;
use hogar_rust::db::repository::{
    AssignmentRepository, MemberRepository, SettingsRepository, TaskRepository,
};
use hogar_rust::models::{
    Assignment, AssignmentSlot, FairnessPolicy, HouseProfile, Member, Preferences, Role,
};
use hogar_rust::scheduler::{
    run_weekly, AllocationOutcome, RetryPolicy, RunOptions, RunScope, ScheduleRunError,
};
use hogar_rust::services::seed_derived_catalog;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 17).unwrap()
}

/// Age floor set below the test child's age so exclusion happens through
/// capacity, not the roster filter.
fn config() -> SchedulingConfig {
    SchedulingConfig {
        min_child_age: 5,
        ..SchedulingConfig::default()
    }
}

/// Two adults and an eight-year-old in a three-bathroom, one-kitchen
/// home. The derived catalog holds three weekly bathroom tasks
/// (difficulty 4) and one daily kitchen task (difficulty 3).
async fn family_home() -> (LocalRepository, MemberId, MemberId, MemberId) {
    let repo = LocalRepository::new();
    let profile = HouseProfile {
        bedrooms: 0,
        bathrooms: 3,
        kitchens: 1,
        living_rooms: 0,
        has_pets: false,
        pet_description: None,
        floor_area_m2: 90.0,
    };
    seed_derived_catalog(&repo, &profile).await.unwrap();
    let ana = repo.store_member(&Member::adult("Ana")).await.unwrap();
    let ben = repo.store_member(&Member::adult("Ben")).await.unwrap();
    let leo = repo.store_member(&Member::child("Leo", 8)).await.unwrap();
    (repo, ana, ben, leo)
}

fn assignees_for(report: &hogar_rust::scheduler::RunReport, area: &str) -> Vec<MemberId> {
    report
        .entries()
        .filter(|e| e.area == area)
        .filter_map(|e| e.outcome.member_id())
        .collect()
}

#[tokio::test]
async fn test_load_balanced_week_splits_work_between_adults() {
    let (repo, ana, ben, leo) = family_home().await;

    let report = run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();

    // Default workdays are Tuesday and Saturday. Weekly tasks land once
    // on Tuesday; the daily kitchen task runs on both days.
    assert_eq!(report.scope, RunScope::Week { week_start: monday() });
    assert_eq!(report.policy, FairnessPolicy::LoadBalanced);
    assert_eq!(report.days.len(), 2);
    assert_eq!(report.days[0].weekday, Weekday::Tue);
    assert_eq!(report.days[1].weekday, Weekday::Sat);
    assert_eq!(report.assigned, 5);
    assert_eq!(report.unassigned, 0);
    assert!(!report.partial);

    // Bathrooms (hardest first) alternate Ana, Ben, Ana.
    assert_eq!(assignees_for(&report, "bathroom"), vec![ana, ben, ana]);
    // The kitchen goes to Ben on Tuesday (lightest load) and alternates
    // to Ana on Saturday.
    assert_eq!(assignees_for(&report, "kitchen"), vec![ben, ana]);

    // The child is in the roster but over his difficulty ceiling for
    // every task in this home.
    assert!(report.entries().all(|e| e.outcome.member_id() != Some(leo)));
    assert_eq!(repo.assignment_count(), 5);
}

#[tokio::test]
async fn test_rerun_replaces_rows_without_duplicating() {
    let (repo, ..) = family_home().await;

    run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    assert_eq!(repo.assignment_count(), 5);

    // Same inputs, same outcome; upserts land on the existing rows.
    run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    assert_eq!(repo.assignment_count(), 5);
}

#[tokio::test]
async fn test_rerun_prunes_rows_the_run_did_not_reproduce() {
    let (repo, _, _, leo) = family_home().await;

    run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();

    // A manually inserted row for this week that no re-run would
    // produce.
    let task_id = repo.list_tasks().await.unwrap()[0].id.unwrap();
    repo.upsert_assignment(&Assignment::new(
        task_id,
        leo,
        Role::Child,
        Weekday::Tue,
        AssignmentSlot::Weekly { week_start: monday() },
    ))
    .await
    .unwrap();
    assert_eq!(repo.assignment_count(), 6);

    run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    assert_eq!(repo.assignment_count(), 5);
}

#[tokio::test]
async fn test_rerun_leaves_other_weeks_untouched() {
    let (repo, ..) = family_home().await;

    run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    run_weekly(
        &repo,
        Some(monday() + Duration::weeks(1)),
        &config(),
        RunOptions::default(),
    )
    .await
    .unwrap();
    assert_eq!(repo.assignment_count(), 10);

    // Re-running week one only touches week one's rows.
    run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    assert_eq!(repo.assignment_count(), 10);
    assert_eq!(
        repo.weekly_assignments(monday() + Duration::weeks(1))
            .await
            .unwrap()
            .len(),
        5
    );
}

#[tokio::test]
async fn test_completion_survives_rerun() {
    let (repo, ..) = family_home().await;

    run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    let first = repo.weekly_assignments(monday()).await.unwrap();
    let id = first[0].id.unwrap();
    repo.set_completion(id, true, Some("spotless".to_string()))
        .await
        .unwrap();

    run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    let row = repo.get_assignment(id).await.unwrap();
    assert!(row.completed);
    assert_eq!(row.notes.as_deref(), Some("spotless"));
}

#[tokio::test]
async fn test_any_date_in_week_normalizes_to_its_monday() {
    let (repo, ..) = family_home().await;

    let thursday = monday() + Duration::days(3);
    let report = run_weekly(&repo, Some(thursday), &config(), RunOptions::default())
        .await
        .unwrap();
    assert_eq!(report.scope, RunScope::Week { week_start: monday() });
    assert_eq!(repo.weekly_assignments(monday()).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_rotation_policy_override() {
    let (repo, ana, ben, _) = family_home().await;

    let report = run_weekly(
        &repo,
        Some(monday()),
        &config(),
        RunOptions::default().with_policy(FairnessPolicy::Rotation),
    )
    .await
    .unwrap();
    assert_eq!(report.policy, FairnessPolicy::Rotation);

    // Rotation never hands an area to its previous assignee while an
    // alternative exists.
    let bathrooms = assignees_for(&report, "bathroom");
    assert_eq!(bathrooms, vec![ana, ben, ana]);
    for pair in bathrooms.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[tokio::test]
async fn test_custom_workdays_drive_the_run() {
    let (repo, ..) = family_home().await;
    repo.save_preferences(&Preferences {
        workdays: vec![Weekday::Fri, Weekday::Mon, Weekday::Wed],
        ..Preferences::default()
    })
    .await
    .unwrap();

    let report = run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    let weekdays: Vec<_> = report.days.iter().map(|d| d.weekday).collect();
    assert_eq!(weekdays, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    // Daily kitchen on all three days, three weekly bathrooms on Monday.
    assert_eq!(report.assigned, 6);
}

#[tokio::test]
async fn test_impossible_task_is_reported_not_errored() {
    let repo = LocalRepository::new();
    seed_derived_catalog(
        &repo,
        &HouseProfile {
            bedrooms: 0,
            bathrooms: 1,
            kitchens: 0,
            living_rooms: 0,
            has_pets: false,
            pet_description: None,
            floor_area_m2: 90.0,
        },
    )
    .await
    .unwrap();
    // Only a thirteen-year-old: difficulty ceiling 3 against a
    // difficulty 4 bathroom.
    repo.store_member(&Member::child("Sara", 13)).await.unwrap();

    let report = run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap();
    assert_eq!(report.assigned, 0);
    assert_eq!(report.unassigned, 1);
    let entry = report.entries().next().unwrap();
    assert_eq!(entry.outcome, AllocationOutcome::Unassigned);
    // Unassigned markers are never persisted.
    assert_eq!(repo.assignment_count(), 0);
}

#[tokio::test]
async fn test_disabled_auto_assign_refuses_to_run() {
    let (repo, ..) = family_home().await;
    repo.save_preferences(&Preferences {
        auto_assign: false,
        ..Preferences::default()
    })
    .await
    .unwrap();

    let err = run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleRunError::AutoAssignDisabled));
    assert_eq!(repo.assignment_count(), 0);
}

#[tokio::test]
async fn test_empty_catalog_is_an_error() {
    let repo = LocalRepository::new();
    repo.store_member(&Member::adult("Ana")).await.unwrap();

    let err = run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleRunError::NoTasks));
}

#[tokio::test]
async fn test_empty_roster_is_an_error() {
    let repo = LocalRepository::new();
    seed_derived_catalog(&repo, &HouseProfile::default())
        .await
        .unwrap();

    let err = run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleRunError::NoMembers));
}

#[tokio::test]
async fn test_age_floor_empties_roster_of_young_children() {
    let repo = LocalRepository::new();
    seed_derived_catalog(&repo, &HouseProfile::default())
        .await
        .unwrap();
    repo.store_member(&Member::child("Leo", 8)).await.unwrap();

    // Default floor is twelve; the only member is below it.
    let err = run_weekly(
        &repo,
        Some(monday()),
        &SchedulingConfig::default(),
        RunOptions::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ScheduleRunError::NoMembers));
}

#[tokio::test]
async fn test_expired_deadline_stops_before_any_day() {
    let (repo, ana, ..) = family_home().await;
    // A row a complete run would prune away.
    repo.upsert_assignment(&Assignment::new(
        TaskId::new(99),
        ana,
        Role::Adult,
        Weekday::Tue,
        AssignmentSlot::Weekly { week_start: monday() },
    ))
    .await
    .unwrap();

    let options = RunOptions::default().with_deadline(Instant::now());
    let report = run_weekly(&repo, Some(monday()), &config(), options)
        .await
        .unwrap();

    assert!(report.partial);
    assert!(report.days.is_empty());
    assert_eq!(report.total(), 0);
    // Partial runs never prune; the stray row survives.
    assert_eq!(repo.assignment_count(), 1);
}

#[tokio::test]
async fn test_transient_write_failure_is_retried() {
    let (repo, ..) = family_home().await;
    repo.fail_next_assignment_writes(1);

    let options = RunOptions {
        retry: Some(RetryPolicy {
            max_retries: 2,
            delay: std::time::Duration::from_millis(1),
        }),
        ..RunOptions::default()
    };
    let report = run_weekly(&repo, Some(monday()), &config(), options)
        .await
        .unwrap();

    // One retry absorbs the fault; the run completes untouched.
    assert!(!report.partial);
    assert_eq!(report.assigned, 5);
    assert_eq!(repo.assignment_count(), 5);
}

#[tokio::test]
async fn test_midrun_write_failure_carries_partial_progress() {
    let (repo, ..) = family_home().await;
    // Two bathroom rows land; the third write and its retry both fail.
    repo.fail_assignment_writes_after(2);

    let options = RunOptions {
        retry: Some(RetryPolicy {
            max_retries: 1,
            delay: std::time::Duration::from_millis(1),
        }),
        ..RunOptions::default()
    };
    let err = run_weekly(&repo, Some(monday()), &config(), options)
        .await
        .unwrap_err();

    match err {
        ScheduleRunError::Persistence { source, report } => {
            assert!(source.is_retryable());
            assert!(report.partial);
            assert_eq!(report.assigned, 2);
            assert_eq!(report.days.len(), 1);
        }
        other => panic!("expected a persistence error, got {}", other),
    }
    // Only the rows written before the failure exist.
    assert_eq!(repo.assignment_count(), 2);
}

#[tokio::test]
async fn test_unhealthy_repository_surfaces_repository_error() {
    let (repo, ..) = family_home().await;
    repo.set_healthy(false);

    let err = run_weekly(&repo, Some(monday()), &config(), RunOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleRunError::Repository(_)));
}
