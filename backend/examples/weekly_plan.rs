//! Example walking through a full scheduling cycle:
//!
//! 1. Derive a task catalog from a house profile
//! 2. Register the family members
//! 3. Run the weekly assignment driver
//! 4. Mark one assignment done and print the week's schedule
//!
//! To run this example:
//! ```bash
//! cargo run --example weekly_plan
//! ```

use chrono::NaiveDate;
use hogar_rust::config::SchedulingConfig;
use hogar_rust::db::repositories::LocalRepository;
use hogar_rust::db::repository::MemberRepository;
use hogar_rust::models::{HouseProfile, Member};
use hogar_rust::services::{
    complete_assignment, schedule_for_week, seed_derived_catalog, statistics_over_from,
};
use hogar_rust::scheduler::{run_weekly, RunOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let repo = LocalRepository::new();

    println!("=== Household Weekly Plan ===\n");

    // Step 1: catalog from the home's layout
    let profile = HouseProfile {
        bedrooms: 3,
        bathrooms: 2,
        kitchens: 1,
        living_rooms: 1,
        has_pets: true,
        pet_description: Some("Walk and feed the dog".to_string()),
        floor_area_m2: 140.0,
    };
    let seeded = seed_derived_catalog(&repo, &profile).await?;
    println!(
        "1. Derived {} tasks from the house profile\n",
        seeded.inserted
    );

    // Step 2: the family
    repo.store_member(&Member::adult("Ana")).await?;
    repo.store_member(&Member::adult("Ben")).await?;
    repo.store_member(&Member::child("Sara", 13)).await?;
    repo.store_member(&Member::child("Leo", 8)).await?;
    println!("2. Registered two adults and two children\n");

    // Step 3: assign the week
    let week_start = NaiveDate::from_ymd_opt(2026, 8, 17).ok_or("bad date")?;
    let config = SchedulingConfig::default();
    let report = run_weekly(&repo, Some(week_start), &config, RunOptions::default()).await?;
    println!(
        "3. Weekly run ({} policy): {} assigned, {} unassigned",
        report.policy, report.assigned, report.unassigned
    );
    for day in &report.days {
        println!("   {:?}:", day.weekday);
        for entry in &day.entries {
            match &entry.outcome {
                hogar_rust::scheduler::AllocationOutcome::Assigned { member_name, .. } => {
                    println!(
                        "     {} (difficulty {}, ~{} min) -> {}",
                        entry.task_name, entry.difficulty, entry.estimated_minutes, member_name
                    );
                }
                hogar_rust::scheduler::AllocationOutcome::Unassigned => {
                    println!("     {} -> nobody eligible", entry.task_name);
                }
            }
        }
    }
    println!();

    // Step 4: complete one task and show the week view
    let schedule = schedule_for_week(&repo, week_start).await?;
    if let Some(item) = schedule.days.iter().flat_map(|d| d.items.iter()).next() {
        complete_assignment(
            &repo,
            item.assignment_id,
            true,
            Some("done before breakfast".to_string()),
        )
        .await?;
    }

    let schedule = schedule_for_week(&repo, week_start).await?;
    println!(
        "4. Week of {}: {}/{} done ({:.0}%)",
        schedule.week_start, schedule.completed, schedule.total, schedule.completion_rate
    );
    for stats in &schedule.member_stats {
        println!(
            "   {}: {} tasks, ~{} min, load {}",
            stats.member_name, stats.task_count, stats.total_minutes, stats.total_difficulty
        );
    }

    let stats = statistics_over_from(&repo, config.statistics_weeks, week_start).await?;
    println!(
        "\n   Rolling {}-week completion rate: {:.0}%",
        stats.weeks, stats.completion_rate
    );

    Ok(())
}
