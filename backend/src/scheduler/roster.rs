//! Roster assembly for a scheduling run.

use log::debug;

use super::allocator::RosterMember;
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{capacity_for, Member};

/// Build the schedulable roster: all adults plus the children at or
/// above the minimum age, each with their capacity derived from the
/// override-aware table, sorted by member id.
///
/// The age floor is applied here, once, and nowhere else; capacity
/// derivation itself never looks at it. A child without a recorded age
/// is kept (and derives adult-level capacity).
pub async fn build_roster(
    repo: &dyn FullRepository,
    min_child_age: u32,
) -> RepositoryResult<Vec<RosterMember>> {
    let table = repo.get_capacity_overrides().await?;
    let adults = repo.list_adults().await?;
    let children = repo.list_children().await?;

    let mut roster: Vec<RosterMember> = Vec::new();
    for member in adults.iter().chain(children.iter()) {
        let Some(id) = member.id else {
            debug!("skipping roster member without id: {}", member.name);
            continue;
        };
        if let Member {
            age: Some(age),
            role: crate::models::Role::Child,
            ..
        } = member
        {
            if *age < min_child_age {
                debug!("child {} is under the age floor ({} < {})", member.name, age, min_child_age);
                continue;
            }
        }
        roster.push(RosterMember {
            id,
            name: member.name.clone(),
            role: member.role,
            capacity: capacity_for(member, &table),
        });
    }

    roster.sort_by_key(|m| m.id);
    Ok(roster)
}
