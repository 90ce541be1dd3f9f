//! Family member repository trait.
//!
//! Members are owned by the external profile store; this trait is the
//! read-mostly view the scheduler needs, plus a store method so local
//! and test setups can build rosters.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::MemberId;
use crate::models::Member;

/// Repository trait for the family member roster.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List all adult members, ordered by id.
    async fn list_adults(&self) -> RepositoryResult<Vec<Member>>;

    /// List all child members, ordered by id. Ages are expected to be
    /// present; a missing age is tolerated and treated as adult-level
    /// during capacity derivation.
    async fn list_children(&self) -> RepositoryResult<Vec<Member>>;

    /// Retrieve a member by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the member doesn't exist
    async fn get_member(&self, member_id: MemberId) -> RepositoryResult<Member>;

    /// Store a new member, assigning it an id.
    async fn store_member(&self, member: &Member) -> RepositoryResult<MemberId>;
}
