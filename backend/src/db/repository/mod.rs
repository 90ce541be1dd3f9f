//! Repository trait definitions for persistence operations.
//!
//! This module provides a collection of focused repository traits that
//! abstract storage operations. By splitting responsibilities across
//! multiple traits, implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`tasks`]: Persisted task catalog
//! - [`members`]: Family member roster (read-mostly profile-store view)
//! - [`assignments`]: Assignment upsert/query/completion operations
//! - [`settings`]: Preferences record and capacity override table
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service(repo: &dyn FullRepository) -> RepositoryResult<()> {
//!     let tasks = repo.list_tasks().await?;
//!     let prefs = repo.get_preferences().await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod assignments;
pub mod error;
pub mod members;
pub mod settings;
pub mod tasks;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use assignments::AssignmentRepository;
pub use members::MemberRepository;
pub use settings::SettingsRepository;
pub use tasks::TaskRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements all four
/// repository traits.
pub trait FullRepository:
    TaskRepository + MemberRepository + AssignmentRepository + SettingsRepository
{
}

impl<T> FullRepository for T where
    T: TaskRepository + MemberRepository + AssignmentRepository + SettingsRepository
{
}
