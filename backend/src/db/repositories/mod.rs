//! Repository implementations.
//!
//! Backend-specific code lives here. The in-memory local implementation
//! is the default backend and the one used by the test suite.

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
