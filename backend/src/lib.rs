//! # Hogar Rust Backend
//!
//! Household chore scheduling and fair-assignment engine.
//!
//! This crate plans the recurring chores of a household: it keeps a task
//! catalog (a curated default set, or one derived from the home's layout),
//! models what each family member can take on, and assigns tasks to members
//! week by week under a configurable fairness policy. Completed work feeds
//! back into rolling statistics.
//!
//! ## Features
//!
//! - **Task Catalog**: Curated defaults plus derivation from a house profile
//! - **Capacity Model**: Role- and age-based difficulty and minute ceilings
//! - **Fair Allocation**: Rotation and load-balanced assignment policies
//! - **Scheduling Drivers**: Weekly runs and arbitrary calendar ranges
//! - **Completion Tracking**: Per-assignment completion flags, notes, and
//!   rolling completion statistics
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and date-range primitives
//! - [`models`]: Tasks, members, capacities, assignments, preferences
//! - [`catalog`]: Task sources, the default catalog and house derivation
//! - [`db`]: Repository traits, the local backend, config and factory
//! - [`scheduler`]: Allocation core, frequency expansion, run drivers
//! - [`services`]: The operations the web/API layer consumes

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod models;
pub mod scheduler;
pub mod services;
