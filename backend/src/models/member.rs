//! Family member records as seen by the scheduler.
//!
//! Members are owned by the external profile store; the scheduler reads
//! them through the repository and re-derives capacity on every run.

use serde::{Deserialize, Serialize};

use crate::api::MemberId;

/// Household role, the coarse axis of capacity derivation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Adult,
    Child,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Adult => "adult",
            Role::Child => "child",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A family member. `age` may be absent for adults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Option<MemberId>,
    pub name: String,
    pub age: Option<u32>,
    pub role: Role,
}

impl Member {
    pub fn adult(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            age: None,
            role: Role::Adult,
        }
    }

    pub fn child(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age: Some(age),
            role: Role::Child,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}
