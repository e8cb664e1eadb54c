//! Authorization roles for the HRIS platform.
//!
//! The role set is fixed and backend-supplied; the wire form is the
//! snake_case value, while `label()` gives the human-readable name used
//! in tables and confirmation prompts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A user's authorization role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access. Transitions into or out of this role
    /// require explicit operator confirmation.
    Admin,
    HrManager,
    HiringManager,
    Employee,
    Candidate,
}

impl Role {
    /// All roles in catalog order, most privileged first.
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::HrManager,
        Role::HiringManager,
        Role::Employee,
        Role::Candidate,
    ];

    /// Wire value as stored by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::HrManager => "hr_manager",
            Role::HiringManager => "hiring_manager",
            Role::Employee => "employee",
            Role::Candidate => "candidate",
        }
    }

    /// Human-readable label for display and confirmation prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::HrManager => "HR Manager",
            Role::HiringManager => "Hiring Manager",
            Role::Employee => "Employee",
            Role::Candidate => "Candidate",
        }
    }

    /// True for the most privileged tier. Any transition into or out of
    /// this tier is subject to mandatory confirmation.
    pub fn is_admin_tier(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    /// Parse a wire role value (case-insensitive, whitespace tolerant).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "hr_manager" => Ok(Role::HrManager),
            "hiring_manager" => Ok(Role::HiringManager),
            "employee" => Ok(Role::Employee),
            "candidate" => Ok(Role::Candidate),
            _ => Err(ModelError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("HR_MANAGER".parse::<Role>().unwrap(), Role::HrManager);
        assert_eq!(" employee ".parse::<Role>().unwrap(), Role::Employee);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn admin_tier_is_only_admin() {
        assert!(Role::Admin.is_admin_tier());
        for role in &Role::ALL[1..] {
            assert!(!role.is_admin_tier());
        }
    }
}
