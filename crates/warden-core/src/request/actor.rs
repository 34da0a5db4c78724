//! Actor (subject) attributes

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Department an actor works in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Teller,
    LoanOfficer,
    BranchManager,
    Compliance,
    Auditor,
    Customer,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Teller,
        Department::LoanOfficer,
        Department::BranchManager,
        Department::Compliance,
        Department::Auditor,
        Department::Customer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Teller => "teller",
            Department::LoanOfficer => "loan_officer",
            Department::BranchManager => "branch_manager",
            Department::Compliance => "compliance",
            Department::Auditor => "auditor",
            Department::Customer => "customer",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority level, ordered from junior to executive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Executive,
}

impl Seniority {
    pub const ALL: [Seniority; 4] = [
        Seniority::Junior,
        Seniority::Mid,
        Seniority::Senior,
        Seniority::Executive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
            Seniority::Executive => "executive",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an actor is based
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub branch: String,
    pub region: String,
    pub country: String,
}

impl Location {
    pub fn new(
        branch: impl Into<String>,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            branch: branch.into(),
            region: region.into(),
            country: country.into(),
        }
    }
}

/// Attributes used by rules to reason about the actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorAttributes {
    pub department: Department,
    pub seniority: Seniority,
    pub location: Location,
    /// Clearance level, 1 (lowest) to 5 (highest)
    pub clearance_level: u8,
}

impl ActorAttributes {
    pub const MIN_CLEARANCE: u8 = 1;
    pub const MAX_CLEARANCE: u8 = 5;

    pub fn new(
        department: Department,
        seniority: Seniority,
        location: Location,
        clearance_level: u8,
    ) -> Self {
        Self {
            department,
            seniority,
            location,
            clearance_level,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_CLEARANCE..=Self::MAX_CLEARANCE).contains(&self.clearance_level) {
            return Err(CoreError::InvalidValue(format!(
                "clearance_level must be between {} and {}, got {}",
                Self::MIN_CLEARANCE,
                Self::MAX_CLEARANCE,
                self.clearance_level
            )));
        }
        Ok(())
    }
}

/// The subject asking to perform an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub attributes: ActorAttributes,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, attributes: ActorAttributes) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes,
        }
    }

    pub fn department(&self) -> Department {
        self.attributes.department
    }

    pub fn branch(&self) -> &str {
        &self.attributes.location.branch
    }
}
