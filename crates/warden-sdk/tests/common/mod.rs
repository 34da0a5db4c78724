//! Common fixtures for SDK integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use warden_core::{
    AccessRequest, Actor, ActorAttributes, Department, Environment, Location, Resource,
    ResourceAttributes, ResourceStatus, ResourceType, Seniority,
};

/// Tuesday 10:00 UTC
pub fn business_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 4, 10, 0, 0).unwrap()
}

/// Tuesday 22:00 UTC
pub fn after_hours_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 4, 22, 0, 0).unwrap()
}

pub fn business_hours() -> Environment {
    Environment::at(business_time())
}

pub fn after_hours() -> Environment {
    Environment::at(after_hours_time())
}

/// Builder for test actors, defaulting to a mid-level teller at `downtown`
pub struct ActorFixture {
    id: String,
    department: Department,
    seniority: Seniority,
    branch: String,
    region: String,
    clearance: u8,
}

impl ActorFixture {
    pub fn new(id: &str, department: Department) -> Self {
        Self {
            id: id.to_string(),
            department,
            seniority: Seniority::Mid,
            branch: "downtown".to_string(),
            region: "west".to_string(),
            clearance: 3,
        }
    }

    pub fn seniority(mut self, seniority: Seniority) -> Self {
        self.seniority = seniority;
        self
    }

    pub fn branch(mut self, branch: &str, region: &str) -> Self {
        self.branch = branch.to_string();
        self.region = region.to_string();
        self
    }

    pub fn clearance(mut self, clearance: u8) -> Self {
        self.clearance = clearance;
        self
    }

    pub fn build(self) -> Actor {
        Actor::new(
            self.id.clone(),
            format!("Actor {}", self.id),
            ActorAttributes::new(
                self.department,
                self.seniority,
                Location::new(self.branch, self.region, "US"),
                self.clearance,
            ),
        )
    }
}

/// Builder for test accounts, defaulting to an active checking account
pub struct AccountFixture {
    id: String,
    resource_type: ResourceType,
    owner: String,
    status: ResourceStatus,
    sensitivity: u8,
    branch: String,
    region: String,
}

impl AccountFixture {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            resource_type: ResourceType::Checking,
            owner: "cust_1".to_string(),
            status: ResourceStatus::Active,
            sensitivity: 2,
            branch: "downtown".to_string(),
            region: "west".to_string(),
        }
    }

    pub fn resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.owner = owner.to_string();
        self
    }

    pub fn status(mut self, status: ResourceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn sensitivity(mut self, sensitivity: u8) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn branch(mut self, branch: &str, region: &str) -> Self {
        self.branch = branch.to_string();
        self.region = region.to_string();
        self
    }

    pub fn build(self) -> Resource {
        Resource::new(
            self.id,
            ResourceAttributes {
                resource_type: self.resource_type,
                owner: self.owner,
                status: self.status,
                sensitivity: self.sensitivity,
                branch: self.branch,
                region: self.region,
            },
        )
    }
}

pub fn teller() -> Actor {
    ActorFixture::new("teller_1", Department::Teller).build()
}

pub fn account() -> Resource {
    AccountFixture::new("acct_1").build()
}

pub fn request(actor: Actor, action: &str, resource: Resource, amount: Option<f64>) -> AccessRequest {
    let mut req = AccessRequest::new(actor, action, resource, business_hours());
    req.action_attributes.amount = amount;
    req
}
