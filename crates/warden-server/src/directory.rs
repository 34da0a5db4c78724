//! In-memory directory of actors and resources
//!
//! Lets HTTP clients register entities once and refer to them by id in
//! transaction requests. Nothing is persisted.

use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;
use warden_core::{Actor, CoreError, Resource};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{kind} with ID {id} already exists")]
    Duplicate { kind: &'static str, id: String },

    #[error("{0}")]
    Invalid(#[from] CoreError),
}

/// Actors and resources keyed by id
#[derive(Debug, Default)]
pub struct EntityDirectory {
    actors: RwLock<HashMap<String, Actor>>,
    resources: RwLock<HashMap<String, Resource>>,
}

/// `<prefix>_<12 hex chars>`
fn generate_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &hex[..12])
}

impl EntityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor, generating an id when it is empty
    pub async fn create_actor(&self, mut actor: Actor) -> Result<Actor, DirectoryError> {
        actor.attributes.validate()?;

        let mut actors = self.actors.write().await;
        if actor.id.is_empty() {
            actor.id = generate_id("actor");
        }
        if actors.contains_key(&actor.id) {
            return Err(DirectoryError::Duplicate {
                kind: "Actor",
                id: actor.id,
            });
        }

        actors.insert(actor.id.clone(), actor.clone());
        Ok(actor)
    }

    pub async fn get_actor(&self, id: &str) -> Option<Actor> {
        self.actors.read().await.get(id).cloned()
    }

    /// Register a resource, generating an id when it is empty
    pub async fn create_resource(&self, mut resource: Resource) -> Result<Resource, DirectoryError> {
        resource.attributes.validate()?;

        let mut resources = self.resources.write().await;
        if resource.id.is_empty() {
            resource.id = generate_id("resource");
        }
        if resources.contains_key(&resource.id) {
            return Err(DirectoryError::Duplicate {
                kind: "Resource",
                id: resource.id,
            });
        }

        resources.insert(resource.id.clone(), resource.clone());
        Ok(resource)
    }

    pub async fn get_resource(&self, id: &str) -> Option<Resource> {
        self.resources.read().await.get(id).cloned()
    }
}
