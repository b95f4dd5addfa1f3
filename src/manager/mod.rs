//! # Resource Manager
//!
//! [`ResourceManager`] is the façade callers work with. It owns:
//!
//! - the **session**: at most one authenticated [`User`]
//! - the **collection**: every resource created through it, keyed by [`ResourceId`]
//! - the **factory** used to build new resources
//!
//! and borrows two collaborators, injected at construction: a [`UserStore`] and an
//! [`AuthProvider`].
//!
//! ## Authorization gate
//!
//! Every resource operation (`create_resource`, `list_resources`,
//! `start_resource`, `stop_resource`, `delete_resource`,
//! `get_resource_details`) checks the session first and returns
//! [`ManagerError::Unauthorized`] without touching the collection when nobody is
//! logged in. `register_user` is deliberately left open so the first account can
//! be created.
//!
//! ## Concurrency
//!
//! All methods are synchronous and take `&mut self` when they mutate. Share one
//! manager between tasks through [`ManagerSystem`](crate::runtime::ManagerSystem),
//! which serialises requests through a single actor.

pub mod error;

pub use error::*;

use crate::auth::AuthProvider;
use crate::model::{ResourceId, ResourceSummary, User};
use crate::resource::{LifecycleEvent, LifecycleState, LoggingDecorator, Resource, ResourceFactory};
use crate::store::UserStore;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub type Result<T> = std::result::Result<T, ManagerError>;

/// Session-gated owner of a resource collection.
pub struct ResourceManager {
    users: Arc<dyn UserStore>,
    auth: Box<dyn AuthProvider>,
    factory: ResourceFactory,
    resources: BTreeMap<ResourceId, Box<dyn Resource>>,
    next_id: u64,
    session: Option<User>,
}

impl ResourceManager {
    /// Creates a manager with the built-in resource types.
    pub fn new(users: Arc<dyn UserStore>, auth: Box<dyn AuthProvider>) -> Self {
        Self::with_factory(users, auth, ResourceFactory::new())
    }

    pub fn with_factory(
        users: Arc<dyn UserStore>,
        auth: Box<dyn AuthProvider>,
        factory: ResourceFactory,
    ) -> Self {
        Self {
            users,
            auth,
            factory,
            resources: BTreeMap::new(),
            next_id: 1,
            session: None,
        }
    }

    // --- Session ---

    /// Authenticates through the provider and binds the session to the stored user.
    ///
    /// A rejected login leaves the session as it was. A login the provider accepts
    /// for a username the store does not know clears the session.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&User> {
        if !self.auth.authenticate(username, password) {
            warn!(username, provider = %self.auth.service_name(), "Login rejected");
            return Err(ManagerError::InvalidCredentials(username.to_string()));
        }

        match self.users.find_by_username(username) {
            Ok(Some(user)) => {
                info!(username, role = %user.role, "Logged in");
                Ok(&*self.session.insert(user))
            }
            Ok(None) => {
                warn!(username, "Authenticated user missing from store");
                self.session = None;
                Err(ManagerError::UnknownUser(username.to_string()))
            }
            Err(e) => {
                self.session = None;
                Err(e.into())
            }
        }
    }

    /// Ends the session, returning the user who was logged in, if any.
    pub fn logout(&mut self) -> Option<User> {
        let previous = self.session.take();
        match &previous {
            Some(user) => info!(username = %user.username, "Logged out"),
            None => debug!("Logout without active session"),
        }
        previous
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Adds a user to the store. Open to everyone, logged in or not.
    pub fn register_user(&self, username: &str, password: &str, role: &str) -> Result<()> {
        if self.users.add_user(User::new(username, password, role))? {
            info!(username, role, "Registered user");
            Ok(())
        } else {
            warn!(username, "Registration refused, username taken");
            Err(ManagerError::DuplicateUser(username.to_string()))
        }
    }

    /// Swaps the authentication backend. The current session is kept.
    pub fn set_auth_provider(&mut self, auth: Box<dyn AuthProvider>) {
        info!(provider = %auth.service_name(), "Authentication provider changed");
        self.auth = auth;
    }

    pub fn auth_service_name(&self) -> String {
        self.auth.service_name()
    }

    // --- Resources ---

    /// Type tags accepted by [`create_resource`](Self::create_resource).
    pub fn resource_types(&self) -> Vec<String> {
        self.factory.list_types()
    }

    pub fn factory_mut(&mut self) -> &mut ResourceFactory {
        &mut self.factory
    }

    /// Builds, optionally wraps with [`LoggingDecorator`], and stores a new resource.
    ///
    /// The id is only consumed when the resource is actually stored.
    pub fn create_resource(
        &mut self,
        type_tag: &str,
        fields: &Value,
        enable_logging: bool,
    ) -> Result<ResourceId> {
        let username = self.require_session()?.username.clone();

        let id = ResourceId(self.next_id);
        debug!(%id, type_tag, ?fields, "Create");
        let resource = self.factory.create(type_tag, id, fields).map_err(|e| {
            warn!(type_tag, error = %e, "Create failed");
            e
        })?;
        let resource: Box<dyn Resource> = if enable_logging {
            Box::new(LoggingDecorator::new(resource))
        } else {
            resource
        };

        self.resources.insert(id, resource);
        self.next_id += 1;
        info!(%id, type_tag, %username, logging = enable_logging, size = self.resources.len(), "Created");
        Ok(id)
    }

    /// Lists every resource in ascending id order, deleted ones included.
    pub fn list_resources(&self) -> Result<Vec<ResourceSummary>> {
        self.require_session()?;
        Ok(self
            .resources
            .iter()
            .map(|(id, resource)| ResourceSummary {
                id: *id,
                name: resource.name().to_string(),
                state: resource.state(),
            })
            .collect())
    }

    pub fn start_resource(&mut self, id: ResourceId) -> Result<LifecycleState> {
        self.transition(id, LifecycleEvent::Start)
    }

    pub fn stop_resource(&mut self, id: ResourceId) -> Result<LifecycleState> {
        self.transition(id, LifecycleEvent::Stop)
    }

    /// Moves the resource to DELETED. The record stays in the collection.
    pub fn delete_resource(&mut self, id: ResourceId) -> Result<LifecycleState> {
        self.transition(id, LifecycleEvent::Delete)
    }

    pub fn get_resource_details(&self, id: ResourceId) -> Result<String> {
        self.require_session()?;
        self.resources
            .get(&id)
            .map(|resource| resource.details())
            .ok_or(ManagerError::NotFound(id))
    }

    fn transition(&mut self, id: ResourceId, event: LifecycleEvent) -> Result<LifecycleState> {
        self.require_session()?;
        let Some(resource) = self.resources.get_mut(&id) else {
            warn!(%id, operation = %event, "Not found");
            return Err(ManagerError::NotFound(id));
        };
        match resource.apply(event) {
            Ok(state) => {
                info!(%id, operation = %event, %state, "Transitioned");
                Ok(state)
            }
            Err(e) => {
                warn!(%id, operation = %event, error = %e, "Transition refused");
                Err(e.into())
            }
        }
    }

    fn require_session(&self) -> Result<&User> {
        self.session.as_ref().ok_or_else(|| {
            warn!("Operation attempted without a session");
            ManagerError::Unauthorized
        })
    }
}
