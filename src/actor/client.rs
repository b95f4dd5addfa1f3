//! # Manager Client
//!
//! Async, cloneable handle to a running [`ManagerActor`](super::ManagerActor).

use super::error::ActorError;
use super::message::ManagerRequest;
use crate::auth::AuthProvider;
use crate::manager::ManagerError;
use crate::model::{ResourceId, ResourceSummary, User};
use crate::resource::{LifecycleEvent, LifecycleState};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for the manager actor. Cloning only clones the channel sender.
///
/// All clones share the actor's single session: logging in through one clone
/// authenticates every other clone too.
#[derive(Clone)]
pub struct ManagerClient {
    sender: mpsc::Sender<ManagerRequest>,
}

impl ManagerClient {
    pub fn new(sender: mpsc::Sender<ManagerRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> ManagerRequest,
    ) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)
    }

    async fn try_request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, ManagerError>>) -> ManagerRequest,
    ) -> Result<T, ActorError> {
        Ok(self.request(build).await??)
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ActorError> {
        debug!("Sending request");
        let (username, password) = (username.to_string(), password.to_string());
        self.try_request(|respond_to| ManagerRequest::Login {
            username,
            password,
            respond_to,
        })
        .await
    }

    pub async fn logout(&self) -> Result<Option<User>, ActorError> {
        self.request(|respond_to| ManagerRequest::Logout { respond_to })
            .await
    }

    pub async fn is_authenticated(&self) -> Result<bool, ActorError> {
        self.request(|respond_to| ManagerRequest::IsAuthenticated { respond_to })
            .await
    }

    pub async fn current_user(&self) -> Result<Option<User>, ActorError> {
        self.request(|respond_to| ManagerRequest::CurrentUser { respond_to })
            .await
    }

    #[instrument(skip(self, password))]
    pub async fn register_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<(), ActorError> {
        debug!("Sending request");
        let (username, password, role) =
            (username.to_string(), password.to_string(), role.to_string());
        self.try_request(|respond_to| ManagerRequest::RegisterUser {
            username,
            password,
            role,
            respond_to,
        })
        .await
    }

    /// Replaces the authentication backend and returns its service name.
    pub async fn set_auth_provider(
        &self,
        provider: impl AuthProvider + 'static,
    ) -> Result<String, ActorError> {
        let provider: Box<dyn AuthProvider> = Box::new(provider);
        self.request(|respond_to| ManagerRequest::SetAuthProvider {
            provider,
            respond_to,
        })
        .await
    }

    pub async fn resource_types(&self) -> Result<Vec<String>, ActorError> {
        self.request(|respond_to| ManagerRequest::ResourceTypes { respond_to })
            .await
    }

    #[instrument(skip(self, fields))]
    pub async fn create_resource(
        &self,
        type_tag: &str,
        fields: Value,
        enable_logging: bool,
    ) -> Result<ResourceId, ActorError> {
        debug!("Sending request");
        let type_tag = type_tag.to_string();
        self.try_request(|respond_to| ManagerRequest::CreateResource {
            type_tag,
            fields,
            enable_logging,
            respond_to,
        })
        .await
    }

    pub async fn list_resources(&self) -> Result<Vec<ResourceSummary>, ActorError> {
        self.try_request(|respond_to| ManagerRequest::ListResources { respond_to })
            .await
    }

    pub async fn start_resource(&self, id: ResourceId) -> Result<LifecycleState, ActorError> {
        self.transition(id, LifecycleEvent::Start).await
    }

    pub async fn stop_resource(&self, id: ResourceId) -> Result<LifecycleState, ActorError> {
        self.transition(id, LifecycleEvent::Stop).await
    }

    pub async fn delete_resource(&self, id: ResourceId) -> Result<LifecycleState, ActorError> {
        self.transition(id, LifecycleEvent::Delete).await
    }

    pub async fn get_resource_details(&self, id: ResourceId) -> Result<String, ActorError> {
        self.try_request(|respond_to| ManagerRequest::Details { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn transition(
        &self,
        id: ResourceId,
        event: LifecycleEvent,
    ) -> Result<LifecycleState, ActorError> {
        debug!("Sending request");
        self.try_request(|respond_to| ManagerRequest::Transition {
            id,
            event,
            respond_to,
        })
        .await
    }
}
