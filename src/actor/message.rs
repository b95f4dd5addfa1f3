//! # Manager Messages
//!
//! One [`ManagerRequest`] variant per [`ResourceManager`](crate::manager::ResourceManager)
//! operation. Each carries a oneshot sender the actor answers on.

use crate::auth::AuthProvider;
use crate::manager::ManagerError;
use crate::model::{ResourceId, ResourceSummary, User};
use crate::resource::{LifecycleEvent, LifecycleState};
use serde_json::Value;
use tokio::sync::oneshot;

/// Responder for operations that can fail inside the manager.
pub type Response<T> = oneshot::Sender<Result<T, ManagerError>>;

/// Requests processed sequentially by [`ManagerActor`](super::ManagerActor).
pub enum ManagerRequest {
    Login {
        username: String,
        password: String,
        respond_to: Response<User>,
    },
    Logout {
        respond_to: oneshot::Sender<Option<User>>,
    },
    IsAuthenticated {
        respond_to: oneshot::Sender<bool>,
    },
    CurrentUser {
        respond_to: oneshot::Sender<Option<User>>,
    },
    RegisterUser {
        username: String,
        password: String,
        role: String,
        respond_to: Response<()>,
    },
    SetAuthProvider {
        provider: Box<dyn AuthProvider>,
        respond_to: oneshot::Sender<String>,
    },
    ResourceTypes {
        respond_to: oneshot::Sender<Vec<String>>,
    },
    CreateResource {
        type_tag: String,
        fields: Value,
        enable_logging: bool,
        respond_to: Response<ResourceId>,
    },
    ListResources {
        respond_to: Response<Vec<ResourceSummary>>,
    },
    Transition {
        id: ResourceId,
        event: LifecycleEvent,
        respond_to: Response<LifecycleState>,
    },
    Details {
        id: ResourceId,
        respond_to: Response<String>,
    },
}

impl ManagerRequest {
    /// Short request name for logs. Payloads may hold credentials, so they are never logged.
    pub fn kind(&self) -> &'static str {
        match self {
            ManagerRequest::Login { .. } => "login",
            ManagerRequest::Logout { .. } => "logout",
            ManagerRequest::IsAuthenticated { .. } => "is_authenticated",
            ManagerRequest::CurrentUser { .. } => "current_user",
            ManagerRequest::RegisterUser { .. } => "register_user",
            ManagerRequest::SetAuthProvider { .. } => "set_auth_provider",
            ManagerRequest::ResourceTypes { .. } => "resource_types",
            ManagerRequest::CreateResource { .. } => "create_resource",
            ManagerRequest::ListResources { .. } => "list_resources",
            ManagerRequest::Transition { .. } => "transition",
            ManagerRequest::Details { .. } => "details",
        }
    }
}
