//! # Manager Actor
//!
//! [`ManagerActor`] owns a [`ResourceManager`] inside one Tokio task and handles
//! [`ManagerRequest`]s strictly one at a time. Every clone of the
//! [`ManagerClient`] shares that single session and collection, and no request
//! can observe another one half-done. The manager itself stays lock-free.

use super::client::ManagerClient;
use super::message::ManagerRequest;
use crate::manager::ResourceManager;
use crate::resource::LifecycleEvent;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Server half of the manager actor.
pub struct ManagerActor {
    receiver: mpsc::Receiver<ManagerRequest>,
    manager: ResourceManager,
}

impl ManagerActor {
    /// Creates the actor and its client.
    ///
    /// # Arguments
    ///
    /// * `manager` - The manager the actor takes ownership of
    /// * `buffer_size` - Capacity of the request channel. When it is full, client
    ///   calls wait for space.
    pub fn new(manager: ResourceManager, buffer_size: usize) -> (Self, ManagerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, manager };
        (actor, ManagerClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        info!("Manager actor started");

        while let Some(msg) = self.receiver.recv().await {
            debug!(request = msg.kind(), "Request");
            self.handle(msg);
        }

        info!(
            authenticated = self.manager.is_authenticated(),
            "Manager actor shutdown"
        );
    }

    fn handle(&mut self, msg: ManagerRequest) {
        let manager = &mut self.manager;
        // A closed responder only means the caller stopped waiting.
        match msg {
            ManagerRequest::Login {
                username,
                password,
                respond_to,
            } => {
                let result = manager.login(&username, &password).map(|user| user.clone());
                let _ = respond_to.send(result);
            }
            ManagerRequest::Logout { respond_to } => {
                let _ = respond_to.send(manager.logout());
            }
            ManagerRequest::IsAuthenticated { respond_to } => {
                let _ = respond_to.send(manager.is_authenticated());
            }
            ManagerRequest::CurrentUser { respond_to } => {
                let _ = respond_to.send(manager.current_user().cloned());
            }
            ManagerRequest::RegisterUser {
                username,
                password,
                role,
                respond_to,
            } => {
                let _ = respond_to.send(manager.register_user(&username, &password, &role));
            }
            ManagerRequest::SetAuthProvider {
                provider,
                respond_to,
            } => {
                manager.set_auth_provider(provider);
                let _ = respond_to.send(manager.auth_service_name());
            }
            ManagerRequest::ResourceTypes { respond_to } => {
                let _ = respond_to.send(manager.resource_types());
            }
            ManagerRequest::CreateResource {
                type_tag,
                fields,
                enable_logging,
                respond_to,
            } => {
                let _ = respond_to.send(manager.create_resource(&type_tag, &fields, enable_logging));
            }
            ManagerRequest::ListResources { respond_to } => {
                let _ = respond_to.send(manager.list_resources());
            }
            ManagerRequest::Transition {
                id,
                event,
                respond_to,
            } => {
                let result = match event {
                    LifecycleEvent::Start => manager.start_resource(id),
                    LifecycleEvent::Stop => manager.stop_resource(id),
                    LifecycleEvent::Delete => manager.delete_resource(id),
                };
                let _ = respond_to.send(result);
            }
            ManagerRequest::Details { id, respond_to } => {
                let _ = respond_to.send(manager.get_resource_details(id));
            }
        }
    }
}
