use super::config::SystemConfig;
use crate::actor::{ActorError, ManagerActor, ManagerClient};
use crate::manager::ResourceManager;
use crate::store::StoreError;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime orchestrator for a single manager actor.
///
/// `ManagerSystem` is responsible for:
/// - **Lifecycle Management**: Spawning the actor and stopping it again
/// - **Dependency Wiring**: Building the manager from a [`SystemConfig`]
///
/// # Example
///
/// ```ignore
/// let system = ManagerSystem::start(manager, 32);
///
/// system.client.login("admin", "admin123").await?;
/// let id = system.client.create_resource("AppService", fields, true).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ManagerSystem {
    /// Client for interacting with the manager actor
    pub client: ManagerClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl ManagerSystem {
    /// Spawns an actor around `manager`. Must be called inside a Tokio runtime.
    pub fn start(manager: ResourceManager, buffer_size: usize) -> Self {
        let (actor, client) = ManagerActor::new(manager, buffer_size);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Builds the manager described by `config` and spawns its actor.
    pub fn from_config(config: &SystemConfig) -> Result<Self, StoreError> {
        let manager = config.build_manager()?;
        Ok(Self::start(manager, config.channel_buffer))
    }

    /// Gracefully shuts the actor down.
    ///
    /// Dropping the client closes the channel once every clone handed out has
    /// been dropped too; the actor then drains what is queued and exits.
    pub async fn shutdown(self) -> Result<(), ActorError> {
        info!("Shutting down manager system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Manager system shutdown complete.");
        Ok(())
    }
}
