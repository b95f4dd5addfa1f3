//! # Cloud Resource Manager Demo
//!
//! Drives a [`ManagerSystem`] end to end:
//! 1.  Seeding default users and registering new ones.
//! 2.  Rejected and accepted logins.
//! 3.  Creating, starting, stopping and deleting resources, with and without logging.
//! 4.  Switching to the remote authentication stub.
//!
//! Configure the user store and authentication backend with the `CLOUD_RM_*`
//! variables described in [`SystemConfig`].

use cloud_resource_manager::actor::ActorError;
use cloud_resource_manager::auth::RemoteAuthProvider;
use cloud_resource_manager::manager::ResourceManager;
use cloud_resource_manager::runtime::{setup_tracing, ManagerSystem, SystemConfig};
use cloud_resource_manager::store::seed_default_users;
use serde_json::json;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(users_file = ?config.users_file, "Starting cloud resource manager demo");

    let store = config.build_store()?;
    seed_default_users(store.as_ref())?;
    let auth = config.build_auth(store.clone());
    let manager = ResourceManager::new(store, auth);
    let system = ManagerSystem::start(manager, config.channel_buffer);
    let client = system.client.clone();

    // Registration is open to everyone
    let newcomers = [("alice", "password123", "admin"), ("bob", "secret456", "user")];
    for (username, password, role) in newcomers {
        if let Err(e) = client.register_user(username, password, role).await {
            warn!(username, error = %e, "Registration skipped");
        }
    }

    // Nothing works before login
    if let Err(e) = client.list_resources().await {
        info!(error = %e, "Listing refused without a session");
    }

    let span = tracing::info_span!("login");
    async {
        if let Err(e) = client.login("alice", "wrongpassword").await {
            info!(error = %e, "Wrong password rejected");
        }
        client.login("alice", "password123").await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("resources");
    async {
        let web = client
            .create_resource(
                "AppService",
                json!({ "name": "MyWebApp", "runtime": "Python", "region": "us-east-1", "replicaCount": 3 }),
                true,
            )
            .await?;
        let blobs = client
            .create_resource(
                "StorageAccount",
                json!({ "name": "MyStorage", "encryptionEnabled": true, "maxSizeGb": 500 }),
                false,
            )
            .await?;
        let cache = client
            .create_resource(
                "CacheDB",
                json!({ "name": "MyCache", "ttlSeconds": 300, "capacityMb": 1024, "evictionPolicy": "LRU" }),
                true,
            )
            .await?;

        client.start_resource(web).await?;
        client.start_resource(cache).await?;
        if let Err(e) = client.delete_resource(web).await {
            info!(error = %e, "Running resources cannot be deleted");
        }
        client.stop_resource(web).await?;
        client.delete_resource(web).await?;

        for id in [web, blobs, cache] {
            println!("{}\n", client.get_resource_details(id).await?);
        }
        for summary in client.list_resources().await? {
            info!(id = %summary.id, name = %summary.name, state = %summary.state, "Resource");
        }
        Ok::<_, ActorError>(())
    }
    .instrument(span)
    .await?;

    client.logout().await?;

    // Remote stub accepts any non-empty credentials, but the user must still exist
    let name = client
        .set_auth_provider(RemoteAuthProvider::new(
            "https://auth.example.com",
            "demo-api-key-12345",
        ))
        .await?;
    info!(provider = %name, "Switched authentication provider");
    match client.login("charlie", "anything").await {
        Ok(user) => info!(username = %user.username, "Logged in"),
        Err(e) => error!(error = %e, "Remote login failed closed"),
    }
    client.login("bob", "not-checked").await?;
    info!(types = ?client.resource_types().await?, "Available resource types");

    // Shutdown system gracefully
    drop(client);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
