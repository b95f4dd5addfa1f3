use cloud_resource_manager::auth::{FileAuthProvider, RemoteAuthProvider};
use cloud_resource_manager::manager::{ManagerError, ResourceManager};
use cloud_resource_manager::model::ResourceId;
use cloud_resource_manager::resource::{
    LifecycleEvent, LifecycleState, Resource, ResourceError, ResourceFactory,
};
use cloud_resource_manager::store::{InMemoryUserStore, JsonFileUserStore, UserStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

fn file_backed_manager(dir: &TempDir) -> (ResourceManager, Arc<dyn UserStore>) {
    let store: Arc<dyn UserStore> =
        Arc::new(JsonFileUserStore::open(dir.path().join("users.json")).expect("open store"));
    let auth = FileAuthProvider::new(store.clone());
    (ResourceManager::new(store.clone(), Box::new(auth)), store)
}

fn web_app() -> Value {
    json!({ "name": "W", "runtime": "Python", "region": "us-east-1", "replicaCount": 3 })
}

/// Walks the whole user journey against a JSON-file store.
#[test]
fn test_full_session_with_file_store() {
    let dir = TempDir::new().unwrap();
    let (mut manager, store) = file_backed_manager(&dir);

    // Nothing can be created before login
    assert!(matches!(
        manager.create_resource("AppService", &web_app(), false),
        Err(ManagerError::Unauthorized)
    ));

    // Register, then a duplicate registration is refused
    manager.register_user("alice", "pw1", "admin").unwrap();
    assert!(matches!(
        manager.register_user("alice", "pw2", "user"),
        Err(ManagerError::DuplicateUser(_))
    ));
    let stored = store.find_by_username("alice").unwrap().unwrap();
    assert_eq!(stored.password, "pw1");

    // Wrong password keeps the session closed
    assert!(manager.login("alice", "wrong").is_err());
    assert!(!manager.is_authenticated());

    let user = manager.login("alice", "pw1").unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.role, "admin");

    // Create and inspect
    let id = manager
        .create_resource("AppService", &web_app(), false)
        .expect("create after login");
    let details = manager.get_resource_details(id).unwrap();
    assert_eq!(
        details,
        "AppService[1]: W\n  State: CREATED\n  Runtime: Python\n  Region: us-east-1\n  Replicas: 3"
    );

    // Logging out closes the gate again
    manager.logout();
    assert!(matches!(
        manager.get_resource_details(id),
        Err(ManagerError::Unauthorized)
    ));
}

#[test]
fn test_resource_lifecycle_rules() {
    let dir = TempDir::new().unwrap();
    let (mut manager, _) = file_backed_manager(&dir);
    manager.register_user("ops", "pw", "user").unwrap();
    manager.login("ops", "pw").unwrap();

    let storage = manager
        .create_resource(
            "StorageAccount",
            &json!({ "name": "S", "encryptionEnabled": true, "maxSizeGb": 100 }),
            true,
        )
        .unwrap();

    // stop from CREATED fails without changing state
    assert!(matches!(
        manager.stop_resource(storage),
        Err(ManagerError::Resource(ResourceError::InvalidTransition {
            state: LifecycleState::Created,
            ..
        }))
    ));
    assert_eq!(manager.start_resource(storage).unwrap(), LifecycleState::Running);
    assert!(manager.start_resource(storage).is_err());
    assert_eq!(manager.stop_resource(storage).unwrap(), LifecycleState::Stopped);
    assert!(manager.stop_resource(storage).is_err());
    assert_eq!(manager.start_resource(storage).unwrap(), LifecycleState::Running);
    assert_eq!(manager.stop_resource(storage).unwrap(), LifecycleState::Stopped);
    assert_eq!(manager.delete_resource(storage).unwrap(), LifecycleState::Deleted);

    for result in [
        manager.start_resource(storage),
        manager.stop_resource(storage),
        manager.delete_resource(storage),
    ] {
        assert!(matches!(
            result,
            Err(ManagerError::Resource(ResourceError::InvalidTransition { .. }))
        ));
    }
    let summary = manager.list_resources().unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].state, LifecycleState::Deleted);
}

#[test]
fn test_cache_eviction_policy_mapping() {
    let dir = TempDir::new().unwrap();
    let (mut manager, _) = file_backed_manager(&dir);
    manager.register_user("ops", "pw", "user").unwrap();
    manager.login("ops", "pw").unwrap();

    let mut eviction_of = |policy: Option<&str>| {
        let mut fields = json!({ "name": "C", "ttlSeconds": 30, "capacityMb": 64 });
        if let Some(policy) = policy {
            fields["evictionPolicy"] = json!(policy);
        }
        let id = manager.create_resource("CacheDB", &fields, false).unwrap();
        let details = manager.get_resource_details(id).unwrap();
        details.lines().last().unwrap().trim().to_string()
    };

    assert_eq!(eviction_of(Some("LRU")), "Eviction: LRU");
    assert_eq!(eviction_of(Some("lru")), "Eviction: FIFO");
    assert_eq!(eviction_of(None), "Eviction: FIFO");
}

#[test]
fn test_listing_is_ordered_by_id() {
    let dir = TempDir::new().unwrap();
    let (mut manager, _) = file_backed_manager(&dir);
    manager.register_user("ops", "pw", "user").unwrap();
    manager.login("ops", "pw").unwrap();

    for i in 0..12 {
        let fields = json!({ "name": format!("app-{i}"), "runtime": "Go", "region": "eu-west-1", "replicaCount": 1 });
        manager.create_resource("AppService", &fields, i % 2 == 0).unwrap();
    }

    let ids: Vec<ResourceId> = manager
        .list_resources()
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    let expected: Vec<ResourceId> = (1..=12).map(ResourceId).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_remote_provider_still_requires_known_user() {
    let dir = TempDir::new().unwrap();
    let (mut manager, _) = file_backed_manager(&dir);
    manager.register_user("bob", "secret456", "user").unwrap();
    manager.set_auth_provider(Box::new(RemoteAuthProvider::new(
        "https://auth.example.com",
        "demo-api-key",
    )));

    // Stub accepts anything non-empty, but the store must know the user
    assert!(matches!(
        manager.login("ghost", "x"),
        Err(ManagerError::UnknownUser(_))
    ));
    assert!(matches!(
        manager.login("bob", ""),
        Err(ManagerError::InvalidCredentials(_))
    ));
    assert_eq!(manager.login("bob", "not-the-password").unwrap().username, "bob");
}

#[test]
fn test_independent_managers_do_not_share_state() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let (mut a, _) = file_backed_manager(&dir_a);
    let (mut b, _) = file_backed_manager(&dir_b);

    a.register_user("u", "p", "user").unwrap();
    a.login("u", "p").unwrap();
    a.create_resource("AppService", &web_app(), false).unwrap();

    assert!(b.login("u", "p").is_err());
    b.register_user("u", "p", "user").unwrap();
    b.login("u", "p").unwrap();
    assert!(b.list_resources().unwrap().is_empty());
    assert_eq!(
        b.create_resource("AppService", &web_app(), false).unwrap(),
        ResourceId(1)
    );
}

/// A resource type that ships outside the crate.
#[derive(Debug)]
struct Queue {
    id: ResourceId,
    name: String,
    partitions: u64,
    state: LifecycleState,
}

impl Resource for Queue {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, event: LifecycleEvent) -> Result<LifecycleState, ResourceError> {
        self.state = self.state.apply(event)?;
        Ok(self.state)
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn details(&self) -> String {
        format!(
            "Queue[{}]: {}\n  State: {}\n  Partitions: {}",
            self.id,
            self.name,
            self.state.name(),
            self.partitions
        )
    }
}

fn register_queue(factory: &mut ResourceFactory) {
    factory.register("Queue", |id, fields| {
        let name = fields["name"].as_str().unwrap_or("queue").to_string();
        let partitions = fields["partitions"]
            .as_u64()
            .ok_or_else(|| ResourceError::InvalidFields {
                type_tag: "Queue".into(),
                reason: "partitions must be a non-negative integer".into(),
            })?;
        Ok(Box::new(Queue {
            id,
            name,
            partitions,
            state: LifecycleState::Created,
        }) as Box<dyn Resource>)
    });
}

#[test]
fn test_registered_type_runs_through_manager() {
    let dir = TempDir::new().unwrap();
    let (mut manager, _) = file_backed_manager(&dir);
    register_queue(manager.factory_mut());
    assert!(manager.factory_mut().contains("Queue"));
    assert_eq!(
        manager.resource_types(),
        ["AppService", "CacheDB", "Queue", "StorageAccount"]
    );

    manager.register_user("ops", "pw", "user").unwrap();
    manager.login("ops", "pw").unwrap();

    // Malformed fields consume no id
    assert!(matches!(
        manager.create_resource("Queue", &json!({ "name": "jobs" }), true),
        Err(ManagerError::Resource(ResourceError::InvalidFields { .. }))
    ));

    let id = manager
        .create_resource("Queue", &json!({ "name": "jobs", "partitions": 4 }), true)
        .unwrap();
    assert_eq!(id, ResourceId(1));
    assert_eq!(manager.start_resource(id).unwrap(), LifecycleState::Running);
    assert!(manager.delete_resource(id).is_err());
    assert_eq!(manager.stop_resource(id).unwrap(), LifecycleState::Stopped);
    assert_eq!(manager.delete_resource(id).unwrap(), LifecycleState::Deleted);
    assert_eq!(
        manager.get_resource_details(id).unwrap(),
        "Queue[1]: jobs\n  State: DELETED\n  Partitions: 4"
    );
}

#[test]
fn test_manager_with_custom_factory_only_knows_its_types() {
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let auth = FileAuthProvider::new(store.clone());
    let mut factory = ResourceFactory::empty();
    register_queue(&mut factory);
    let mut manager = ResourceManager::with_factory(store, Box::new(auth), factory);

    manager.register_user("ops", "pw", "user").unwrap();
    manager.login("ops", "pw").unwrap();
    assert_eq!(manager.resource_types(), ["Queue"]);

    assert!(matches!(
        manager.create_resource("AppService", &web_app(), false),
        Err(ManagerError::Resource(ResourceError::UnknownType(_)))
    ));
    let id = manager
        .create_resource("Queue", &json!({ "name": "q", "partitions": 1 }), false)
        .unwrap();
    assert_eq!(id, ResourceId(1));
    assert_eq!(manager.list_resources().unwrap()[0].name, "q");
}
