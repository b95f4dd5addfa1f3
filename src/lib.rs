//! # Cloud Resource Manager
//!
//! > **Session-gated lifecycle management for typed cloud resources.**
//!
//! Users log in, then create, start, stop and delete in-memory cloud resources
//! (application services, storage accounts and cache databases). Every resource
//! follows the same four-state lifecycle, can be wrapped in a logging decorator
//! without changing behaviour, and is only reachable through a manager that
//! refuses to act without an authenticated session.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### A pure state machine at the bottom
//!
//! [`LifecycleState::apply`](resource::LifecycleState::apply) is a plain function
//! from `(state, event)` to the next state or an error. Resources replace their
//! state only when it succeeds, so a failed operation can never leave a resource
//! half-changed.
//!
//! ### Decoration through a trait, not inheritance
//!
//! [`Resource`](resource::Resource) is the capability interface. Both
//! [`CloudResource`](resource::CloudResource) and
//! [`LoggingDecorator`](resource::LoggingDecorator) implement it, and `Box<dyn
//! Resource>` forwards it too, so decorators stack to any depth and the manager
//! never knows whether it is talking to a wrapper.
//!
//! ### Explicit collaborators
//!
//! The [`ResourceManager`](manager::ResourceManager) is an ordinary struct built
//! with an injected [`UserStore`](store::UserStore) and
//! [`AuthProvider`](auth::AuthProvider). There is no global state; tests build as
//! many managers as they like.
//!
//! ### Concurrency Model
//!
//! The manager is synchronous and single-caller. To share it, hand it to a
//! [`ManagerSystem`](runtime::ManagerSystem): one actor task owns it and processes
//! requests sequentially, which is the only lock the system needs.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Users, resource payloads, ids and eviction policies.
//!
//! ### 2. The Resource ([`resource`])
//! Lifecycle state machine, typed resource record, factory and logging decorator.
//!
//! ### 3. The Collaborators ([`store`], [`auth`])
//! Where users live and how credentials are checked.
//!
//! ### 4. The Façade ([`manager`])
//! Session handling and the authorization gate in front of every resource operation.
//!
//! ### 5. The Service ([`actor`], [`runtime`])
//! The actor that serialises access to a manager, its async client, configuration
//! and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use cloud_resource_manager::auth::FileAuthProvider;
//! use cloud_resource_manager::manager::ResourceManager;
//! use cloud_resource_manager::resource::LifecycleState;
//! use cloud_resource_manager::store::{InMemoryUserStore, UserStore};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let auth = FileAuthProvider::new(store.clone());
//! let mut manager = ResourceManager::new(store, Box::new(auth));
//!
//! manager.register_user("alice", "pw1", "admin").unwrap();
//! manager.login("alice", "pw1").unwrap();
//!
//! let fields = json!({ "name": "W", "runtime": "Python", "region": "us-east-1", "replicaCount": 3 });
//! let id = manager.create_resource("AppService", &fields, true).unwrap();
//! assert_eq!(manager.start_resource(id).unwrap(), LifecycleState::Running);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod actor;
pub mod auth;
pub mod manager;
pub mod model;
pub mod resource;
pub mod runtime;
pub mod store;
