//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running the manager as a service:
//!
//! - **Actor lifecycle management**: Spawning and shutting down the manager actor
//! - **Configuration**: Choosing the user store and authentication backend
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`ManagerSystem`] - Spawns a [`ManagerActor`](crate::actor::ManagerActor) and owns its task
//! - [`SystemConfig`] - Store and authentication selection, read from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod manager_system;
pub mod tracing;

pub use self::config::*;
pub use self::manager_system::*;
pub use self::tracing::*;
