//! # Manager Actor Layer
//!
//! The [`ResourceManager`](crate::manager::ResourceManager) is synchronous and
//! expects one caller at a time. This layer makes it shareable: a
//! [`ManagerActor`] owns the manager and drains a request channel sequentially,
//! and any number of cloned [`ManagerClient`]s send requests to it.
//!
//! - [`message`] - [`ManagerRequest`], one variant per manager operation
//! - [`manager_actor`] - the server loop
//! - [`client`] - the async client
//! - [`error`] - [`ActorError`]
//!
//! Wire it up through [`ManagerSystem`](crate::runtime::ManagerSystem) rather than
//! by hand.

pub mod client;
pub mod error;
pub mod manager_actor;
pub mod message;

pub use client::ManagerClient;
pub use error::ActorError;
pub use manager_actor::ManagerActor;
pub use message::{ManagerRequest, Response};
