//! Pure data structures shared by the resource, store and manager layers.

pub mod eviction;
pub mod resource;
pub mod user;

pub use eviction::*;
pub use resource::*;
pub use user::*;
