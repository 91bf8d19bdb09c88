//! Collaborator interfaces and the type-safe wrapper around
//! [`ComponentClient`](crate::framework::ComponentClient).

pub mod actor_client;
pub mod cart;
pub mod format;
pub mod mock;
pub mod notifier;
pub mod tile_client;

pub use actor_client::*;
pub use cart::*;
pub use format::*;
pub use notifier::*;
pub use tile_client::*;
