//! Runtime orchestration and lifecycle management.
//!
//! - [`Storefront`] - Starts a tile actor per product, wires shared collaborators, shuts down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod storefront;
pub mod tracing;

pub use storefront::*;
pub use self::tracing::*;
