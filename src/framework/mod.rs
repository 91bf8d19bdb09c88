//! Generic runtime for hosting UI components as actors.
//!
//! This module provides the building blocks for driving a component through explicit
//! state transitions on a single task, while its side effects run alongside.
//!
//! # Main Components
//!
//! - [`Component`] - Trait that hosted components implement
//! - [`ComponentActor`] - Generic actor that owns a component and runs its event loop
//! - [`ComponentClient`] - Typed handle for dispatching events and rendering
//! - [`FrameworkError`] - Runtime error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
