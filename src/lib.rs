#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Product Tile
//!
//! > **A storefront product tile driven as an actor.**
//!
//! A product tile shows an image, a title, a price and an "Add to Cart" button with
//! sold-out and busy states. Clicking it calls the cart once, then announces the
//! outcome through a notification.
//!
//! ## 🏗️ Design
//!
//! ### Explicit transitions instead of reactivity
//! The tile is a state machine: [`update`](framework::Component::update) takes an event and
//! returns effects as values; [`view`](framework::Component::view) is a pure projection of the
//! current state. Nothing re-renders behind your back.
//!
//! ### One task per tile
//! Each tile runs in its own Tokio task. Its state (the `is_adding` flag) is only touched on
//! that task, so the sold-out and in-flight guards cannot race. The cart call runs as a
//! separate effect task; the tile keeps answering renders and ignoring repeat clicks while it
//! is pending.
//!
//! ### Collaborators behind traits
//! The cart ([`CartService`](clients::CartService)), notifications
//! ([`Notifier`](clients::Notifier)), price formatting and link resolution are injected.
//! Notifications are plain [`Notification`](clients::Notification) values handed to the
//! presentation layer.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ComponentActor<C>` event loop and its client.
//!
//! ### 2. The Component ([`tile`])
//! [`ProductTile`](tile::ProductTile): guards, transitions, rendering.
//!
//! ### 3. The Interface ([`clients`])
//! Collaborator traits, the [`TileClient`](clients::TileClient) wrapper, and
//! [`MockCart`](clients::mock::MockCart) for tests.
//!
//! ### 4. The Data ([`model`])
//! [`ProductTileProps`](model::ProductTileProps), [`TileView`](model::TileView),
//! [`TileConfig`](model::TileConfig).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`Storefront`](lifecycle::Storefront) and [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod tile;
