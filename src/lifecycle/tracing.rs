//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`); the
//! `component_type` and `product_id` fields already say where a line came from.
//! Verbosity comes from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Draining effects`, `Shutdown`
//! - **Events**: every dispatched and settled event at `debug`
//! - **Guards**: sold-out rejections and in-flight no-ops at `debug`
//! - **Outcomes**: `Added to cart` at `info`, `Failed to add item to cart` at `error`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every event and guard decision
//! RUST_LOG=debug cargo run
//!
//! # Just the tile state machine
//! RUST_LOG=product_tile::tile=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG add_to_cart{product_id=p1}: Sending request
//! DEBUG Dispatch component_type="ProductTile" event=AddToCartRequested
//! DEBUG Dispatch component_type="ProductTile" event=AddToCartRequested
//! DEBUG Add ignored: already in flight variant_id=v1
//! DEBUG Effect settled component_type="ProductTile" event=AddSucceeded
//!  INFO Added to cart variant_id=v1 title=Mug
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
