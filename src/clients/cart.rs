//! The cart collaborator.
//!
//! The tile only ever calls [`CartService::add_item`]. Quantity merging, persistence and
//! inventory checks belong to the implementation behind the trait.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors a cart collaborator can report.
///
/// The tile logs these but never shows them to the user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart refused the item.
    #[error("Cart rejected item: {0}")]
    Rejected(String),

    /// The cart backend could not be reached.
    #[error("Cart unavailable: {0}")]
    Unavailable(String),

    /// The call did not settle within the configured timeout.
    #[error("Cart did not respond within {0:?}")]
    TimedOut(Duration),
}

/// Asynchronous cart mutation keyed by variant.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Adds `quantity` (always positive) of `variant_id` to the cart.
    async fn add_item(&self, variant_id: &str, quantity: u32) -> Result<(), CartError>;
}
