//! Events and effects of the product tile.
//!
//! Events are what the tile reacts to; effects are what it asks its host to do.
//! See [`ProductTile`](crate::tile::ProductTile) for the transition rules.

use crate::clients::{CartError, Notification};

/// Inputs to the product tile.
#[derive(Debug, Clone, PartialEq)]
pub enum TileEvent {
    /// The user pressed "Add to Cart".
    AddToCartRequested,
    /// The cart accepted the item.
    AddSucceeded,
    /// The cart call failed or timed out.
    AddFailed(CartError),
}

/// Side effects requested by the product tile.
#[derive(Debug, Clone, PartialEq)]
pub enum TileEffect {
    /// Call the cart collaborator. Settles with `AddSucceeded` or `AddFailed`.
    AddItem { variant_id: String, quantity: u32 },
    /// Hand a message to the notifier.
    Notify(Notification),
}
