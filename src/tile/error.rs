//! Error types for the product tile.

use thiserror::Error;

/// Errors surfaced to whoever builds or drives a tile.
///
/// Cart failures are not here: the tile absorbs them and reports them as notifications.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TileError {
    /// The view model violates an invariant (empty id or variant, bad price).
    #[error("Invalid product tile props: {0}")]
    InvalidProps(String),

    /// An error occurred while communicating with the tile's actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TileError {
    fn from(msg: String) -> Self {
        TileError::ActorCommunicationError(msg)
    }
}
