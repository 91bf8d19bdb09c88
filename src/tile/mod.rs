//! The product tile: add-to-cart state machine, sold-out guard, and rendering.

mod actions;
pub mod component;
pub mod error;

pub use actions::*;
pub use component::*;
pub use error::*;

use std::sync::Arc;

use crate::clients::TileClient;
use crate::framework::ComponentActor;
use crate::model::{ProductTileProps, TileConfig};

/// Creates a new product tile actor and its client, rendering with the default
/// [`TilePresentation`].
///
/// The actor is not running yet; spawn [`ComponentActor::run`] with a [`TileContext`].
pub fn new(
    props: ProductTileProps,
    config: Arc<TileConfig>,
) -> Result<(ComponentActor<ProductTile>, TileClient), TileError> {
    with_presentation(props, config, TilePresentation::default())
}

/// Like [`new`], with a caller-supplied price formatter and link resolver.
pub fn with_presentation(
    props: ProductTileProps,
    config: Arc<TileConfig>,
    presentation: TilePresentation,
) -> Result<(ComponentActor<ProductTile>, TileClient), TileError> {
    let buffer_size = config.buffer_size.max(1);
    let product_id = props.id.clone();
    let tile = ProductTile::new(props, config)?.with_presentation(presentation);

    let (actor, generic_client) = ComponentActor::new(buffer_size, tile);
    let client = TileClient::new(product_id, generic_client);

    Ok((actor, client))
}
