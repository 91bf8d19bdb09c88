use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info};

use crate::clients::{CartService, Notifier, TileClient};
use crate::model::{ProductTileProps, TileConfig};
use crate::tile::{self, TileContext, TileError, TilePresentation};

/// The runtime orchestrator for a page of product tiles.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: Starting one actor per tile and stopping them all
/// - **Dependency Wiring**: Sharing one cart service and one notifier across every tile
///
/// # Example
///
/// ```ignore
/// let (notifier, mut toasts) = notification_channel();
/// let storefront = Storefront::new(catalog, cart, Arc::new(notifier), TileConfig::default())?;
///
/// storefront.tile("p1").unwrap().add_to_cart().await?;
/// let toast = toasts.recv().await;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Tile clients in catalog order
    tiles: Vec<TileClient>,

    /// Index into `tiles` by product id
    by_id: HashMap<String, usize>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Validates every product, then spawns a tile actor for each, rendering with the
    /// default [`TilePresentation`].
    ///
    /// Nothing is spawned if any product is invalid or a product id repeats.
    pub fn new(
        catalog: Vec<ProductTileProps>,
        cart: Arc<dyn CartService>,
        notifier: Arc<dyn Notifier>,
        config: TileConfig,
    ) -> Result<Self, TileError> {
        Self::with_presentation(catalog, cart, notifier, config, TilePresentation::default())
    }

    /// Like [`Storefront::new`], with a price formatter and link resolver shared by every tile.
    pub fn with_presentation(
        catalog: Vec<ProductTileProps>,
        cart: Arc<dyn CartService>,
        notifier: Arc<dyn Notifier>,
        config: TileConfig,
        presentation: TilePresentation,
    ) -> Result<Self, TileError> {
        let mut by_id = HashMap::with_capacity(catalog.len());
        for (index, props) in catalog.iter().enumerate() {
            props.validate()?;
            if by_id.insert(props.id.clone(), index).is_some() {
                return Err(TileError::InvalidProps(format!(
                    "duplicate product id {}",
                    props.id
                )));
            }
        }

        let config = Arc::new(config);
        let context = TileContext::new(cart, notifier, &config);

        let mut tiles = Vec::with_capacity(catalog.len());
        let mut handles = Vec::with_capacity(catalog.len());
        for props in catalog {
            let (actor, client) = tile::with_presentation(props, config.clone(), presentation.clone())?;
            handles.push(tokio::spawn(actor.run(context.clone())));
            tiles.push(client);
        }

        info!(tiles = tiles.len(), "Storefront started");
        Ok(Self {
            tiles,
            by_id,
            handles,
        })
    }

    pub fn tile(&self, product_id: &str) -> Option<&TileClient> {
        self.by_id.get(product_id).and_then(|&index| self.tiles.get(index))
    }

    pub fn tiles(&self) -> &[TileClient] {
        &self.tiles
    }

    /// Gracefully shuts down every tile.
    ///
    /// Dropping the clients closes each actor's channel; actors finish any cart call
    /// still in flight before exiting.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.tiles);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Tile task failed: {:?}", e);
                return Err(format!("Tile task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
