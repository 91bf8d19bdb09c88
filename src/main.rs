//! # Product Tile Demo
//!
//! Loads a small catalog, starts a [`Storefront`], clicks "Add to Cart" on every tile and
//! prints the resulting notifications.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use product_tile::clients::{notification_channel, CartError, CartService, NotificationKind};
use product_tile::lifecycle::{setup_tracing, Storefront};
use product_tile::model::{ProductTileProps, TileConfig};
use tracing::{error, info, Instrument};

const CATALOG: &str = r#"[
    { "id": "p1", "title": "Mug", "price": 12.5, "image": "/img/mug.png",
      "slug": "mug", "variantId": "v1", "stock": 5 },
    { "id": "p2", "title": "Poster", "price": 30, "image": "/img/poster.png",
      "slug": "poster", "variantId": "v2", "stock": 0 },
    { "id": "p3", "title": "Hoodie", "price": 55, "image": "/img/hoodie.png",
      "slug": "hoodie", "variantId": "v3-discontinued" }
]"#;

/// Accepts every variant except discontinued ones, after a short delay.
struct DemoCart;

#[async_trait]
impl CartService for DemoCart {
    async fn add_item(&self, variant_id: &str, quantity: u32) -> Result<(), CartError> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if variant_id.ends_with("-discontinued") {
            return Err(CartError::Rejected(format!("{} is no longer sold", variant_id)));
        }
        info!(variant_id, quantity, "Cart updated");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let catalog: Vec<ProductTileProps> = serde_json::from_str(CATALOG).map_err(|e| e.to_string())?;
    let (notifier, mut toasts) = notification_channel();
    let presenter = tokio::spawn(async move {
        while let Some(toast) = toasts.recv().await {
            match toast.kind {
                NotificationKind::Success => println!("[ok]    {}", toast.message),
                NotificationKind::Failure => println!("[error] {}", toast.message),
            }
        }
    });

    let storefront = Storefront::new(catalog, Arc::new(DemoCart), Arc::new(notifier), TileConfig::default())
        .map_err(|e| e.to_string())?;

    for tile in storefront.tiles() {
        let span = tracing::info_span!("click", product_id = tile.product_id());
        let result = async {
            // A double click: the second one is ignored while the first is pending.
            tile.add_to_cart().await?;
            tile.add_to_cart().await
        }
        .instrument(span)
        .await;

        match result {
            Ok(view) => info!(title = %view.title, button = view.button.label(), "Clicked"),
            Err(e) => error!(error = %e, "Click failed"),
        }
    }

    storefront.shutdown().await?;
    presenter.await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
