use std::sync::Arc;
use std::time::Duration;

use product_tile::clients::mock::MockCart;
use product_tile::clients::{
    actor_client::ActorClient, notification_channel, CartError, CurrencyFormatter, Notification,
    PathResolver,
};
use product_tile::lifecycle::Storefront;
use product_tile::model::{ButtonState, ProductTileProps, TileConfig};
use product_tile::tile::{TileError, TilePresentation};

fn catalog() -> Vec<ProductTileProps> {
    serde_json::from_str(
        r#"[
            { "id": "p1", "title": "Mug", "price": 12.5, "image": "/img/mug.png",
              "slug": "mug", "variantId": "v1", "stock": 5 },
            { "id": "p2", "title": "Poster", "price": 30, "image": "/img/poster.png",
              "slug": "poster", "variantId": "v2", "stock": 0 },
            { "id": "p3", "title": "Hoodie", "price": 55, "image": "/img/hoodie.png",
              "slug": "hoodie", "variantId": "v3", "availableForSale": true }
        ]"#,
    )
    .expect("catalog parses")
}

/// Full storefront: every tile shares one cart and one notification channel.
#[tokio::test]
async fn test_storefront_end_to_end() {
    let cart = Arc::new(MockCart::new());
    cart.expect_add().return_ok();
    cart.expect_add().return_err(CartError::Rejected("limit reached".into()));
    let (notifier, mut toasts) = notification_channel();

    let storefront = Storefront::new(
        catalog(),
        cart.clone(),
        Arc::new(notifier),
        TileConfig::default(),
    )
    .expect("Failed to start storefront");
    assert_eq!(storefront.tiles().len(), 3);

    let mug = storefront.tile("p1").expect("mug tile");
    let poster = storefront.tile("p2").expect("poster tile");
    let hoodie = storefront.tile("p3").expect("hoodie tile");
    assert!(storefront.tile("missing").is_none());

    // Initial render
    assert_eq!(
        poster.render().await.unwrap().button,
        ButtonState::SoldOut("Sold out".into())
    );
    assert_eq!(hoodie.render().await.unwrap().price, "$55.00");

    // Mug succeeds
    mug.add_to_cart().await.unwrap();
    let toast = tokio::time::timeout(Duration::from_secs(1), toasts.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(toast, Notification::success("Mug has been added to cart!"));

    // Poster is sold out
    poster.add_to_cart().await.unwrap();
    let toast = tokio::time::timeout(Duration::from_secs(1), toasts.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(toast, Notification::failure("This item is sold out"));

    // Hoodie is rejected by the cart
    hoodie.add_to_cart().await.unwrap();
    let toast = tokio::time::timeout(Duration::from_secs(1), toasts.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        toast,
        Notification::failure("Failed to add to cart. Please try again later.")
    );
    assert_eq!(
        hoodie.render().await.unwrap().button,
        ButtonState::Enabled("Add to Cart".into())
    );

    assert_eq!(
        cart.calls(),
        vec![("v1".to_string(), 1), ("v3".to_string(), 1)]
    );
    cart.verify();

    storefront.shutdown().await.expect("Failed to shutdown storefront");
}

/// Concurrent clicks on the same tile reach the cart once.
#[tokio::test]
async fn test_concurrent_clicks_single_cart_call() {
    let cart = Arc::new(MockCart::new());
    let held = cart.expect_add().hold();
    let (notifier, mut toasts) = notification_channel();
    let storefront =
        Storefront::new(catalog(), cart.clone(), Arc::new(notifier), TileConfig::default())
            .unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let tile = storefront.tile("p1").unwrap().clone();
        handles.push(tokio::spawn(async move { tile.add_to_cart().await }));
    }
    for handle in handles {
        let view = handle.await.unwrap().unwrap();
        assert_eq!(view.button, ButtonState::Busy("Adding...".into()));
    }

    cart.wait_for_calls(1).await;
    held.succeed();
    let toast = tokio::time::timeout(Duration::from_secs(1), toasts.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(toast, Notification::success("Mug has been added to cart!"));
    assert_eq!(cart.calls().len(), 1);

    storefront.shutdown().await.unwrap();
    assert!(toasts.recv().await.is_none(), "no duplicate notification");
}

/// Shutdown waits for a pending cart call to settle.
#[tokio::test]
async fn test_shutdown_drains_pending_add() {
    let cart = Arc::new(MockCart::new());
    let held = cart.expect_add().hold();
    let (notifier, mut toasts) = notification_channel();
    let storefront =
        Storefront::new(catalog(), cart.clone(), Arc::new(notifier), TileConfig::default())
            .unwrap();

    storefront.tile("p1").unwrap().add_to_cart().await.unwrap();
    cart.wait_for_calls(1).await;

    let shutdown = tokio::spawn(storefront.shutdown());
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!shutdown.is_finished());

    held.succeed();
    shutdown.await.unwrap().unwrap();
    assert_eq!(
        toasts.recv().await,
        Some(Notification::success("Mug has been added to cart!"))
    );
}

#[tokio::test]
async fn test_invalid_catalog_is_rejected() {
    let cart = Arc::new(MockCart::new());
    let (notifier, _toasts) = notification_channel();

    let mut bad = catalog();
    bad[1].price = -3.0;
    let result = Storefront::new(bad, cart.clone(), Arc::new(notifier.clone()), TileConfig::default());
    assert!(matches!(result, Err(TileError::InvalidProps(_))));

    let mut duplicate = catalog();
    duplicate[2].id = "p1".into();
    let result = Storefront::new(duplicate, cart, Arc::new(notifier), TileConfig::default());
    assert!(matches!(result, Err(TileError::InvalidProps(_))));
}

#[tokio::test]
async fn test_storefront_shares_presentation() {
    let cart = Arc::new(MockCart::new());
    let (notifier, _toasts) = notification_channel();
    let presentation = TilePresentation {
        formatter: Arc::new(CurrencyFormatter::new("€")),
        links: Arc::new(PathResolver::new("/shop/")),
    };

    let storefront = Storefront::with_presentation(
        catalog(),
        cart,
        Arc::new(notifier),
        TileConfig::default(),
        presentation,
    )
    .expect("Failed to start storefront");

    let mug = storefront.tile("p1").unwrap().render().await.unwrap();
    assert_eq!(mug.price, "€12.50");
    assert_eq!(mug.detail_href, "/shop/mug");
    let hoodie = storefront.tile("p3").unwrap().render().await.unwrap();
    assert_eq!(hoodie.detail_href, "/shop/hoodie");

    storefront.shutdown().await.unwrap();
}
