use crate::clients::actor_client::ActorClient;
use crate::framework::{ComponentClient, FrameworkError};
use crate::model::TileView;
use crate::tile::{ProductTile, TileError, TileEvent};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with a product tile actor.
#[derive(Clone)]
pub struct TileClient {
    product_id: String,
    inner: ComponentClient<ProductTile>,
}

impl TileClient {
    pub fn new(product_id: impl Into<String>, inner: ComponentClient<ProductTile>) -> Self {
        Self {
            product_id: product_id.into(),
            inner,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// The user's "Add to Cart" click.
    ///
    /// Returns the view right after the guard ran: `Busy` when a cart call was started,
    /// unchanged when the click was ignored or rejected. The outcome arrives later as a
    /// notification.
    #[instrument(skip(self), fields(product_id = %self.product_id))]
    pub async fn add_to_cart(&self) -> Result<TileView, TileError> {
        debug!("Sending request");
        self.inner
            .dispatch(TileEvent::AddToCartRequested)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<ProductTile> for TileClient {
    type Error = TileError;

    fn inner(&self) -> &ComponentClient<ProductTile> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TileError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_dispatch, expect_render};
    use crate::model::{ButtonState, ImageView};

    fn busy_view() -> TileView {
        TileView {
            product_id: "p1".into(),
            title: "Mug".into(),
            price: "$12.50".into(),
            image: ImageView {
                src: "/img/mug.png".into(),
                alt: "Mug".into(),
                width: 300,
                height: 300,
            },
            detail_href: "/product/mug".into(),
            sold_out_badge: false,
            button: ButtonState::Busy("Adding...".into()),
        }
    }

    #[tokio::test]
    async fn test_add_to_cart_dispatches_request_event() {
        let (inner, mut receiver) = create_mock_client::<ProductTile>(4);
        let client = TileClient::new("p1", inner);

        let task = tokio::spawn(async move { client.add_to_cart().await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(event, TileEvent::AddToCartRequested);
        responder.send(Ok(busy_view())).unwrap();

        let view = task.await.unwrap().unwrap();
        assert_eq!(view.button, ButtonState::Busy("Adding...".into()));
    }

    #[tokio::test]
    async fn test_render_uses_render_request() {
        let (inner, mut receiver) = create_mock_client::<ProductTile>(4);
        let client = TileClient::new("p1", inner);

        let task = tokio::spawn(async move { client.render().await });

        let responder = expect_render(&mut receiver).await.expect("Expected Render request");
        responder.send(Ok(busy_view())).unwrap();
        assert_eq!(task.await.unwrap().unwrap().title, "Mug");
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_tile_error() {
        let (inner, receiver) = create_mock_client::<ProductTile>(4);
        drop(receiver);
        let client = TileClient::new("p1", inner);

        let result = client.add_to_cart().await;
        assert_eq!(
            result,
            Err(TileError::ActorCommunicationError("Actor closed".into()))
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_maps_to_tile_error() {
        let (inner, mut receiver) = create_mock_client::<ProductTile>(4);
        let client = TileClient::new("p1", inner);

        let task = tokio::spawn(async move { client.add_to_cart().await });
        let (_, responder) = expect_dispatch(&mut receiver).await.unwrap();
        drop(responder);

        assert_eq!(
            task.await.unwrap(),
            Err(TileError::ActorCommunicationError(
                "Actor dropped response channel".into()
            ))
        );
    }
}
