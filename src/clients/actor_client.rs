use crate::framework::{Component, ComponentClient, FrameworkError};
use async_trait::async_trait;

/// Trait for component-specific clients to inherit standard operations.
///
/// This trait reduces boilerplate by providing a default `render` for every wrapper.
#[async_trait]
pub trait ActorClient<C: Component>: Send + Sync {
    /// The component-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ComponentClient.
    fn inner(&self) -> &ComponentClient<C>;

    /// Map framework errors to the specific component error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current view without changing state.
    #[tracing::instrument(skip(self))]
    async fn render(&self) -> Result<C::View, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().render().await.map_err(Self::map_error)
    }
}
