//! # Mock Framework
//!
//! Utilities for testing client wrappers in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiver it sends to.
//! Then use [`expect_dispatch`] or [`expect_render`] to inspect each request and answer it
//! with whatever view (or error) the test needs, without spawning a [`ComponentActor`].
//!
//! [`ComponentActor`]: crate::framework::ComponentActor

use crate::framework::{Component, ComponentClient, ComponentRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The client sends messages to a channel the test controls. The test pulls each message
/// off the receiver, asserts on it, and answers through the embedded responder. This
/// simulates the actor's behavior (success, failure, delays) deterministically.
pub fn create_mock_client<C: Component>(
    buffer_size: usize,
) -> (ComponentClient<C>, mpsc::Receiver<ComponentRequest<C>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ComponentClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request.
pub async fn expect_dispatch<C: Component>(
    receiver: &mut mpsc::Receiver<ComponentRequest<C>>,
) -> Option<(C::Event, Response<C::View>)> {
    match receiver.recv().await {
        Some(ComponentRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Render request.
pub async fn expect_render<C: Component>(
    receiver: &mut mpsc::Receiver<ComponentRequest<C>>,
) -> Option<Response<C::View>> {
    match receiver.recv().await {
        Some(ComponentRequest::Render { respond_to }) => Some(respond_to),
        _ => None,
    }
}
