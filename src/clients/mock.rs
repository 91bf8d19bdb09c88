//! # Mock Cart
//!
//! An in-memory [`CartService`] with an expectation queue, for testing tiles without a real
//! cart backend.
//!
//! Each `add_item` call pops the next expectation and answers with it:
//!
//! ```ignore
//! let cart = Arc::new(MockCart::new());
//! cart.expect_add().return_ok();
//! cart.expect_add().return_err(CartError::Rejected("limit".into()));
//! let held = cart.expect_add().hold(); // settle later with held.succeed() / held.fail(..)
//!
//! // ... drive the tile ...
//! assert_eq!(cart.calls(), vec![("v1".to_string(), 1)]);
//! cart.verify(); // Ensures all expectations were met
//! ```
//!
//! A call with no expectation queued panics, which the tile host reports as an aborted effect.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::{oneshot, Notify};

use crate::clients::{CartError, CartService};

enum Expectation {
    Reply(Result<(), CartError>),
    Held(oneshot::Receiver<Result<(), CartError>>),
    Hang,
}

#[derive(Default)]
struct State {
    expectations: VecDeque<Expectation>,
    calls: Vec<(String, u32)>,
}

/// A cart collaborator driven by queued expectations.
#[derive(Default)]
pub struct MockCart {
    state: Arc<Mutex<State>>,
    called: Arc<Notify>,
}

impl MockCart {
    /// Creates a mock cart with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next `add_item` call.
    pub fn expect_add(&self) -> AddExpectationBuilder {
        AddExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Every `(variant_id, quantity)` received so far, in order.
    pub fn calls(&self) -> Vec<(String, u32)> {
        lock(&self.state).calls.clone()
    }

    /// Waits until at least `count` calls were received.
    pub async fn wait_for_calls(&self, count: usize) {
        loop {
            let notified = self.called.notified();
            if lock(&self.state).calls.len() >= count {
                return;
            }
            notified.await;
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.state).expectations.len();
        if remaining > 0 {
            panic!("Not all cart expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl CartService for MockCart {
    async fn add_item(&self, variant_id: &str, quantity: u32) -> Result<(), CartError> {
        let expectation = {
            let mut state = lock(&self.state);
            state.calls.push((variant_id.to_string(), quantity));
            state.expectations.pop_front()
        };
        self.called.notify_waiters();

        match expectation {
            Some(Expectation::Reply(result)) => result,
            Some(Expectation::Held(release)) => release
                .await
                .unwrap_or_else(|_| Err(CartError::Unavailable("held call was dropped".into()))),
            Some(Expectation::Hang) => std::future::pending().await,
            None => panic!("Unexpected add_item({}, {})", variant_id, quantity),
        }
    }
}

/// Builder for `add_item` expectations.
pub struct AddExpectationBuilder {
    state: Arc<Mutex<State>>,
}

impl AddExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        self.push(Expectation::Reply(Ok(())));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CartError) {
        self.push(Expectation::Reply(Err(error)));
    }

    /// Keeps the call pending until the returned handle settles it.
    pub fn hold(self) -> HeldCall {
        let (release, held) = oneshot::channel();
        self.push(Expectation::Held(held));
        HeldCall { release }
    }

    /// Keeps the call pending forever.
    pub fn hang(self) {
        self.push(Expectation::Hang);
    }

    fn push(self, expectation: Expectation) {
        lock(&self.state).expectations.push_back(expectation);
    }
}

/// A pending `add_item` call waiting to be settled by the test.
pub struct HeldCall {
    release: oneshot::Sender<Result<(), CartError>>,
}

impl HeldCall {
    pub fn succeed(self) {
        let _ = self.release.send(Ok(()));
    }

    pub fn fail(self, error: CartError) {
        let _ = self.release.send(Err(error));
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
