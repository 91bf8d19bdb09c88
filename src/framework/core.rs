//! # Core Component Runtime
//!
//! This module defines the generic building blocks for hosting UI components as actors.
//!
//! ## Key Types
//!
//! - [`Component`]: The trait that every hosted component implements.
//! - [`ComponentActor`]: The generic actor that owns a component and runs its event loop.
//! - [`ComponentClient`]: The generic client for dispatching events and rendering.
//! - [`FrameworkError`]: Runtime errors (e.g., ActorClosed, ActorDropped).

use std::collections::HashMap;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{self, JoinSet};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (State Transitions, Effects, and Views)
// =============================================================================

/// Trait that any component must implement to be hosted by a [`ComponentActor`].
///
/// # Architecture Note
/// A component is split into three parts:
/// - [`Component::update`]: a synchronous transition from the current state and an event
///   to the next state, returning the side effects it wants performed as plain values.
/// - [`Component::view`]: a pure projection of the current state.
/// - [`Component::perform`]: the only place slow collaborators are called. It runs outside the
///   event loop and may hand a follow-up event back to it.
/// - [`Component::perform_inline`]: fire-and-forget effects run on the actor's own task, in
///   the order `update` returned them.
///
/// State is only ever touched inside `update`, on the actor's task, so a guard check and the
/// flag it protects can never interleave with another event.
///
/// # Context
/// `Context` holds the collaborators (services, sinks, settings) and is injected into
/// [`ComponentActor::run`], not into the constructor.
#[async_trait]
pub trait Component: Send + 'static {
    /// Inputs the component reacts to (user intents and effect outcomes).
    type Event: Send + Debug + 'static;

    /// Side effects requested by a transition.
    type Effect: Clone + Send + Debug + 'static;

    /// The rendered projection of the component.
    type View: Clone + Send + Debug + 'static;

    /// The runtime context (collaborators) shared by every effect.
    type Context: Send + Sync + 'static;

    /// Apply an event and return the effects to perform.
    fn update(&mut self, event: Self::Event) -> Vec<Self::Effect>;

    /// Project the current state into a view.
    fn view(&self) -> Self::View;

    /// Perform a single effect against the context.
    async fn perform(effect: Self::Effect, ctx: Arc<Self::Context>) -> Option<Self::Event>;

    /// Perform an effect on the actor's task before the next request is processed.
    ///
    /// Return `None` when the effect was handled here, or hand it back to have it spawned
    /// through [`Component::perform`]. The default spawns everything.
    fn perform_inline(effect: Self::Effect, _ctx: &Self::Context) -> Option<Self::Effect> {
        Some(effect)
    }

    /// Called with the effect whose execution panicked or was cancelled before producing
    /// its outcome.
    ///
    /// The default does nothing. Components holding an in-flight flag for that effect
    /// should clear it here.
    fn on_effect_aborted(&mut self, _effect: Self::Effect, _reason: String) -> Vec<Self::Effect> {
        Vec::new()
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the component runtime itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message type sent to a [`ComponentActor`].
///
/// - **Dispatch**: apply an event, reply with the view rendered right after the transition.
/// - **Render**: reply with the current view without changing anything.
#[derive(Debug)]
pub enum ComponentRequest<C: Component> {
    Dispatch {
        event: C::Event,
        respond_to: Response<C::View>,
    },
    Render {
        respond_to: Response<C::View>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR
// =============================================================================

/// The actor that hosts one component.
///
/// **Concurrency Model**:
/// The loop waits on two sources at once: requests from clients and the outcomes of
/// in-flight effects. Effects run as separate tasks in a [`JoinSet`], so a slow collaborator
/// never blocks rendering or event handling. Everything that mutates the component runs on
/// this one task; no `Mutex` is needed.
///
/// Each spawned task is tracked by its [`task::Id`] so an abort is reported against the
/// effect that was actually running.
pub struct ComponentActor<C: Component> {
    receiver: mpsc::Receiver<ComponentRequest<C>>,
    component: C,
    in_flight: JoinSet<Option<C::Event>>,
    spawned: HashMap<task::Id, C::Effect>,
}

impl<C: Component> ComponentActor<C> {
    pub fn new(buffer_size: usize, component: C) -> (Self, ComponentClient<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            component,
            in_flight: JoinSet::new(),
            spawned: HashMap::new(),
        };
        let client = ComponentClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client is dropped, then drains
    /// the effects still in flight before returning.
    pub async fn run(mut self, context: C::Context) {
        let component_type = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let ctx = Arc::new(context);
        info!(component_type, "Actor started");

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(ComponentRequest::Dispatch { event, respond_to }) => {
                        debug!(component_type, ?event, "Dispatch");
                        self.apply(event, &ctx);
                        let _ = respond_to.send(Ok(self.component.view()));
                    }
                    Some(ComponentRequest::Render { respond_to }) => {
                        let _ = respond_to.send(Ok(self.component.view()));
                    }
                    None => break,
                },
                Some(joined) = self.in_flight.join_next_with_id(), if !self.in_flight.is_empty() => {
                    self.settle(component_type, joined, &ctx);
                }
            }
        }

        let pending = self.in_flight.len();
        if pending > 0 {
            info!(component_type, pending, "Draining effects");
        }
        while let Some(joined) = self.in_flight.join_next_with_id().await {
            self.settle(component_type, joined, &ctx);
        }

        info!(component_type, "Shutdown");
    }

    fn apply(&mut self, event: C::Event, ctx: &Arc<C::Context>) {
        let effects = self.component.update(event);
        self.run_effects(effects, ctx);
    }

    fn settle(
        &mut self,
        component_type: &str,
        joined: Result<(task::Id, Option<C::Event>), task::JoinError>,
        ctx: &Arc<C::Context>,
    ) {
        match joined {
            Ok((id, outcome)) => {
                self.spawned.remove(&id);
                if let Some(event) = outcome {
                    debug!(component_type, ?event, "Effect settled");
                    self.apply(event, ctx);
                }
            }
            Err(e) => {
                let Some(effect) = self.spawned.remove(&e.id()) else {
                    warn!(component_type, error = %e, "Untracked effect task aborted");
                    return;
                };
                warn!(component_type, ?effect, error = %e, "Effect task aborted");
                let effects = self.component.on_effect_aborted(effect, e.to_string());
                self.run_effects(effects, ctx);
            }
        }
    }

    fn run_effects(&mut self, effects: Vec<C::Effect>, ctx: &Arc<C::Context>) {
        for effect in effects {
            let attempted = effect.clone();
            match panic::catch_unwind(AssertUnwindSafe(|| C::perform_inline(effect, ctx))) {
                Ok(None) => {}
                Ok(Some(effect)) => {
                    let handle = self.in_flight.spawn(C::perform(effect.clone(), Arc::clone(ctx)));
                    self.spawned.insert(handle.id(), effect);
                }
                Err(payload) => {
                    let reason = panic_message(payload.as_ref());
                    warn!(effect = ?attempted, reason = %reason, "Inline effect panicked");
                    let effects = self.component.on_effect_aborted(attempted, reason);
                    self.run_effects(effects, ctx);
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`ComponentActor`].
pub struct ComponentClient<C: Component> {
    sender: mpsc::Sender<ComponentRequest<C>>,
}

impl<C: Component> Clone for ComponentClient<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: Component> ComponentClient<C> {
    pub fn new(sender: mpsc::Sender<ComponentRequest<C>>) -> Self {
        Self { sender }
    }

    pub async fn dispatch(&self, event: C::Event) -> Result<C::View, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn render(&self) -> Result<C::View, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Render { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // --- Component Definition ---

    /// A counter whose "save" effect echoes the value back after a delay.
    struct Counter {
        value: u32,
        saved: Option<u32>,
    }

    #[derive(Debug)]
    enum CounterEvent {
        Increment,
        Save,
        Saved(u32),
        Explode,
        ExplodeInline,
    }

    #[derive(Debug, Clone)]
    enum CounterEffect {
        Persist(u32),
        Panic,
        PanicInline,
    }

    #[async_trait]
    impl Component for Counter {
        type Event = CounterEvent;
        type Effect = CounterEffect;
        type View = (u32, Option<u32>);
        type Context = Duration;

        fn update(&mut self, event: CounterEvent) -> Vec<CounterEffect> {
            match event {
                CounterEvent::Increment => {
                    self.value += 1;
                    vec![]
                }
                CounterEvent::Save => vec![CounterEffect::Persist(self.value)],
                CounterEvent::Saved(v) => {
                    self.saved = Some(v);
                    vec![]
                }
                CounterEvent::Explode => vec![CounterEffect::Panic],
                CounterEvent::ExplodeInline => vec![CounterEffect::PanicInline],
            }
        }

        fn view(&self) -> (u32, Option<u32>) {
            (self.value, self.saved)
        }

        async fn perform(effect: CounterEffect, delay: Arc<Duration>) -> Option<CounterEvent> {
            match effect {
                CounterEffect::Persist(v) => {
                    tokio::time::sleep(*delay).await;
                    Some(CounterEvent::Saved(v))
                }
                CounterEffect::Panic | CounterEffect::PanicInline => panic!("boom"),
            }
        }

        fn perform_inline(effect: CounterEffect, _delay: &Duration) -> Option<CounterEffect> {
            match effect {
                CounterEffect::PanicInline => panic!("inline boom"),
                other => Some(other),
            }
        }

        // Records which effect was lost: 0 spawned panic, 1 inline panic, 100+v a save.
        fn on_effect_aborted(&mut self, effect: CounterEffect, _reason: String) -> Vec<CounterEffect> {
            self.saved = Some(match effect {
                CounterEffect::Panic => 0,
                CounterEffect::PanicInline => 1,
                CounterEffect::Persist(v) => 100 + v,
            });
            vec![]
        }
    }

    fn counter() -> Counter {
        Counter { value: 0, saved: None }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_dispatch_returns_view_after_transition() {
        let (actor, client) = ComponentActor::new(8, counter());
        let handle = tokio::spawn(actor.run(Duration::from_millis(1)));

        assert_eq!(client.dispatch(CounterEvent::Increment).await.unwrap(), (1, None));
        assert_eq!(client.dispatch(CounterEvent::Increment).await.unwrap(), (2, None));
        assert_eq!(client.render().await.unwrap(), (2, None));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_loop_stays_responsive_while_effect_pending() {
        let (actor, client) = ComponentActor::new(8, counter());
        let handle = tokio::spawn(actor.run(Duration::from_millis(50)));

        assert_eq!(client.dispatch(CounterEvent::Save).await.unwrap(), (0, None));
        // The save is still sleeping; events keep flowing.
        assert_eq!(client.dispatch(CounterEvent::Increment).await.unwrap(), (1, None));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(client.render().await.unwrap(), (1, Some(0)));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_panicked_effect_reaches_abort_hook() {
        let (actor, client) = ComponentActor::new(8, counter());
        let handle = tokio::spawn(actor.run(Duration::ZERO));

        client.dispatch(CounterEvent::Increment).await.unwrap();
        client.dispatch(CounterEvent::Explode).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(client.render().await.unwrap(), (1, Some(0)));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_abort_is_reported_for_the_effect_that_failed() {
        let (actor, client) = ComponentActor::new(8, counter());
        let handle = tokio::spawn(actor.run(Duration::from_millis(60)));

        client.dispatch(CounterEvent::Increment).await.unwrap();
        client.dispatch(CounterEvent::Save).await.unwrap();
        client.dispatch(CounterEvent::Explode).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        // The pending save is untouched by the unrelated panic.
        assert_eq!(client.render().await.unwrap(), (1, Some(0)));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(client.render().await.unwrap(), (1, Some(1)));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_inline_panic_keeps_actor_alive() {
        let (actor, client) = ComponentActor::new(8, counter());
        let handle = tokio::spawn(actor.run(Duration::ZERO));

        assert_eq!(client.dispatch(CounterEvent::ExplodeInline).await.unwrap(), (0, Some(1)));
        assert_eq!(client.dispatch(CounterEvent::Increment).await.unwrap(), (1, Some(1)));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_drains_in_flight_effects() {
        let (actor, client) = ComponentActor::new(8, counter());
        let handle = tokio::spawn(actor.run(Duration::from_millis(20)));

        client.dispatch(CounterEvent::Save).await.unwrap();
        drop(client);

        // Returns only after the pending save settled.
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("actor did not shut down")
            .unwrap();
    }
}
