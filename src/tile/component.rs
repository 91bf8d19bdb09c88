//! The product tile state machine and its [`Component`] implementation.
//!
//! The tile keeps one piece of local state, `is_adding`. Everything else is read from the
//! caller's [`ProductTileProps`] and the shared [`TileConfig`].
//!
//! # Transitions
//!
//! | Event | Guard | Next `is_adding` | Effects |
//! |-------|-------|------------------|---------|
//! | `AddToCartRequested` | sold out | unchanged | sold-out failure notification |
//! | `AddToCartRequested` | add in flight | `true` | none |
//! | `AddToCartRequested` | otherwise | `true` | `AddItem { variant_id, 1 }` |
//! | `AddSucceeded` | | `false` | success notification |
//! | `AddFailed` | | `false` | generic failure notification |

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info};

use super::actions::{TileEffect, TileEvent};
use crate::clients::{
    CartError, CartService, CurrencyFormatter, LinkResolver, Notification, Notifier, PathResolver,
    PriceFormatter,
};
use crate::framework::Component;
use crate::model::{ButtonState, ImageView, ProductTileProps, TileConfig, TileView};
use crate::tile::TileError;

/// Quantity sent with every add-to-cart request.
pub const ADD_QUANTITY: u32 = 1;

/// Collaborators the tile's effects run against.
#[derive(Clone)]
pub struct TileContext {
    pub cart: Arc<dyn CartService>,
    pub notifier: Arc<dyn Notifier>,
    /// `None` waits on the cart indefinitely.
    pub add_timeout: Option<Duration>,
}

impl TileContext {
    pub fn new(cart: Arc<dyn CartService>, notifier: Arc<dyn Notifier>, config: &TileConfig) -> Self {
        Self {
            cart,
            notifier,
            add_timeout: config.add_timeout,
        }
    }
}

/// Pure rendering collaborators: price text and detail links.
#[derive(Clone)]
pub struct TilePresentation {
    pub formatter: Arc<dyn PriceFormatter>,
    pub links: Arc<dyn LinkResolver>,
}

impl Default for TilePresentation {
    fn default() -> Self {
        Self {
            formatter: Arc::new(CurrencyFormatter::default()),
            links: Arc::new(PathResolver::default()),
        }
    }
}

/// A product tile: the caller's props plus the in-flight flag.
pub struct ProductTile {
    props: ProductTileProps,
    config: Arc<TileConfig>,
    formatter: Arc<dyn PriceFormatter>,
    links: Arc<dyn LinkResolver>,
    is_adding: bool,
}

impl ProductTile {
    /// Creates an idle tile with the default price formatter and link resolver.
    ///
    /// # Errors
    /// [`TileError::InvalidProps`] when the props fail validation.
    pub fn new(props: ProductTileProps, config: Arc<TileConfig>) -> Result<Self, TileError> {
        props.validate()?;
        Ok(Self {
            props,
            config,
            formatter: Arc::new(CurrencyFormatter::default()),
            links: Arc::new(PathResolver::default()),
            is_adding: false,
        })
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn PriceFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_link_resolver(mut self, links: Arc<dyn LinkResolver>) -> Self {
        self.links = links;
        self
    }

    pub fn with_presentation(self, presentation: TilePresentation) -> Self {
        self.with_formatter(presentation.formatter)
            .with_link_resolver(presentation.links)
    }

    pub fn props(&self) -> &ProductTileProps {
        &self.props
    }

    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    pub fn is_sold_out(&self) -> bool {
        self.props.is_sold_out()
    }

    /// Sold out wins over busy.
    pub fn button(&self) -> ButtonState {
        if self.is_sold_out() {
            ButtonState::SoldOut(self.config.sold_out_label.clone())
        } else if self.is_adding {
            ButtonState::Busy(self.config.busy_label.clone())
        } else {
            ButtonState::Enabled(self.config.add_label.clone())
        }
    }

    fn request_add(&mut self) -> Vec<TileEffect> {
        if self.is_sold_out() {
            debug!(variant_id = %self.props.variant_id, "Add rejected: sold out");
            return vec![TileEffect::Notify(Notification::failure(
                self.config.sold_out_message.as_str(),
            ))];
        }
        if self.is_adding {
            debug!(variant_id = %self.props.variant_id, "Add ignored: already in flight");
            return Vec::new();
        }
        self.is_adding = true;
        vec![TileEffect::AddItem {
            variant_id: self.props.variant_id.clone(),
            quantity: ADD_QUANTITY,
        }]
    }

    fn settle_failure(&mut self, reason: &dyn std::fmt::Display) -> Vec<TileEffect> {
        self.is_adding = false;
        error!(variant_id = %self.props.variant_id, error = %reason, "Failed to add item to cart");
        vec![TileEffect::Notify(Notification::failure(
            self.config.failure_message.as_str(),
        ))]
    }
}

#[async_trait]
impl Component for ProductTile {
    type Event = TileEvent;
    type Effect = TileEffect;
    type View = TileView;
    type Context = TileContext;

    fn update(&mut self, event: TileEvent) -> Vec<TileEffect> {
        match event {
            TileEvent::AddToCartRequested => self.request_add(),
            TileEvent::AddSucceeded => {
                self.is_adding = false;
                info!(variant_id = %self.props.variant_id, title = %self.props.title, "Added to cart");
                vec![TileEffect::Notify(Notification::success(
                    self.config.success_message(&self.props.title),
                ))]
            }
            TileEvent::AddFailed(e) => self.settle_failure(&e),
        }
    }

    fn view(&self) -> TileView {
        TileView {
            product_id: self.props.id.clone(),
            title: self.props.title.clone(),
            // `+ 0.0` turns -0.0 into 0.0.
            price: self.formatter.format(self.props.price + 0.0),
            image: ImageView {
                src: self.props.image.clone(),
                alt: self.props.title.clone(),
                width: self.config.image_width,
                height: self.config.image_height,
            },
            detail_href: self.links.detail_href(&self.props.slug),
            sold_out_badge: self.is_sold_out(),
            button: self.button(),
        }
    }

    async fn perform(effect: TileEffect, ctx: Arc<TileContext>) -> Option<TileEvent> {
        match effect {
            TileEffect::AddItem { variant_id, quantity } => {
                let call = ctx.cart.add_item(&variant_id, quantity);
                let outcome = match ctx.add_timeout {
                    Some(limit) => tokio::time::timeout(limit, call)
                        .await
                        .unwrap_or(Err(CartError::TimedOut(limit))),
                    None => call.await,
                };
                Some(match outcome {
                    Ok(()) => TileEvent::AddSucceeded,
                    Err(e) => TileEvent::AddFailed(e),
                })
            }
            TileEffect::Notify(notification) => {
                ctx.notifier.notify(notification);
                None
            }
        }
    }

    /// Notifications are delivered on the actor's task, in transition order.
    fn perform_inline(effect: TileEffect, ctx: &TileContext) -> Option<TileEffect> {
        match effect {
            TileEffect::Notify(notification) => {
                ctx.notifier.notify(notification);
                None
            }
            add @ TileEffect::AddItem { .. } => Some(add),
        }
    }

    /// Only a lost cart call clears the in-flight flag; a failed notification leaves it alone.
    fn on_effect_aborted(&mut self, effect: TileEffect, reason: String) -> Vec<TileEffect> {
        match effect {
            TileEffect::AddItem { .. } if self.is_adding => self.settle_failure(&reason),
            _ => Vec::new(),
        }
    }
}
