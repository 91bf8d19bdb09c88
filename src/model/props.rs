use serde::{Deserialize, Serialize};

use crate::tile::TileError;

/// The view model a caller hands to a product tile.
///
/// The component reads it and never mutates it. The serialized form uses the storefront's
/// camelCase field names (`variantId`, `availableForSale`).
///
/// # Defaults
/// - `available_for_sale`: `true` when absent
/// - `stock`: `None` when absent, meaning stock is not tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTileProps {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub slug: String,
    pub variant_id: String,
    #[serde(default = "default_available_for_sale")]
    pub available_for_sale: bool,
    #[serde(default)]
    pub stock: Option<i64>,
}

fn default_available_for_sale() -> bool {
    true
}

impl ProductTileProps {
    /// Creates props for a purchasable item with untracked stock.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        slug: impl Into<String>,
        variant_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
            slug: slug.into(),
            variant_id: variant_id.into(),
            available_for_sale: true,
            stock: None,
        }
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_available_for_sale(mut self, available: bool) -> Self {
        self.available_for_sale = available;
        self
    }

    /// True when the item cannot be bought: not available for sale, or tracked stock at or below zero.
    pub fn is_sold_out(&self) -> bool {
        !self.available_for_sale || matches!(self.stock, Some(n) if n <= 0)
    }

    /// Checks the invariants the tile relies on.
    ///
    /// # Errors
    /// [`TileError::InvalidProps`] when `id` or `variant_id` is empty, or `price` is negative or not finite.
    pub fn validate(&self) -> Result<(), TileError> {
        if self.id.trim().is_empty() {
            return Err(TileError::InvalidProps("id must not be empty".into()));
        }
        if self.variant_id.trim().is_empty() {
            return Err(TileError::InvalidProps(format!(
                "variantId must not be empty (product {})",
                self.id
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(TileError::InvalidProps(format!(
                "price must be a non-negative number, got {} (product {})",
                self.price, self.id
            )));
        }
        Ok(())
    }
}
