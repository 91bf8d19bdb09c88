use std::time::Duration;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Labels, messages and runtime settings for product tiles.
///
/// Every field has a default, so a partial document (or `{}`) is a valid config.
/// `addTimeoutMs: null` disables the timeout and waits on the cart indefinitely;
/// `addTimeoutMs: 0` is rejected, since it would fail every add.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileConfig {
    pub add_label: String,
    pub busy_label: String,
    pub sold_out_label: String,
    pub sold_out_message: String,
    pub failure_message: String,
    /// Success message; `{title}` is replaced by the product title.
    pub success_template: String,
    #[serde(rename = "addTimeoutMs", deserialize_with = "deserialize_timeout")]
    pub add_timeout: Option<Duration>,
    pub image_width: u32,
    pub image_height: u32,
    /// Mailbox size of each tile actor.
    pub buffer_size: usize,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            add_label: "Add to Cart".into(),
            busy_label: "Adding...".into(),
            sold_out_label: "Sold out".into(),
            sold_out_message: "This item is sold out".into(),
            failure_message: "Failed to add to cart. Please try again later.".into(),
            success_template: "{title} has been added to cart!".into(),
            add_timeout: Some(Duration::from_secs(15)),
            image_width: 300,
            image_height: 300,
            buffer_size: 32,
        }
    }
}

impl TileConfig {
    pub fn success_message(&self, title: &str) -> String {
        self.success_template.replace("{title}", title)
    }

    pub fn with_add_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.add_timeout = timeout;
        self
    }
}

fn deserialize_timeout<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<u64>::deserialize(deserializer)? {
        Some(0) => Err(D::Error::custom(
            "addTimeoutMs must be positive; use null for no timeout",
        )),
        millis => Ok(millis.map(Duration::from_millis)),
    }
}
