use serde::Serialize;

/// The add-to-cart button, derived on every render.
///
/// Only [`ButtonState::Enabled`] accepts clicks. There is no "added" state; confirmation is
/// carried by the notification alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "label", rename_all = "camelCase")]
pub enum ButtonState {
    Enabled(String),
    SoldOut(String),
    Busy(String),
}

impl ButtonState {
    pub fn label(&self) -> &str {
        match self {
            ButtonState::Enabled(label) | ButtonState::SoldOut(label) | ButtonState::Busy(label) => label,
        }
    }

    pub fn is_disabled(&self) -> bool {
        !matches!(self, ButtonState::Enabled(_))
    }
}

/// Image passed through to the image collaborator, with its sizing hints untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// Everything a presentation layer needs to draw one tile.
///
/// Both the image and the title link to `detail_href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileView {
    pub product_id: String,
    pub title: String,
    pub price: String,
    pub image: ImageView,
    pub detail_href: String,
    pub sold_out_badge: bool,
    pub button: ButtonState,
}
