//! Pure data structures: the caller's view model, the rendered view, and tile settings.

pub mod config;
pub mod props;
pub mod view;

pub use config::*;
pub use props::*;
pub use view::*;
