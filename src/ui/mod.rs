//! UI module - game over and victory banners.

mod banners;
mod plugin;

pub use banners::{GameOverBanner, VictoryBanner};
pub use plugin::UiPlugin;
