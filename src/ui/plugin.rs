//! UI plugin - end-of-run banners.

use bevy::prelude::*;

use super::banners;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        banners::setup_banner_systems(app);
    }
}
