//! Placement Module
//!
//! Initial window placement. New windows cascade down and to the right from a
//! fixed origin, one step per window already open, so they never fully
//! overlap.

use tracing::debug;

use crate::config::PlacementConfig;
use crate::shared::Geometry;

/// Placement manager
#[derive(Debug, Clone)]
pub struct PlacementManager {
    origin_x: i32,
    origin_y: i32,
    cascade_step: i32,
    default_width: u32,
    default_height: u32,
}

impl PlacementManager {
    pub fn new(config: &PlacementConfig) -> Self {
        Self {
            origin_x: config.origin_x,
            origin_y: config.origin_y,
            cascade_step: config.cascade_step,
            default_width: config.default_width,
            default_height: config.default_height,
        }
    }

    /// Place a window given how many windows are currently open
    ///
    /// `size` of `None` uses the configured default size.
    pub fn place_window(&self, open_count: usize, size: Option<(u32, u32)>) -> Geometry {
        let offset = self.cascade_step.saturating_mul(open_count as i32);
        let (width, height) = size.unwrap_or((self.default_width, self.default_height));
        let geometry = Geometry::new(self.origin_x + offset, self.origin_y + offset, width, height);
        debug!("Placing window #{} at {:?}", open_count + 1, geometry);
        geometry
    }
}

impl Default for PlacementManager {
    fn default() -> Self {
        Self::new(&PlacementConfig::default())
    }
}
