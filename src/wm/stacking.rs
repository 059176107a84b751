//! Stacking Module
//!
//! Manages window z-order and the active window marker. The counter only
//! ever grows, so the most recently raised window is always on top and no
//! two windows share a z-index.

use tracing::debug;

use crate::shared::Point;
use crate::wm::client::WindowId;
use crate::wm::registry::WindowRegistry;

/// Z-order manager
#[derive(Debug, Clone)]
pub struct ZOrderManager {
    /// Last z-index handed out
    counter: u32,

    /// Currently active window
    active: Option<WindowId>,
}

impl ZOrderManager {
    /// Create a z-order manager; the first raised window gets `base + 1`
    pub fn new(base: u32) -> Self {
        Self {
            counter: base,
            active: None,
        }
    }

    /// Raise a window to the top and make it the only active window
    ///
    /// Returns the new z-index, or `None` if the window is not registered.
    pub fn bring_to_front(&mut self, registry: &mut WindowRegistry, window: WindowId) -> Option<u32> {
        if !registry.contains(window) {
            debug!("bring_to_front: window {} not found", window);
            return None;
        }

        self.counter += 1;
        let z_index = self.counter;

        for record in registry.iter_mut() {
            if record.id == window {
                record.z_index = z_index;
                record.active = true;
            } else {
                record.active = false;
            }
        }
        self.active = Some(window);

        debug!("Raised window {} to z-index {}", window, z_index);
        Some(z_index)
    }

    /// Drop the active marker (no window active)
    pub fn clear_active(&mut self, registry: &mut WindowRegistry) {
        for record in registry.iter_mut() {
            record.active = false;
        }
        self.active = None;
    }

    /// Forget a window that is going away
    pub fn remove_window(&mut self, window: WindowId) {
        if self.active == Some(window) {
            self.active = None;
        }
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    /// Top-most visible window containing `point`
    pub fn topmost_at(&self, registry: &WindowRegistry, point: Point) -> Option<WindowId> {
        registry
            .iter()
            .filter(|w| w.visible() && w.geometry.contains(point))
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Ids from bottom to top
    pub fn stacking_order(&self, registry: &WindowRegistry) -> Vec<WindowId> {
        let mut windows: Vec<_> = registry.iter().map(|w| (w.z_index, w.id)).collect();
        windows.sort_unstable();
        windows.into_iter().map(|(_, id)| id).collect()
    }
}

impl Default for ZOrderManager {
    fn default() -> Self {
        Self::new(100)
    }
}
