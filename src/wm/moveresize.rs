//! MoveResize Module
//!
//! Interactive window moving by the title bar. The window keeps the pointer
//! offset it was grabbed at and is clamped so its box stays on screen above
//! the taskbar.

use tracing::debug;

use crate::shared::{Geometry, Point, Viewport};
use crate::wm::client::WindowId;

/// Drag operation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Window being moved
    pub window: WindowId,

    /// Pointer position relative to the window origin at grab time
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Drag controller
#[derive(Debug, Default)]
pub struct DragController {
    /// Current operation state
    state: Option<DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving `window` from a title bar press
    ///
    /// Maximized windows cannot be dragged; returns whether a drag started.
    pub fn begin(&mut self, window: WindowId, pointer: Point, geometry: &Geometry, maximized: bool) -> bool {
        if maximized {
            debug!("Window {} is maximized, ignoring drag", window);
            return false;
        }

        self.state = Some(DragState {
            window,
            offset_x: pointer.x - geometry.x,
            offset_y: pointer.y - geometry.y,
        });
        debug!("Starting move operation for window {}", window);
        true
    }

    /// New position for the dragged window after the pointer moved
    ///
    /// `size` is the dragged window's current size. Returns `None` when no
    /// drag is in progress.
    pub fn motion(&self, pointer: Point, size: (u32, u32), viewport: &Viewport) -> Option<(WindowId, Point)> {
        let state = self.state?;
        let position = clamp_to_viewport(
            Point::new(pointer.x - state.offset_x, pointer.y - state.offset_y),
            size,
            viewport,
        );
        Some((state.window, position))
    }

    /// Finish the drag operation
    pub fn finish(&mut self) -> Option<WindowId> {
        let window = self.state.take().map(|s| s.window);
        if let Some(window) = window {
            debug!("Finished move operation for window {}", window);
        }
        window
    }

    /// Abort the drag if it targets `window` (window closed or maximized)
    pub fn cancel_for(&mut self, window: WindowId) {
        if self.dragging() == Some(window) {
            self.state = None;
        }
    }

    /// Window currently being dragged
    pub fn dragging(&self) -> Option<WindowId> {
        self.state.map(|s| s.window)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }
}

/// Clamp a window origin so the box fits in `[0, width] x [0, height - taskbar]`
///
/// A window larger than the area is pinned to the top-left corner.
pub fn clamp_to_viewport(origin: Point, size: (u32, u32), viewport: &Viewport) -> Point {
    let work_area = viewport.work_area();
    let max_x = work_area.width as i32 - size.0 as i32;
    let max_y = work_area.height as i32 - size.1 as i32;

    Point::new(origin.x.min(max_x).max(0), origin.y.min(max_y).max(0))
}
