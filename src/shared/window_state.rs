//! Shared window state between the window manager, the taskbar and the renderer
//!
//! Plain value types only: geometry, state flags and the viewport the desktop
//! is laid out in.

use serde::{Deserialize, Serialize};

/// Window geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Pointer position in desktop coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window flags
///
/// Maximized is an overlay on any open state; it never changes `minimized`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFlags {
    pub maximized: bool,
    pub minimized: bool,
}

/// Visible desktop area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Height reserved at the bottom for the taskbar
    pub taskbar_height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, taskbar_height: u32) -> Self {
        Self {
            width,
            height,
            taskbar_height,
        }
    }

    /// Area available to windows (everything above the taskbar)
    pub fn work_area(&self) -> Geometry {
        Geometry::new(
            0,
            0,
            self.width,
            self.height.saturating_sub(self.taskbar_height),
        )
    }

    /// Is the point on the taskbar strip?
    pub fn in_taskbar(&self, point: Point) -> bool {
        let top = self.height.saturating_sub(self.taskbar_height) as i32;
        point.y >= top && point.y < self.height as i32 && point.x >= 0 && point.x < self.width as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_area_excludes_taskbar() {
        let viewport = Viewport::new(1280, 800, 30);
        assert_eq!(viewport.work_area(), Geometry::new(0, 0, 1280, 770));
    }

    #[test]
    fn taskbar_strip_hit_test() {
        let viewport = Viewport::new(1280, 800, 30);
        assert!(viewport.in_taskbar(Point::new(10, 790)));
        assert!(viewport.in_taskbar(Point::new(10, 770)));
        assert!(!viewport.in_taskbar(Point::new(10, 769)));
        assert!(!viewport.in_taskbar(Point::new(10, 800)));
    }

    #[test]
    fn geometry_contains_is_half_open() {
        let geom = Geometry::new(10, 20, 100, 50);
        assert!(geom.contains(Point::new(10, 20)));
        assert!(geom.contains(Point::new(109, 69)));
        assert!(!geom.contains(Point::new(110, 20)));
        assert!(!geom.contains(Point::new(10, 70)));
    }
}
