use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::window_state::{Geometry, Viewport, WindowFlags};
use crate::wm::decorations::Chrome;
use crate::wm::kind::WindowKind;

/// Handle of one open window instance
///
/// Never reused within a session: closing a window and opening the same kind
/// again yields a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Window record
/// Represents one open window managed by the WM
#[derive(Debug)]
pub struct WindowRecord {
    pub id: WindowId,

    /// Kind the window was opened as (unique among open windows)
    pub kind: WindowKind,

    /// Owned chrome (title bar, icon, controls)
    pub chrome: Chrome,

    /// Last known geometry (the maximized area while maximized)
    pub geometry: Geometry,

    /// Geometry to return to when un-maximizing
    pub restore_geometry: Option<Geometry>,

    /// Window state flags (maximized, minimized)
    pub flags: WindowFlags,

    /// Stacking position; higher is closer to the viewer
    pub z_index: u32,

    /// Is this the active (focused) window?
    pub active: bool,
}

impl WindowRecord {
    pub fn new(id: WindowId, kind: WindowKind, chrome: Chrome, geometry: Geometry) -> Self {
        Self {
            id,
            kind,
            chrome,
            geometry,
            restore_geometry: None,
            flags: WindowFlags::default(),
            z_index: 0,
            active: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.chrome.title
    }

    /// Visible windows take part in hit testing; minimized ones do not
    pub fn visible(&self) -> bool {
        !self.flags.minimized
    }

    /// Enter the maximized overlay, filling the viewport's work area
    pub fn maximize(&mut self, viewport: &Viewport) {
        if self.flags.maximized {
            return;
        }
        self.restore_geometry = Some(self.geometry);
        self.geometry = viewport.work_area();
        self.flags.maximized = true;
    }

    /// Leave the maximized overlay, returning to the pre-maximize geometry
    pub fn unmaximize(&mut self) {
        if !self.flags.maximized {
            return;
        }
        if let Some(restore) = self.restore_geometry.take() {
            self.geometry = restore;
        }
        self.flags.maximized = false;
    }
}
