//! Window decorations (titlebars, buttons) for xpdesk
//!
//! The chrome is the owned UI handle of a window record: title, icon,
//! visibility flags and the title bar layout used for hit testing.

use serde::{Deserialize, Serialize};

use crate::config::WindowDecorationConfig;
use crate::shared::{Geometry, Point};
use crate::wm::client_flags::ChromeFlags;

/// Control button in the title bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonType {
    Close,
    Maximize,
    Minimize,
}

/// Result of hit testing a point against a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHit {
    /// One of the control buttons
    Button(ButtonType),
    /// Title bar outside the control buttons (drag handle)
    Titlebar,
    /// Window body (menu bar, toolbar, content)
    Body,
}

/// Window chrome built by the factory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub title: String,
    pub icon: String,
    pub flags: ChromeFlags,
    titlebar_height: u16,
    button_size: u16,
    button_padding: u16,
}

impl Chrome {
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        flags: ChromeFlags,
        decorations: &WindowDecorationConfig,
    ) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            flags,
            titlebar_height: decorations.titlebar_height,
            button_size: decorations.button_size,
            button_padding: decorations.button_padding,
        }
    }

    /// Title bar rectangle for a window at `frame`
    pub fn titlebar_rect(&self, frame: &Geometry) -> Geometry {
        Geometry::new(frame.x, frame.y, frame.width, self.titlebar_height as u32)
    }

    /// Control button rectangle, right-aligned: close, maximize, minimize
    pub fn button_rect(&self, frame: &Geometry, button: ButtonType) -> Geometry {
        let slot = match button {
            ButtonType::Close => 1,
            ButtonType::Maximize => 2,
            ButtonType::Minimize => 3,
        };
        let size = self.button_size as i32;
        let pad = self.button_padding as i32;
        // Use i32 for calculations to avoid underflow on small windows
        let x = frame.right() - slot * (size + pad);
        let y = frame.y + (self.titlebar_height as i32 - size) / 2;
        Geometry::new(x, y, self.button_size as u32, self.button_size as u32)
    }

    /// Classify a point inside `frame`; `None` if outside the window
    pub fn hit_test(&self, frame: &Geometry, point: Point) -> Option<FrameHit> {
        if !frame.contains(point) {
            return None;
        }
        if !self.titlebar_rect(frame).contains(point) {
            return Some(FrameHit::Body);
        }
        let button = [ButtonType::Close, ButtonType::Maximize, ButtonType::Minimize]
            .into_iter()
            .find(|&b| self.button_rect(frame, b).contains(point));
        Some(button.map_or(FrameHit::Titlebar, FrameHit::Button))
    }
}
