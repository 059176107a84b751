//! Chrome Flags
//!
//! Bitfield flags controlling which parts of a window's chrome are shown.

use bitflags::bitflags;

bitflags! {
    /// Per-kind chrome visibility flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ChromeFlags: u32 {
        /// Hide the menu bar (File / Edit / View ...)
        const HIDE_MENUBAR        = 1 << 0;
        /// Hide the explorer toolbar
        const HIDE_TOOLBAR        = 1 << 1;
        /// Content fills the frame edge to edge, black background, no scroll
        const NO_PADDING          = 1 << 2;
        /// Content fills the frame edge to edge, explorer background kept
        const NO_PADDING_EXPLORER = 1 << 3;
    }
}

impl ChromeFlags {
    pub fn shows_menubar(self) -> bool {
        !self.contains(Self::HIDE_MENUBAR)
    }

    pub fn shows_toolbar(self) -> bool {
        !self.contains(Self::HIDE_TOOLBAR)
    }

    /// Content area padding is stripped
    pub fn strips_padding(self) -> bool {
        self.intersects(Self::NO_PADDING | Self::NO_PADDING_EXPLORER)
    }
}
