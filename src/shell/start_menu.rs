//! Start menu implementation
//!
//! The menu itself only opens and closes; items carry a window type
//! identifier that the desktop opens. The user avatar at the top of the menu
//! cycles through the bundled pictures when clicked.

use tracing::debug;

/// Number of bundled avatar pictures (`user1` .. `user17`)
const AVATAR_COUNT: u8 = 17;

/// Start menu state
#[derive(Debug, Clone, Default)]
pub struct StartMenu {
    /// Is the menu visible?
    pub visible: bool,
}

impl StartMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start button pressed
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        debug!("Start menu {}", if self.visible { "opened" } else { "closed" });
    }

    /// Hide the menu (click elsewhere, item chosen)
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// User avatar picture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    index: u8,
}

impl Avatar {
    pub fn new() -> Self {
        Self { index: 1 }
    }

    /// Advance to the next picture, wrapping after the last
    pub fn cycle(&mut self) {
        self.index = (self.index % AVATAR_COUNT) + 1;
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// Image path; pictures 9 and 16 ship with an upper-case extension
    pub fn image_path(&self) -> String {
        let extension = match self.index {
            9 | 16 => "JPG",
            _ => "jpg",
        };
        format!("assets/icons/user{}.{}", self.index, extension)
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}
