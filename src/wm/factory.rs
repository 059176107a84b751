//! Window Factory
//!
//! Turns a window kind into a window record: looks up the static per-kind
//! configuration, builds the chrome, places the window and reports when the
//! chrome is ready for the kind's widget to take over.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{WindowDecorationConfig, WindowManagerConfig};
use crate::wm::client::{WindowId, WindowRecord};
use crate::wm::client_flags::ChromeFlags;
use crate::wm::decorations::Chrome;
use crate::wm::kind::WindowKind;
use crate::wm::placement::PlacementManager;

/// Content shown inside a window's frame (rendered by the page, not the WM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentProducer {
    SystemProperties,
    ProjectExplorer,
    SkillsExplorer,
    Notepad,
    GameFrame,
    AudioPlayer,
}

/// Widget setup handed off once a window's chrome exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetInit {
    AboutTabs,
    ProjectTooltips,
    SkillsTabs,
    ContactNotepad,
    GameFrame,
    AudioPlayer,
}

impl WidgetInit {
    /// Widgets are chosen by the kind a window was opened as, not by its
    /// configuration: an unknown kind borrows the About chrome but gets no
    /// widget.
    pub fn for_kind(kind: &WindowKind) -> Option<Self> {
        match kind {
            WindowKind::About => Some(Self::AboutTabs),
            WindowKind::Projects => Some(Self::ProjectTooltips),
            WindowKind::Skills => Some(Self::SkillsTabs),
            WindowKind::Contact => Some(Self::ContactNotepad),
            WindowKind::Pinball => Some(Self::GameFrame),
            WindowKind::Winamp => Some(Self::AudioPlayer),
            WindowKind::Unknown(_) => None,
        }
    }
}

/// Static, read-only configuration of one window kind
#[derive(Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub icon: &'static str,
    /// Initial size; `None` uses the placement default
    pub size: Option<(u32, u32)>,
    pub flags: ChromeFlags,
    pub content: ContentProducer,
}

static ABOUT: WindowConfig = WindowConfig {
    title: "About Me - System Properties",
    icon: "assets/icons/aboutme.ico",
    size: Some((520, 620)),
    flags: ChromeFlags::HIDE_MENUBAR.union(ChromeFlags::HIDE_TOOLBAR),
    content: ContentProducer::SystemProperties,
};

static PROJECTS: WindowConfig = WindowConfig {
    title: "My Projects",
    icon: "assets/icons/folder.ico",
    size: Some((850, 580)),
    flags: ChromeFlags::NO_PADDING_EXPLORER,
    content: ContentProducer::ProjectExplorer,
};

static SKILLS: WindowConfig = WindowConfig {
    title: "Skills & Technologies",
    icon: "assets/icons/folder.ico",
    size: Some((680, 520)),
    flags: ChromeFlags::NO_PADDING_EXPLORER,
    content: ContentProducer::SkillsExplorer,
};

static CONTACT: WindowConfig = WindowConfig {
    title: "Contact.txt - Notepad",
    icon: "assets/icons/notepad.ico",
    size: Some((680, 480)),
    flags: ChromeFlags::HIDE_TOOLBAR,
    content: ContentProducer::Notepad,
};

static PINBALL: WindowConfig = WindowConfig {
    title: "3D Pinball for Windows - Space Cadet",
    icon: "assets/icons/pinball.ico",
    // 640x480 game frame under the title bar
    size: Some((640, 510)),
    flags: ChromeFlags::HIDE_MENUBAR
        .union(ChromeFlags::HIDE_TOOLBAR)
        .union(ChromeFlags::NO_PADDING),
    content: ContentProducer::GameFrame,
};

static WINAMP: WindowConfig = WindowConfig {
    title: "Winamp",
    icon: "assets/icons/winamp.PNG",
    size: Some((0, 0)),
    flags: ChromeFlags::HIDE_MENUBAR
        .union(ChromeFlags::HIDE_TOOLBAR)
        .union(ChromeFlags::NO_PADDING),
    content: ContentProducer::AudioPlayer,
};

/// Signal that a window's chrome is attached and its widget may initialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeReady {
    pub window: WindowId,
    pub kind: WindowKind,
    pub widget: Option<WidgetInit>,
}

/// Window factory
#[derive(Debug, Clone)]
pub struct WindowFactory {
    placement: PlacementManager,
    decorations: WindowDecorationConfig,
}

impl WindowFactory {
    pub fn new(config: &WindowManagerConfig) -> Self {
        Self {
            placement: PlacementManager::new(&config.placement),
            decorations: config.decorations.clone(),
        }
    }

    /// Configuration table lookup
    pub fn config_for(kind: &WindowKind) -> &'static WindowConfig {
        match kind {
            WindowKind::About => &ABOUT,
            WindowKind::Projects => &PROJECTS,
            WindowKind::Skills => &SKILLS,
            WindowKind::Contact => &CONTACT,
            WindowKind::Pinball => &PINBALL,
            WindowKind::Winamp => &WINAMP,
            // Unrecognized kinds degrade to the About window
            WindowKind::Unknown(_) => &ABOUT,
        }
    }

    /// Build a new record for `kind`; `open_count` drives the cascade offset
    pub fn create(&self, id: WindowId, kind: WindowKind, open_count: usize) -> (WindowRecord, ChromeReady) {
        let config = Self::config_for(&kind);
        if !kind.is_known() {
            debug!("Unknown window type '{}', using default configuration", kind);
        }

        let chrome = Chrome::new(config.title, config.icon, config.flags, &self.decorations);
        let geometry = self.placement.place_window(open_count, config.size);
        let record = WindowRecord::new(id, kind.clone(), chrome, geometry);

        let ready = ChromeReady {
            window: id,
            widget: WidgetInit::for_kind(&kind),
            kind,
        };

        debug!("Created window {} ({}) at {:?}", id, record.title(), record.geometry);
        (record, ready)
    }
}

impl Default for WindowFactory {
    fn default() -> Self {
        Self::new(&WindowManagerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Geometry;

    #[test]
    fn builds_chrome_from_config() {
        let factory = WindowFactory::default();
        let (record, ready) = factory.create(WindowId(1), WindowKind::Contact, 0);

        assert_eq!(record.title(), "Contact.txt - Notepad");
        assert_eq!(record.chrome.icon, "assets/icons/notepad.ico");
        assert!(record.chrome.flags.shows_menubar());
        assert!(!record.chrome.flags.shows_toolbar());
        assert_eq!(record.geometry, Geometry::new(100, 80, 680, 480));
        assert_eq!(ready.widget, Some(WidgetInit::ContactNotepad));
    }

    #[test]
    fn unknown_kind_uses_about_config_without_widget() {
        let factory = WindowFactory::default();
        let kind = WindowKind::parse("recycle-bin");
        let (record, ready) = factory.create(WindowId(7), kind.clone(), 1);

        assert_eq!(record.kind, kind);
        assert_eq!(record.title(), "About Me - System Properties");
        assert_eq!(record.geometry, Geometry::new(130, 110, 520, 620));
        assert_eq!(ready.widget, None);
    }

    #[test]
    fn config_table_is_shared() {
        let a = WindowFactory::config_for(&WindowKind::Unknown("x".into()));
        let b = WindowFactory::config_for(&WindowKind::About);
        assert!(std::ptr::eq(a, b));
        assert!(WindowFactory::config_for(&WindowKind::Winamp).flags.strips_padding());
    }
}
