//! Shell UI Module
//!
//! Desktop shell elements around the windows: taskbar, start menu, clock,
//! desktop icon selection and the shutdown screen.

pub mod clock;
pub mod render;
pub mod start_menu;
pub mod taskbar;

use tracing::info;

use crate::config::Config;

/// Text shown once the desktop has shut down
pub const SHUTDOWN_MESSAGE: [&str; 3] = [
    "Windows is shutting down...",
    "Thank you for visiting my portfolio!",
    "Refresh the page to restart",
];

/// Shell state
#[derive(Debug, Clone)]
pub struct Shell {
    pub start_menu: start_menu::StartMenu,
    pub avatar: start_menu::Avatar,
    pub clock: clock::Clock,

    /// Currently selected desktop icon
    selected_icon: Option<String>,

    /// Desktop, taskbar and start menu hidden for good
    shut_down: bool,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            start_menu: start_menu::StartMenu::new(),
            avatar: start_menu::Avatar::new(),
            clock: clock::Clock::new(&config.clock),
            selected_icon: None,
            shut_down: false,
        }
    }

    /// Select exactly one desktop icon
    pub fn select_icon(&mut self, icon: &str) {
        self.selected_icon = Some(icon.to_string());
    }

    /// Click on empty desktop: deselect icons, close the start menu
    pub fn desktop_click(&mut self) {
        self.selected_icon = None;
        self.start_menu.hide();
    }

    pub fn selected_icon(&self) -> Option<&str> {
        self.selected_icon.as_deref()
    }

    /// Hide the desktop, taskbar and start menu
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        info!("Desktop shutting down");
        self.start_menu.hide();
        self.selected_icon = None;
        self.shut_down = true;
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_click_clears_selection_and_menu() {
        let mut shell = Shell::new(&Config::default());
        shell.select_icon("about");
        shell.select_icon("projects");
        shell.start_menu.toggle();
        assert_eq!(shell.selected_icon(), Some("projects"));

        shell.desktop_click();
        assert_eq!(shell.selected_icon(), None);
        assert!(!shell.start_menu.visible);
    }

    #[test]
    fn shutdown_hides_menu() {
        let mut shell = Shell::new(&Config::default());
        shell.start_menu.toggle();
        shell.shutdown();
        assert!(shell.is_shut_down());
        assert!(!shell.start_menu.visible);
    }
}
