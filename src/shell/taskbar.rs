//! Taskbar (bottom bar) implementation
//!
//! One entry per open window, laid out left to right after the start button.
//! The entry list is kept in sync by the window manager; clicks on an entry
//! are resolved here into a window state transition.

use tracing::debug;

use crate::config::TaskbarConfig;
use crate::shell::render;
use crate::wm::client::{WindowId, WindowRecord};
use crate::wm::kind::WindowKind;

/// Taskbar entry bound to one open window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window: WindowId,
    pub kind: WindowKind,
    pub title: String,
    pub icon: String,
    pub active: bool,
}

/// What a click on an entry does to its window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarAction {
    /// Window was minimized: restore (and focus) it
    Restore,
    /// Window was active: minimize it
    Minimize,
    /// Window was open but behind another: bring it to front
    Focus,
}

/// Taskbar state
#[derive(Debug, Clone)]
pub struct TaskbarSync {
    entries: Vec<TaskbarEntry>,
    start_button_width: u32,
    entry_width: u32,
}

impl TaskbarSync {
    pub fn new(config: &TaskbarConfig) -> Self {
        Self {
            entries: Vec::new(),
            start_button_width: config.start_button_width,
            entry_width: config.entry_width,
        }
    }

    /// Create the entry for a newly opened window (styled active)
    pub fn add(&mut self, record: &WindowRecord) {
        if self.entry(record.id).is_some() {
            return;
        }
        for entry in &mut self.entries {
            entry.active = false;
        }
        self.entries.push(TaskbarEntry {
            window: record.id,
            kind: record.kind.clone(),
            title: record.title().to_string(),
            icon: record.chrome.icon.clone(),
            active: true,
        });
        debug!("Taskbar entry added for window {}", record.id);
    }

    /// Delete the entry bound to `window`; no-op if there is none
    pub fn remove(&mut self, window: WindowId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.window != window);
        before != self.entries.len()
    }

    /// Style exactly the entry of `active` (or none) as active
    pub fn reflect_active(&mut self, active: Option<WindowId>) {
        for entry in &mut self.entries {
            entry.active = Some(entry.window) == active;
        }
    }

    /// Resolve a click on the entry of `record`
    pub fn click_action(record: &WindowRecord) -> TaskbarAction {
        if record.flags.minimized {
            TaskbarAction::Restore
        } else if record.active {
            TaskbarAction::Minimize
        } else {
            TaskbarAction::Focus
        }
    }

    pub fn entry(&self, window: WindowId) -> Option<&TaskbarEntry> {
        self.entries.iter().find(|e| e.window == window)
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn active_entry(&self) -> Option<&TaskbarEntry> {
        self.entries.iter().find(|e| e.active)
    }

    /// Entry under a click at horizontal position `x` on the taskbar strip
    pub fn entry_at(&self, x: i32) -> Option<WindowId> {
        self.entries.iter().enumerate().find_map(|(i, entry)| {
            let entry_x = (self.start_button_width + i as u32 * self.entry_width) as f32;
            render::point_in_rect(x as f32, 0.0, entry_x, 0.0, self.entry_width as f32, 1.0)
                .then_some(entry.window)
        })
    }

    /// Is `x` on the start button?
    pub fn on_start_button(&self, x: i32) -> bool {
        x >= 0 && (x as u32) < self.start_button_width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TaskbarSync {
    fn default() -> Self {
        Self::new(&TaskbarConfig::default())
    }
}
