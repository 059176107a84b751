//! Window Manager Module
//!
//! Creates, tracks, layers, focuses, minimizes, maximizes, restores and
//! closes windows, and keeps the taskbar in sync with that state.
//!
//! Every transition is a plain state change on the owned records; the
//! matching `WmEvent`s are queued for the renderer and drained by the caller.

pub mod client;
pub mod client_flags;
pub mod decorations;
pub mod factory;
pub mod kind;
pub mod moveresize;
pub mod placement;
pub mod registry;
pub mod stacking;

use tracing::{debug, info};

use crate::config::Config;
use crate::shared::events::WmEvent;
use crate::shared::{Point, Viewport};
use crate::shell::taskbar::{TaskbarAction, TaskbarSync};
use crate::wm::client::{WindowId, WindowRecord};
use crate::wm::decorations::{ButtonType, FrameHit};
use crate::wm::factory::WindowFactory;
use crate::wm::kind::WindowKind;
use crate::wm::moveresize::DragController;
use crate::wm::registry::WindowRegistry;
use crate::wm::stacking::ZOrderManager;

pub struct WindowManager {
    registry: WindowRegistry,
    stacking: ZOrderManager,
    factory: WindowFactory,
    drag: DragController,
    taskbar: TaskbarSync,
    viewport: Viewport,

    /// Next window id to hand out
    next_id: u32,

    /// Events not yet drained by the renderer
    events: Vec<WmEvent>,
}

impl WindowManager {
    /// Create a new window manager
    pub fn new(config: &Config) -> Self {
        let viewport = config.viewport();
        info!(
            "Initializing window manager ({}x{}, taskbar {}px)",
            viewport.width, viewport.height, viewport.taskbar_height
        );

        Self {
            registry: WindowRegistry::new(),
            stacking: ZOrderManager::new(config.window_manager.stacking.base_z_index),
            factory: WindowFactory::new(&config.window_manager),
            drag: DragController::new(),
            taskbar: TaskbarSync::new(&config.taskbar),
            viewport,
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Open a window of `kind`, or focus (and restore) the one already open
    pub fn open(&mut self, kind: WindowKind) -> WindowId {
        if let Some((id, minimized)) = self
            .registry
            .find_by_kind(&kind)
            .map(|w| (w.id, w.flags.minimized))
        {
            debug!("Window {} ({}) already open", id, kind);
            if minimized {
                self.restore(id);
            } else {
                self.focus(id);
            }
            return id;
        }

        let id = WindowId(self.next_id);
        self.next_id += 1;

        let (record, ready) = self.factory.create(id, kind, self.registry.len());
        info!("Opening window {} ({}) \"{}\"", id, record.kind, record.title());

        self.events.push(WmEvent::WindowOpened {
            id,
            kind: record.kind.clone(),
            title: record.title().to_string(),
            icon: record.chrome.icon.clone(),
            geometry: record.geometry,
        });

        self.taskbar.add(&record);
        self.events.push(WmEvent::TaskbarEntryAdded {
            id,
            title: record.title().to_string(),
            icon: record.chrome.icon.clone(),
        });
        self.registry.insert(record);

        self.focus(id);
        self.events.push(WmEvent::ChromeReady(ready));
        id
    }

    /// Close a window and release its chrome; no-op if it is not open
    pub fn close(&mut self, id: WindowId) -> bool {
        let Some(record) = self.registry.remove(id) else {
            debug!("close: window {} not found", id);
            return false;
        };

        let was_active = record.active;
        self.stacking.remove_window(id);
        self.drag.cancel_for(id);
        if self.taskbar.remove(id) {
            self.events.push(WmEvent::TaskbarEntryRemoved { id });
        }
        if was_active {
            self.taskbar.reflect_active(None);
            self.events.push(WmEvent::TaskbarActiveChanged { active: None });
        }

        info!("Closed window {} ({})", id, record.kind);
        self.events.push(WmEvent::WindowClosed {
            id,
            kind: record.kind,
        });
        true
    }

    /// Close every open window
    pub fn close_all(&mut self) {
        for id in self.registry.ids() {
            self.close(id);
        }
    }

    /// Raise a window and make it the active one
    pub fn focus(&mut self, id: WindowId) {
        let Some(z_index) = self.stacking.bring_to_front(&mut self.registry, id) else {
            return;
        };
        self.taskbar.reflect_active(Some(id));
        self.events.push(WmEvent::WindowFocused { id, z_index });
        self.events.push(WmEvent::TaskbarActiveChanged { active: Some(id) });
    }

    /// Minimize a window; an active window gives up the active marker
    pub fn minimize(&mut self, id: WindowId) {
        let Some(record) = self.registry.get_mut(id) else {
            debug!("minimize: window {} not found", id);
            return;
        };
        if record.flags.minimized {
            return;
        }
        record.flags.minimized = true;
        self.drag.cancel_for(id);
        self.events.push(WmEvent::WindowMinimized { id });

        if self.stacking.active() == Some(id) {
            self.stacking.clear_active(&mut self.registry);
            self.taskbar.reflect_active(None);
            self.events.push(WmEvent::TaskbarActiveChanged { active: None });
        }
    }

    /// Un-minimize a window; restoring always focuses
    pub fn restore(&mut self, id: WindowId) {
        let Some(record) = self.registry.get_mut(id) else {
            debug!("restore: window {} not found", id);
            return;
        };
        if record.flags.minimized {
            record.flags.minimized = false;
            self.events.push(WmEvent::WindowRestored { id });
        }
        self.focus(id);
    }

    /// Flip the maximized overlay; minimized state is untouched
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let viewport = self.viewport;
        let Some(record) = self.registry.get_mut(id) else {
            debug!("toggle_maximize: window {} not found", id);
            return;
        };

        if record.flags.maximized {
            record.unmaximize();
        } else {
            record.maximize(&viewport);
        }
        let (maximized, geometry) = (record.flags.maximized, record.geometry);

        self.drag.cancel_for(id);
        self.events.push(WmEvent::WindowMaximized {
            id,
            maximized,
            geometry,
        });
    }

    /// Activate a title bar control button
    pub fn press_button(&mut self, id: WindowId, button: ButtonType) {
        debug!("Button {:?} pressed on window {}", button, id);
        match button {
            ButtonType::Minimize => self.minimize(id),
            ButtonType::Maximize => self.toggle_maximize(id),
            ButtonType::Close => {
                self.close(id);
            }
        }
    }

    /// Route a click on a taskbar entry back into the window
    pub fn taskbar_click(&mut self, id: WindowId) -> Option<TaskbarAction> {
        let action = TaskbarSync::click_action(self.registry.get(id)?);
        debug!("Taskbar click on window {}: {:?}", id, action);
        match action {
            TaskbarAction::Restore => self.restore(id),
            TaskbarAction::Minimize => self.minimize(id),
            TaskbarAction::Focus => self.focus(id),
        }
        Some(action)
    }

    /// Pointer pressed in the window area
    ///
    /// Focuses the window under the pointer, then activates a control button
    /// or starts a title bar drag. Returns whether a window was hit.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        let Some(id) = self.stacking.topmost_at(&self.registry, point) else {
            return false;
        };
        self.focus(id);

        let Some(record) = self.registry.get(id) else {
            return true;
        };
        match record.chrome.hit_test(&record.geometry, point) {
            Some(FrameHit::Button(button)) => self.press_button(id, button),
            Some(FrameHit::Titlebar) => {
                let (geometry, maximized) = (record.geometry, record.flags.maximized);
                self.drag.begin(id, point, &geometry, maximized);
            }
            Some(FrameHit::Body) | None => {}
        }
        true
    }

    /// Pointer moved; drags the grabbed window if any
    pub fn pointer_move(&mut self, point: Point) {
        let Some(dragged) = self.drag.dragging() else {
            return;
        };
        let Some(size) = self.registry.get(dragged).map(|w| (w.geometry.width, w.geometry.height)) else {
            self.drag.cancel_for(dragged);
            return;
        };
        let Some((id, position)) = self.drag.motion(point, size, &self.viewport) else {
            return;
        };
        let Some(record) = self.registry.get_mut(id) else {
            return;
        };
        if (record.geometry.x, record.geometry.y) == (position.x, position.y) {
            return;
        }
        record.geometry.x = position.x;
        record.geometry.y = position.y;
        self.events.push(WmEvent::WindowMoved {
            id,
            x: position.x,
            y: position.y,
        });
    }

    /// Pointer released; ends any drag
    pub fn pointer_up(&mut self) {
        self.drag.finish();
    }

    /// Double click: on a title bar (not its buttons) toggles maximize
    pub fn double_click(&mut self, point: Point) -> bool {
        let Some(id) = self.stacking.topmost_at(&self.registry, point) else {
            return false;
        };
        let hit = self
            .registry
            .get(id)
            .and_then(|w| w.chrome.hit_test(&w.geometry, point));
        if hit == Some(FrameHit::Titlebar) {
            self.toggle_maximize(id);
        }
        true
    }

    /// Viewport resized; maximized windows re-fill the work area
    pub fn set_viewport(&mut self, viewport: Viewport) {
        info!("Viewport changed to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        let work_area = viewport.work_area();
        for record in self.registry.iter_mut().filter(|w| w.flags.maximized) {
            record.geometry = work_area;
            self.events.push(WmEvent::WindowMaximized {
                id: record.id,
                maximized: true,
                geometry: work_area,
            });
        }
    }

    /// Id of the open window of `kind`
    pub fn find(&self, kind: &WindowKind) -> Option<WindowId> {
        self.registry.find_by_kind(kind).map(|w| w.id)
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.registry.get(id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.registry.iter()
    }

    pub fn window_count(&self) -> usize {
        self.registry.len()
    }

    /// Ids from bottom to top
    pub fn stacking_order(&self) -> Vec<WindowId> {
        self.stacking.stacking_order(&self.registry)
    }

    pub fn active(&self) -> Option<WindowId> {
        self.stacking.active()
    }

    pub fn taskbar(&self) -> &TaskbarSync {
        &self.taskbar
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Take the queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<WmEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Geometry;
    use crate::wm::factory::WidgetInit;

    fn wm() -> WindowManager {
        WindowManager::new(&Config::default())
    }

    /// Zero or one active window, holding the top z-index, mirrored by the taskbar
    fn assert_consistent(wm: &WindowManager) {
        let active: Vec<_> = wm.windows().filter(|w| w.active).map(|w| w.id).collect();
        assert!(active.len() <= 1, "more than one active window: {:?}", active);
        assert_eq!(active.first().copied(), wm.active());

        if let Some(id) = wm.active() {
            let max = wm.windows().map(|w| w.z_index).max().unwrap();
            assert_eq!(wm.window(id).unwrap().z_index, max);
        }

        let active_entries: Vec<_> = wm
            .taskbar()
            .entries()
            .iter()
            .filter(|e| e.active)
            .map(|e| e.window)
            .collect();
        assert_eq!(active_entries.first().copied(), wm.active());
        assert!(active_entries.len() <= 1);
        assert_eq!(wm.taskbar().len(), wm.window_count());

        let mut z: Vec<_> = wm.windows().map(|w| w.z_index).collect();
        z.sort_unstable();
        z.dedup();
        assert_eq!(z.len(), wm.window_count(), "duplicate z-index");
    }

    #[test]
    fn open_twice_keeps_one_window() {
        let mut wm = wm();
        let first = wm.open(WindowKind::About);
        let second = wm.open(WindowKind::About);

        assert_eq!(first, second);
        assert_eq!(wm.window_count(), 1);
        assert_eq!(wm.taskbar().len(), 1);
        assert_consistent(&wm);
    }

    #[test]
    fn reopen_restores_minimized_window() {
        let mut wm = wm();
        let id = wm.open(WindowKind::Skills);
        wm.minimize(id);
        assert!(wm.active().is_none());

        wm.open(WindowKind::Skills);
        let record = wm.window(id).unwrap();
        assert!(!record.flags.minimized);
        assert!(record.active);
        assert_consistent(&wm);
    }

    #[test]
    fn open_emits_events_in_order() {
        let mut wm = wm();
        let id = wm.open(WindowKind::Winamp);
        let events = wm.drain_events();

        assert!(matches!(events[0], WmEvent::WindowOpened { id: opened, .. } if opened == id));
        assert!(matches!(events[1], WmEvent::TaskbarEntryAdded { .. }));
        assert!(matches!(events[2], WmEvent::WindowFocused { z_index: 101, .. }));
        assert!(matches!(events[3], WmEvent::TaskbarActiveChanged { active: Some(_) }));
        match &events[4] {
            WmEvent::ChromeReady(ready) => assert_eq!(ready.widget, Some(WidgetInit::AudioPlayer)),
            other => panic!("expected ChromeReady, got {:?}", other),
        }
        assert!(wm.drain_events().is_empty());
    }

    #[test]
    fn close_is_idempotent() {
        let mut wm = wm();
        let id = wm.open(WindowKind::Contact);
        assert!(wm.close(id));
        assert!(wm.window(id).is_none());
        assert!(wm.taskbar().entry(id).is_none());
        assert!(wm.active().is_none());

        wm.drain_events();
        assert!(!wm.close(id));
        assert!(wm.drain_events().is_empty());
    }

    #[test]
    fn reopen_after_close_creates_new_record() {
        let mut wm = wm();
        let first = wm.open(WindowKind::Projects);
        wm.close(first);
        let second = wm.open(WindowKind::Projects);
        assert_ne!(first, second);
    }

    #[test]
    fn cascade_uses_open_count() {
        let mut wm = wm();
        let a = wm.open(WindowKind::About);
        let b = wm.open(WindowKind::Projects);
        wm.close(a);
        let c = wm.open(WindowKind::Skills);

        assert_eq!(wm.window(b).unwrap().geometry, Geometry::new(130, 110, 850, 580));
        assert_eq!(wm.window(c).unwrap().geometry, Geometry::new(130, 110, 680, 520));
    }

    #[test]
    fn minimize_restore_returns_to_top() {
        let mut wm = wm();
        let about = wm.open(WindowKind::About);
        let projects = wm.open(WindowKind::Projects);

        wm.minimize(about);
        assert!(wm.window(about).unwrap().flags.minimized);
        assert_eq!(wm.active(), Some(projects));

        wm.restore(about);
        assert_eq!(wm.active(), Some(about));
        assert_eq!(wm.stacking_order().last(), Some(&about));
        assert_consistent(&wm);
    }

    #[test]
    fn maximize_is_orthogonal_to_minimize() {
        let mut wm = wm();
        let id = wm.open(WindowKind::Contact);
        wm.toggle_maximize(id);
        wm.minimize(id);
        let record = wm.window(id).unwrap();
        assert!(record.flags.maximized && record.flags.minimized);

        wm.toggle_maximize(id);
        let record = wm.window(id).unwrap();
        assert!(!record.flags.maximized && record.flags.minimized);
        assert_eq!(record.geometry, Geometry::new(100, 80, 680, 480));
    }

    #[test]
    fn taskbar_click_cycles_states() {
        let mut wm = wm();
        let about = wm.open(WindowKind::About);
        let projects = wm.open(WindowKind::Projects);

        assert_eq!(wm.taskbar_click(about), Some(TaskbarAction::Focus));
        assert_eq!(wm.active(), Some(about));
        assert!(wm.window(about).unwrap().z_index > wm.window(projects).unwrap().z_index);
        assert!(!wm.taskbar().entry(projects).unwrap().active);

        assert_eq!(wm.taskbar_click(about), Some(TaskbarAction::Minimize));
        assert!(wm.window(about).unwrap().flags.minimized);

        assert_eq!(wm.taskbar_click(about), Some(TaskbarAction::Restore));
        assert_eq!(wm.active(), Some(about));
        assert_consistent(&wm);

        assert_eq!(wm.taskbar_click(WindowId(99)), None);
    }

    #[test]
    fn titlebar_drag_moves_and_clamps() {
        let mut wm = wm();
        let id = wm.open(WindowKind::Contact);
        // Contact sits at (100, 80), 680x480
        assert!(wm.pointer_down(Point::new(150, 90)));
        assert!(wm.is_dragging());

        wm.pointer_move(Point::new(250, 190));
        assert_eq!(wm.window(id).unwrap().geometry, Geometry::new(200, 180, 680, 480));

        wm.pointer_move(Point::new(4000, 4000));
        let geom = wm.window(id).unwrap().geometry;
        assert_eq!((geom.x, geom.y), (1280 - 680, 770 - 480));

        wm.pointer_up();
        assert!(!wm.is_dragging());
        wm.pointer_move(Point::new(150, 90));
        assert_eq!(wm.window(id).unwrap().geometry, geom);
    }

    #[test]
    fn body_press_focuses_without_drag() {
        let mut wm = wm();
        let about = wm.open(WindowKind::About);
        let _projects = wm.open(WindowKind::Projects);

        // (110, 300) is inside About only
        assert!(wm.pointer_down(Point::new(110, 300)));
        assert_eq!(wm.active(), Some(about));
        assert!(!wm.is_dragging());
        assert!(!wm.pointer_down(Point::new(5, 5)));
    }

    #[test]
    fn control_buttons_via_pointer() {
        let mut wm = wm();
        let id = wm.open(WindowKind::Contact);
        let frame = wm.window(id).unwrap().geometry;
        let chrome = wm.window(id).unwrap().chrome.clone();

        let max = chrome.button_rect(&frame, ButtonType::Maximize);
        wm.pointer_down(Point::new(max.x + 2, max.y + 2));
        assert!(wm.window(id).unwrap().flags.maximized);
        assert!(!wm.is_dragging());

        // Maximized: title bar press does not drag
        wm.pointer_down(Point::new(20, 10));
        assert!(!wm.is_dragging());

        let frame = wm.window(id).unwrap().geometry;
        let close = chrome.button_rect(&frame, ButtonType::Close);
        wm.pointer_down(Point::new(close.x + 2, close.y + 2));
        assert!(wm.window(id).is_none());
        assert_consistent(&wm);
    }

    #[test]
    fn double_click_titlebar_toggles_maximize() {
        let mut wm = wm();
        let id = wm.open(WindowKind::About);

        wm.double_click(Point::new(150, 90));
        assert!(wm.window(id).unwrap().flags.maximized);
        wm.double_click(Point::new(150, 10));
        assert!(!wm.window(id).unwrap().flags.maximized);

        // Double click on a control button does not toggle
        let record = wm.window(id).unwrap();
        let min = record.chrome.button_rect(&record.geometry, ButtonType::Minimize);
        wm.double_click(Point::new(min.x + 1, min.y + 1));
        assert!(!wm.window(id).unwrap().flags.maximized);
    }

    #[test]
    fn viewport_resize_refills_maximized() {
        let mut wm = wm();
        let id = wm.open(WindowKind::Projects);
        wm.toggle_maximize(id);
        wm.set_viewport(Viewport::new(1920, 1080, 30));
        assert_eq!(wm.window(id).unwrap().geometry, Geometry::new(0, 0, 1920, 1050));
    }

    #[test]
    fn invariants_hold_through_mixed_sequence() {
        let mut wm = wm();
        let kinds = [
            WindowKind::About,
            WindowKind::Projects,
            WindowKind::Skills,
            WindowKind::Contact,
            WindowKind::Unknown("notes".into()),
        ];
        for kind in &kinds {
            wm.open(kind.clone());
            assert_consistent(&wm);
        }
        let ids: Vec<_> = wm.windows().map(|w| w.id).collect();
        for (i, id) in ids.iter().enumerate() {
            match i % 4 {
                0 => wm.minimize(*id),
                1 => wm.toggle_maximize(*id),
                2 => {
                    wm.taskbar_click(*id);
                }
                _ => {
                    wm.close(*id);
                }
            }
            assert_consistent(&wm);
        }
        wm.close_all();
        assert_eq!(wm.window_count(), 0);
        assert!(wm.taskbar().is_empty());
        assert_consistent(&wm);
    }
}
