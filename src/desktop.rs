//! Desktop session
//!
//! Owns the window manager, the shell and the widget host, and routes each
//! `DesktopInput` to them. Chrome-ready hand-offs are queued while an input
//! is handled and drained before the input returns, so a widget always sees
//! the window it was created for and the next input sees the widget.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::Config;
use crate::shared::events::{DesktopInput, WmEvent};
use crate::shared::{Point, Viewport};
use crate::shell::render::render_snapshot;
use crate::shell::Shell;
use crate::widgets::{HostRequest, WidgetHost};
use crate::wm::client::WindowId;
use crate::wm::factory::ChromeReady;
use crate::wm::kind::WindowKind;
use crate::wm::WindowManager;

/// Desktop session state
pub struct Desktop {
    wm: WindowManager,
    shell: Shell,
    widgets: WidgetHost,
    taskbar_height: u32,

    /// Hand-offs waiting for their widget
    chrome_ready: VecDeque<ChromeReady>,
}

impl Desktop {
    pub fn new(config: &Config) -> Self {
        Self {
            wm: WindowManager::new(config),
            shell: Shell::new(config),
            widgets: WidgetHost::new(&config.audio),
            taskbar_height: config.taskbar.height,
            chrome_ready: VecDeque::new(),
        }
    }

    /// Handle one input; returns the window manager events it caused
    pub fn handle_input(&mut self, input: DesktopInput) -> Vec<WmEvent> {
        if self.shell.is_shut_down() {
            debug!("Desktop is shut down, ignoring {:?}", input);
            return Vec::new();
        }

        self.dispatch(input);

        let mut events = Vec::new();
        loop {
            let batch = self.wm.drain_events();
            for event in &batch {
                match event {
                    WmEvent::ChromeReady(ready) => self.chrome_ready.push_back(ready.clone()),
                    WmEvent::WindowClosed { id, .. } => self.widgets.window_closed(*id),
                    _ => {}
                }
            }
            events.extend(batch);

            let Some(ready) = self.chrome_ready.pop_front() else {
                break;
            };
            for request in self.widgets.chrome_ready(&ready) {
                match request {
                    HostRequest::CloseWindow(id) => {
                        self.wm.close(id);
                    }
                }
            }
        }
        events
    }

    fn dispatch(&mut self, input: DesktopInput) {
        match input {
            DesktopInput::IconDoubleClick { window } => {
                self.wm.open(WindowKind::parse(&window));
            }
            DesktopInput::IconClick { icon } => self.shell.select_icon(&icon),
            DesktopInput::StartButton => self.shell.start_menu.toggle(),
            DesktopInput::StartMenuItem { window } => {
                self.wm.open(WindowKind::parse(&window));
                self.shell.start_menu.hide();
            }
            DesktopInput::DesktopClick => self.shell.desktop_click(),
            DesktopInput::TaskbarClick { window } => {
                if let Some(id) = self.lookup(&window) {
                    self.wm.taskbar_click(id);
                }
            }
            DesktopInput::Focus { window } => {
                if let Some(id) = self.lookup(&window) {
                    self.wm.focus(id);
                }
            }
            DesktopInput::Minimize { window } => {
                if let Some(id) = self.lookup(&window) {
                    self.wm.minimize(id);
                }
            }
            DesktopInput::Maximize { window } => {
                if let Some(id) = self.lookup(&window) {
                    self.wm.toggle_maximize(id);
                }
            }
            DesktopInput::Close { window } => {
                if let Some(id) = self.lookup(&window) {
                    self.wm.close(id);
                }
            }
            DesktopInput::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            DesktopInput::PointerMove { x, y } => self.wm.pointer_move(Point::new(x, y)),
            DesktopInput::PointerUp => self.wm.pointer_up(),
            DesktopInput::DoubleClick { x, y } => {
                self.wm.double_click(Point::new(x, y));
            }
            DesktopInput::SelectTab { window, tab } => {
                if let Some(id) = self.lookup(&window) {
                    self.widgets.select_tab(id, &tab);
                }
            }
            DesktopInput::ToggleCategory { window, category } => {
                if let Some(id) = self.lookup(&window) {
                    self.widgets.toggle_category(id, &category);
                }
            }
            DesktopInput::Player { action } => self.widgets.player_action(action),
            DesktopInput::AvatarClick => self.shell.avatar.cycle(),
            DesktopInput::Shutdown => {
                self.wm.close_all();
                self.shell.shutdown();
            }
            DesktopInput::Resize { width, height } => {
                self.wm
                    .set_viewport(Viewport::new(width, height, self.taskbar_height));
            }
        }
    }

    fn pointer_down(&mut self, point: Point) {
        let viewport = self.wm.viewport();
        if viewport.in_taskbar(point) {
            let taskbar = self.wm.taskbar();
            if taskbar.on_start_button(point.x) {
                self.shell.start_menu.toggle();
            } else if let Some(id) = taskbar.entry_at(point.x) {
                self.shell.start_menu.hide();
                self.wm.taskbar_click(id);
            }
            return;
        }

        self.shell.start_menu.hide();
        if !self.wm.pointer_down(point) {
            self.shell.desktop_click();
        }
    }

    fn lookup(&self, window: &str) -> Option<WindowId> {
        let id = self.wm.find(&WindowKind::parse(window));
        if id.is_none() {
            debug!("No open window of type '{}'", window);
        }
        id
    }

    /// Refresh the clock; returns whether its text changed
    pub fn tick_clock(&mut self) -> bool {
        self.shell.clock.tick()
    }

    pub fn wm(&self) -> &WindowManager {
        &self.wm
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn widgets(&self) -> &WidgetHost {
        &self.widgets
    }

    /// Text rendering of the current desktop
    pub fn snapshot(&self) -> String {
        render_snapshot(&self.wm, &self.shell)
    }
}
