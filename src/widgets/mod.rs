//! Embedded widgets
//!
//! Collaborators that take over a window once its chrome is ready: tab
//! strips, the device tree, the contact notepad's date stamp, the pinball
//! frame and the audio player. The window manager never calls into them; the desktop forwards
//! `ChromeReady` signals here and acts on the returned requests.

pub mod device_manager;
pub mod player;
pub mod tabs;

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::config::AudioConfig;
use crate::shared::events::PlayerAction;
use crate::shell::clock::format_short_date;
use crate::wm::client::WindowId;
use crate::wm::factory::{ChromeReady, WidgetInit};

use device_manager::DeviceManager;
use player::AudioPlayer;
use tabs::TabStrip;

/// Game embedded by the pinball window
pub const PINBALL_URL: &str = "https://alula.github.io/SpaceCadetPinball/";

/// Follow-up a widget asks of the desktop after initializing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Close the placeholder window (the widget detached into its own frame)
    CloseWindow(WindowId),
}

/// Widget host
#[derive(Debug)]
pub struct WidgetHost {
    audio: AudioConfig,
    tabs: HashMap<WindowId, TabStrip>,
    devices: HashMap<WindowId, DeviceManager>,
    dates: HashMap<WindowId, String>,
    tooltips: Vec<WindowId>,
    games: HashMap<WindowId, &'static str>,
    /// Floating player; outlives its placeholder window
    player: Option<AudioPlayer>,
}

impl WidgetHost {
    pub fn new(audio: &AudioConfig) -> Self {
        Self {
            audio: audio.clone(),
            tabs: HashMap::new(),
            devices: HashMap::new(),
            dates: HashMap::new(),
            tooltips: Vec::new(),
            games: HashMap::new(),
            player: None,
        }
    }

    /// Chrome of a window is attached; set up its widget
    pub fn chrome_ready(&mut self, ready: &ChromeReady) -> Vec<HostRequest> {
        self.chrome_ready_on(ready, Local::now().date_naive())
    }

    /// `chrome_ready` with an explicit date for the notepad stamp
    pub fn chrome_ready_on(&mut self, ready: &ChromeReady, today: NaiveDate) -> Vec<HostRequest> {
        let Some(widget) = ready.widget else {
            debug!("Window {} ({}) has no widget", ready.window, ready.kind);
            return Vec::new();
        };
        info!("Initializing {:?} for window {}", widget, ready.window);

        let window = ready.window;
        match widget {
            WidgetInit::AboutTabs => {
                self.tabs.insert(window, TabStrip::new(tabs::ABOUT_TABS));
                self.devices.insert(window, DeviceManager::new());
            }
            WidgetInit::SkillsTabs => {
                self.tabs.insert(window, TabStrip::new(tabs::SKILLS_TABS));
            }
            WidgetInit::ContactNotepad => {
                self.dates.insert(window, format_short_date(today));
            }
            WidgetInit::ProjectTooltips => {
                // Tooltips are styled by the page; only remember the window
                if !self.tooltips.contains(&window) {
                    self.tooltips.push(window);
                }
            }
            WidgetInit::GameFrame => {
                self.games.insert(window, PINBALL_URL);
            }
            WidgetInit::AudioPlayer => {
                // Any previous player instance is replaced
                self.player = Some(AudioPlayer::new(&self.audio));
                return vec![HostRequest::CloseWindow(window)];
            }
        }
        Vec::new()
    }

    /// A window closed; drop the widget state bound to it
    pub fn window_closed(&mut self, window: WindowId) {
        self.tabs.remove(&window);
        self.devices.remove(&window);
        self.dates.remove(&window);
        self.games.remove(&window);
        self.tooltips.retain(|&w| w != window);
    }

    /// Switch tabs in a tabbed window; unknown windows or tabs are ignored
    pub fn select_tab(&mut self, window: WindowId, tab: &str) -> bool {
        self.tabs.get_mut(&window).is_some_and(|strip| strip.select(tab))
    }

    /// Expand or collapse a device category; returns the new state
    pub fn toggle_category(&mut self, window: WindowId, category: &str) -> Option<bool> {
        self.devices.get_mut(&window)?.toggle(category)
    }

    /// Drive the audio player; ignored until the player exists
    pub fn player_action(&mut self, action: PlayerAction) {
        let Some(player) = self.player.as_mut() else {
            debug!("Player action {:?} with no player", action);
            return;
        };
        match action {
            PlayerAction::Play => player.play(),
            PlayerAction::Pause => player.pause(),
            PlayerAction::Stop => player.stop(),
            PlayerAction::Next => player.next(),
            PlayerAction::Previous => player.previous(),
            PlayerAction::Select(index) => {
                player.select(index);
            }
            PlayerAction::Volume(level) => player.set_volume(level),
            PlayerAction::Position { elapsed, duration } => player.set_position(elapsed, duration),
            PlayerAction::Seek(percent) => {
                player.seek(percent);
            }
            PlayerAction::TrackEnded => player.track_ended(),
        }
    }

    pub fn tab_strip(&self, window: WindowId) -> Option<&TabStrip> {
        self.tabs.get(&window)
    }

    pub fn device_manager(&self, window: WindowId) -> Option<&DeviceManager> {
        self.devices.get(&window)
    }

    pub fn contact_date(&self, window: WindowId) -> Option<&str> {
        self.dates.get(&window).map(String::as_str)
    }

    pub fn game_url(&self, window: WindowId) -> Option<&'static str> {
        self.games.get(&window).copied()
    }

    pub fn player(&self) -> Option<&AudioPlayer> {
        self.player.as_ref()
    }
}
