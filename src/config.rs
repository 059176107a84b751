//! Configuration system for xpdesk
//!
//! Loads configuration from TOML file at `~/.config/xpdesk/config.toml`
//! Auto-generates default config file on first run if missing.

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::shared::Viewport;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub desktop: DesktopConfig,
    pub window_manager: WindowManagerConfig,
    pub taskbar: TaskbarConfig,
    pub clock: ClockConfig,
    pub audio: AudioConfig,
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, generating defaults there if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found at {:?}, using defaults", config_path);
            if let Err(e) = Self::save_default(config_path) {
                warn!("Failed to create default config file: {}", e);
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).context("Failed to read config file")?;
        let config = Self::from_toml_str(&content)?;

        info!("Configuration loaded from {:?}", config_path);
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config file")?;
        config.clock.validate().context("Invalid clock format")?;
        Ok(config)
    }

    /// Viewport the desktop starts with
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.desktop.width, self.desktop.height, self.taskbar.height)
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("xpdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Save default configuration to file
    fn save_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default config")?;

        fs::write(path, toml_string).context("Failed to write default config file")?;

        info!("Created default config file at {:?}", path);
        Ok(())
    }
}

/// Desktop (viewport) configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels (taskbar included)
    pub height: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Window manager configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    pub decorations: WindowDecorationConfig,
    pub placement: PlacementConfig,
    pub stacking: StackingConfig,
}

/// Window decoration geometry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowDecorationConfig {
    /// Titlebar height in pixels
    pub titlebar_height: u16,
    /// Control button size in pixels
    pub button_size: u16,
    /// Gap between control buttons (and after the last one) in pixels
    pub button_padding: u16,
}

impl Default for WindowDecorationConfig {
    fn default() -> Self {
        Self {
            titlebar_height: 30,
            button_size: 21,
            button_padding: 2,
        }
    }
}

/// Initial window placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Position of the first window
    pub origin_x: i32,
    pub origin_y: i32,
    /// Offset added per already-open window
    pub cascade_step: i32,
    /// Size used when a window kind has no size of its own
    pub default_width: u32,
    pub default_height: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            origin_x: 100,
            origin_y: 80,
            cascade_step: 30,
            default_width: 600,
            default_height: 500,
        }
    }
}

/// Stacking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackingConfig {
    /// Counter value before the first window is raised
    pub base_z_index: u32,
}

impl Default for StackingConfig {
    fn default() -> Self {
        Self { base_z_index: 100 }
    }
}

/// Taskbar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskbarConfig {
    /// Taskbar height in pixels (reserved at the bottom of the viewport)
    pub height: u32,
    /// Width of the start button at the left end
    pub start_button_width: u32,
    /// Width of each window entry
    pub entry_width: u32,
}

impl Default for TaskbarConfig {
    fn default() -> Self {
        Self {
            height: 30,
            start_button_width: 100,
            entry_width: 160,
        }
    }
}

/// 24-hour `HH:MM`
pub const DEFAULT_CLOCK_FORMAT: &str = "%H:%M";

/// Clock configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Refresh interval in milliseconds
    pub tick_ms: u64,
    /// chrono format string
    pub format: String,
}

impl ClockConfig {
    /// Reject strftime strings chrono cannot render
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("unsupported specifier in {:?}", self.format);
        }
        Ok(())
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            format: DEFAULT_CLOCK_FORMAT.to_string(),
        }
    }
}

/// Audio player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Track paths, in play order
    pub playlist: Vec<String>,
    /// Initial volume (0-100)
    pub volume: u8,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            playlist: [
                "assets/music/fishmans-babyblue.flac",
                "assets/music/georgeclanton-slide.flac",
                "assets/music/keane-isitanywonder.flac",
                "assets/music/moby-go.flac",
                "assets/music/smiths-thischarmingman.flac",
                "assets/music/talktalk-itsmylife.flac",
                "assets/music/thesystem-almostgrown.flac",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            volume: 70,
        }
    }
}
