//! Desktop event protocol
//!
//! Inputs are what the page would deliver (clicks, pointer motion, widget
//! controls); window manager events are the sync step that reflects state
//! changes into UI handles. Both travel as newline-delimited JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::Geometry;
use crate::wm::client::WindowId;
use crate::wm::factory::ChromeReady;
use crate::wm::kind::WindowKind;

// ============================================================================
// Page → Desktop inputs
// ============================================================================

/// Input delivered to the desktop session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesktopInput {
    /// Desktop icon double-clicked (opens its window)
    IconDoubleClick { window: String },

    /// Desktop icon single-clicked (selects it)
    IconClick { icon: String },

    /// Start button toggled
    StartButton,

    /// Start menu item chosen
    StartMenuItem { window: String },

    /// Click on empty desktop
    DesktopClick,

    /// Taskbar entry clicked
    TaskbarClick { window: String },

    /// Window control requests addressed by type identifier
    Focus { window: String },
    Minimize { window: String },
    Maximize { window: String },
    Close { window: String },

    /// Pointer pressed at desktop coordinates
    PointerDown { x: i32, y: i32 },

    /// Pointer moved
    PointerMove { x: i32, y: i32 },

    /// Pointer released
    PointerUp,

    /// Double click at desktop coordinates
    DoubleClick { x: i32, y: i32 },

    /// Tab chosen in a tabbed window
    SelectTab { window: String, tab: String },

    /// Device category header clicked on the hardware tab
    ToggleCategory { window: String, category: String },

    /// Audio player control
    Player { action: PlayerAction },

    /// User avatar in the start menu clicked
    AvatarClick,

    /// Shut the desktop down
    Shutdown,

    /// Viewport resized
    Resize { width: u32, height: u32 },
}

/// Audio player controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    Play,
    Pause,
    Stop,
    Next,
    Previous,
    Select(usize),
    Volume(u8),
    /// Playback progress reported by the audio element, in seconds
    Position { elapsed: f64, duration: f64 },
    /// Progress bar dragged to a percentage of the track
    Seek(f64),
    /// Current track reached its end
    TrackEnded,
}

// ============================================================================
// Window manager → renderer events
// ============================================================================

/// State changes for the renderer to reflect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WmEvent {
    /// A new window was opened
    WindowOpened {
        id: WindowId,
        kind: WindowKind,
        title: String,
        icon: String,
        geometry: Geometry,
    },

    /// A window was raised and became active
    WindowFocused { id: WindowId, z_index: u32 },

    WindowMinimized { id: WindowId },

    WindowRestored { id: WindowId },

    /// Maximized overlay toggled
    WindowMaximized {
        id: WindowId,
        maximized: bool,
        geometry: Geometry,
    },

    /// A window was dragged
    WindowMoved { id: WindowId, x: i32, y: i32 },

    /// A window was closed and its chrome released
    WindowClosed { id: WindowId, kind: WindowKind },

    /// Chrome attached; the kind's widget may initialize
    ChromeReady(ChromeReady),

    TaskbarEntryAdded {
        id: WindowId,
        title: String,
        icon: String,
    },

    TaskbarEntryRemoved { id: WindowId },

    /// Entry styled as active (none when no window is active)
    TaskbarActiveChanged { active: Option<WindowId> },
}

// ============================================================================
// Line framing
// ============================================================================

/// Input protocol errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid input line {line:?}: {source}")]
    Decode {
        line: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode one input line; blank lines and `#` comments yield `None`
pub fn decode_input(line: &str) -> Result<Option<DesktopInput>, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| InputError::Decode {
            line: trimmed.to_string(),
            source,
        })
}

/// Encode one event as a single JSON line (no trailing newline)
pub fn encode_event(event: &WmEvent) -> serde_json::Result<String> {
    serde_json::to_string(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tagged_inputs() {
        let input = decode_input(r#"{"type":"IconDoubleClick","window":"about"}"#).unwrap();
        assert_eq!(
            input,
            Some(DesktopInput::IconDoubleClick {
                window: "about".into()
            })
        );

        let input = decode_input(r#"{"type":"Player","action":{"select":2}}"#).unwrap();
        assert_eq!(
            input,
            Some(DesktopInput::Player {
                action: PlayerAction::Select(2)
            })
        );

        let input = decode_input(r#"{"type":"Player","action":"next"}"#).unwrap();
        assert_eq!(
            input,
            Some(DesktopInput::Player {
                action: PlayerAction::Next
            })
        );

        let input =
            decode_input(r#"{"type":"Player","action":{"position":{"elapsed":75.0,"duration":200.0}}}"#)
                .unwrap();
        assert_eq!(
            input,
            Some(DesktopInput::Player {
                action: PlayerAction::Position {
                    elapsed: 75.0,
                    duration: 200.0
                }
            })
        );

        let input =
            decode_input(r#"{"type":"ToggleCategory","window":"about","category":"databases"}"#).unwrap();
        assert_eq!(
            input,
            Some(DesktopInput::ToggleCategory {
                window: "about".into(),
                category: "databases".into()
            })
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(decode_input("   ").unwrap().is_none());
        assert!(decode_input("# open the about window").unwrap().is_none());
    }

    #[test]
    fn reports_bad_lines() {
        let err = decode_input(r#"{"type":"Teleport"}"#).unwrap_err();
        let InputError::Decode { line, .. } = err;
        assert_eq!(line, r#"{"type":"Teleport"}"#);
    }

    #[test]
    fn encodes_chrome_ready_inline() {
        let event = WmEvent::ChromeReady(ChromeReady {
            window: WindowId(3),
            kind: WindowKind::Winamp,
            widget: Some(crate::wm::factory::WidgetInit::AudioPlayer),
        });
        let json = encode_event(&event).unwrap();
        assert!(json.starts_with(r#"{"type":"ChromeReady","window":3"#));
        assert!(json.contains(r#""kind":"winamp""#));
    }
}
