//! xpdesk
//!
//! Headless window manager and shell of a retro desktop: window registry,
//! z-order, cascade placement, drag handling and taskbar sync, driven by
//! newline-delimited JSON input and reporting JSON events.

pub mod config;
pub mod desktop;
pub mod shared;
pub mod shell;
pub mod widgets;
pub mod wm;

pub use config::Config;
pub use desktop::Desktop;
