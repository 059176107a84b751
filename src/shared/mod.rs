//! Types shared by the window manager, the shell and the widgets

pub mod events;
pub mod window_state;

pub use window_state::{Geometry, Point, Viewport, WindowFlags};
