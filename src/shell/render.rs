//! Shell rendering utilities
//!
//! Hit testing helpers and a plain-text rendering of the desktop, used by the
//! binary to show the final state of a session.

use std::fmt::Write as _;

use crate::shell::{Shell, SHUTDOWN_MESSAGE};
use crate::wm::WindowManager;

/// Check if point is inside rectangle
pub fn point_in_rect(x: f32, y: f32, rect_x: f32, rect_y: f32, rect_w: f32, rect_h: f32) -> bool {
    x >= rect_x && x < rect_x + rect_w && y >= rect_y && y < rect_y + rect_h
}

/// Render windows (top-most first), taskbar and clock as text
pub fn render_snapshot(wm: &WindowManager, shell: &Shell) -> String {
    let mut out = String::new();

    if shell.is_shut_down() {
        for line in SHUTDOWN_MESSAGE {
            let _ = writeln!(out, "{}", line);
        }
        return out;
    }

    let viewport = wm.viewport();
    let _ = writeln!(out, "Desktop {}x{}", viewport.width, viewport.height);

    for id in wm.stacking_order().into_iter().rev() {
        let Some(window) = wm.window(id) else {
            continue;
        };
        let mut state = Vec::new();
        if window.active {
            state.push("active");
        }
        if window.flags.minimized {
            state.push("minimized");
        }
        if window.flags.maximized {
            state.push("maximized");
        }
        let g = window.geometry;
        let _ = writeln!(
            out,
            "  [{}] {} \"{}\" z={} at {},{} {}x{} {}",
            id,
            window.kind,
            window.title(),
            window.z_index,
            g.x,
            g.y,
            g.width,
            g.height,
            state.join(",")
        );
    }

    let entries: Vec<String> = wm
        .taskbar()
        .entries()
        .iter()
        .map(|e| if e.active { format!("*{}*", e.title) } else { e.title.clone() })
        .collect();
    let _ = writeln!(
        out,
        "Taskbar: [start{}] {} | {}",
        if shell.start_menu.visible { " open" } else { "" },
        entries.join(" | "),
        shell.clock.text()
    );
    if shell.start_menu.visible {
        let _ = writeln!(out, "Start menu: avatar {}", shell.avatar.image_path());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::wm::kind::WindowKind;

    #[test]
    fn point_in_rect_is_half_open() {
        assert!(point_in_rect(0.0, 0.0, 0.0, 0.0, 10.0, 10.0));
        assert!(!point_in_rect(10.0, 5.0, 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn snapshot_lists_top_window_first() {
        let config = Config::default();
        let mut wm = WindowManager::new(&config);
        let shell = Shell::new(&config);
        wm.open(WindowKind::About);
        wm.open(WindowKind::Contact);

        let text = render_snapshot(&wm, &shell);
        let contact = text.find("Contact.txt - Notepad").unwrap();
        let about = text.find("About Me - System Properties").unwrap();
        assert!(contact < about);
        assert!(text.contains("*Contact.txt - Notepad*"));
    }

    #[test]
    fn open_start_menu_shows_avatar() {
        let config = Config::default();
        let wm = WindowManager::new(&config);
        let mut shell = Shell::new(&config);
        assert!(!render_snapshot(&wm, &shell).contains("Start menu"));

        shell.start_menu.toggle();
        for _ in 0..8 {
            shell.avatar.cycle();
        }
        let text = render_snapshot(&wm, &shell);
        assert!(text.contains("[start open]"));
        assert!(text.contains("Start menu: avatar assets/icons/user9.JPG"));
    }

    #[test]
    fn snapshot_after_shutdown() {
        let config = Config::default();
        let wm = WindowManager::new(&config);
        let mut shell = Shell::new(&config);
        shell.shutdown();
        assert!(render_snapshot(&wm, &shell).starts_with("Windows is shutting down..."));
    }
}
