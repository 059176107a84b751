//! Tabbed panels (System Properties style)

/// Tabs of the About window
pub const ABOUT_TABS: &[&str] = &["general", "experience", "hardware", "advanced"];

/// Tabs of the Skills window
pub const SKILLS_TABS: &[&str] = &["languages", "frameworks", "tools", "concepts"];

/// Row of tabs with exactly one active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    tabs: &'static [&'static str],
    active: usize,
}

impl TabStrip {
    /// First tab starts active
    pub fn new(tabs: &'static [&'static str]) -> Self {
        Self { tabs, active: 0 }
    }

    /// Activate `name`; unknown names leave the strip unchanged
    pub fn select(&mut self, name: &str) -> bool {
        match self.tabs.iter().position(|&t| t == name) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> &'static str {
        self.tabs.get(self.active).copied().unwrap_or_default()
    }

    pub fn tabs(&self) -> &'static [&'static str] {
        self.tabs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_active() {
        assert_eq!(TabStrip::new(ABOUT_TABS).active(), "general");
        assert_eq!(TabStrip::new(SKILLS_TABS).active(), "languages");
    }

    #[test]
    fn select_known_and_unknown() {
        let mut strip = TabStrip::new(SKILLS_TABS);
        assert!(strip.select("tools"));
        assert_eq!(strip.active(), "tools");
        assert!(!strip.select("hardware"));
        assert_eq!(strip.active(), "tools");
    }
}
