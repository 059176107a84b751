//! Device Manager tree on the About window's hardware tab

/// Categories in display order
pub const DEVICE_CATEGORIES: &[&str] = &["frontend", "backend", "databases"];

/// Expand state of each category header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceManager {
    expanded: Vec<bool>,
}

impl DeviceManager {
    /// Every category starts expanded
    pub fn new() -> Self {
        Self {
            expanded: vec![true; DEVICE_CATEGORIES.len()],
        }
    }

    /// Flip a category; returns the new state, `None` for unknown names
    pub fn toggle(&mut self, category: &str) -> Option<bool> {
        let index = DEVICE_CATEGORIES.iter().position(|&c| c == category)?;
        let state = &mut self.expanded[index];
        *state = !*state;
        Some(*state)
    }

    pub fn is_expanded(&self, category: &str) -> Option<bool> {
        DEVICE_CATEGORIES
            .iter()
            .position(|&c| c == category)
            .map(|index| self.expanded[index])
    }

    /// Header marker: `−` when expanded, `+` when collapsed
    pub fn marker(&self, category: &str) -> Option<char> {
        self.is_expanded(category)
            .map(|expanded| if expanded { '−' } else { '+' })
    }
}

impl Default for DeviceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_start_expanded() {
        let devices = DeviceManager::new();
        for category in DEVICE_CATEGORIES {
            assert_eq!(devices.is_expanded(category), Some(true));
            assert_eq!(devices.marker(category), Some('−'));
        }
    }

    #[test]
    fn toggle_flips_one_category() {
        let mut devices = DeviceManager::new();
        assert_eq!(devices.toggle("backend"), Some(false));
        assert_eq!(devices.marker("backend"), Some('+'));
        assert_eq!(devices.is_expanded("frontend"), Some(true));

        assert_eq!(devices.toggle("backend"), Some(true));
        assert_eq!(devices.toggle("printers"), None);
        assert_eq!(devices.marker("printers"), None);
    }
}
