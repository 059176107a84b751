//! Window Registry
//!
//! Owns every open window record, in the order the windows were opened.

use crate::wm::client::{WindowId, WindowRecord};
use crate::wm::kind::WindowKind;

/// Window registry
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record; a second record of the same kind is refused
    pub fn insert(&mut self, record: WindowRecord) -> bool {
        if self.find_by_kind(&record.kind).is_some() {
            return false;
        }
        self.windows.push(record);
        true
    }

    /// Remove a record, handing back ownership (and with it the chrome)
    pub fn remove(&mut self, id: WindowId) -> Option<WindowRecord> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        Some(self.windows.remove(index))
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn find_by_kind(&self, kind: &WindowKind) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.kind == kind)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WindowRecord> {
        self.windows.iter_mut()
    }

    /// Ids in opening order
    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id).collect()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
