//! Selection tracking for the live scene.
//!
//! Selection is an ordered set of element ids plus one designated primary.
//! Only the primary element exposes resize/rotate/delete affordances; every
//! selected element gets a plain outline. Selection is ephemeral: it is never
//! persisted and it is scoped to the size variant being edited.

use indexmap::IndexSet;
use keepsake_core::element::ElementId;

/// The selected-id set and the single primary id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    ids: IndexSet<ElementId>,
    primary: Option<ElementId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids in selection order
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.ids.iter()
    }

    /// The one element that exposes resize/rotate/delete controls
    pub fn primary(&self) -> Option<&ElementId> {
        self.primary.as_ref()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Modifier-click: adds an unselected id (making it primary), removes a
    /// selected one. When the primary is toggled out, the last remaining
    /// selected id becomes primary.
    pub fn toggle(&mut self, id: ElementId) {
        if self.ids.shift_remove(&id) {
            if self.primary.as_ref() == Some(&id) {
                self.primary = self.ids.last().cloned();
            }
        } else {
            self.ids.insert(id.clone());
            self.primary = Some(id);
        }
    }

    /// Plain click on an unselected element: collapses selection to it
    pub fn select_only(&mut self, id: ElementId) {
        self.ids.clear();
        self.ids.insert(id.clone());
        self.primary = Some(id);
    }

    /// Adds an id without disturbing the rest of the selection
    pub fn insert(&mut self, id: ElementId) {
        self.ids.insert(id.clone());
        self.primary = Some(id);
    }

    /// Removes an id; the primary falls back to the last remaining id
    pub fn remove(&mut self, id: &ElementId) {
        self.ids.shift_remove(id);
        if self.primary.as_ref() == Some(id) {
            self.primary = self.ids.last().cloned();
        }
    }

    /// Click on empty canvas, or variant switch
    pub fn clear(&mut self) {
        self.ids.clear();
        self.primary = None;
    }
}
