//! Scenes: the complete placement description for one size variant.
//!
//! A [`Scene`] holds the elements of one canvas (compact or wide) keyed by
//! id, in insertion order. The two scenes of a design are grouped into a
//! [`LayoutPair`]; they are reconciled by the same rules but are otherwise
//! fully independent — repositioning an element in one scene never touches
//! the other.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId};
use crate::geometry::Size;

/// Base canvas dimensions for the compact (phone) variant.
pub const COMPACT_CANVAS: Size = Size {
    width: 220.0,
    height: 476.0,
};

/// Base canvas dimensions for the wide (browser) variant.
pub const WIDE_CANVAS: Size = Size {
    width: 800.0,
    height: 500.0,
};

/// Selects which of the two independent layouts is being edited or shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    #[default]
    Compact,
    Wide,
}

impl SizeVariant {
    /// Both variants, in record order
    pub const ALL: [SizeVariant; 2] = [SizeVariant::Compact, SizeVariant::Wide];

    /// The base canvas size this variant is authored against
    pub fn canvas_size(self) -> Size {
        match self {
            SizeVariant::Compact => COMPACT_CANVAS,
            SizeVariant::Wide => WIDE_CANVAS,
        }
    }
}

impl std::fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeVariant::Compact => f.write_str("compact"),
            SizeVariant::Wide => f.write_str("wide"),
        }
    }
}

/// The element set of one size variant, keyed by id in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    canvas: Size,
    elements: IndexMap<ElementId, Element>,
}

impl Scene {
    /// Creates an empty scene for the given canvas size
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            elements: IndexMap::new(),
        }
    }

    /// Creates an empty scene sized for a variant
    pub fn for_variant(variant: SizeVariant) -> Self {
        Self::new(variant.canvas_size())
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Inserts an element, replacing any existing element with the same id
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Removes an element by id, preserving the order of the rest
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        self.elements.shift_remove(id)
    }

    /// Keeps only the elements for which the predicate returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&Element) -> bool) {
        self.elements.retain(|_, element| keep(element));
    }

    /// Elements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Elements in paint order (ascending `z_index`)
    pub fn iter_by_z(&self) -> impl Iterator<Item = &Element> {
        let mut ordered: Vec<&Element> = self.elements.values().collect();
        ordered.sort_by_key(|element| element.z_index);
        ordered.into_iter()
    }

    /// The highest `z_index` in the scene, or 0 when empty
    pub fn max_z_index(&self) -> i64 {
        self.elements
            .values()
            .map(|element| element.z_index)
            .max()
            .unwrap_or(0)
    }

    /// The next free `z_index` for a newly synthesized element
    pub fn next_z_index(&self) -> i64 {
        self.max_z_index() + 1
    }

    /// Raises the given elements strictly above everything else.
    ///
    /// Each id present in the scene receives a fresh `z_index` above the
    /// prior maximum, in the order the ids are given; ids not present are
    /// skipped. Callers that want to preserve existing stacking within the
    /// raised set pass the ids sorted by their current `z_index`.
    pub fn bring_to_front(&mut self, ids: &[ElementId]) {
        let mut next = self.max_z_index();
        for id in ids {
            if let Some(element) = self.elements.get_mut(id) {
                next += 1;
                element.z_index = next;
            }
        }
    }
}

/// The complete design: one scene per size variant.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPair {
    pub compact: Scene,
    pub wide: Scene,
}

impl LayoutPair {
    /// An empty pair with the standard canvas sizes
    pub fn empty() -> Self {
        Self {
            compact: Scene::for_variant(SizeVariant::Compact),
            wide: Scene::for_variant(SizeVariant::Wide),
        }
    }

    pub fn scene(&self, variant: SizeVariant) -> &Scene {
        match variant {
            SizeVariant::Compact => &self.compact,
            SizeVariant::Wide => &self.wide,
        }
    }

    pub fn scene_mut(&mut self, variant: SizeVariant) -> &mut Scene {
        match variant {
            SizeVariant::Compact => &mut self.compact,
            SizeVariant::Wide => &mut self.wide,
        }
    }
}

impl Default for LayoutPair {
    fn default() -> Self {
        Self::empty()
    }
}
