//! Keepsake - a freeform card-layout engine.
//!
//! Editing, reconciliation, and display scaling for two-variant card
//! layouts. The [`Editor`] facade owns one [`LayoutPair`] plus the ephemeral
//! editing state (selection, in-flight gesture); rendering is a pure
//! function shared between the editing preview and the display surface.

pub mod error;
pub mod export;
pub mod interaction;
pub mod render;
pub mod selection;
pub mod sync;

pub use keepsake_core::{color, element, geometry, scene, theme};

pub use error::EditorError;

use log::{debug, info, warn};

use keepsake_core::element::ElementId;
use keepsake_core::geometry::{Point, Size};
use keepsake_core::scene::{LayoutPair, Scene, SizeVariant};

use export::LayoutRecord;
use interaction::{Handle, InteractionController, PointerGrab};
use render::{RenderStyle, RenderedScene};
use selection::SelectionState;
use sync::SyncInputs;

/// The editing session for one card design.
///
/// Owns both size-variant scenes and routes pointer events into the live
/// one. Every committed mutation leaves the full [`LayoutPair`] readable via
/// [`Editor::pair`] for the host to persist.
///
/// # Examples
///
/// ```
/// use keepsake::{Editor, sync::SyncInputs};
///
/// let inputs = SyncInputs {
///     photo_count: 3,
///     ..SyncInputs::default()
/// };
/// let editor = Editor::with_inputs(inputs);
///
/// // The compact scene holds the default scatter plus text and buttons.
/// assert_eq!(editor.scene().len(), 5);
///
/// let json = editor.to_json().expect("Failed to serialize layout");
/// let restored = Editor::from_json(&json, inputs);
/// assert_eq!(restored.pair(), editor.pair());
/// ```
pub struct Editor {
    pair: LayoutPair,
    variant: SizeVariant,
    selection: SelectionState,
    controller: InteractionController,
    inputs: SyncInputs,
    /// Whether the media card has been inserted this session, per variant.
    media_inserted: [bool; 2],
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Creates an empty session with default inputs (no photos, no link)
    pub fn new() -> Self {
        let mut editor = Self {
            pair: LayoutPair::empty(),
            variant: SizeVariant::Compact,
            selection: SelectionState::new(),
            controller: InteractionController::new(),
            inputs: SyncInputs::default(),
            media_inserted: [false, false],
        };
        editor.reconcile_all();
        editor
    }

    /// Resumes a session from a persisted record (or applies a preset).
    ///
    /// A scene that already contains the media card counts as having had it
    /// inserted, so reconciliation will not re-add it after a delete.
    pub fn from_record(record: &LayoutRecord, inputs: SyncInputs) -> Self {
        let pair = export::from_record(record);
        let media_inserted = [
            pair.compact.contains(&ElementId::media()),
            pair.wide.contains(&ElementId::media()),
        ];
        let mut editor = Self {
            pair,
            variant: SizeVariant::Compact,
            selection: SelectionState::new(),
            controller: InteractionController::new(),
            inputs,
            media_inserted,
        };
        editor.reconcile_all();
        editor
    }

    /// Resumes a session from persisted JSON.
    ///
    /// A malformed or empty payload never blocks editing: it falls back to
    /// the synthesized default layout for the given inputs.
    pub fn from_json(json: &str, inputs: SyncInputs) -> Self {
        match serde_json::from_str::<LayoutRecord>(json) {
            Ok(record) if !record.is_empty() => Self::from_record(&record, inputs),
            Ok(_) => {
                debug!("Empty layout record, using default scatter");
                Self::with_inputs(inputs)
            }
            Err(err) => {
                warn!(error:% = err; "Malformed layout record, using default scatter");
                Self::with_inputs(inputs)
            }
        }
    }

    /// A fresh session already reconciled against the given inputs
    pub fn with_inputs(inputs: SyncInputs) -> Self {
        let mut editor = Self::new();
        editor.set_inputs(inputs);
        editor
    }

    pub fn pair(&self) -> &LayoutPair {
        &self.pair
    }

    pub fn variant(&self) -> SizeVariant {
        self.variant
    }

    /// The scene currently live for editing
    pub fn scene(&self) -> &Scene {
        self.pair.scene(self.variant)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn inputs(&self) -> &SyncInputs {
        &self.inputs
    }

    /// Switches the live size variant.
    ///
    /// Selection is scoped to the variant being edited, so it clears; an
    /// in-flight gesture is force-cancelled (its geometry stays committed).
    pub fn set_variant(&mut self, variant: SizeVariant) {
        if variant == self.variant {
            return;
        }
        info!(variant:% = variant; "Switching size variant");
        self.controller.cancel();
        self.selection.clear();
        self.variant = variant;
    }

    /// Updates external content state and reconciles both variants
    pub fn set_inputs(&mut self, inputs: SyncInputs) {
        self.inputs = inputs;
        self.reconcile_all();
    }

    fn reconcile_all(&mut self) {
        for (slot, variant) in SizeVariant::ALL.into_iter().enumerate() {
            sync::reconcile(
                self.pair.scene_mut(variant),
                variant,
                &self.inputs,
                &mut self.media_inserted[slot],
            );
        }
    }

    /// Pointer-down on an element body
    pub fn pointer_down(
        &mut self,
        id: &ElementId,
        pointer: Point,
        toggle_modifier: bool,
        grab: PointerGrab,
    ) {
        self.controller.begin_drag(
            self.pair.scene_mut(self.variant),
            &mut self.selection,
            id,
            pointer,
            toggle_modifier,
            grab,
        );
    }

    /// Pointer-down on the primary element's rotate handle
    pub fn rotate_handle_down(&mut self, pointer: Point, grab: PointerGrab) {
        let Some(primary) = self.selection.primary().cloned() else {
            return;
        };
        self.controller.begin_rotate(
            self.pair.scene(self.variant),
            &mut self.selection,
            &primary,
            pointer,
            grab,
        );
    }

    /// Pointer-down on one of the primary element's resize handles
    pub fn resize_handle_down(&mut self, handle: Handle, pointer: Point, grab: PointerGrab) {
        let Some(primary) = self.selection.primary().cloned() else {
            return;
        };
        self.controller.begin_resize(
            self.pair.scene(self.variant),
            &mut self.selection,
            &primary,
            handle,
            pointer,
            grab,
        );
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        self.controller
            .pointer_move(self.pair.scene_mut(self.variant), pointer);
    }

    pub fn pointer_up(&mut self, pointer: Point) {
        self.controller
            .pointer_up(self.pair.scene(self.variant), &mut self.selection, pointer);
    }

    /// Forced gesture cancellation (loss of pointer tracking)
    pub fn cancel_gesture(&mut self) {
        self.controller.cancel();
    }

    /// Click on empty canvas area
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Removes every selected element and clears the selection
    pub fn delete_selection(&mut self) {
        self.controller.cancel();
        let doomed: Vec<ElementId> = self.selection.ids().cloned().collect();
        let scene = self.pair.scene_mut(self.variant);
        for id in &doomed {
            scene.remove(id);
        }
        debug!(count = doomed.len(); "Deleted selection");
        self.selection.clear();
    }

    /// Renders the live scene for a viewport
    pub fn render(&self, viewport: Size, style: &RenderStyle) -> RenderedScene {
        render::render(self.scene(), viewport, style)
    }

    /// Renders either scene, independent of which is live
    pub fn render_variant(
        &self,
        variant: SizeVariant,
        viewport: Size,
        style: &RenderStyle,
    ) -> RenderedScene {
        render::render(self.pair.scene(variant), viewport, style)
    }

    /// The canonical record for persistence
    pub fn to_record(&self) -> LayoutRecord {
        export::to_record(&self.pair)
    }

    /// The canonical JSON form for persistence
    pub fn to_json(&self) -> Result<String, EditorError> {
        export::to_json(&self.pair)
    }
}
