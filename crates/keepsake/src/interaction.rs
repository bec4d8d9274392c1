//! Pointer-driven gesture state machine.
//!
//! The controller translates raw pointer-down/move/up sequences into geometry
//! mutations on the live scene. At most one gesture (drag, rotate, resize) is
//! active at a time; starting a new one always supersedes whatever was in
//! progress. Geometry is committed as it is computed, move by move; releasing
//! or cancelling a gesture discards nothing.
//!
//! Host pointer listeners live exactly as long as a gesture: each gesture
//! start takes a [`PointerGrab`], and its release callback runs on every exit
//! path (pointer up, cancellation, supersession, variant switch).

use log::{debug, trace};

use keepsake_core::element::ElementId;
use keepsake_core::geometry::{Frame, Point};
use keepsake_core::scene::Scene;

use crate::selection::SelectionState;

/// Net pointer displacement below which a press-release counts as a click.
pub const CLICK_THRESHOLD: f32 = 3.0;

/// Pointer displacement required before rotation starts tracking.
pub const ROTATE_THRESHOLD: f32 = 5.0;

/// Minimum element width and height, enforced by every resize path.
pub const MIN_ELEMENT_SIZE: f32 = 50.0;

/// A scoped hold on the host's global pointer listeners.
///
/// The release callback runs exactly once, when the grab is dropped. The
/// controller drops its grab on every gesture exit path, so hosts can attach
/// listener teardown here without tracking gesture state themselves.
pub struct PointerGrab {
    release: Option<Box<dyn FnMut()>>,
}

impl PointerGrab {
    pub fn new(release: impl FnMut() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A grab with no release action, for hosts without global listeners
    pub fn untracked() -> Self {
        Self { release: None }
    }
}

impl Drop for PointerGrab {
    fn drop(&mut self) {
        if let Some(mut release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for PointerGrab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerGrab")
            .field("tracked", &self.release.is_some())
            .finish()
    }
}

/// One of the eight resize handles of the primary element.
///
/// Aspect-locked kinds expose only the four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Handle {
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Handle::NorthEast | Handle::NorthWest | Handle::SouthEast | Handle::SouthWest
        )
    }

    /// Whether dragging this handle moves the west (left) edge
    fn moves_west_edge(self) -> bool {
        matches!(self, Handle::West | Handle::NorthWest | Handle::SouthWest)
    }

    /// Whether dragging this handle moves the north (top) edge
    fn moves_north_edge(self) -> bool {
        matches!(self, Handle::North | Handle::NorthWest | Handle::NorthEast)
    }

    fn affects_width(self) -> bool {
        !matches!(self, Handle::North | Handle::South)
    }

    fn affects_height(self) -> bool {
        !matches!(self, Handle::East | Handle::West)
    }
}

/// Which gesture, if any, is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Idle,
    Dragging,
    Rotating,
    Resizing,
}

enum Gesture {
    Idle,
    Dragging {
        start_pointer: Point,
        /// Drag targets with their starting origins, in raised order.
        targets: Vec<(ElementId, Point)>,
        pressed: ElementId,
        /// Pressed element was already part of a multi-selection; a click
        /// (not a drag) collapses the selection to it on release.
        collapse_on_click: bool,
    },
    Rotating {
        id: ElementId,
        center: Point,
        start_pointer: Point,
        start_angle: f32,
        start_rotation: f32,
        /// Set once the pointer has moved past the activation threshold.
        active: bool,
    },
    Resizing {
        id: ElementId,
        handle: Handle,
        start_pointer: Point,
        start_frame: Frame,
    },
}

/// The pointer gesture state machine.
///
/// All mutation entry points take the live scene and selection by reference;
/// the controller itself holds only gesture state and the current
/// [`PointerGrab`].
pub struct InteractionController {
    gesture: Gesture,
    grab: Option<PointerGrab>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
            grab: None,
        }
    }

    pub fn gesture_kind(&self) -> GestureKind {
        match self.gesture {
            Gesture::Idle => GestureKind::Idle,
            Gesture::Dragging { .. } => GestureKind::Dragging,
            Gesture::Rotating { .. } => GestureKind::Rotating,
            Gesture::Resizing { .. } => GestureKind::Resizing,
        }
    }

    /// Pointer-down on an element body.
    ///
    /// Computes the drag target set from the modifier and current selection:
    /// a modifier press toggles the element in the selection; a plain press
    /// on a member of a multi-selection keeps the whole group as targets; a
    /// plain press on an unselected element selects only it. All targets are
    /// raised above the scene's prior z maximum, keeping their stacking
    /// order.
    pub fn begin_drag(
        &mut self,
        scene: &mut Scene,
        selection: &mut SelectionState,
        id: &ElementId,
        pointer: Point,
        toggle_modifier: bool,
        grab: PointerGrab,
    ) {
        self.supersede(grab);

        if !scene.contains(id) {
            self.release();
            return;
        }

        let was_selected = selection.contains(id);
        let collapse_on_click = !toggle_modifier && was_selected && selection.len() > 1;

        if toggle_modifier {
            selection.toggle(id.clone());
            if !selection.contains(id) {
                // Toggled out: the press deselected, nothing to drag.
                self.release();
                return;
            }
        } else if !was_selected {
            selection.select_only(id.clone());
        }

        // Raise targets in their current stacking order.
        let mut target_ids: Vec<ElementId> = selection.ids().cloned().collect();
        target_ids.sort_by_key(|target| scene.get(target).map_or(i64::MAX, |e| e.z_index));
        scene.bring_to_front(&target_ids);

        let targets = target_ids
            .into_iter()
            .filter_map(|target| {
                let origin = scene.get(&target)?.frame.origin();
                Some((target, origin))
            })
            .collect();

        debug!(id:% = id, modifier = toggle_modifier; "Drag started");
        self.gesture = Gesture::Dragging {
            start_pointer: pointer,
            targets,
            pressed: id.clone(),
            collapse_on_click,
        };
    }

    /// Pointer-down on the primary element's rotate handle.
    ///
    /// Selection collapses to the element. Rotation does not track until the
    /// pointer moves past [`ROTATE_THRESHOLD`].
    pub fn begin_rotate(
        &mut self,
        scene: &Scene,
        selection: &mut SelectionState,
        id: &ElementId,
        pointer: Point,
        grab: PointerGrab,
    ) {
        self.supersede(grab);

        let Some(element) = scene.get(id) else {
            self.release();
            return;
        };
        selection.select_only(id.clone());

        let center = element.frame.center();
        debug!(id:% = id; "Rotate started");
        self.gesture = Gesture::Rotating {
            id: id.clone(),
            center,
            start_pointer: pointer,
            start_angle: center.angle_to_degrees(pointer),
            start_rotation: element.frame.rotation,
            active: false,
        };
    }

    /// Pointer-down on one of the primary element's resize handles.
    ///
    /// Selection collapses to the element. Edge handles on aspect-locked
    /// kinds do not exist; a stray press on one is ignored.
    pub fn begin_resize(
        &mut self,
        scene: &Scene,
        selection: &mut SelectionState,
        id: &ElementId,
        handle: Handle,
        pointer: Point,
        grab: PointerGrab,
    ) {
        self.supersede(grab);

        let Some(element) = scene.get(id) else {
            self.release();
            return;
        };
        if element.kind.aspect_locked() && !handle.is_corner() {
            self.release();
            return;
        }
        selection.select_only(id.clone());

        debug!(id:% = id, handle:? = handle; "Resize started");
        self.gesture = Gesture::Resizing {
            id: id.clone(),
            handle,
            start_pointer: pointer,
            start_frame: element.frame,
        };
    }

    /// Pointer-move while a gesture is active; a no-op when idle.
    ///
    /// A gesture whose target was deleted mid-gesture mutates nothing;
    /// missing members of a drag group are skipped individually.
    pub fn pointer_move(&mut self, scene: &mut Scene, pointer: Point) {
        let canvas = scene.canvas();
        match &mut self.gesture {
            Gesture::Idle => {}

            Gesture::Dragging {
                start_pointer,
                targets,
                ..
            } => {
                let delta = pointer.sub(*start_pointer);
                for (id, start_origin) in targets.iter() {
                    let Some(element) = scene.get_mut(id) else {
                        continue;
                    };
                    // Each member clamps on its own; siblings keep moving.
                    let moved = start_origin.add(delta);
                    element.frame.x = moved.x;
                    element.frame.y = moved.y;
                    element.frame = element.frame.clamp_to_canvas(canvas);
                }
                trace!(dx = delta.x, dy = delta.y; "Drag moved");
            }

            Gesture::Rotating {
                id,
                center,
                start_pointer,
                start_angle,
                start_rotation,
                active,
            } => {
                if !*active {
                    if pointer.distance_to(*start_pointer) <= ROTATE_THRESHOLD {
                        return;
                    }
                    *active = true;
                }
                let Some(element) = scene.get_mut(id) else {
                    return;
                };
                let angle = center.angle_to_degrees(pointer);
                // Unbounded; normalized only at paint time.
                element.frame.rotation = *start_rotation + (angle - *start_angle);
            }

            Gesture::Resizing {
                id,
                handle,
                start_pointer,
                start_frame,
            } => {
                let Some(element) = scene.get(id) else {
                    return;
                };
                let delta = pointer.sub(*start_pointer);
                let resized = if element.kind.aspect_locked() {
                    resize_aspect_locked(*start_frame, *handle, delta)
                } else {
                    resize_free(*start_frame, *handle, delta)
                };
                if let Some(element) = scene.get_mut(id) {
                    element.frame = resized.clamp_to_canvas(canvas);
                }
            }
        }
    }

    /// Pointer-up: commits click-vs-drag selection semantics and goes idle.
    ///
    /// A press-release whose net displacement stayed under [`CLICK_THRESHOLD`]
    /// is a click: on a member of a multi-selection it collapses the
    /// selection to that element, leaving geometry untouched.
    pub fn pointer_up(
        &mut self,
        scene: &Scene,
        selection: &mut SelectionState,
        pointer: Point,
    ) {
        if let Gesture::Dragging {
            start_pointer,
            pressed,
            collapse_on_click,
            ..
        } = &self.gesture
        {
            let was_click = pointer.distance_to(*start_pointer) < CLICK_THRESHOLD;
            if was_click && *collapse_on_click && scene.contains(pressed) {
                selection.select_only(pressed.clone());
            }
        }
        self.release();
    }

    /// Forced cancellation: loss of pointer tracking or a variant switch.
    /// Whatever geometry was last computed stays committed.
    pub fn cancel(&mut self) {
        if !matches!(self.gesture, Gesture::Idle) {
            debug!("Gesture cancelled");
        }
        self.release();
    }

    /// Drops the old grab (releasing its listeners) and installs the new one.
    fn supersede(&mut self, grab: PointerGrab) {
        self.grab = Some(grab);
    }

    fn release(&mut self) {
        self.gesture = Gesture::Idle;
        self.grab = None;
    }
}

/// Resize without aspect constraints: edge handles move one axis, corner
/// handles two. The west/north edges compensate position so the opposite
/// edge stays put, including when the size floor cuts the requested delta.
fn resize_free(start: Frame, handle: Handle, delta: Point) -> Frame {
    let mut frame = start;

    if handle.affects_width() {
        let requested = if handle.moves_west_edge() {
            start.width - delta.x
        } else {
            start.width + delta.x
        };
        frame.width = requested.max(MIN_ELEMENT_SIZE);
        if handle.moves_west_edge() {
            frame.x = start.x + (start.width - frame.width);
        }
    }

    if handle.affects_height() {
        let requested = if handle.moves_north_edge() {
            start.height - delta.y
        } else {
            start.height + delta.y
        };
        frame.height = requested.max(MIN_ELEMENT_SIZE);
        if handle.moves_north_edge() {
            frame.y = start.y + (start.height - frame.height);
        }
    }

    frame
}

/// Corner resize preserving the starting aspect ratio.
///
/// The axis with the larger absolute pointer displacement drives; the other
/// dimension is derived from the original ratio. The size floor applies to
/// both dimensions, so the driving one is floored high enough that the
/// derived one never dips below the minimum.
fn resize_aspect_locked(start: Frame, handle: Handle, delta: Point) -> Frame {
    let aspect = start.size().aspect_ratio();
    let mut frame = start;

    if delta.x.abs() > delta.y.abs() {
        let requested = if handle.moves_west_edge() {
            start.width - delta.x
        } else {
            start.width + delta.x
        };
        frame.width = requested.max(MIN_ELEMENT_SIZE).max(MIN_ELEMENT_SIZE * aspect);
        frame.height = frame.width / aspect;
    } else {
        let requested = if handle.moves_north_edge() {
            start.height - delta.y
        } else {
            start.height + delta.y
        };
        frame.height = requested.max(MIN_ELEMENT_SIZE).max(MIN_ELEMENT_SIZE / aspect);
        frame.width = frame.height * aspect;
    }

    if handle.moves_west_edge() {
        frame.x = start.x + (start.width - frame.width);
    }
    if handle.moves_north_edge() {
        frame.y = start.y + (start.height - frame.height);
    }

    frame
}
