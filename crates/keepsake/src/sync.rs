//! Layout synchronizer: reconciling a scene against external content.
//!
//! Reconciliation runs independently per size variant whenever the external
//! photo count or media-link presence changes. It only ever synthesizes
//! missing elements and removes stale photo slots; elements the user has
//! already placed keep their geometry untouched, and kinds this version does
//! not recognize pass through unchanged.

use log::debug;

use keepsake_core::element::{Element, ElementId, ElementKind};
use keepsake_core::geometry::Frame;
use keepsake_core::scene::{Scene, SizeVariant};

/// Allowed range for authoring-mode placeholder slots.
pub const PLACEHOLDER_RANGE: std::ops::RangeInclusive<usize> = 1..=10;

/// Operating mode for reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Photo slots track the externally supplied photo list
    Normal,
    /// Photo slots are synthetic placeholders, independent of any photo list
    Authoring { placeholder_count: usize },
}

impl SyncMode {
    /// Authoring mode with the placeholder count clamped to `1..=10`
    pub fn authoring(placeholder_count: usize) -> Self {
        SyncMode::Authoring {
            placeholder_count: placeholder_count
                .clamp(*PLACEHOLDER_RANGE.start(), *PLACEHOLDER_RANGE.end()),
        }
    }
}

/// The external content state a scene is reconciled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncInputs {
    /// Length of the external photo list (ignored in authoring mode)
    pub photo_count: usize,
    /// Whether the media link is currently non-empty
    pub has_media_link: bool,
    pub mode: SyncMode,
}

impl Default for SyncInputs {
    fn default() -> Self {
        Self {
            photo_count: 0,
            has_media_link: false,
            mode: SyncMode::Normal,
        }
    }
}

impl SyncInputs {
    /// Number of photo slots the scene should hold
    fn slot_count(&self) -> usize {
        match self.mode {
            SyncMode::Normal => self.photo_count,
            SyncMode::Authoring { placeholder_count } => placeholder_count,
        }
    }
}

/// The deterministic scatter position for photo slot `index`.
///
/// Compact scenes stack photos in two columns with alternating ±5° tilt;
/// wide scenes use a four-column grid with alternating ±3°.
pub fn scatter_frame(variant: SizeVariant, index: usize) -> Frame {
    match variant {
        SizeVariant::Compact => {
            let x = 30.0 + (index % 2) as f32 * 80.0;
            let y = 50.0 + (index / 2) as f32 * 90.0;
            let tilt = if index % 2 == 0 { -5.0 } else { 5.0 };
            Frame::new(x, y, 70.0, 70.0).with_rotation(tilt)
        }
        SizeVariant::Wide => {
            let x = 60.0 + (index % 4) as f32 * 120.0;
            let y = 60.0 + (index / 4) as f32 * 130.0;
            let tilt = if index % 2 == 0 { -3.0 } else { 3.0 };
            Frame::new(x, y, 90.0, 90.0).with_rotation(tilt)
        }
    }
}

/// Default frame for the message text block.
///
/// The compact layout leaves room for the photo scatter above; with no
/// photos the text moves up to fill the gap.
fn default_text_frame(variant: SizeVariant, has_photos: bool) -> Frame {
    match variant {
        SizeVariant::Compact if has_photos => Frame::new(10.0, 220.0, 200.0, 60.0),
        SizeVariant::Compact => Frame::new(10.0, 120.0, 200.0, 60.0),
        SizeVariant::Wide => Frame::new(300.0, 180.0, 200.0, 60.0),
    }
}

/// Default frame for the yes/no button pair.
fn default_actions_frame(variant: SizeVariant, has_photos: bool) -> Frame {
    match variant {
        SizeVariant::Compact if has_photos => Frame::new(30.0, 290.0, 160.0, 40.0),
        SizeVariant::Compact => Frame::new(30.0, 190.0, 160.0, 40.0),
        SizeVariant::Wide => Frame::new(320.0, 260.0, 160.0, 40.0),
    }
}

/// Default frame for the media-embed card.
fn default_media_frame(variant: SizeVariant) -> Frame {
    match variant {
        SizeVariant::Compact => Frame::new(10.0, 350.0, 200.0, 60.0),
        SizeVariant::Wide => Frame::new(300.0, 340.0, 200.0, 60.0),
    }
}

/// Reconciles one scene against the current external inputs.
///
/// `media_inserted` is session state owned by the caller: it records whether
/// the media card has already been inserted into this scene this session.
/// The card is inserted the first time a link becomes non-empty and is never
/// auto-removed afterward, so clearing and re-adding the link keeps whatever
/// position the user gave it. Authoring mode keeps the card present
/// unconditionally.
pub fn reconcile(
    scene: &mut Scene,
    variant: SizeVariant,
    inputs: &SyncInputs,
    media_inserted: &mut bool,
) {
    let slot_count = inputs.slot_count();

    // Stale photo slots go first so their z-indexes are freed before any
    // synthesis below.
    scene.retain(|element| {
        let stale = element.kind == ElementKind::Photo
            && element.photo_index.is_some_and(|index| index >= slot_count);
        if stale {
            debug!(id:% = element.id; "Removing stale photo slot");
        }
        !stale
    });

    for index in 0..slot_count {
        let id = ElementId::photo(index);
        if !scene.contains(&id) {
            let z = scene.next_z_index();
            scene.insert(Element::photo(index, scatter_frame(variant, index), z));
        }
    }

    let insert_media = match inputs.mode {
        SyncMode::Authoring { .. } => true,
        SyncMode::Normal => inputs.has_media_link && !*media_inserted,
    };
    if insert_media && !scene.contains(&ElementId::media()) {
        let z = scene.next_z_index();
        scene.insert(Element::new(
            ElementId::media(),
            ElementKind::MediaEmbed,
            default_media_frame(variant),
            z,
        ));
        *media_inserted = true;
    }

    let has_photos = slot_count > 0;
    if !scene.contains(&ElementId::text()) {
        let z = scene.next_z_index();
        scene.insert(Element::new(
            ElementId::text(),
            ElementKind::Text,
            default_text_frame(variant, has_photos),
            z,
        ));
    }
    if !scene.contains(&ElementId::actions()) {
        let z = scene.next_z_index();
        scene.insert(Element::new(
            ElementId::actions(),
            ElementKind::ActionGroup,
            default_actions_frame(variant, has_photos),
            z,
        ));
    }
}
