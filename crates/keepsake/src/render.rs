//! Renderer and scaling engine.
//!
//! Rendering is a pure function of (scene, viewport, style): it produces the
//! same [`RenderedScene`] wherever it is invoked, which is what keeps the
//! editing preview and the public display surface pixel-faithful to each
//! other. Geometry stays in canvas units; the single uniform [`scale_factor`]
//! maps the whole canvas into the viewport.
//!
//! Cosmetic sizes (text font, button padding) scale with the element's own
//! width against a fixed reference width, not with the canvas scale, so an
//! element widened by the user gets bigger type on every surface.

use log::debug;

use keepsake_core::element::{ElementId, ElementKind};
use keepsake_core::geometry::{Frame, Size};
use keepsake_core::scene::Scene;
use keepsake_core::theme::Theme;

/// Reference width for text font scaling.
const TEXT_REFERENCE_WIDTH: f32 = 200.0;

/// Reference width for action-group cosmetic scaling.
const ACTIONS_REFERENCE_WIDTH: f32 = 160.0;

/// Media card height below which the compact visual density is used.
const MEDIA_DENSE_HEIGHT: f32 = 120.0;

/// User-adjustable base font size bounds and step.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 8.0..=48.0;
pub const FONT_SIZE_STEP: f32 = 2.0;

/// Steps the base font size by whole increments, clamped to its bounds
pub fn step_font_size(current: f32, steps: i32) -> f32 {
    (current + steps as f32 * FONT_SIZE_STEP).clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

/// Uniform canvas-to-viewport scale, preserving aspect ratio
pub fn scale_factor(canvas: Size, viewport: Size) -> f32 {
    (viewport.width / canvas.width).min(viewport.height / canvas.height)
}

/// External media metadata joined in at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfo {
    pub url: String,
    pub title: Option<String>,
}

/// The cosmetic and content inputs rendering needs beyond the scene itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub theme: Theme,
    /// Opaque font identifier, passed through to the output
    pub font_family: String,
    pub base_font_size: f32,
    pub message: String,
    /// Opaque image references addressed by `photo_index`
    pub photos: Vec<String>,
    pub media: Option<MediaInfo>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_family: "sans-serif".to_string(),
            base_font_size: 16.0,
            message: String::new(),
            photos: Vec::new(),
            media: None,
        }
    }
}

/// Kind-specific visual content of a rendered element.
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Photo {
        reference: String,
    },
    Text {
        content: String,
        font_family: String,
        font_size: f32,
    },
    ActionGroup {
        font_size: f32,
        padding_x: f32,
        padding_y: f32,
        gap: f32,
    },
    MediaEmbed {
        media: Option<MediaInfo>,
        /// Compact visual density for short cards
        dense: bool,
    },
}

/// One element ready to paint: canvas-unit frame, normalized rotation,
/// resolved visual content.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedElement {
    pub id: ElementId,
    /// Frame in canvas units; multiply by the scene scale for pixels.
    pub frame: Frame,
    /// Rotation normalized into `[0, 360)`, applied around the frame center.
    pub rotation: f32,
    pub visual: Visual,
}

/// The full paint description of one scene at one viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedScene {
    pub canvas: Size,
    /// Uniform canvas-to-viewport scale factor
    pub scale: f32,
    pub theme: Theme,
    /// Elements in paint order (ascending z)
    pub elements: Vec<RenderedElement>,
}

/// Renders a scene for a viewport.
///
/// Elements that cannot paint are skipped without error: photo elements
/// whose index points past the photo list, and kinds this version does not
/// recognize. Both stay in the scene; they are dropped from paint only.
pub fn render(scene: &Scene, viewport: Size, style: &RenderStyle) -> RenderedScene {
    let scale = scale_factor(scene.canvas(), viewport);
    let mut elements = Vec::with_capacity(scene.len());

    for element in scene.iter_by_z() {
        let visual = match &element.kind {
            ElementKind::Photo => {
                let reference = element
                    .photo_index
                    .and_then(|index| style.photos.get(index));
                match reference {
                    Some(reference) => Visual::Photo {
                        reference: reference.clone(),
                    },
                    None => {
                        debug!(id:% = element.id; "Skipping photo with stale index");
                        continue;
                    }
                }
            }
            ElementKind::Text => Visual::Text {
                content: style.message.clone(),
                font_family: style.font_family.clone(),
                font_size: text_font_size(style.base_font_size, element.frame.width),
            },
            ElementKind::ActionGroup => action_group_visual(element.frame.width),
            ElementKind::MediaEmbed => Visual::MediaEmbed {
                media: style.media.clone(),
                dense: element.frame.height < MEDIA_DENSE_HEIGHT,
            },
            ElementKind::Unknown(name) => {
                debug!(id:% = element.id, kind:% = name; "Skipping unknown element kind");
                continue;
            }
        };

        elements.push(RenderedElement {
            id: element.id.clone(),
            frame: element.frame,
            rotation: element.frame.paint_rotation(),
            visual,
        });
    }

    RenderedScene {
        canvas: scene.canvas(),
        scale,
        theme: style.theme,
        elements,
    }
}

/// Text font size scales with the element's own width against a 200-unit
/// reference, clamped to the same bounds as the user-adjustable base.
fn text_font_size(base: f32, width: f32) -> f32 {
    (base * width / TEXT_REFERENCE_WIDTH).clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

/// Every action-group cosmetic value scales with width / 160, each clamped
/// to its own bounds.
fn action_group_visual(width: f32) -> Visual {
    let k = width / ACTIONS_REFERENCE_WIDTH;
    Visual::ActionGroup {
        font_size: (12.0 * k).clamp(8.0, 20.0),
        padding_x: (20.0 * k).clamp(8.0, 32.0),
        padding_y: (6.0 * k).clamp(3.0, 12.0),
        gap: (12.0 * k).clamp(4.0, 24.0),
    }
}
