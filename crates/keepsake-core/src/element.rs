//! Card elements: the positioned visual units of a layout.
//!
//! An [`Element`] couples a [`Frame`] with a visual [`ElementKind`] and a
//! paint-order `z_index`. Elements carry no visual content themselves; photo
//! bytes, message text, and media metadata live outside the layout and are
//! joined in at render time.

use std::fmt;

use crate::geometry::Frame;

/// Stable element identifier, unique within one scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The conventional id for the photo element at `index`
    pub fn photo(index: usize) -> Self {
        Self(format!("photo-{index}"))
    }

    /// The conventional id for the single text element
    pub fn text() -> Self {
        Self("text-1".to_string())
    }

    /// The conventional id for the single action-button pair
    pub fn actions() -> Self {
        Self("buttons-1".to_string())
    }

    /// The conventional id for the media-embed card
    pub fn media() -> Self {
        Self("media-1".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The visual kind of an element.
///
/// The four known kinds are a closed set as far as editing is concerned.
/// `Unknown` exists for forward compatibility with records written by newer
/// versions: an unrecognized wire name round-trips through [`wire_name`]
/// unchanged, is preserved by reconciliation, and is skipped at paint time.
///
/// [`wire_name`]: ElementKind::wire_name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// A photo from the externally supplied photo list
    Photo,
    /// The media-embed card (song link preview)
    MediaEmbed,
    /// The single message text block
    Text,
    /// The yes/no action-button pair
    ActionGroup,
    /// Anything this version does not recognize; carries its wire name
    Unknown(String),
}

impl ElementKind {
    /// The name this kind uses in the exported record shape
    pub fn wire_name(&self) -> &str {
        match self {
            ElementKind::Photo => "photo",
            ElementKind::MediaEmbed => "media",
            ElementKind::Text => "text",
            ElementKind::ActionGroup => "buttons",
            ElementKind::Unknown(name) => name,
        }
    }

    /// Parses a wire name; anything unrecognized becomes `Unknown`
    pub fn from_wire_name(name: &str) -> Self {
        match name {
            "photo" => ElementKind::Photo,
            "media" => ElementKind::MediaEmbed,
            "text" => ElementKind::Text,
            "buttons" => ElementKind::ActionGroup,
            other => ElementKind::Unknown(other.to_string()),
        }
    }

    /// Whether corner resizing must preserve the element's aspect ratio.
    ///
    /// Aspect-locked kinds expose only the four corner handles; the others
    /// expose all eight.
    pub fn aspect_locked(&self) -> bool {
        matches!(self, ElementKind::Photo)
    }
}

/// One positioned visual unit of a card layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub frame: Frame,
    /// Paint/interaction order; unique within a scene, higher paints later.
    pub z_index: i64,
    /// Position in the external photo list; present only on `Photo` elements.
    pub photo_index: Option<usize>,
}

impl Element {
    /// Creates a non-photo element
    pub fn new(id: ElementId, kind: ElementKind, frame: Frame, z_index: i64) -> Self {
        Self {
            id,
            kind,
            frame,
            z_index,
            photo_index: None,
        }
    }

    /// Creates a photo element referencing `photo_index` in the external list
    pub fn photo(index: usize, frame: Frame, z_index: i64) -> Self {
        Self {
            id: ElementId::photo(index),
            kind: ElementKind::Photo,
            frame,
            z_index,
            photo_index: Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Frame;

    #[test]
    fn test_conventional_ids() {
        assert_eq!(ElementId::photo(0).as_str(), "photo-0");
        assert_eq!(ElementId::photo(7).as_str(), "photo-7");
        assert_eq!(ElementId::text().as_str(), "text-1");
        assert_eq!(ElementId::actions().as_str(), "buttons-1");
        assert_eq!(ElementId::media().as_str(), "media-1");
    }

    #[test]
    fn test_wire_name_round_trip() {
        for name in ["photo", "media", "text", "buttons"] {
            let kind = ElementKind::from_wire_name(name);
            assert!(!matches!(kind, ElementKind::Unknown(_)));
            assert_eq!(kind.wire_name(), name);
        }
    }

    #[test]
    fn test_unknown_kind_preserves_name() {
        let kind = ElementKind::from_wire_name("sticker");
        assert_eq!(kind, ElementKind::Unknown("sticker".to_string()));
        assert_eq!(kind.wire_name(), "sticker");
    }

    #[test]
    fn test_only_photos_are_aspect_locked() {
        assert!(ElementKind::Photo.aspect_locked());
        assert!(!ElementKind::Text.aspect_locked());
        assert!(!ElementKind::ActionGroup.aspect_locked());
        assert!(!ElementKind::MediaEmbed.aspect_locked());
        assert!(!ElementKind::Unknown("sticker".into()).aspect_locked());
    }

    #[test]
    fn test_photo_constructor_sets_index() {
        let element = Element::photo(2, Frame::new(30.0, 50.0, 70.0, 70.0), 3);
        assert_eq!(element.photo_index, Some(2));
        assert_eq!(element.kind, ElementKind::Photo);
        assert_eq!(element.id, ElementId::photo(2));
    }
}
