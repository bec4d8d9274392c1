//! Export: the canonical layout record and the SVG preview backend.
//!
//! The record shape defined here is the one persistence format. Any storage
//! or transport layer must round-trip it exactly, real-valued geometry
//! included, to reproduce a pixel-identical layout later. Kinds are carried
//! as wire-name strings so records written by newer versions survive a trip
//! through this one.

/// SVG preview backend.
pub mod svg;

use serde::{Deserialize, Serialize};

use keepsake_core::element::{Element, ElementId, ElementKind};
use keepsake_core::geometry::Frame;
use keepsake_core::scene::{LayoutPair, Scene, SizeVariant};

use crate::error::EditorError;

/// One element as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    pub z_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_index: Option<usize>,
}

impl From<&Element> for ElementRecord {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id.to_string(),
            kind: element.kind.wire_name().to_string(),
            x: element.frame.x,
            y: element.frame.y,
            width: element.frame.width,
            height: element.frame.height,
            rotation: element.frame.rotation,
            z_index: element.z_index,
            photo_index: element.photo_index,
        }
    }
}

impl From<&ElementRecord> for Element {
    fn from(record: &ElementRecord) -> Self {
        Self {
            id: ElementId::new(record.id.clone()),
            kind: ElementKind::from_wire_name(&record.kind),
            frame: Frame::new(record.x, record.y, record.width, record.height)
                .with_rotation(record.rotation),
            z_index: record.z_index,
            photo_index: record.photo_index,
        }
    }
}

/// The complete design as persisted: both variants together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecord {
    pub compact: Vec<ElementRecord>,
    pub wide: Vec<ElementRecord>,
}

impl LayoutRecord {
    pub fn is_empty(&self) -> bool {
        self.compact.is_empty() && self.wide.is_empty()
    }
}

fn scene_to_records(scene: &Scene) -> Vec<ElementRecord> {
    scene.iter().map(ElementRecord::from).collect()
}

fn records_to_scene(records: &[ElementRecord], variant: SizeVariant) -> Scene {
    let mut scene = Scene::for_variant(variant);
    for record in records {
        scene.insert(Element::from(record));
    }
    scene
}

/// Serializes a layout pair into the canonical record shape
pub fn to_record(pair: &LayoutPair) -> LayoutRecord {
    LayoutRecord {
        compact: scene_to_records(&pair.compact),
        wide: scene_to_records(&pair.wide),
    }
}

/// Rebuilds a layout pair from a record
pub fn from_record(record: &LayoutRecord) -> LayoutPair {
    LayoutPair {
        compact: records_to_scene(&record.compact, SizeVariant::Compact),
        wide: records_to_scene(&record.wide, SizeVariant::Wide),
    }
}

/// Serializes a layout pair to the canonical JSON form
pub fn to_json(pair: &LayoutPair) -> Result<String, EditorError> {
    Ok(serde_json::to_string_pretty(&to_record(pair))?)
}

/// Parses the canonical JSON form into a layout pair
pub fn from_json(json: &str) -> Result<LayoutPair, EditorError> {
    let record: LayoutRecord = serde_json::from_str(json)?;
    Ok(from_record(&record))
}

/// Errors that can occur while writing an export.
///
/// Converted into [`EditorError::Export`] at the crate boundary.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use keepsake_core::scene::SizeVariant;

    use super::*;
    use crate::sync::{reconcile, SyncInputs};

    fn populated_pair() -> LayoutPair {
        let mut pair = LayoutPair::empty();
        let inputs = SyncInputs {
            photo_count: 3,
            has_media_link: true,
            ..SyncInputs::default()
        };
        for variant in SizeVariant::ALL {
            let mut media = false;
            reconcile(pair.scene_mut(variant), variant, &inputs, &mut media);
        }
        // Give one element a non-trivial geometry so the round trip is not
        // just defaults.
        let photo = pair.compact.get_mut(&ElementId::photo(1)).unwrap();
        photo.frame = Frame::new(12.5, 301.25, 87.5, 87.5).with_rotation(-17.3);
        photo.z_index = 42;
        pair
    }

    #[test]
    fn test_json_round_trip_is_exact() {
        let pair = populated_pair();
        let json = to_json(&pair).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, pair);
    }

    #[test]
    fn test_record_uses_wire_names() {
        let pair = populated_pair();
        let json = to_json(&pair).unwrap();
        assert!(json.contains("\"type\": \"photo\""));
        assert!(json.contains("\"type\": \"buttons\""));
        assert!(json.contains("\"zIndex\""));
        assert!(json.contains("\"photoIndex\""));
    }

    #[test]
    fn test_unknown_kind_round_trips_unchanged() {
        let mut pair = LayoutPair::empty();
        pair.compact.insert(Element {
            id: ElementId::from("sticker-1"),
            kind: ElementKind::Unknown("sticker".to_string()),
            frame: Frame::new(5.0, 5.0, 60.0, 60.0),
            z_index: 1,
            photo_index: None,
        });

        let json = to_json(&pair).unwrap();
        assert!(json.contains("\"type\": \"sticker\""));
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, pair);
    }

    #[test]
    fn test_photo_index_absent_for_non_photos() {
        let mut pair = LayoutPair::empty();
        pair.compact.insert(Element::new(
            ElementId::text(),
            ElementKind::Text,
            Frame::new(10.0, 220.0, 200.0, 60.0),
            1,
        ));
        let json = to_json(&pair).unwrap();
        assert!(!json.contains("photoIndex"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(from_json("{\"compact\": 3}").is_err());
        assert!(from_json("not json").is_err());
    }
}
