//! Configuration types for keepsake display rendering.
//!
//! The layout JSON carries geometry only; everything cosmetic — theme, font,
//! message text, photo references, media metadata — comes from a TOML
//! configuration file. All sections are optional and default sensibly.
//!
//! # Example
//!
//! ```toml
//! [style]
//! theme = "sunset"
//! font_family = "Georgia"
//! base_font_size = 18.0
//!
//! [content]
//! message = "happy valentine's day"
//! photos = ["photos/one.jpg", "photos/two.jpg"]
//! media_url = "https://open.spotify.com/track/..."
//! media_title = "our song"
//! ```

use std::fs;

use serde::Deserialize;

use keepsake::render::{MediaInfo, RenderStyle};
use keepsake::sync::SyncInputs;
use keepsake::theme::Theme;
use keepsake::EditorError;

/// Top-level display configuration combining style and content sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleSection,

    /// Content configuration section.
    #[serde(default)]
    content: ContentSection,
}

/// Cosmetic settings: theme and typography.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleSection {
    #[serde(default)]
    theme: Theme,

    #[serde(default = "default_font_family")]
    font_family: String,

    #[serde(default = "default_base_font_size")]
    base_font_size: f32,
}

impl Default for StyleSection {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_family: default_font_family(),
            base_font_size: default_base_font_size(),
        }
    }
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_base_font_size() -> f32 {
    16.0
}

/// The card's content: message, photo references, media link.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentSection {
    #[serde(default)]
    message: String,

    #[serde(default)]
    photos: Vec<String>,

    #[serde(default)]
    media_url: Option<String>,

    #[serde(default)]
    media_title: Option<String>,
}

impl DisplayConfig {
    /// The renderer inputs this configuration describes
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            theme: self.style.theme,
            font_family: self.style.font_family.clone(),
            base_font_size: self.style.base_font_size,
            message: self.content.message.clone(),
            photos: self.content.photos.clone(),
            media: self.content.media_url.as_ref().map(|url| MediaInfo {
                url: url.clone(),
                title: self.content.media_title.clone(),
            }),
        }
    }

    /// The reconciliation inputs this configuration implies
    pub fn sync_inputs(&self) -> SyncInputs {
        SyncInputs {
            photo_count: self.content.photos.len(),
            has_media_link: self.content.media_url.is_some(),
            ..SyncInputs::default()
        }
    }
}

/// Loads configuration from the given path, or defaults when none is given.
///
/// A missing or unparseable file is an error only when a path was explicitly
/// requested.
pub fn load_config(path: Option<&String>) -> Result<DisplayConfig, EditorError> {
    let Some(path) = path else {
        return Ok(DisplayConfig::default());
    };
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|err| EditorError::Layout(err.to_string()))
}
