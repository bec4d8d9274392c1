//! Theme palettes for card rendering.
//!
//! A [`Theme`] is an enumerated primary/background color pair. Themes are
//! cosmetic only: they never affect element geometry, and switching themes
//! leaves a layout byte-identical.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// The closed set of color themes a card can use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Pink,
    Red,
    Purple,
    Sunset,
}

/// Error returned when parsing an unrecognized theme name.
#[derive(Debug, Error)]
#[error("unknown theme `{0}`, expected one of: pink, red, purple, sunset")]
pub struct UnknownTheme(String);

impl Theme {
    /// Hex string of the theme's primary (accent) color
    pub fn primary_hex(self) -> &'static str {
        match self {
            Theme::Pink => "#ec4899",
            Theme::Red => "#ef4444",
            Theme::Purple => "#a855f7",
            Theme::Sunset => "#f97316",
        }
    }

    /// Hex string of the theme's canvas background color
    pub fn background_hex(self) -> &'static str {
        match self {
            Theme::Pink => "#fce7f3",
            Theme::Red => "#fee2e2",
            Theme::Purple => "#f3e8ff",
            Theme::Sunset => "#ffedd5",
        }
    }

    /// The theme's primary color, parsed
    pub fn primary(self) -> Color {
        Color::new(self.primary_hex()).expect("theme palette hex strings are valid CSS colors")
    }

    /// The theme's background color, parsed
    pub fn background(self) -> Color {
        Color::new(self.background_hex()).expect("theme palette hex strings are valid CSS colors")
    }
}

impl std::str::FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pink" => Ok(Theme::Pink),
            "red" => Ok(Theme::Red),
            "purple" => Ok(Theme::Purple),
            "sunset" => Ok(Theme::Sunset),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_parses_to_colors() {
        for theme in [Theme::Pink, Theme::Red, Theme::Purple, Theme::Sunset] {
            // Constructors panic on malformed hex, so this is the whole test.
            let _ = theme.primary();
            let _ = theme.background();
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("pink".parse::<Theme>().unwrap(), Theme::Pink);
        assert_eq!("sunset".parse::<Theme>().unwrap(), Theme::Sunset);
        assert!("mauve".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_is_pink() {
        assert_eq!(Theme::default(), Theme::Pink);
    }
}
