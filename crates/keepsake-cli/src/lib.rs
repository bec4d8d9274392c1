//! CLI logic for the keepsake layout renderer.
//!
//! Reads an exported layout JSON, renders one size variant at a target
//! viewport with the configured cosmetic inputs, and writes an SVG preview.

mod args;
mod config;

pub use args::Args;
pub use config::{load_config, DisplayConfig};

use std::fs;

use log::{info, warn};

use keepsake::export::svg;
use keepsake::geometry::Size;
use keepsake::scene::SizeVariant;
use keepsake::{Editor, EditorError};

/// Run the keepsake CLI application
///
/// Loads the configuration and layout, renders the requested variant, and
/// writes the resulting SVG to the output file. A malformed layout file is
/// not fatal: rendering falls back to the default scatter for the configured
/// content.
///
/// # Errors
///
/// Returns `EditorError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unrecognized variant or viewport arguments
/// - SVG writing errors
pub fn run(args: &Args) -> Result<(), EditorError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Rendering layout"
    );

    let display_config = config::load_config(args.config.as_ref())?;
    let variant = parse_variant(&args.variant)?;
    let viewport = parse_viewport(&args.viewport)?;

    let source = fs::read_to_string(&args.input)?;
    let editor = Editor::from_json(&source, display_config.sync_inputs());

    let rendered = editor.render_variant(variant, viewport, &display_config.render_style());
    if rendered.elements.is_empty() {
        warn!(variant:% = variant; "Rendered scene is empty");
    }

    svg::save(&args.output, &rendered)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

fn parse_variant(value: &str) -> Result<SizeVariant, EditorError> {
    match value {
        "compact" => Ok(SizeVariant::Compact),
        "wide" => Ok(SizeVariant::Wide),
        other => Err(EditorError::Layout(format!(
            "unknown size variant `{other}`, expected `compact` or `wide`"
        ))),
    }
}

fn parse_viewport(value: &str) -> Result<Size, EditorError> {
    let parse = |part: &str| {
        part.parse::<f32>()
            .ok()
            .filter(|dimension| *dimension > 0.0)
    };
    value
        .split_once('x')
        .and_then(|(w, h)| Some(Size::new(parse(w)?, parse(h)?)))
        .ok_or_else(|| {
            EditorError::Layout(format!(
                "invalid viewport `{value}`, expected WIDTHxHEIGHT such as 440x952"
            ))
        })
}
