//! SVG rendering for card layouts.
//!
//! Builds an `svg::Document` from a [`RenderedScene`]. The document's
//! viewBox stays in canvas units and the outer width/height carry the
//! viewport scale, so the SVG reproduces exactly what the renderer computed.

use std::path::Path;

use svg::node::element as svg_element;
use svg::Document;

use crate::render::{RenderedElement, RenderedScene, Visual};

use super::Error;

/// Builds the SVG document for a rendered scene.
pub fn document(rendered: &RenderedScene) -> Document {
    let canvas = rendered.canvas;
    let doc = Document::new()
        .set("viewBox", format!("0 0 {} {}", canvas.width, canvas.height))
        .set("width", canvas.width * rendered.scale)
        .set("height", canvas.height * rendered.scale);

    let background = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("fill", rendered.theme.background_hex());

    let mut doc = doc.add(background);
    for element in &rendered.elements {
        doc = doc.add(render_element(rendered, element));
    }
    doc
}

/// Writes a rendered scene to an SVG file.
pub fn save(path: impl AsRef<Path>, rendered: &RenderedScene) -> Result<(), Error> {
    svg::save(path, &document(rendered)).map_err(Error::Io)
}

/// One element as a group rotated around its own center.
fn render_element(rendered: &RenderedScene, element: &RenderedElement) -> svg_element::Group {
    let frame = element.frame;
    let center = frame.center();
    let group = svg_element::Group::new().set(
        "transform",
        format!(
            "translate({} {}) rotate({}) translate({} {})",
            center.x,
            center.y,
            element.rotation,
            -frame.width / 2.0,
            -frame.height / 2.0
        ),
    );

    let width = frame.width;
    let height = frame.height;
    let primary = rendered.theme.primary_hex();

    match &element.visual {
        Visual::Photo { reference } => {
            // Polaroid-style white border around the image.
            let border = svg_element::Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", "white")
                .set("rx", 2);
            let inset = (width.min(height) * 0.06).max(2.0);
            let image = svg_element::Image::new()
                .set("href", reference.as_str())
                .set("x", inset)
                .set("y", inset)
                .set("width", width - inset * 2.0)
                .set("height", height - inset * 2.0)
                .set("preserveAspectRatio", "xMidYMid slice");
            group.add(border).add(image)
        }

        Visual::Text {
            content,
            font_family,
            font_size,
        } => {
            let text = svg_element::Text::new(content.clone())
                .set("x", width / 2.0)
                .set("y", height / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-family", font_family.as_str())
                .set("font-size", *font_size)
                .set("fill", primary);
            group.add(text)
        }

        Visual::ActionGroup {
            font_size,
            padding_x: _,
            padding_y,
            gap,
        } => {
            let button_width = (width - gap) / 2.0;
            let radius = padding_y * 1.5;

            let yes_rect = svg_element::Rectangle::new()
                .set("width", button_width)
                .set("height", height)
                .set("rx", radius)
                .set("fill", primary);
            let yes_label = svg_element::Text::new("Yes")
                .set("x", button_width / 2.0)
                .set("y", height / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-size", *font_size)
                .set("fill", "white");

            let no_rect = svg_element::Rectangle::new()
                .set("x", button_width + gap)
                .set("width", button_width)
                .set("height", height)
                .set("rx", radius)
                .set("fill", "white")
                .set("stroke", primary);
            let no_label = svg_element::Text::new("No")
                .set("x", button_width + gap + button_width / 2.0)
                .set("y", height / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-size", *font_size)
                .set("fill", primary);

            group.add(yes_rect).add(yes_label).add(no_rect).add(no_label)
        }

        Visual::MediaEmbed { media, dense } => {
            let card = svg_element::Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("rx", 8)
                .set("fill", "white")
                .set("stroke", primary);
            let label = media
                .as_ref()
                .and_then(|info| info.title.clone())
                .unwrap_or_else(|| "♪".to_string());
            let font_size = if *dense { 10 } else { 14 };
            let title = svg_element::Text::new(label)
                .set("x", width / 2.0)
                .set("y", height / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-size", font_size)
                .set("fill", primary);
            group.add(card).add(title)
        }
    }
}
