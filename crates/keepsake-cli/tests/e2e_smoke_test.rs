//! End-to-end smoke tests for the keepsake CLI
//!
//! These tests run the full pipeline: layout JSON in, SVG file out.

use std::fs;

use keepsake_cli::{run, Args};

fn args_for(input: &str, output: &str, config: Option<String>) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        config,
        variant: "compact".to_string(),
        viewport: "440x952".to_string(),
        log_level: "off".to_string(),
    }
}

#[test]
fn test_renders_layout_to_svg() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("layout.json");
    let output = dir.path().join("card.svg");

    fs::write(
        &input,
        r#"{
            "compact": [
                {"id": "photo-0", "type": "photo", "x": 30.0, "y": 50.0,
                 "width": 70.0, "height": 70.0, "rotation": -5.0,
                 "zIndex": 1, "photoIndex": 0},
                {"id": "text-1", "type": "text", "x": 10.0, "y": 220.0,
                 "width": 200.0, "height": 60.0, "rotation": 0.0, "zIndex": 2}
            ],
            "wide": []
        }"#,
    )
    .expect("Failed to write layout file");

    let config = dir.path().join("display.toml");
    fs::write(
        &config,
        r#"
        [style]
        theme = "purple"

        [content]
        message = "hello"
        photos = ["one.jpg"]
        "#,
    )
    .expect("Failed to write config file");

    let args = args_for(
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        Some(config.to_str().unwrap().to_string()),
    );
    run(&args).expect("CLI run failed");

    let svg = fs::read_to_string(&output).expect("Output SVG missing");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("#f3e8ff"), "Purple theme background expected");
}

#[test]
fn test_malformed_layout_falls_back_to_default() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("layout.json");
    let output = dir.path().join("card.svg");
    fs::write(&input, "{ not json at all").expect("Failed to write layout file");

    let args = args_for(input.to_str().unwrap(), output.to_str().unwrap(), None);
    run(&args).expect("CLI run failed");

    // Default scatter still renders the mandatory text block.
    let svg = fs::read_to_string(&output).expect("Output SVG missing");
    assert!(svg.contains("<svg"));
}

#[test]
fn test_unknown_variant_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("layout.json");
    fs::write(&input, "{\"compact\": [], \"wide\": []}").expect("Failed to write layout file");

    let mut args = args_for(input.to_str().unwrap(), "out.svg", None);
    args.variant = "phone".to_string();
    assert!(run(&args).is_err());
}
