//! Command-line argument definitions for the keepsake CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the rendered size variant and viewport, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the keepsake layout renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the exported layout JSON
    #[arg(help = "Path to the layout JSON file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Size variant to render (compact, wide)
    #[arg(long, default_value = "compact")]
    pub variant: String,

    /// Target viewport as WIDTHxHEIGHT, e.g. 440x952
    #[arg(long, default_value = "440x952")]
    pub viewport: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
