//! Error types for keepsake operations.
//!
//! This module provides the main error type [`EditorError`] which wraps the
//! error conditions that can occur while loading, exporting, or rendering a
//! layout. Failures inside the interaction and reconciliation paths are
//! recovered locally and never surface here.

use std::io;

use thiserror::Error;

/// The main error type for keepsake operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for EditorError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(error: serde_json::Error) -> Self {
        Self::Layout(error.to_string())
    }
}
