//! Keepsake Core Types and Definitions
//!
//! This crate provides the foundational types for the keepsake card-layout
//! engine. It includes:
//!
//! - **Geometry**: Canvas-space primitives ([`geometry`] module)
//! - **Elements**: The positioned visual units of a card ([`element`] module)
//! - **Scenes**: The placement description for one size variant ([`scene`] module)
//! - **Themes**: Color palettes with CSS color support ([`theme`] module)

pub mod color;
pub mod element;
pub mod geometry;
pub mod scene;
pub mod theme;
