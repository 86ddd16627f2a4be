//! Handmark Core
//!
//! This crate provides core types and error definitions
//! for the handmark Markdown-to-HTML renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`CodeBlock`], [`CodeBlockTable`], [`Placeholder`] - Fenced code protection
//! - [`AnchorRegistry`] - Per-render fallback heading ids
//! - [`HeadingLevel`], [`Stage`] - Enums shared by the pipeline
//! - [`HandmarkError`] - Error types

pub mod anchors;
pub mod enums;
pub mod error;
pub mod types;

pub use anchors::AnchorRegistry;
pub use enums::{HeadingLevel, Stage};
pub use error::{HandmarkError, Result};
pub use types::{CodeBlock, CodeBlockTable, Placeholder};
