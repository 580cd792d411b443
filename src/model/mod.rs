//! Typed document model for rich-text editor trees.
//!
//! This module defines the data structures that represent a decoded editor
//! document. Decoding fills attribute defaults in, so renderers work on a
//! closed set of node and mark kinds without inspecting raw JSON.

mod attrs;
mod document;
mod mark;

pub use document::*;
pub use mark::*;
