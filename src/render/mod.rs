//! Output rendering for documents.
//!
//! This module provides renderers for converting Document models
//! to various output formats: Markdown, plain text, and JSON.
//!
//! # Example
//!
//! ```
//! use unpost::{parse_str, render::*};
//!
//! let doc = parse_str(r#"{"type":"doc","content":[{"type":"horizontalRule"}]}"#)?;
//!
//! // Render to Markdown
//! let md = to_markdown(&doc, &RenderOptions::default());
//! assert_eq!(md, "---\n\n");
//!
//! // Render to plain text
//! let text = to_text(&doc, &RenderOptions::default());
//!
//! // Render to JSON
//! let json = to_json(&doc, JsonFormat::Pretty)?;
//! # Ok::<(), unpost::Error>(())
//! ```

mod json;
mod markdown;
mod options;
mod text;

pub use json::{to_json, to_json_default, JsonFormat};
pub use markdown::to_markdown;
pub use options::RenderOptions;
pub use text::to_text;
