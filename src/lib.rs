//! # unpost
//!
//! Rich-text editor document conversion to Markdown.
//!
//! This library decodes the JSON node tree produced by structured rich-text
//! editors (`doc` → paragraphs, headings, lists, images, marked text) and
//! renders it as Markdown, plain text, or normalized JSON.
//!
//! ## Quick Start
//!
//! ```
//! let json = br#"{
//!     "type": "doc",
//!     "content": [
//!         {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "Hello"}]},
//!         {"type": "paragraph", "content": [
//!             {"type": "text", "text": "world", "marks": [{"type": "bold"}]}
//!         ]}
//!     ]
//! }"#;
//!
//! let markdown = unpost::convert(json)?;
//! assert_eq!(markdown, "## Hello\n\n**world**\n\n");
//! # Ok::<(), unpost::Error>(())
//! ```
//!
//! ## Working with the Tree
//!
//! ```
//! use unpost::{parse_bytes, render::{to_markdown, RenderOptions}};
//!
//! let doc = parse_bytes(br#"{"type":"doc","content":[{"type":"horizontalRule"}]}"#)?;
//! println!("Nodes: {}", doc.content.len());
//!
//! let options = RenderOptions::new().with_trim(true);
//! assert_eq!(to_markdown(&doc, &options), "---");
//! # Ok::<(), unpost::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: Async file conversion with Tokio
//! - `ffi`: C-ABI bindings for foreign language integration

pub mod error;
pub mod model;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports
pub use error::{Error, Result};
pub use model::{Document, DocumentStats, Embed, Mark, Node};

use std::path::Path;

/// Parse a document from bytes.
///
/// Fails only when the bytes are not a well-formed document tree. Node
/// kinds and attributes are not validated.
///
/// # Example
///
/// ```
/// use unpost::parse_bytes;
///
/// let doc = parse_bytes(br#"{"type":"doc","content":[]}"#)?;
/// assert!(doc.is_empty());
/// # Ok::<(), unpost::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let doc: Document = serde_json::from_slice(data)?;
    log::debug!("decoded document with {} top-level nodes", doc.content.len());
    Ok(doc)
}

/// Parse a document from a string.
pub fn parse_str(json: &str) -> Result<Document> {
    parse_bytes(json.as_bytes())
}

/// Parse a document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use unpost::parse_file;
///
/// let doc = parse_file("post.json")?;
/// println!("Headings: {}", doc.stats().headings);
/// # Ok::<(), unpost::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    let data = std::fs::read(path)?;
    parse_bytes(&data)
}

/// Convert a document to Markdown.
///
/// # Example
///
/// ```
/// let md = unpost::convert(br#"{"type":"doc","content":[{"type":"text","text":"Hi"}]}"#)?;
/// assert_eq!(md, "Hi");
/// # Ok::<(), unpost::Error>(())
/// ```
pub fn convert(data: &[u8]) -> Result<String> {
    convert_with_options(data, &render::RenderOptions::default())
}

/// Convert a document to Markdown with options.
///
/// # Example
///
/// ```
/// use unpost::{convert_with_options, render::RenderOptions};
///
/// let options = RenderOptions::new().with_max_heading(2);
/// let json = br#"{"type":"doc","content":[{"type":"heading","attrs":{"level":4}}]}"#;
/// assert_eq!(convert_with_options(json, &options)?, "## \n\n");
/// # Ok::<(), unpost::Error>(())
/// ```
pub fn convert_with_options(data: &[u8], options: &render::RenderOptions) -> Result<String> {
    let doc = parse_bytes(data)?;
    Ok(render::to_markdown(&doc, options))
}

/// Convert a JSON string to Markdown.
pub fn convert_str(json: &str) -> Result<String> {
    convert(json.as_bytes())
}

/// Convert a JSON file to Markdown.
///
/// # Example
///
/// ```no_run
/// let markdown = unpost::convert_file("post.json")?;
/// std::fs::write("post.md", markdown)?;
/// # Ok::<(), unpost::Error>(())
/// ```
pub fn convert_file(path: impl AsRef<Path>) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_markdown(&doc, &render::RenderOptions::default()))
}

/// Convert a JSON file to Markdown without blocking the runtime.
#[cfg(feature = "async")]
pub async fn convert_file_async(path: impl AsRef<Path>) -> Result<String> {
    let data = tokio::fs::read(path).await?;
    convert(&data)
}
