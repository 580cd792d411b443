//! JSON renderer implementation.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a Document back to editor JSON.
///
/// The output is normalized: attribute defaults are written out, unknown
/// fields are gone and unrecognized nodes keep only their `type`.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Compact => serde_json::to_string(doc),
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
    };
    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a Document to JSON with default formatting.
pub fn to_json_default(doc: &Document) -> Result<String> {
    to_json(doc, JsonFormat::Pretty)
}
