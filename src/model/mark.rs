//! Inline style annotations on text nodes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::attrs::{self, null_as_default};

/// An inline style applied to a text node.
///
/// Marks are applied in the order they appear on the node, each one
/// wrapping the output of the previous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMark", into = "RawMark")]
pub enum Mark {
    /// Hyperlink. Without an `href` the mark has no effect.
    Link { href: Option<String> },
    Bold,
    Italic,
    Code,
    Strikethrough,
    /// Any other mark type, ignored when rendering.
    Unknown { kind: String },
}

impl Mark {
    /// Create a link mark.
    pub fn link(href: impl Into<String>) -> Self {
        Mark::Link {
            href: Some(href.into()),
        }
    }

    /// The mark's `type` tag.
    pub fn kind(&self) -> &str {
        match self {
            Mark::Link { .. } => "link",
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Code => "code",
            Mark::Strikethrough => "strikethrough",
            Mark::Unknown { kind } => kind,
        }
    }
}

/// Wire shape of a mark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawMark {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    attrs: Value,
}

impl From<RawMark> for Mark {
    fn from(raw: RawMark) -> Self {
        match raw.kind.as_str() {
            "link" => Mark::Link {
                href: attrs::string(&attrs::object(raw.attrs), "href"),
            },
            "bold" => Mark::Bold,
            "italic" => Mark::Italic,
            "code" => Mark::Code,
            "strikethrough" => Mark::Strikethrough,
            _ => Mark::Unknown { kind: raw.kind },
        }
    }
}

impl From<Mark> for RawMark {
    fn from(mark: Mark) -> Self {
        let attrs = match &mark {
            Mark::Link { href: Some(href) } => json!({ "href": href }),
            _ => Value::Null,
        };
        RawMark {
            kind: mark.kind().to_string(),
            attrs,
        }
    }
}
