//! Document tree structures.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::attrs::{self, null_as_default};
use super::Mark;

/// Third-party embed providers. Embeds are never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Embed {
    Embedly,
    Twitter,
}

impl Embed {
    /// The node `type` tag for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Embed::Embedly => "embedly",
            Embed::Twitter => "twitter",
        }
    }
}

/// A single element of the document tree.
///
/// Each variant carries only the fields its kind uses. Attribute defaults
/// are filled in while decoding, so rendering never inspects raw attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub enum Node {
    /// Section heading; `level` is at least 1.
    Heading { level: u32, content: Vec<Node> },
    Paragraph { content: Vec<Node> },
    /// Inline text with marks in application order.
    Text { text: String, marks: Vec<Mark> },
    /// Image; `alt` comes from the node's `text` field.
    Image { src: Option<String>, alt: String },
    /// Transparent wrapper around its children.
    Figure { content: Vec<Node> },
    HorizontalRule,
    /// Numbered list; `start` is never zero.
    OrderedList { start: i64, content: Vec<Node> },
    UnorderedList { content: Vec<Node> },
    /// Only meaningful as a direct child of a list.
    ListItem { content: Vec<Node> },
    Embed(Embed),
    /// Any other `type` tag. Children are dropped.
    Unknown { kind: String },
}

impl Node {
    /// Create a plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Create a text node with marks.
    pub fn marked(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Node::Text {
            text: text.into(),
            marks,
        }
    }

    /// Create a paragraph holding a single text node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph {
            content: vec![Node::text(text)],
        }
    }

    /// Create a heading holding a single text node.
    pub fn heading(level: u32, text: impl Into<String>) -> Self {
        Node::Heading {
            level: level.max(1),
            content: vec![Node::text(text)],
        }
    }

    /// Create a list item wrapping a single paragraph.
    pub fn list_item(text: impl Into<String>) -> Self {
        Node::ListItem {
            content: vec![Node::paragraph(text)],
        }
    }

    /// The node's `type` tag.
    pub fn kind(&self) -> &str {
        match self {
            Node::Heading { .. } => "heading",
            Node::Paragraph { .. } => "paragraph",
            Node::Text { .. } => "text",
            Node::Image { .. } => "image",
            Node::Figure { .. } => "figure",
            Node::HorizontalRule => "horizontalRule",
            Node::OrderedList { .. } => "orderedList",
            Node::UnorderedList { .. } => "unorderedList",
            Node::ListItem { .. } => "listItem",
            Node::Embed(embed) => embed.as_str(),
            Node::Unknown { kind } => kind,
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Heading { content, .. }
            | Node::Paragraph { content }
            | Node::Figure { content }
            | Node::OrderedList { content, .. }
            | Node::UnorderedList { content }
            | Node::ListItem { content } => content,
            Node::Text { .. }
            | Node::Image { .. }
            | Node::HorizontalRule
            | Node::Embed(_)
            | Node::Unknown { .. } => &[],
        }
    }

    /// Check if this node renders as a block followed by a blank line.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Node::Heading { .. } | Node::Paragraph { .. } | Node::Image { .. } | Node::HorizontalRule
        )
    }
}

/// Wire shape of a node as produced by the editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawNode {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    attrs: Value,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    content: Vec<Node>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    text: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    marks: Vec<Mark>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let RawNode {
            kind,
            attrs,
            content,
            text,
            marks,
        } = raw;
        let attrs = attrs::object(attrs);

        match kind.as_str() {
            "heading" => Node::Heading {
                level: attrs::heading_level(&attrs),
                content,
            },
            "paragraph" => Node::Paragraph { content },
            "text" => Node::Text { text, marks },
            "image" => Node::Image {
                src: attrs::string(&attrs, "src"),
                alt: text,
            },
            "figure" => Node::Figure { content },
            "horizontalRule" => Node::HorizontalRule,
            "orderedList" => Node::OrderedList {
                start: attrs::list_start(&attrs),
                content,
            },
            "unorderedList" => Node::UnorderedList { content },
            "listItem" => Node::ListItem { content },
            "embedly" => Node::Embed(Embed::Embedly),
            "twitter" => Node::Embed(Embed::Twitter),
            _ => Node::Unknown { kind },
        }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        let mut raw = RawNode {
            kind: node.kind().to_string(),
            ..Default::default()
        };

        match node {
            Node::Heading { level, content } => {
                raw.attrs = json!({ "level": level });
                raw.content = content;
            }
            Node::OrderedList { start, content } => {
                raw.attrs = json!({ "start": start });
                raw.content = content;
            }
            Node::Paragraph { content }
            | Node::Figure { content }
            | Node::UnorderedList { content }
            | Node::ListItem { content } => raw.content = content,
            Node::Text { text, marks } => {
                raw.text = text;
                raw.marks = marks;
            }
            Node::Image { src, alt } => {
                if let Some(src) = src {
                    raw.attrs = json!({ "src": src });
                }
                raw.text = alt;
            }
            Node::HorizontalRule | Node::Embed(_) | Node::Unknown { .. } => {}
        }

        raw
    }
}

/// Node counts gathered from a document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub headings: usize,
    pub paragraphs: usize,
    pub text_nodes: usize,
    pub images: usize,
    pub rules: usize,
    pub lists: usize,
    pub list_items: usize,
    pub links: usize,
    /// Embed nodes, which are skipped when rendering
    pub embeds: usize,
    /// Nodes with an unrecognized `type`
    pub unknown: usize,
}

impl DocumentStats {
    fn visit(&mut self, node: &Node) {
        match node {
            Node::Heading { .. } => self.headings += 1,
            Node::Paragraph { .. } => self.paragraphs += 1,
            Node::Text { marks, .. } => {
                self.text_nodes += 1;
                self.links += marks
                    .iter()
                    .filter(|m| matches!(m, Mark::Link { href: Some(_) }))
                    .count();
            }
            Node::Image { .. } => self.images += 1,
            Node::HorizontalRule => self.rules += 1,
            Node::OrderedList { .. } | Node::UnorderedList { .. } => self.lists += 1,
            Node::ListItem { .. } => self.list_items += 1,
            Node::Embed(_) => self.embeds += 1,
            Node::Unknown { .. } => self.unknown += 1,
            Node::Figure { .. } => {}
        }

        for child in node.children() {
            self.visit(child);
        }
    }
}

/// A parsed rich-text document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Root `type` tag, normally "doc"
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// Top-level nodes in rendering order
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            kind: "doc".to_string(),
            content: Vec::new(),
        }
    }

    /// Create a document from top-level nodes.
    pub fn with_content(content: Vec<Node>) -> Self {
        Self {
            kind: "doc".to_string(),
            content,
        }
    }

    /// Append a top-level node.
    pub fn push(&mut self, node: Node) {
        self.content.push(node);
    }

    /// Check if the document has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the plain text content of the document.
    pub fn plain_text(&self) -> String {
        crate::render::to_text(self, &crate::render::RenderOptions::default())
    }

    /// Count nodes by kind across the whole tree.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats::default();
        for node in &self.content {
            stats.visit(node);
        }
        stats
    }
}
