//! Plain text renderer implementation.

use crate::model::{Document, Node};

use super::options::RenderOptions;

/// Convert a Document to plain text.
///
/// Follows the Markdown layout without any syntax: marks are dropped,
/// headings lose their `#` prefix and images are replaced by their alt text.
/// List numbering and bullets are kept.
pub fn to_text(doc: &Document, options: &RenderOptions) -> String {
    let mut output = String::new();
    for node in &doc.content {
        render_node_text(node, options, &mut output);
    }

    output.trim().to_string()
}

fn render_node_text(node: &Node, options: &RenderOptions, output: &mut String) {
    match node {
        Node::Heading { content, .. } | Node::Paragraph { content } => {
            render_children(content, options, output);
            output.push_str("\n\n");
        }
        Node::Text { text, .. } => output.push_str(text),
        Node::Image { alt, .. } => {
            output.push_str(alt);
            output.push_str("\n\n");
        }
        Node::Figure { content } => render_children(content, options, output),
        Node::HorizontalRule => output.push_str("---\n\n"),
        Node::OrderedList { start, content } => {
            let mut number = *start;
            for item in content {
                if let Node::ListItem { content } = item {
                    output.push_str(&format!("{}. ", number));
                    render_children(content, options, output);
                    number = number.saturating_add(1);
                }
            }
        }
        Node::UnorderedList { content } => {
            for item in content {
                if let Node::ListItem { content } = item {
                    output.push(options.bullet_marker);
                    output.push(' ');
                    render_children(content, options, output);
                }
            }
        }
        Node::ListItem { .. } | Node::Embed(_) | Node::Unknown { .. } => {}
    }
}

fn render_children(nodes: &[Node], options: &RenderOptions, output: &mut String) {
    for node in nodes {
        render_node_text(node, options, output);
    }
}
