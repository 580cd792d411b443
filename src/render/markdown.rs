//! Markdown renderer implementation.

use crate::model::{Document, Mark, Node};

use super::options::RenderOptions;

/// Separator appended after every block node, even an empty one.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Convert a Document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> String {
    let mut output = String::new();
    render_content(&doc.content, options, &mut output);

    log::debug!(
        "rendered {} top-level nodes to {} bytes of Markdown",
        doc.content.len(),
        output.len()
    );

    options.finish(output)
}

/// Render a sequence of sibling nodes in order.
fn render_content(nodes: &[Node], options: &RenderOptions, output: &mut String) {
    for node in nodes {
        render_node(node, options, output);
    }
}

/// Render a single node by kind.
fn render_node(node: &Node, options: &RenderOptions, output: &mut String) {
    match node {
        Node::Embed(embed) => {
            log::trace!("skipping {} embed", embed.as_str());
        }
        Node::Heading { level, content } => {
            for _ in 0..options.heading_level(*level) {
                output.push('#');
            }
            output.push(' ');
            render_content(content, options, output);
            output.push_str(BLOCK_SEPARATOR);
        }
        Node::Paragraph { content } => {
            render_content(content, options, output);
            output.push_str(BLOCK_SEPARATOR);
        }
        Node::Text { text, marks } => {
            output.push_str(&render_text(text, marks));
        }
        Node::Image { src, alt } => {
            if let Some(src) = src {
                output.push_str(&format!("![{}]({})", alt, src));
            }
            output.push_str(BLOCK_SEPARATOR);
        }
        Node::Figure { content } => {
            render_content(content, options, output);
        }
        Node::HorizontalRule => {
            output.push_str("---");
            output.push_str(BLOCK_SEPARATOR);
        }
        Node::OrderedList { start, content } => {
            render_ordered_list(*start, content, options, output);
        }
        Node::UnorderedList { content } => {
            render_unordered_list(content, options, output);
        }
        // List items render only through their parent list
        Node::ListItem { .. } => {}
        Node::Unknown { kind } => {
            log::trace!("skipping unknown node type {:?}", kind);
        }
    }
}

/// Render text with its marks applied in sequence.
///
/// Each mark wraps the result of the previous one, so the last mark in the
/// list ends up outermost.
pub(crate) fn render_text(text: &str, marks: &[Mark]) -> String {
    marks
        .iter()
        .fold(text.to_string(), |inner, mark| match mark {
            Mark::Link { href: Some(href) } => format!("[{}]({})", inner, href),
            Mark::Link { href: None } => inner,
            Mark::Bold => format!("**{}**", inner),
            Mark::Italic => format!("_{}_", inner),
            Mark::Code => format!("`{}`", inner),
            Mark::Strikethrough => format!("~~{}~~", inner),
            Mark::Unknown { kind } => {
                log::trace!("ignoring unknown mark type {:?}", kind);
                inner
            }
        })
}

/// Render the items of an ordered list, numbering from `start`.
///
/// Only `listItem` children take a number; anything else is skipped.
fn render_ordered_list(start: i64, items: &[Node], options: &RenderOptions, output: &mut String) {
    let mut number = start;
    for item in items {
        if let Node::ListItem { content } = item {
            output.push_str(&format!("{}. ", number));
            render_content(content, options, output);
            number = number.saturating_add(1);
        }
    }
}

/// Render the items of an unordered list.
fn render_unordered_list(items: &[Node], options: &RenderOptions, output: &mut String) {
    for item in items {
        if let Node::ListItem { content } = item {
            output.push(options.bullet_marker);
            output.push(' ');
            render_content(content, options, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Embed;

    fn render(nodes: Vec<Node>) -> String {
        to_markdown(&Document::with_content(nodes), &RenderOptions::default())
    }

    #[test]
    fn test_paragraph_and_heading() {
        assert_eq!(render(vec![Node::paragraph("Hello")]), "Hello\n\n");
        assert_eq!(render(vec![Node::heading(3, "Title")]), "### Title\n\n");
    }

    #[test]
    fn test_heading_capped_by_options() {
        let doc = Document::with_content(vec![Node::heading(5, "Deep")]);
        let options = RenderOptions::new().with_max_heading(2);
        assert_eq!(to_markdown(&doc, &options), "## Deep\n\n");
    }

    #[test]
    fn test_image_without_src_keeps_separator() {
        let image = Node::Image {
            src: None,
            alt: "Alt".to_string(),
        };
        assert_eq!(render(vec![image]), "\n\n");
    }

    #[test]
    fn test_figure_is_transparent() {
        let figure = Node::Figure {
            content: vec![Node::Image {
                src: Some("a.png".to_string()),
                alt: "A".to_string(),
            }],
        };
        assert_eq!(render(vec![figure]), "![A](a.png)\n\n");
    }

    #[test]
    fn test_skipped_nodes() {
        let nodes = vec![
            Node::Embed(Embed::Embedly),
            Node::Embed(Embed::Twitter),
            Node::list_item("orphan"),
            Node::Unknown {
                kind: "table".to_string(),
            },
        ];
        assert_eq!(render(nodes), "");
    }

    #[test]
    fn test_ordered_list_skips_non_items() {
        let list = Node::OrderedList {
            start: 3,
            content: vec![
                Node::list_item("a"),
                Node::paragraph("stray"),
                Node::list_item("b"),
            ],
        };
        assert_eq!(render(vec![list]), "3. a\n\n4. b\n\n");
    }

    #[test]
    fn test_ordered_list_counts_empty_items() {
        let list = Node::OrderedList {
            start: 1,
            content: vec![
                Node::ListItem { content: vec![] },
                Node::list_item("second"),
            ],
        };
        assert_eq!(render(vec![list]), "1. 2. second\n\n");
    }

    #[test]
    fn test_negative_start() {
        let list = Node::OrderedList {
            start: -1,
            content: vec![Node::list_item("a"), Node::list_item("b")],
        };
        assert_eq!(render(vec![list]), "-1. a\n\n0. b\n\n");
    }

    #[test]
    fn test_unordered_list_marker_option() {
        let doc = Document::with_content(vec![Node::UnorderedList {
            content: vec![Node::list_item("a"), Node::list_item("b")],
        }]);
        assert_eq!(
            to_markdown(&doc, &RenderOptions::default()),
            "* a\n\n* b\n\n"
        );
        assert_eq!(
            to_markdown(&doc, &RenderOptions::new().with_bullet_marker('-')),
            "- a\n\n- b\n\n"
        );
    }

    #[test]
    fn test_nested_lists() {
        let nested = Node::UnorderedList {
            content: vec![Node::ListItem {
                content: vec![
                    Node::paragraph("outer"),
                    Node::OrderedList {
                        start: 1,
                        content: vec![Node::list_item("inner")],
                    },
                ],
            }],
        };
        assert_eq!(render(vec![nested]), "* outer\n\n1. inner\n\n");
    }

    #[test]
    fn test_marks_apply_in_order() {
        assert_eq!(render_text("x", &[Mark::Bold, Mark::Code]), "`**x**`");
        assert_eq!(render_text("x", &[Mark::Code, Mark::Bold]), "**`x`**");
        assert_eq!(render_text("x", &[Mark::Italic, Mark::Strikethrough]), "~~_x_~~");
    }

    #[test]
    fn test_ignored_marks() {
        let marks = [
            Mark::Link { href: None },
            Mark::Unknown {
                kind: "underline".to_string(),
            },
        ];
        assert_eq!(render_text("plain", &marks), "plain");
    }

    #[test]
    fn test_inline_text_has_no_separator() {
        let nodes = vec![Node::text("a"), Node::marked("b", vec![Mark::Bold])];
        assert_eq!(render(nodes), "a**b**");
    }

    #[test]
    fn test_trim_option() {
        let doc = Document::with_content(vec![Node::paragraph("a"), Node::HorizontalRule]);
        let options = RenderOptions::new().with_trim(true);
        assert_eq!(to_markdown(&doc, &options), "a\n\n---");
    }
}
