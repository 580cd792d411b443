//! File-based entry points.

use std::fs;
use tempfile::TempDir;
use unpost::{convert_file, parse_file, Error};

const POST: &str = r#"{
    "type": "doc",
    "content": [
        {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Post"}]},
        {"type": "paragraph", "content": [{"type": "text", "text": "Body", "marks": [{"type": "italic"}]}]}
    ]
}"#;

#[test]
fn test_convert_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("post.json");
    fs::write(&path, POST).unwrap();

    let markdown = convert_file(&path).unwrap();
    assert_eq!(markdown, "# Post\n\n_Body_\n\n");
}

#[test]
fn test_parse_file_stats() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("post.json");
    fs::write(&path, POST).unwrap();

    let doc = parse_file(&path).unwrap();
    let stats = doc.stats();
    assert_eq!(stats.headings, 1);
    assert_eq!(stats.paragraphs, 1);
    assert_eq!(stats.text_nodes, 2);
}

#[test]
fn test_convert_file_errors() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(convert_file(&missing), Err(Error::Io(_))));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{\"type\": \"doc\", ").unwrap();
    let err = convert_file(&broken).unwrap_err();
    assert!(err.is_decode());
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_convert_file_async() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("post.json");
    fs::write(&path, POST).unwrap();

    let markdown = unpost::convert_file_async(&path).await.unwrap();
    assert_eq!(markdown, "# Post\n\n_Body_\n\n");
}
