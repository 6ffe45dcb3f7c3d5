//! Tree store: one-shot load of the structure document.

use super::error::LoadError;
use crate::config::STRUCTURE_URL;
use crate::models::Tree;
use crate::utils::fetch_text;

/// Parse a structure document into a [`Tree`].
pub fn parse_structure(json: &str) -> Result<Tree, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Fetch and parse the structure document from [`STRUCTURE_URL`].
///
/// A single attempt: no retry, no timeout.
pub async fn load() -> Result<Tree, LoadError> {
    let text = fetch_text(STRUCTURE_URL).await?;
    parse_structure(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;

    #[test]
    fn test_parse_structure() {
        let json = r#"[{"type": "folder", "name": "A", "children": [
            {"type": "file", "name": "x.pdf", "path": "A/x.pdf"}
        ]}]"#;
        let tree = parse_structure(json).unwrap();
        assert_eq!(
            tree,
            Tree::new(vec![Node::folder("A", vec![Node::file("x.pdf", "A/x.pdf")])])
        );
    }

    #[test]
    fn test_parse_empty_root() {
        assert_eq!(parse_structure("[]").unwrap(), Tree::default());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let cases = [
            "",
            "{}",
            r#"{"type": "folder", "name": "A", "children": []}"#,
            r#"[{"type": "file", "name": "x.pdf"}]"#,
            r#"[{"name": "x.pdf", "path": "x.pdf"}]"#,
            r#"[{"type": "folder", "name": "A", "children": [1]}]"#,
        ];
        for json in cases {
            assert!(
                matches!(parse_structure(json), Err(LoadError::Malformed(_))),
                "accepted {:?}",
                json
            );
        }
    }
}
