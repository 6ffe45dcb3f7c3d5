//! Resource locator utilities.
//!
//! File paths in the structure document may use either separator style and
//! contain spaces or reserved characters. [`resolve_locator`] turns them into
//! a relative URL that both the embedded viewer and a new tab can navigate to.

/// Normalize separators to `/` and percent-encode each path segment.
///
/// Slashes stay as separators; everything else outside the unreserved set
/// (`A-Z a-z 0-9 - _ . ~`) is escaped, so `#`, `?` and `%` in file names do
/// not turn into fragments, queries or bogus escapes.
pub fn resolve_locator(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_slash_path_unchanged() {
        assert_eq!(
            resolve_locator("pdfs/R20/CSE/notes.pdf"),
            "pdfs/R20/CSE/notes.pdf"
        );
    }

    #[test]
    fn test_backslashes_normalized() {
        assert_eq!(resolve_locator("pdfs\\R20\\notes.pdf"), "pdfs/R20/notes.pdf");
        assert_eq!(resolve_locator("pdfs\\R20/mixed.pdf"), "pdfs/R20/mixed.pdf");
    }

    #[test]
    fn test_spaces_and_backslash() {
        assert_eq!(resolve_locator("A\\B C.pdf"), "A/B%20C.pdf");
    }

    #[test]
    fn test_reserved_characters_escaped() {
        assert_eq!(resolve_locator("Unit #1?.pdf"), "Unit%20%231%3F.pdf");
        assert_eq!(resolve_locator("100%.pdf"), "100%25.pdf");
        assert_eq!(resolve_locator("a&b/c+d.pdf"), "a%26b/c%2Bd.pdf");
    }

    #[test]
    fn test_non_ascii_escaped() {
        assert_eq!(resolve_locator("é.pdf"), "%C3%A9.pdf");
    }
}
