use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Built once, shared by every writer
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for text content and attribute values.
///
/// Strings without special characters are returned borrowed.
///
/// # Examples
///
/// ```
/// use sheetchart::common::xml::escape_xml;
/// assert_eq!(escape_xml("Sheet1!$A$1:$A$3"), "Sheet1!$A$1:$A$3");
/// assert_eq!(escape_xml("'R&D'!$B$2"), "&apos;R&amp;D&apos;!$B$2");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if XML_ESCAPER.is_match(s) {
        Cow::Owned(XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]))
    } else {
        Cow::Borrowed(s)
    }
}

/// Resolve one of the five predefined XML entities by name (without `&` and `;`).
///
/// # Examples
///
/// ```
/// use sheetchart::common::xml::resolve_predefined_entity;
/// assert_eq!(resolve_predefined_entity(b"amp"), Some('&'));
/// assert_eq!(resolve_predefined_entity(b"nbsp"), None);
/// ```
#[inline]
pub fn resolve_predefined_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape_xml("Sheet1!$A$1"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(
            escape_xml("<a href=\"x\">'&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;"
        );
    }
}
