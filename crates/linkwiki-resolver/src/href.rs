//! String helpers for hrefs.
//!
//! Hrefs are treated as opaque strings: nothing here decodes or re-encodes
//! percent escapes, so `%23` stays `%23`.

/// An internal href cut into path, query and fragment.
///
/// `query` keeps its leading `?` and `fragment` its leading `#`, so
/// `path + query + fragment` reproduces the input byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitHref<'a> {
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

impl<'a> SplitHref<'a> {
    /// Split an href at its first `?` (query) and the first `#` after it (fragment).
    /// Without a `?`, the fragment starts at the first `#`.
    ///
    /// ```
    /// use linkwiki_resolver::SplitHref;
    ///
    /// let parts = SplitHref::parse("foo-page?blah=xyz#myanchor");
    /// assert_eq!(parts.path, "foo-page");
    /// assert_eq!(parts.query, "?blah=xyz");
    /// assert_eq!(parts.fragment, "#myanchor");
    /// ```
    pub fn parse(href: &'a str) -> Self {
        let (path, rest) = match href.find('?').or_else(|| href.find('#')) {
            Some(pos) => href.split_at(pos),
            None => (href, ""),
        };
        let (query, fragment) = if rest.starts_with('?') {
            match rest.find('#') {
                Some(pos) => rest.split_at(pos),
                None => (rest, ""),
            }
        } else {
            ("", rest)
        };

        Self {
            path,
            query,
            fragment,
        }
    }

    /// Query and fragment joined, in their original order
    pub fn suffix(&self) -> String {
        format!("{}{}", self.query, self.fragment)
    }
}

/// ASCII case-insensitive prefix test
pub(crate) fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// True if `href` opens with an RFC 3986 scheme followed by `://`.
///
/// The scheme must begin at position 0, so `foo?next=http://x` is not a match.
pub(crate) fn has_authority_scheme(href: &str) -> bool {
    let Some(pos) = href.find("://") else {
        return false;
    };
    let scheme = &href[..pos];

    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Join a base route and a tail with exactly one `/` between them
pub(crate) fn join_path(base: &str, tail: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        tail.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_path() {
        let parts = SplitHref::parse("foo-page");
        assert_eq!(parts.path, "foo-page");
        assert_eq!(parts.query, "");
        assert_eq!(parts.fragment, "");
    }

    #[test]
    fn test_split_fragment_only() {
        let parts = SplitHref::parse("foo#myanchor");
        assert_eq!(parts.path, "foo");
        assert_eq!(parts.query, "");
        assert_eq!(parts.fragment, "#myanchor");
    }

    #[test]
    fn test_split_query_and_fragment() {
        let parts = SplitHref::parse("foo-page?a=1&b=2#sec?tion");
        assert_eq!(parts.path, "foo-page");
        assert_eq!(parts.query, "?a=1&b=2");
        assert_eq!(parts.fragment, "#sec?tion");
        assert_eq!(parts.suffix(), "?a=1&b=2#sec?tion");
    }

    #[test]
    fn test_hash_before_question_mark_stays_in_path() {
        let parts = SplitHref::parse("foo#a?b");
        assert_eq!(parts.path, "foo#a");
        assert_eq!(parts.query, "?b");
        assert_eq!(parts.fragment, "");

        let parts = SplitHref::parse("foo#a?b#c");
        assert_eq!(parts.path, "foo#a");
        assert_eq!(parts.query, "?b");
        assert_eq!(parts.fragment, "#c");
    }

    #[test]
    fn test_fragment_without_query() {
        let parts = SplitHref::parse("foo#a#b");
        assert_eq!(parts.path, "foo");
        assert_eq!(parts.query, "");
        assert_eq!(parts.fragment, "#a#b");
    }

    #[test]
    fn test_encoded_hash_is_not_a_fragment() {
        let parts = SplitHref::parse("foo?blah=xyz%23myanchor");
        assert_eq!(parts.query, "?blah=xyz%23myanchor");
        assert_eq!(parts.fragment, "");
    }

    #[test]
    fn test_split_reassembles_input() {
        for href in ["", "?", "#", "a?b#c", "a#b?c", "a%23b"] {
            let parts = SplitHref::parse(href);
            assert_eq!(format!("{}{}", parts.path, parts.suffix()), href);
        }
    }

    #[test]
    fn test_starts_with_ignore_case() {
        assert!(starts_with_ignore_case("HTTP://example.com", "http://"));
        assert!(starts_with_ignore_case("JavaScript:alert(1)", "javascript:"));
        assert!(!starts_with_ignore_case("http", "http://"));
        assert!(!starts_with_ignore_case("é", "e"));
    }

    #[test]
    fn test_authority_scheme() {
        assert!(has_authority_scheme("ssh://git@example.com"));
        assert!(has_authority_scheme("svn+ssh://host/repo"));
        assert!(!has_authority_scheme("foo-page?next=http://example.com"));
        assert!(!has_authority_scheme("://missing-scheme"));
        assert!(!has_authority_scheme("1http://example.com"));
        assert!(!has_authority_scheme("plain-page"));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/Attachments", "/my/file.jpg"), "/Attachments/my/file.jpg");
        assert_eq!(join_path("/Attachments", "my/file.jpg"), "/Attachments/my/file.jpg");
        assert_eq!(join_path("/", "x"), "/x");
    }
}
