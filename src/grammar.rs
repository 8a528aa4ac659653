//! URI-reference decomposition per RFC 3986 Appendix B.
//!
//! The splitters in this module implement the Appendix B regular expression
//!
//! ```text
//! ^(?:([^:/?#]+)(:))?(?://([^/?#]*))?([^?#]*)(?:(\?)([^#]*))?(?:(#)(.*))?$
//! ```
//!
//! as single forward scans. They only cut the input into slices; no
//! validation or percent-decoding happens here, so the presence/emptiness
//! state machine is testable independently of the encoding logic.

/// Raw components of a URI reference.
///
/// A `None` field means the component's delimiter was absent from the input;
/// `Some("")` means the delimiter was present with empty text. The
/// distinction drives the resolver's decision tree: `http://a?` carries an
/// empty query while `http://a` carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawComponents<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Splits a URI reference into its five components.
///
/// Never fails: every string matches the Appendix B grammar. Component
/// validation happens later, per component.
pub(crate) fn split_uri_reference(input: &str) -> RawComponents<'_> {
    let (rest, fragment) = match input.find('#') {
        Some(i) => (&input[..i], Some(&input[i + 1..])),
        None => (input, None),
    };

    let (rest, query) = match rest.find('?') {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };

    // A scheme is the text before the first ':', provided it is non-empty
    // and contains no '/'.
    let (rest, scheme) = match rest.find(':') {
        Some(i) if i > 0 && !rest[..i].contains('/') => (&rest[i + 1..], Some(&rest[..i])),
        _ => (rest, None),
    };

    let (path, authority) = match rest.strip_prefix("//") {
        Some(after) => match after.find('/') {
            Some(i) => (&after[i..], Some(&after[..i])),
            None => ("", Some(after)),
        },
        None => (rest, None),
    };

    RawComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

/// Raw subcomponents of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawAuthority<'a> {
    pub user_info: Option<&'a str>,
    pub host: &'a str,
    /// Digits after the port `:`, possibly empty. `Some("")` is normalized
    /// to an absent port by the caller.
    pub port: Option<&'a str>,
}

/// Splits an authority into userinfo, host, and port per
/// `^(?:([^@]*)@)?(\[[^\]]*\]|[^:]*)(?::(\d*))?$`.
///
/// Returns `None` when the input does not match the pattern at all (for
/// example a non-numeric port); the bracketed host text is kept verbatim
/// for later validation.
pub(crate) fn split_authority(input: &str) -> Option<RawAuthority<'_>> {
    let (user_info, rest) = match input.find('@') {
        Some(i) => (Some(&input[..i]), &input[i + 1..]),
        None => (None, input),
    };

    // Bracketed IP-literal alternative first, then the [^:]* fallback, the
    // way the regex alternation backtracks.
    if rest.starts_with('[') {
        if let Some(close) = rest.find(']') {
            let host = &rest[..=close];
            if let Some(port) = parse_port_suffix(&rest[close + 1..]) {
                return Some(RawAuthority {
                    user_info,
                    host,
                    port,
                });
            }
        }
    }

    let (host, after) = match rest.find(':') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    let port = parse_port_suffix(after)?;
    Some(RawAuthority {
        user_info,
        host,
        port,
    })
}

/// Matches `(?::(\d*))?$`: empty, or a colon followed by digits only.
fn parse_port_suffix(s: &str) -> Option<Option<&str>> {
    if s.is_empty() {
        return Some(None);
    }
    let digits = s.strip_prefix(':')?;
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(Some(digits))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(input: &str) -> RawComponents<'_> {
        split_uri_reference(input)
    }

    #[test]
    fn full_uri() {
        let c = split("http://user@host:80/a/b?q=1#frag");
        assert_eq!(c.scheme, Some("http"));
        assert_eq!(c.authority, Some("user@host:80"));
        assert_eq!(c.path, "/a/b");
        assert_eq!(c.query, Some("q=1"));
        assert_eq!(c.fragment, Some("frag"));
    }

    #[test]
    fn absent_versus_empty_query() {
        assert_eq!(split("http://a").query, None);
        assert_eq!(split("http://a?").query, Some(""));
        assert_eq!(split("http://a?#").query, Some(""));
    }

    #[test]
    fn absent_versus_empty_fragment() {
        assert_eq!(split("http://a").fragment, None);
        assert_eq!(split("http://a#").fragment, Some(""));
    }

    #[test]
    fn empty_authority_is_present() {
        let c = split("file:///etc/hosts");
        assert_eq!(c.authority, Some(""));
        assert_eq!(c.path, "/etc/hosts");
    }

    #[test]
    fn authority_without_path() {
        let c = split("http://example.com");
        assert_eq!(c.authority, Some("example.com"));
        assert_eq!(c.path, "");
    }

    #[test]
    fn no_scheme_when_colon_after_slash() {
        let c = split("a/b:c");
        assert_eq!(c.scheme, None);
        assert_eq!(c.path, "a/b:c");
    }

    #[test]
    fn no_scheme_when_colon_is_first() {
        let c = split(":x");
        assert_eq!(c.scheme, None);
        assert_eq!(c.path, ":x");
    }

    #[test]
    fn scheme_stops_at_first_colon() {
        let c = split("a:b:c");
        assert_eq!(c.scheme, Some("a"));
        assert_eq!(c.path, "b:c");
    }

    #[test]
    fn opaque_path() {
        let c = split("mailto:user@example.com");
        assert_eq!(c.scheme, Some("mailto"));
        assert_eq!(c.authority, None);
        assert_eq!(c.path, "user@example.com");
    }

    #[test]
    fn network_path_reference() {
        let c = split("//g");
        assert_eq!(c.scheme, None);
        assert_eq!(c.authority, Some("g"));
        assert_eq!(c.path, "");
    }

    #[test]
    fn colon_inside_authority_is_not_a_scheme() {
        let c = split("//a:80/x");
        assert_eq!(c.scheme, None);
        assert_eq!(c.authority, Some("a:80"));
        assert_eq!(c.path, "/x");
    }

    #[test]
    fn empty_input() {
        let c = split("");
        assert_eq!(c.scheme, None);
        assert_eq!(c.authority, None);
        assert_eq!(c.path, "");
        assert_eq!(c.query, None);
        assert_eq!(c.fragment, None);
    }

    #[test]
    fn fragment_may_contain_question_mark() {
        let c = split("a#b?c");
        assert_eq!(c.query, None);
        assert_eq!(c.fragment, Some("b?c"));
    }

    #[test]
    fn authority_basic() {
        let a = split_authority("user:pw@host:8080").unwrap();
        assert_eq!(a.user_info, Some("user:pw"));
        assert_eq!(a.host, "host");
        assert_eq!(a.port, Some("8080"));
    }

    #[test]
    fn authority_empty() {
        let a = split_authority("").unwrap();
        assert_eq!(a.user_info, None);
        assert_eq!(a.host, "");
        assert_eq!(a.port, None);
    }

    #[test]
    fn authority_empty_port() {
        let a = split_authority("host:").unwrap();
        assert_eq!(a.host, "host");
        assert_eq!(a.port, Some(""));
    }

    #[test]
    fn authority_bracketed_host() {
        let a = split_authority("[::1]:443").unwrap();
        assert_eq!(a.host, "[::1]");
        assert_eq!(a.port, Some("443"));
    }

    #[test]
    fn authority_bracketed_host_without_port() {
        let a = split_authority("[v1.fe]").unwrap();
        assert_eq!(a.host, "[v1.fe]");
        assert_eq!(a.port, None);
    }

    #[test]
    fn authority_non_numeric_port_fails() {
        assert!(split_authority("host:port").is_none());
        assert!(split_authority("[::1]x").is_none());
    }

    #[test]
    fn authority_unclosed_bracket_falls_through() {
        // The regex falls back to the [^:]* branch, leaving validation to
        // the host normalizer.
        let a = split_authority("[abc").unwrap();
        assert_eq!(a.host, "[abc");
    }
}
