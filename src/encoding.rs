//! Percent-encoding normalization against per-component character sets.
//!
//! RFC 3986 §6.2.2 defines the normalization applied here: every
//! percent-encoded triple is decoded once; octets in the `unreserved` set
//! are emitted literally, every other triple is re-emitted with upper-case
//! hex digits. Raw characters are copied through only when the component's
//! allowed set accepts them.

use crate::error::{Component, InvalidUri, InvalidUriKind};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub(crate) const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
pub(crate) const fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// `*( unreserved / pct-encoded / sub-delims / ":" )`
pub(crate) const fn is_user_info_byte(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':'
}

/// reg-name: `*( unreserved / pct-encoded / sub-delims )`
pub(crate) const fn is_reg_name_byte(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b)
}

/// Characters kept verbatim inside a bracketed IP-literal.
pub(crate) const fn is_ip_literal_byte(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || matches!(b, b'[' | b']' | b':')
}

/// `pchar` plus the path's own `/` separator.
pub(crate) const fn is_path_byte(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || matches!(b, b':' | b'@' | b'/')
}

/// query / fragment: `*( pchar / "/" / "?" )`
pub(crate) const fn is_query_byte(b: u8) -> bool {
    is_path_byte(b) || b == b'?'
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Validates and normalizes one component in a single pass.
///
/// Percent triples decoding to an unreserved octet are unescaped; all other
/// triples are kept with upper-case hex. Raw characters outside `allowed`
/// fail with [`InvalidUriKind::InvalidChar`], malformed triples with
/// [`InvalidUriKind::InvalidPercentEncoding`].
pub(crate) fn normalize_component(
    component: Component,
    raw: &str,
    allowed: fn(u8) -> bool,
) -> Result<String, InvalidUri> {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let hi = bytes.get(i + 1).copied().and_then(hex_value);
            let lo = bytes.get(i + 2).copied().and_then(hex_value);
            let (Some(hi), Some(lo)) = (hi, lo) else {
                return Err(InvalidUri::new(
                    component,
                    raw,
                    InvalidUriKind::InvalidPercentEncoding { position: i },
                ));
            };
            let octet = (hi << 4) | lo;
            if is_unreserved(octet) {
                out.push(char::from(octet));
            } else {
                out.push('%');
                out.push(char::from(HEX_UPPER[usize::from(octet >> 4)]));
                out.push(char::from(HEX_UPPER[usize::from(octet & 0x0f)]));
            }
            i += 3;
        } else if allowed(b) {
            out.push(char::from(b));
            i += 1;
        } else {
            // Report the full character, not just its leading byte.
            let char = raw[i..].chars().next().unwrap_or('\u{fffd}');
            return Err(InvalidUri::new(
                component,
                raw,
                InvalidUriKind::InvalidChar { char, position: i },
            ));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> Result<String, InvalidUri> {
        normalize_component(Component::Path, raw, is_path_byte)
    }

    #[test]
    fn unreserved_triple_is_unescaped() {
        assert_eq!(path("/%7Euser").unwrap(), "/~user");
        assert_eq!(path("/%41%62").unwrap(), "/Ab");
    }

    #[test]
    fn reserved_triple_keeps_upper_hex() {
        assert_eq!(path("/%2f").unwrap(), "/%2F");
        assert_eq!(path("/%3a").unwrap(), "/%3A");
    }

    #[test]
    fn already_canonical_is_unchanged() {
        assert_eq!(path("/a/b~c/%2F").unwrap(), "/a/b~c/%2F");
    }

    #[test]
    fn truncated_triple_fails() {
        let err = path("/a%4").unwrap_err();
        assert_eq!(
            err.kind,
            InvalidUriKind::InvalidPercentEncoding { position: 2 }
        );
    }

    #[test]
    fn non_hex_triple_fails() {
        let err = path("/%zz").unwrap_err();
        assert_eq!(
            err.kind,
            InvalidUriKind::InvalidPercentEncoding { position: 1 }
        );
    }

    #[test]
    fn disallowed_raw_character_fails() {
        let err = path("/a b").unwrap_err();
        assert_eq!(
            err.kind,
            InvalidUriKind::InvalidChar {
                char: ' ',
                position: 2
            }
        );
    }

    #[test]
    fn non_ascii_character_fails_whole_char() {
        let err = path("/café").unwrap_err();
        assert_eq!(
            err.kind,
            InvalidUriKind::InvalidChar {
                char: 'é',
                position: 4
            }
        );
    }

    #[test]
    fn non_ascii_octet_may_stay_percent_encoded() {
        assert_eq!(path("/%C3%A9").unwrap(), "/%C3%A9");
        assert_eq!(path("/%c3%a9").unwrap(), "/%C3%A9");
    }

    #[test]
    fn query_allows_question_mark() {
        assert_eq!(
            normalize_component(Component::Query, "a?b=c", is_query_byte).unwrap(),
            "a?b=c"
        );
        assert!(path("a?b").is_err());
    }

    #[test]
    fn user_info_allows_colon_but_not_at() {
        assert!(normalize_component(Component::UserInfo, "u:p", is_user_info_byte).is_ok());
        assert!(normalize_component(Component::UserInfo, "u@p", is_user_info_byte).is_err());
    }
}
