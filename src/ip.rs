//! Validators for the IP address grammars used in host components.
//!
//! These follow the RFC 3986 productions rather than `std::net` parsing:
//! `IPv4address` forbids leading zeros, `IP-literal` admits `IPvFuture`, and
//! no address value is ever materialized since hosts are stored as strings.

use crate::encoding::{is_sub_delim, is_unreserved};

/// Validates the inside of a bracketed IP-literal, brackets excluded.
///
/// `IP-literal = "[" ( IPv6address / IPvFuture ) "]"`
pub(crate) fn is_ip_literal_inner(s: &str) -> bool {
    match s.strip_prefix('v').or_else(|| s.strip_prefix('V')) {
        Some(rest) => is_ip_v_future(rest),
        None => is_ipv6(s),
    }
}

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`,
/// with the leading `v` already stripped.
fn is_ip_v_future(s: &str) -> bool {
    let Some(dot) = s.find('.') else {
        return false;
    };
    let (version, tail) = (&s[..dot], &s[dot + 1..]);
    !version.is_empty()
        && version.bytes().all(|b| b.is_ascii_hexdigit())
        && !tail.is_empty()
        && tail
            .bytes()
            .all(|b| is_unreserved(b) || is_sub_delim(b) || b == b':')
}

/// Validates an `IPv6address`, including an embedded IPv4 tail.
pub(crate) fn is_ipv6(s: &str) -> bool {
    // At most one "::"; everything before it and after it is a plain
    // colon-separated group list.
    let (head, tail, elided) = match s.find("::") {
        Some(i) => {
            let tail = &s[i + 2..];
            if tail.contains("::") {
                return false;
            }
            (&s[..i], tail, true)
        }
        None => ("", s, false),
    };

    let mut groups = 0usize;
    if !head.is_empty() {
        for g in head.split(':') {
            if !is_h16(g) {
                return false;
            }
            groups += 1;
        }
    }

    let mut tail_groups: Vec<&str> = if tail.is_empty() {
        Vec::new()
    } else {
        tail.split(':').collect()
    };
    if tail_groups.last().is_some_and(|g| g.contains('.')) {
        let v4 = tail_groups.pop().unwrap_or_default();
        if !is_ipv4(v4) {
            return false;
        }
        groups += 2;
    }
    for g in tail_groups {
        if !is_h16(g) {
            return false;
        }
        groups += 1;
    }

    // An ellipsis must elide at least one group of zeros.
    if elided { groups < 8 } else { groups == 8 }
}

/// `h16 = 1*4HEXDIG`
fn is_h16(s: &str) -> bool {
    (1..=4).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validates a four-octet dotted-decimal IPv4 address.
pub(crate) fn is_ipv4(s: &str) -> bool {
    let mut octets = 0;
    for part in s.split('.') {
        if !is_dec_octet(part) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

/// `dec-octet`: 0-255 without leading zeros.
fn is_dec_octet(s: &str) -> bool {
    match s.len() {
        1 => s.as_bytes()[0].is_ascii_digit(),
        2 => matches!(s.as_bytes()[0], b'1'..=b'9') && s.as_bytes()[1].is_ascii_digit(),
        3 => {
            s.bytes().all(|b| b.is_ascii_digit())
                && s.parse::<u16>().is_ok_and(|v| (100..=255).contains(&v))
        }
        _ => false,
    }
}
