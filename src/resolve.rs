//! Relative reference resolution per RFC 3986 §5.2-§5.3.

use crate::error::{Component, InvalidUri, InvalidUriKind};
use crate::grammar;
use crate::path;
use crate::uri::Uri;
use crate::{Authority, Query};

/// Merges a base URI and a reference into a resolved URI.
///
/// The reference is decomposed raw; normalization runs exactly once, when
/// the resolved URI is constructed from the chosen target components. In
/// non-strict mode a reference scheme equal to the base scheme is treated
/// as absent, reproducing the legacy user-agent behavior described in
/// §5.2.2.
pub(crate) fn resolve(base: &Uri, reference: &str, strict: bool) -> Result<Uri, InvalidUri> {
    let r = grammar::split_uri_reference(reference);

    let mut r_scheme = r.scheme;
    if !strict
        && r_scheme.is_some_and(|s| s.eq_ignore_ascii_case(base.scheme().as_str()))
    {
        r_scheme = None;
    }

    let t_scheme: &str;
    let t_authority: Option<&str>;
    let t_path: String;
    let t_query: Option<&str>;

    if let Some(scheme) = r_scheme {
        t_scheme = scheme;
        t_authority = r.authority;
        t_path = path::remove_dot_segments(r.path);
        t_query = r.query;
    } else {
        t_scheme = base.scheme().as_str();
        if r.authority.is_some() {
            t_authority = r.authority;
            t_path = path::remove_dot_segments(r.path);
            t_query = r.query;
        } else {
            t_authority = base.authority().map(Authority::as_str);
            if r.path.is_empty() {
                t_path = base.path().as_str().to_string();
                // The reference's query wins whenever its component was
                // present, even when empty.
                t_query = if r.query.is_some() {
                    r.query
                } else {
                    base.query().map(Query::as_str)
                };
            } else if r.path.starts_with('/') {
                t_path = path::remove_dot_segments(r.path);
                t_query = r.query;
            } else {
                let merged =
                    path::merge(base.path().as_str(), base.authority().is_some(), r.path);
                let target = path::remove_dot_segments(&merged);
                if base.authority().is_none() && !target.starts_with('/') {
                    let first = target.split('/').next().unwrap_or("");
                    if first.contains(':') {
                        return Err(InvalidUri::new(
                            Component::Path,
                            reference,
                            InvalidUriKind::AmbiguousColonSegment,
                        ));
                    }
                }
                t_path = target;
                t_query = r.query;
            }
        }
    }

    Uri::from_raw(t_scheme, t_authority, &t_path, t_query, r.fragment)
}
