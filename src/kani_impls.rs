//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! This module provides `kani::Arbitrary` trait implementations for
//! the crate's public types, enabling property-based verification
//! with the Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Path, Scheme, Uri, UriParts};

/// Valid scheme characters after the leading letter
const SCHEME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789+-.";

/// Unreserved characters, already in canonical form
const UNRESERVED_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-_~";

/// Generate a lowercase letter
fn arbitrary_alpha_char() -> char {
    let chars = b"abcdefghijklmnopqrstuvwxyz";
    let idx: usize = kani::any();
    let idx = idx % chars.len();
    chars[idx] as char
}

/// Generate a valid scheme continuation character
fn arbitrary_scheme_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % SCHEME_CHARS.len();
    SCHEME_CHARS[idx] as char
}

/// Generate an unreserved character that normalization leaves untouched
fn arbitrary_unreserved_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % UNRESERVED_CHARS.len();
    UNRESERVED_CHARS[idx] as char
}

impl kani::Arbitrary for Scheme {
    fn any() -> Self {
        // Generate 1-6 char scheme for tractability
        let len: usize = kani::any();
        let len = 1 + (len % 6);

        let s: String = (0..len)
            .map(|i| {
                if i == 0 {
                    arbitrary_alpha_char()
                } else {
                    arbitrary_scheme_char()
                }
            })
            .collect();

        Scheme::parse(&s).expect("valid scheme by construction")
    }
}

impl kani::Arbitrary for Path {
    fn any() -> Self {
        // Absolute path with 1-3 short segments of unreserved characters,
        // so dot-segment removal is the identity
        let num_segments: usize = kani::any();
        let num_segments = 1 + (num_segments % 3);

        let mut s = String::new();
        for _ in 0..num_segments {
            s.push('/');
            let len: usize = kani::any();
            let len = 1 + (len % 4);
            for _ in 0..len {
                s.push(arbitrary_unreserved_char());
            }
        }

        Path::parse(&s).expect("valid path by construction")
    }
}

impl kani::Arbitrary for Uri {
    fn any() -> Self {
        let scheme: Scheme = kani::any();
        let path: Path = kani::any();

        // Short lowercase reg-name host
        let host_len: usize = kani::any();
        let host_len = 1 + (host_len % 5);
        let host: String = (0..host_len).map(|_| arbitrary_alpha_char()).collect();

        Uri::from_parts(UriParts {
            scheme: scheme.as_str().to_string(),
            authority: Some(host),
            path: path.as_str().to_string(),
            query: None,
            fragment: None,
        })
        .expect("valid URI by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: re-parsing a canonical form reproduces it exactly
#[kani::proof]
#[kani::unwind(12)]
fn proof_parse_roundtrip() {
    let uri: Uri = kani::any();
    let reparsed = Uri::parse(uri.as_str()).expect("canonical form should parse");
    assert_eq!(reparsed.as_str(), uri.as_str());
    assert_eq!(reparsed, uri);
}

/// Proof: normalization is idempotent for paths
#[kani::proof]
#[kani::unwind(8)]
fn proof_path_normalization_idempotent() {
    let path: Path = kani::any();
    let renormalized = Path::parse(path.as_str()).expect("normalized path should parse");
    assert_eq!(renormalized.as_str(), path.as_str());
}

/// Proof: resolving the empty reference reproduces the base
#[kani::proof]
#[kani::unwind(12)]
fn proof_resolve_empty_is_identity() {
    let base: Uri = kani::any();
    let resolved = base.resolve("").expect("empty reference always resolves");
    assert_eq!(resolved.as_str(), base.as_str());
}

/// Proof: equality agrees with canonical-string equality
#[kani::proof]
#[kani::unwind(12)]
fn proof_eq_matches_canonical() {
    let a: Uri = kani::any();
    let b: Uri = kani::any();
    assert_eq!(a == b, a.as_str() == b.as_str());
}
