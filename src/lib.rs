//! Parser, normalizer, and reference resolver for RFC 3986 URIs.
//!
//! This crate provides an immutable [`Uri`] value type. Parsing, component
//! validation, normalization, and relative-reference resolution all follow
//! RFC 3986; every constructed value is already in canonical form.
//!
//! # Overview
//!
//! A URI reference has the structure:
//!
//! ```text
//! <scheme>://<userinfo>@<host>:<port>/<path>?<query>#<fragment>
//! ```
//!
//! Every component except the scheme and path is optional, and for the
//! authority, query, and fragment the crate preserves the difference
//! between "absent" and "present but empty" (`http://a` vs `http://a?`).
//!
//! # Quick Start
//!
//! ```rust
//! use uri_ref::Uri;
//!
//! // Parse and normalize in one step
//! let uri = Uri::parse("HTTP://Example.COM:80/a/./b/../c?q=1#top").unwrap();
//! assert_eq!(uri.as_str(), "http://example.com/a/c?q=1#top");
//!
//! // Access components
//! assert_eq!(uri.scheme().as_str(), "http");
//! assert_eq!(uri.host(), Some("example.com"));
//! assert_eq!(uri.port(), None); // default port elided
//!
//! // Resolve relative references
//! let base = Uri::parse("http://a/b/c/d;p?q").unwrap();
//! assert_eq!(base.resolve("../g").unwrap().as_str(), "http://a/b/g");
//! ```
//!
//! # Normalization
//!
//! Construction applies the RFC 3986 §6.2.2 syntax-based normalizations:
//!
//! - scheme and host are lower-cased
//! - percent triples use upper-case hex digits
//! - percent-encoded unreserved characters are decoded (`%7E` becomes `~`)
//! - `.` and `..` path segments are collapsed
//! - a port equal to the scheme's registered default is removed
//!
//! Canonical forms are stable: re-parsing a `Uri`'s string representation
//! produces an equal value with the identical string.
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Uri`] and its component
//!   types, as canonical strings.
//! - `kani`: `kani::Arbitrary` implementations and proof harnesses for
//!   the Kani model checker.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod constants;
mod encoding;
mod error;
mod fragment;
mod grammar;
mod ip;
#[cfg(kani)]
mod kani_impls;
mod path;
pub mod prelude;
mod query;
mod resolve;
mod scheme;
mod uri;

pub use authority::Authority;
pub use constants::{DEFAULT_PORTS, default_port};
pub use error::{Component, InvalidUri, InvalidUriKind};
pub use fragment::Fragment;
pub use path::Path;
pub use query::Query;
pub use scheme::Scheme;
pub use uri::{Uri, UriParts};
