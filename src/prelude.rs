//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types:
//!
//! ```rust
//! use uri_ref::prelude::*;
//!
//! let uri = Uri::parse("https://example.com/a/b?q=1").unwrap();
//! assert_eq!(uri.path().as_str(), "/a/b");
//! ```

pub use crate::{
    // Core types
    Authority, Fragment, Path, Query, Scheme, Uri, UriParts,
    // Errors
    Component, InvalidUri, InvalidUriKind,
    // Constants
    DEFAULT_PORTS, default_port,
};
