//! Error types for URI parsing, normalization, and resolution.

use std::fmt;

/// The error returned when a URI or one of its components is malformed.
///
/// Every failure in this crate is permanent: the input is invalid and
/// retrying cannot succeed. Validation runs to completion before any
/// [`Uri`](crate::Uri) is constructed, so a failed operation never leaves a
/// partially normalized value behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUri {
    /// The component that failed validation
    pub component: Component,
    /// The raw text of the failing component
    pub raw: String,
    /// The specific error that occurred
    pub kind: InvalidUriKind,
}

impl InvalidUri {
    pub(crate) fn new(component: Component, raw: impl Into<String>, kind: InvalidUriKind) -> Self {
        Self {
            component,
            raw: raw.into(),
            kind,
        }
    }
}

/// The URI component a parse error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The scheme, e.g. `http`
    Scheme,
    /// The authority as a whole, `[userinfo "@"] host [":" port]`
    Authority,
    /// The userinfo subcomponent of the authority
    UserInfo,
    /// The host subcomponent of the authority
    Host,
    /// The port subcomponent of the authority
    Port,
    /// The path
    Path,
    /// The query
    Query,
    /// The fragment
    Fragment,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scheme => "scheme",
            Self::Authority => "authority",
            Self::UserInfo => "userinfo",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        })
    }
}

/// Specific validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidUriKind {
    /// The component is empty where the grammar requires at least one character
    Empty,
    /// The input has no scheme; a URI (as opposed to a relative reference)
    /// always carries one
    MissingScheme,
    /// A character outside the component's allowed set
    InvalidChar {
        /// The offending character
        char: char,
        /// Byte offset within the raw component text
        position: usize,
    },
    /// A `%` not followed by two hexadecimal digits
    InvalidPercentEncoding {
        /// Byte offset of the `%` within the raw component text
        position: usize,
    },
    /// The authority does not match the `[userinfo "@"] host [":" port]` layout
    MalformedAuthority,
    /// A bracketed host that is neither an IPv6 address nor an `IPvFuture` literal
    InvalidIpLiteral,
    /// A port outside the range 0-65535
    PortOutOfRange,
    /// The first segment of a merged relative path contains `:` and would be
    /// read back as a scheme
    AmbiguousColonSegment,
    /// A non-empty path that does not begin with `/` while an authority is
    /// present; the recomposed string would re-parse with a different host
    RootlessPathWithAuthority,
}

impl fmt::Display for InvalidUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} '{}': ", self.component, self.raw)?;
        match &self.kind {
            InvalidUriKind::Empty => write!(f, "must not be empty"),
            InvalidUriKind::MissingScheme => {
                write!(f, "a URI must have a scheme followed by ':'")
            }
            InvalidUriKind::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            InvalidUriKind::InvalidPercentEncoding { position } => {
                write!(
                    f,
                    "'%' at position {position} is not followed by two hex digits"
                )
            }
            InvalidUriKind::MalformedAuthority => {
                write!(f, "does not match [userinfo \"@\"] host [\":\" port]")
            }
            InvalidUriKind::InvalidIpLiteral => {
                write!(f, "brackets must enclose an IPv6 address or IPvFuture literal")
            }
            InvalidUriKind::PortOutOfRange => {
                write!(f, "port must be an integer between 0 and 65535")
            }
            InvalidUriKind::AmbiguousColonSegment => {
                write!(
                    f,
                    "first segment of the merged path contains ':' and would parse as a scheme"
                )
            }
            InvalidUriKind::RootlessPathWithAuthority => {
                write!(
                    f,
                    "path must be empty or begin with '/' when an authority is present"
                )
            }
        }
    }
}

impl std::error::Error for InvalidUri {}
