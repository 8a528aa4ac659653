//! Authority component type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::encoding;
use crate::error::{Component, InvalidUri, InvalidUriKind};
use crate::grammar;
use crate::ip;

/// A validated authority: `[userinfo "@"] host [":" port]`.
///
/// The host is stored normalized (lower-cased, percent-encoding
/// canonicalized) and may be empty, which is distinct from the authority
/// being absent from a URI altogether. An empty port (`host:`) normalizes
/// to no port.
///
/// # Examples
///
/// ```
/// use uri_ref::Authority;
///
/// let auth = Authority::parse("User@Example.COM:8080").unwrap();
/// assert_eq!(auth.user_info(), Some("User"));
/// assert_eq!(auth.host(), "example.com");
/// assert_eq!(auth.port(), Some(8080));
/// assert_eq!(auth.as_str(), "User@example.com:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    user_info: Option<String>,
    host: String,
    port: Option<u16>,
    /// Recomposed normalized form
    normalized: String,
}

impl Authority {
    /// Parses and normalizes an authority.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUri`] if the input does not match the authority
    /// layout, the userinfo or host contains a disallowed character, a
    /// bracketed host is not a valid IPv6 or `IPvFuture` literal, or the
    /// port is not an integer in 0-65535.
    pub fn parse(input: &str) -> Result<Self, InvalidUri> {
        let raw = grammar::split_authority(input).ok_or_else(|| {
            InvalidUri::new(
                Component::Authority,
                input,
                InvalidUriKind::MalformedAuthority,
            )
        })?;

        let user_info = raw
            .user_info
            .map(|u| {
                encoding::normalize_component(Component::UserInfo, u, encoding::is_user_info_byte)
            })
            .transpose()?;

        let host = Self::normalize_host(raw.host)?;

        let port = match raw.port {
            None | Some("") => None,
            Some(digits) => Some(digits.parse::<u16>().map_err(|_| {
                InvalidUri::new(Component::Port, digits, InvalidUriKind::PortOutOfRange)
            })?),
        };

        let normalized = Self::recompose(user_info.as_deref(), &host, port);
        Ok(Self {
            user_info,
            host,
            port,
            normalized,
        })
    }

    /// Returns the userinfo, if present.
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    /// Returns the normalized host. May be empty.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, if present.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns true if the host is a bracketed IP-literal.
    #[must_use]
    pub fn is_ip_literal(&self) -> bool {
        self.host.starts_with('[')
    }

    /// Returns the normalized string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns a copy of this authority without its port.
    ///
    /// Used during URI normalization to elide a port equal to the scheme's
    /// registered default.
    #[must_use]
    pub fn without_port(&self) -> Self {
        let normalized = Self::recompose(self.user_info.as_deref(), &self.host, None);
        Self {
            user_info: self.user_info.clone(),
            host: self.host.clone(),
            port: None,
            normalized,
        }
    }

    /// Returns a copy of this authority without its userinfo.
    ///
    /// Backs [`Uri::display`](crate::Uri::display), which renders a URI
    /// without credentials for logging.
    #[must_use]
    pub fn without_user_info(&self) -> Self {
        let normalized = Self::recompose(None, &self.host, self.port);
        Self {
            user_info: None,
            host: self.host.clone(),
            port: self.port,
            normalized,
        }
    }

    /// Dispatches between the IP-literal and reg-name branches. A bracketed
    /// host skips reg-name validation entirely.
    fn normalize_host(raw: &str) -> Result<String, InvalidUri> {
        if raw.starts_with('[') {
            let lower = raw.to_ascii_lowercase();
            if !lower.ends_with(']') || !ip::is_ip_literal_inner(&lower[1..lower.len() - 1]) {
                return Err(InvalidUri::new(
                    Component::Host,
                    raw,
                    InvalidUriKind::InvalidIpLiteral,
                ));
            }
            encoding::normalize_component(Component::Host, &lower, encoding::is_ip_literal_byte)
        } else {
            // IPv4 literals are a syntactic subset of reg-name, so a single
            // validation pass covers both. Percent triples are canonicalized
            // before case folding so `ex%41mple` ends up as `example`, while
            // the hex digits of surviving triples stay upper-case.
            let normalized =
                encoding::normalize_component(Component::Host, raw, encoding::is_reg_name_byte)?;
            Ok(lowercase_outside_triples(&normalized))
        }
    }

    fn recompose(user_info: Option<&str>, host: &str, port: Option<u16>) -> String {
        let mut out = String::with_capacity(host.len());
        if let Some(user_info) = user_info {
            out.push_str(user_info);
            out.push('@');
        }
        out.push_str(host);
        if let Some(port) = port {
            out.push(':');
            out.push_str(&port.to_string());
        }
        out
    }
}

/// Lower-cases a normalized reg-name while leaving the hex digits of
/// percent triples untouched.
fn lowercase_outside_triples(host: &str) -> String {
    let mut out = String::with_capacity(host.len());
    let mut skip = 0u8;
    for c in host.chars() {
        if skip > 0 {
            skip -= 1;
            out.push(c);
        } else if c == '%' {
            skip = 2;
            out.push(c);
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for Authority {
    type Err = InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Authority {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for Authority {
    type Error = InvalidUri;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Authority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Authority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Authority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Authority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
