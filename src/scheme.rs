//! Scheme component type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants;
use crate::error::{Component, InvalidUri, InvalidUriKind};

/// A validated, lower-cased URI scheme.
///
/// Grammar: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`. The scheme is the
/// one component every [`Uri`](crate::Uri) must carry.
///
/// # Examples
///
/// ```
/// use uri_ref::Scheme;
///
/// let scheme = Scheme::parse("HTTPS").unwrap();
/// assert_eq!(scheme.as_str(), "https");
/// assert_eq!(scheme.default_port(), Some(443));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme(String);

impl Scheme {
    /// Parses and normalizes a scheme.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUri`] if the input is empty, does not start with a
    /// letter, or contains a character outside `ALPHA / DIGIT / "+" / "-" /
    /// "."`.
    pub fn parse(input: &str) -> Result<Self, InvalidUri> {
        if input.is_empty() {
            return Err(InvalidUri::new(
                Component::Scheme,
                input,
                InvalidUriKind::Empty,
            ));
        }
        for (i, b) in input.bytes().enumerate() {
            let ok = if i == 0 {
                b.is_ascii_alphabetic()
            } else {
                b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
            };
            if !ok {
                let char = input[i..].chars().next().unwrap_or('\u{fffd}');
                return Err(InvalidUri::new(
                    Component::Scheme,
                    input,
                    InvalidUriKind::InvalidChar { char, position: i },
                ));
            }
        }
        Ok(Self(input.to_ascii_lowercase()))
    }

    /// Returns the normalized scheme text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the scheme's registered default port, if it has one.
    ///
    /// A port equal to this value is elided during URI normalization.
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        constants::default_port(&self.0)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Scheme {
    type Err = InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Scheme {
    type Error = InvalidUri;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Scheme {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheme {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Scheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
