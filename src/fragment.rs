//! Fragment component type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::encoding;
use crate::error::{Component, InvalidUri};

/// A validated fragment (without the leading `#`).
///
/// Shares the query's character set, `*( pchar / "/" / "?" )`. An empty
/// fragment is valid and distinct from a URI having no fragment.
///
/// # Examples
///
/// ```
/// use uri_ref::Fragment;
///
/// let frag = Fragment::parse("section-2.1").unwrap();
/// assert_eq!(frag.as_str(), "section-2.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Parses and normalizes a fragment.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUri`] on a malformed percent triple or a character
    /// outside `*( pchar / "/" / "?" )`.
    pub fn parse(input: &str) -> Result<Self, InvalidUri> {
        encoding::normalize_component(Component::Fragment, input, encoding::is_query_byte).map(Self)
    }

    /// Returns the normalized fragment text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fragment {
    type Err = InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Fragment {
    type Error = InvalidUri;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Fragment {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for Fragment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fragment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fragment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fragment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_fragment() {
        let frag = Fragment::parse("top").unwrap();
        assert_eq!(frag.as_str(), "top");
    }

    #[test]
    fn parse_empty_fragment() {
        let frag = Fragment::parse("").unwrap();
        assert_eq!(frag.as_str(), "");
    }

    #[test]
    fn parse_normalizes_percent_encoding() {
        assert_eq!(Fragment::parse("%41%3d").unwrap().as_str(), "A%3D");
    }

    #[test]
    fn parse_space_fails() {
        let err = Fragment::parse("a b").unwrap_err();
        assert_eq!(err.component, Component::Fragment);
    }

    #[test]
    fn parse_hash_fails() {
        assert!(Fragment::parse("a#b").is_err());
    }
}
