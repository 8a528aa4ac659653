//! Query component type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::encoding;
use crate::error::{Component, InvalidUri};

/// A validated query (without the leading `?`).
///
/// The query is treated as an opaque string per RFC 3986: no key-value
/// interpretation is applied. An empty query is valid and distinct from a
/// URI having no query at all; that distinction lives in
/// `Option<Query>` on [`Uri`](crate::Uri).
///
/// # Examples
///
/// ```
/// use uri_ref::Query;
///
/// let query = Query::parse("key=%7Evalue&flag").unwrap();
/// assert_eq!(query.as_str(), "key=~value&flag");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Parses and normalizes a query.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUri`] on a malformed percent triple or a character
    /// outside `*( pchar / "/" / "?" )`.
    pub fn parse(input: &str) -> Result<Self, InvalidUri> {
        encoding::normalize_component(Component::Query, input, encoding::is_query_byte).map(Self)
    }

    /// Returns the normalized query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the query is present but empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Query {
    type Err = InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Query {
    type Error = InvalidUri;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Query {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for Query {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Query {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
