//! Path component type and the RFC 3986 §5.2.3/§5.2.4 path transforms.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::encoding;
use crate::error::{Component, InvalidUri};

/// A validated, normalized path.
///
/// The stored text has canonical percent-encoding and no un-collapsed dot
/// segments; it may be empty. Paths compare by their normalized text.
///
/// # Examples
///
/// ```
/// use uri_ref::Path;
///
/// let path = Path::parse("/a/b/../c/%7Ed").unwrap();
/// assert_eq!(path.as_str(), "/a/c/~d");
/// assert!(path.is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(String);

impl Path {
    /// Parses and normalizes a path.
    ///
    /// Normalization canonicalizes percent triples first, then collapses
    /// dot segments, so `/%2e%2e/a` and `/../a` normalize identically.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUri`] on a malformed percent triple or a character
    /// outside `*( pchar / "/" )`.
    pub fn parse(input: &str) -> Result<Self, InvalidUri> {
        let normalized =
            encoding::normalize_component(Component::Path, input, encoding::is_path_byte)?;
        Ok(Self(remove_dot_segments(&normalized)))
    }

    /// Returns the normalized path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the path starts with `/`.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Iterates over the `/`-separated segments of a non-empty path.
    ///
    /// Only a single root `/` is skipped; empty segments elsewhere, such as
    /// the head of `//x`, are yielded.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.strip_prefix('/').unwrap_or(&self.0).split('/')
    }
}

/// Collapses `.` and `..` segments per RFC 3986 §5.2.4.
///
/// A single forward scan over the input with a small set of prefix cases;
/// every step strictly shortens the remaining input. `..` segments that
/// underflow the output are dropped, matching the RFC's pop-on-empty
/// behavior.
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // Move one segment, including its leading '/' if any, from
            // input to output.
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| i + start);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

/// Removes the last complete segment written to the output, along with its
/// preceding `/` if any.
fn pop_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}

/// Merges a reference path onto a base path per RFC 3986 §5.2.3.
///
/// With an authority and an empty base path the reference is rooted at `/`;
/// otherwise everything after the last `/` of the base path is replaced.
pub(crate) fn merge(base_path: &str, base_has_authority: bool, reference_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        return format!("/{reference_path}");
    }
    match base_path.rfind('/') {
        Some(i) => format!("{}{}", &base_path[..=i], reference_path),
        None => reference_path.to_string(),
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Path {
    type Err = InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Path {
    type Error = InvalidUri;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Path {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
