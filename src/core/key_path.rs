//! Dotted key paths for nested mapping access
//!
//! A path like `"parent.child.key"` is split on every `.` into segments.
//! There is no quoting or escaping: a key that itself contains a dot cannot be
//! addressed, and `"a..b"` has an empty middle segment.

use std::fmt;

/// A parsed dotted path into a nested mapping
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Create a new empty key path, which addresses the root
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Create a key path from multiple segments
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parse a dotted path. The empty string parses to the root path.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::new();
        }
        Self::from_segments(input.split('.').map(str::to_string).collect())
    }

    /// Get the segments of this path
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path addresses the root
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the last segment (leaf key)
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(|s| s.as_str())
    }

    /// Segments leading up to the leaf key
    pub fn parents(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, init)) => init,
            None => &[],
        }
    }

    /// Get the path of the containing mapping, or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(Self::from_segments(self.parents().to_vec()))
        }
    }

    /// Create a new path by appending a segment
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self::from_segments(segments)
    }

    /// Convert to dot notation string
    pub fn to_dot_notation(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dot_notation())
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&String> for KeyPath {
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

/// `None` addresses the root, like the empty string
impl From<Option<&str>> for KeyPath {
    fn from(s: Option<&str>) -> Self {
        s.map(Self::parse).unwrap_or_default()
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self::from_segments(segments)
    }
}
