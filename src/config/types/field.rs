//! Config field path used to locate diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path to a config field, e.g. `sidebar[1].items[0].slug`.
///
/// Built incrementally while walking the config tree, so nested sidebar
/// entries can be reported precisely.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("sidebar").index(1).key("items").index(0);
/// assert_eq!(path.as_str(), "sidebar[1].items[0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a `.key` segment.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Append an `[index]` segment.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path() {
        let path = FieldPath::new("sidebar").index(1).key("items").index(0);
        assert_eq!(path.as_str(), "sidebar[1].items[0]");
        assert_eq!(path.key("slug").as_str(), "sidebar[1].items[0].slug");
    }

    #[test]
    fn test_key_on_empty_root() {
        assert_eq!(FieldPath::new("").key("title").as_str(), "title");
    }
}
