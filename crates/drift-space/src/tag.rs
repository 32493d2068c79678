//! Tags: cheap labels for grouping objects within a space.

use std::fmt;

/// A label attached to objects at insertion time, e.g. `"player"`.
///
/// Tags index into a secondary lookup so tagged objects can be found
/// without scanning the whole space.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(Box<str>);

impl Tag {
    /// A tag with the given label.
    pub fn new(label: impl Into<Box<str>>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_compare_by_label() {
        assert_eq!(Tag::new("player"), Tag::from("player"));
        assert_ne!(Tag::new("player"), Tag::new("tile"));
        assert_eq!(Tag::new("player").to_string(), "player");
    }
}
