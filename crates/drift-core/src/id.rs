//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ObjectId`] allocation.
static OBJECT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an object inserted into a space.
///
/// Allocated from a monotonic atomic counter via [`ObjectId::next`].
/// Two distinct objects always have different IDs, even after one of
/// them is removed, so an ID never aliases a later insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh, unique object ID.
    ///
    /// Thread-safe; IDs are unique across all spaces in the process.
    pub fn next() -> Self {
        Self(OBJECT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value, for logging and diagnostics.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj-{}", self.0)
    }
}

/// Monotonic tick counter for a running space.
///
/// Starts at 0 and increments once per completed tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The ID of the following tick.
    pub fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_ids_are_unique() {
        let a = ObjectId::next();
        let b = ObjectId::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }

    #[test]
    fn tick_id_successor_increments() {
        let t = TickId::default();
        assert_eq!(t.successor(), TickId(1));
        assert_eq!(t.successor().successor(), TickId(2));
    }

    #[test]
    fn display_formats() {
        assert_eq!(TickId(7).to_string(), "7");
        let id = ObjectId::next();
        assert_eq!(id.to_string(), format!("obj-{}", id.raw()));
    }
}
