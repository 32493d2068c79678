//! Shared handle for a space ticked by one writer and queried by many
//! readers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use drift_core::{Body, ObjectId, Position};

use crate::index::{Space, TickSummary};
use crate::tag::Tag;

/// Clonable handle to a [`Space`] behind a reader/writer lock.
///
/// A tick holds the write lock end to end, so readers always observe
/// whole ticks and never a half-applied gravity pass. A poisoned lock
/// is recovered rather than propagated: the space's indexes are kept
/// consistent by [`Space`] itself, not by lock-protected critical
/// sections, so the data is still usable after a panicking reader.
#[derive(Clone)]
pub struct SharedSpace {
    inner: Arc<RwLock<Space>>,
}

impl SharedSpace {
    /// Wrap a space for sharing.
    pub fn new(space: Space) -> Self {
        Self {
            inner: Arc::new(RwLock::new(space)),
        }
    }

    /// Acquire the read lock for a batch of queries.
    pub fn read(&self) -> RwLockReadGuard<'_, Space> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the write lock for a batch of mutations.
    pub fn write(&self) -> RwLockWriteGuard<'_, Space> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a body, see [`Space::insert_at`].
    pub fn insert_at(
        &self,
        pos: Position,
        body: Box<dyn Body>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> ObjectId {
        self.write().insert_at(pos, body, tags)
    }

    /// Remove objects at a position, see [`Space::remove_at`].
    pub fn remove_at(&self, pos: Position, filter: &[ObjectId]) -> Vec<Box<dyn Body>> {
        self.write().remove_at(pos, filter)
    }

    /// Run one tick under the write lock.
    pub fn tick(&self) -> TickSummary {
        self.write().tick()
    }

    /// Object count without holding a guard across the call site.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the space holds no objects.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gravity::GravityParams;
    use drift_core::Tickable;
    use std::thread;

    struct Mote(Position);

    impl Tickable for Mote {}

    impl Body for Mote {
        fn position(&self) -> Position {
            self.0
        }

        fn set_position(&mut self, pos: Position) {
            self.0 = pos;
        }
    }

    #[test]
    fn clones_share_the_same_space() {
        let shared = SharedSpace::new(Space::new(GravityParams::default()));
        let other = shared.clone();
        other.insert_at(Position::origin(), Box::new(Mote(Position::origin())), []);
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn readers_on_other_threads_see_committed_state() {
        let shared = SharedSpace::new(Space::new(GravityParams::default()));
        for i in 0..8 {
            shared.insert_at(
                Position::new(i as f64, 0.0, 0.0),
                Box::new(Mote(Position::origin())),
                [],
            );
        }
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let view = shared.clone();
                thread::spawn(move || view.read().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 8);
        }
    }

    #[test]
    fn ticking_under_the_lock_reports_a_summary() {
        let shared = SharedSpace::new(Space::new(GravityParams::default()));
        shared.insert_at(Position::origin(), Box::new(Mote(Position::origin())), []);
        let summary = shared.tick();
        assert_eq!(summary.ticked, 1);
    }
}
