//! The [`Space`]: owner of every object, indexed three ways.

use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use smallvec::SmallVec;

use drift_core::{Body, ObjectId, PosKey, Position};
use drift_geom::CornerHolder;

use crate::error::SpaceError;
use crate::gravity::GravityParams;
use crate::tag::Tag;

/// Counters reported by one [`Space::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Objects whose `tick` callback ran.
    pub ticked: usize,
    /// Objects gravity moved to a new position.
    pub gravity_moves: usize,
    /// Objects whose gravity step was skipped as degenerate.
    pub gravity_skips: usize,
}

struct Entry {
    body: Box<dyn Body>,
    key: PosKey,
    tags: SmallVec<[Tag; 2]>,
}

/// A three-dimensional space of owned objects.
///
/// Objects are addressed by [`ObjectId`] and bucketed by quantised
/// position, with an optional tag index on the side. All three views
/// stay consistent across every mutation; iteration orders everywhere
/// are insertion orders, so identical operation sequences yield
/// identical results.
pub struct Space {
    objects: IndexMap<ObjectId, Entry>,
    by_pos: IndexMap<PosKey, SmallVec<[ObjectId; 2]>>,
    by_tag: IndexMap<Tag, IndexSet<ObjectId>>,
    gravity: GravityParams,
}

impl Space {
    /// An empty space with the given gravity parameters.
    pub fn new(gravity: GravityParams) -> Self {
        Self {
            objects: IndexMap::new(),
            by_pos: IndexMap::new(),
            by_tag: IndexMap::new(),
            gravity,
        }
    }

    /// The gravity parameters in force.
    pub fn gravity(&self) -> GravityParams {
        self.gravity
    }

    /// Number of objects in the space.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the space holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of distinct occupied positions.
    pub fn distinct_positions(&self) -> usize {
        self.by_pos.len()
    }

    /// Every occupied position, in first-occupied order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.by_pos.keys().map(|key| key.position())
    }

    /// Insert a body at a position, optionally tagged, returning its
    /// new ID.
    ///
    /// The body is told its position before it becomes visible to any
    /// query.
    pub fn insert_at(
        &mut self,
        pos: Position,
        mut body: Box<dyn Body>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> ObjectId {
        body.set_position(pos);
        let id = ObjectId::next();
        let key = pos.key();
        let tags: SmallVec<[Tag; 2]> = tags.into_iter().collect();
        self.by_pos.entry(key).or_default().push(id);
        for tag in &tags {
            self.by_tag.entry(tag.clone()).or_default().insert(id);
        }
        self.objects.insert(id, Entry { body, key, tags });
        id
    }

    /// Remove the objects stored at `pos`, returning their bodies.
    ///
    /// A non-empty `filter` restricts removal to the listed IDs; with
    /// an empty filter everything at the position goes.
    pub fn remove_at(&mut self, pos: Position, filter: &[ObjectId]) -> Vec<Box<dyn Body>> {
        let key = pos.key();
        let ids: Vec<ObjectId> = match self.by_pos.get(&key) {
            Some(slot) => slot
                .iter()
                .copied()
                .filter(|id| filter.is_empty() || filter.contains(id))
                .collect(),
            None => {
                warn!("no objects stored at {key} to remove");
                return Vec::new();
            }
        };
        ids.into_iter().filter_map(|id| self.detach(id)).collect()
    }

    /// Swap the object `old` at `pos` for a new body, atomically from
    /// the perspective of queries.
    pub fn replace_at(
        &mut self,
        pos: Position,
        old: ObjectId,
        body: Box<dyn Body>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<ObjectId, SpaceError> {
        let key = pos.key();
        match self.objects.get(&old) {
            None => return Err(SpaceError::UnknownObject { id: old }),
            Some(entry) if entry.key != key => {
                return Err(SpaceError::NotAtPosition {
                    id: old,
                    expected: key,
                    actual: entry.key,
                })
            }
            Some(_) => {}
        }
        self.detach(old);
        Ok(self.insert_at(pos, body, tags))
    }

    /// IDs stored at `pos`, in insertion order, optionally filtered.
    pub fn ids_at(&self, pos: Position, filter: &[ObjectId]) -> Vec<ObjectId> {
        self.by_pos
            .get(&pos.key())
            .map(|slot| {
                slot.iter()
                    .copied()
                    .filter(|id| filter.is_empty() || filter.contains(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Borrow a body by ID.
    pub fn body(&self, id: ObjectId) -> Option<&dyn Body> {
        self.objects.get(&id).map(|entry| entry.body.as_ref())
    }

    /// The tags an object was inserted with.
    pub fn tags_of(&self, id: ObjectId) -> Option<&[Tag]> {
        self.objects.get(&id).map(|entry| entry.tags.as_slice())
    }

    /// Every ID carrying the given tag, in insertion order.
    pub fn tagged(&self, tag: &Tag) -> Vec<ObjectId> {
        self.by_tag
            .get(tag)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// IDs at every occupied position that falls inside `shape`.
    ///
    /// Positions are tested with the corner-pair containment of
    /// [`CornerHolder::contains`]; `allow_edges` counts the shape's
    /// boundary as inside.
    pub fn ids_in_shape(
        &self,
        shape: &dyn CornerHolder,
        filter: &[ObjectId],
        allow_edges: bool,
    ) -> Vec<ObjectId> {
        let mut out = Vec::new();
        for (key, slot) in &self.by_pos {
            if shape.contains(key.position(), allow_edges) {
                out.extend(
                    slot.iter()
                        .copied()
                        .filter(|id| filter.is_empty() || filter.contains(id)),
                );
            }
        }
        out
    }

    /// The occupied position nearest to `pos` by ranking distance,
    /// ignoring `exclusions`, with the IDs stored there.
    ///
    /// Positions whose only occupants are excluded do not count. Ties
    /// resolve to the earliest-occupied position.
    pub fn nearest_to(
        &self,
        pos: Position,
        exclusions: &[ObjectId],
    ) -> Option<(Vec<ObjectId>, Position)> {
        let mut best: Option<(PosKey, f64)> = None;
        for (key, slot) in &self.by_pos {
            if slot.iter().all(|id| exclusions.contains(id)) {
                continue;
            }
            let dist = pos.distance_to(key.position());
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((*key, dist));
            }
        }
        best.map(|(key, _)| {
            let ids = self
                .by_pos
                .get(&key)
                .map(|slot| {
                    slot.iter()
                        .copied()
                        .filter(|id| !exclusions.contains(id))
                        .collect()
                })
                .unwrap_or_default();
            (ids, key.position())
        })
    }

    /// Combined mass of the objects at `pos`, optionally filtered.
    pub fn mass_at(&self, pos: Position, filter: &[ObjectId]) -> f64 {
        self.ids_at(pos, filter)
            .iter()
            .filter_map(|id| self.body(*id))
            .map(|body| body.mass())
            .sum()
    }

    /// The heaviest objects at `pos`; several when tied, empty when the
    /// position is unoccupied.
    pub fn heaviest_at(&self, pos: Position) -> Vec<ObjectId> {
        let mut heaviest = Vec::new();
        let mut best = f64::NEG_INFINITY;
        for id in self.ids_at(pos, &[]) {
            let Some(body) = self.body(id) else { continue };
            let mass = body.mass();
            if mass > best {
                best = mass;
                heaviest = vec![id];
            } else if mass == best {
                heaviest.push(id);
            }
        }
        heaviest
    }

    /// Advance every object one tick, then apply gravity to each.
    ///
    /// Objects are visited in insertion order against a snapshot of the
    /// IDs present when the tick began.
    pub fn tick(&mut self) -> TickSummary {
        let ids: Vec<ObjectId> = self.objects.keys().copied().collect();
        let mut summary = TickSummary::default();
        for id in ids {
            let Some(entry) = self.objects.get_mut(&id) else {
                continue;
            };
            entry.body.tick();
            summary.ticked += 1;
            match self.tick_gravity(id) {
                GravityOutcome::Moved => summary.gravity_moves += 1,
                GravityOutcome::Skipped => summary.gravity_skips += 1,
                GravityOutcome::Unmoved => {}
            }
        }
        summary
    }

    /// Pull one object towards the nearest occupied position.
    fn tick_gravity(&mut self, id: ObjectId) -> GravityOutcome {
        if self.by_pos.len() <= 1 {
            return GravityOutcome::Unmoved;
        }
        let (pos, own_mass) = match self.objects.get(&id) {
            Some(entry) if entry.body.has_gravity() => {
                (entry.body.position(), entry.body.mass())
            }
            _ => return GravityOutcome::Unmoved,
        };
        let Some((neighbours, nearest_pos)) = self.nearest_to(pos, &[id]) else {
            return GravityOutcome::Unmoved;
        };
        if neighbours.is_empty() || nearest_pos.key() == pos.key() {
            return GravityOutcome::Unmoved;
        }
        let pull_mass: f64 = neighbours
            .iter()
            .filter_map(|nid| self.body(*nid))
            .map(|body| body.mass())
            .sum();
        if pull_mass <= 0.0 {
            return GravityOutcome::Unmoved;
        }
        let dist = nearest_pos.distance_to(pos);
        if dist == 0.0 {
            debug!("gravity skip for {id}: zero ranking distance to {nearest_pos}");
            return GravityOutcome::Skipped;
        }
        let speed = self.gravity.speed(own_mass, pull_mass, dist);
        match pos.approach(nearest_pos, speed) {
            Some(next) if next != pos => {
                self.relocate(id, next);
                GravityOutcome::Moved
            }
            Some(_) => GravityOutcome::Unmoved,
            None => {
                debug!("gravity skip for {id}: coincident with {nearest_pos}");
                GravityOutcome::Skipped
            }
        }
    }

    /// Move an object, re-keying the position index when its bucket
    /// changes.
    fn relocate(&mut self, id: ObjectId, next: Position) {
        let Some(entry) = self.objects.get_mut(&id) else {
            return;
        };
        let old_key = entry.key;
        let new_key = next.key();
        entry.body.set_position(next);
        if new_key == old_key {
            return;
        }
        entry.key = new_key;
        if let Some(slot) = self.by_pos.get_mut(&old_key) {
            slot.retain(|other| *other != id);
            if slot.is_empty() {
                self.by_pos.shift_remove(&old_key);
            }
        }
        self.by_pos.entry(new_key).or_default().push(id);
    }

    /// Unlink an object from all three indexes and hand back its body.
    fn detach(&mut self, id: ObjectId) -> Option<Box<dyn Body>> {
        let entry = self.objects.shift_remove(&id)?;
        if let Some(slot) = self.by_pos.get_mut(&entry.key) {
            slot.retain(|other| *other != id);
            if slot.is_empty() {
                self.by_pos.shift_remove(&entry.key);
            }
        }
        for tag in &entry.tags {
            if let Some(set) = self.by_tag.get_mut(tag) {
                set.shift_remove(&id);
                if set.is_empty() {
                    self.by_tag.shift_remove(tag);
                }
            }
        }
        Some(entry.body)
    }
}

enum GravityOutcome {
    Moved,
    Unmoved,
    Skipped,
}

impl Default for Space {
    fn default() -> Self {
        Self::new(GravityParams::default())
    }
}
