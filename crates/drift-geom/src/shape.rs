//! Shapes: collections of cuboids that merge and move as a unit.

use indexmap::IndexSet;

use drift_core::{PosKey, Position};

use crate::cuboid::Cuboid;
use crate::face::Face;
use crate::holder::CornerHolder;

/// A model made of boxes.
///
/// Shapes merge by box-list concatenation; no geometry is unified, so
/// a merged shape renders as its constituent boxes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    boxes: Vec<Cuboid>,
}

impl Shape {
    /// A shape over the given boxes.
    pub fn new(boxes: Vec<Cuboid>) -> Self {
        Self { boxes }
    }

    /// The box list, in order.
    pub fn boxes(&self) -> &[Cuboid] {
        &self.boxes
    }

    /// Whether this shape has no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Append one box.
    pub fn add_box(&mut self, cuboid: Cuboid) {
        self.boxes.push(cuboid);
    }

    /// Merge another shape into this one, displacing the incoming
    /// copy by the given offsets first.
    ///
    /// The incoming boxes land ahead of the existing ones, so the
    /// merged-in geometry draws first.
    pub fn merge(&mut self, other: &Shape, dx: f64, dy: f64, dz: f64) {
        let mut incoming = if dx != 0.0 || dy != 0.0 || dz != 0.0 {
            other.translated(dx, dy, dz).boxes
        } else {
            other.boxes.clone()
        };
        incoming.append(&mut self.boxes);
        self.boxes = incoming;
    }

    /// A merged copy, leaving both inputs untouched.
    pub fn merged(&self, other: &Shape, dx: f64, dy: f64, dz: f64) -> Shape {
        let mut copy = self.clone();
        copy.merge(other, dx, dy, dz);
        copy
    }

    /// Displace every box in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        for cuboid in &mut self.boxes {
            cuboid.translate(dx, dy, dz);
        }
    }

    /// A displaced copy.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Self {
        let mut copy = self.clone();
        copy.translate(dx, dy, dz);
        copy
    }

    /// Drop boxes with no faces, then cornerless faces within the
    /// survivors.
    pub fn remove_empty(&mut self) {
        self.boxes.retain_mut(|cuboid| {
            if cuboid.is_empty() {
                false
            } else {
                cuboid.remove_empty();
                true
            }
        });
    }

    /// The union of every box's volume discretisation, deduplicated in
    /// box order.
    pub fn contained_positions(&self, resolution: f64) -> Vec<Position> {
        let mut out = Vec::new();
        let mut seen: IndexSet<PosKey> = IndexSet::new();
        for cuboid in &self.boxes {
            for pos in cuboid.contained_positions(resolution) {
                if seen.insert(pos.key()) {
                    out.push(pos);
                }
            }
        }
        out
    }
}

impl CornerHolder for Shape {
    fn faces(&self) -> Vec<&Face> {
        self.boxes.iter().flat_map(|b| b.face_list()).collect()
    }
}
