//! The [`CornerHolder`] trait: a uniform corner/edge/containment view
//! over faces, cuboids, and whole shapes.

use indexmap::IndexSet;

use drift_core::{PosKey, Position};

use crate::face::Face;

/// A straight segment between two corners.
pub type Edge = (Position, Position);

/// Anything made of faces: exposes corners, edges, and the shadow-based
/// containment test.
pub trait CornerHolder {
    /// Every face of this holder, flattened in order.
    fn faces(&self) -> Vec<&Face>;

    /// The corners of every face, first-seen order, deduplicated.
    ///
    /// [`Face`] overrides this to return its raw corner order.
    fn corners(&self) -> Vec<Position> {
        let mut out = Vec::new();
        let mut seen: IndexSet<PosKey> = IndexSet::new();
        for face in self.faces() {
            for &corner in face.corner_list() {
                if seen.insert(corner.key()) {
                    out.push(corner);
                }
            }
        }
        out
    }

    /// Every edge of every face: consecutive corner pairs, plus one
    /// closing edge per face back to this holder's first corner.
    ///
    /// The closing edge targets the holder's first corner rather than
    /// the face's own, so the faces of a multi-face holder all tie back
    /// to a common anchor.
    fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        let anchor = self.corners().first().copied();
        let multiple = self.corners().len() > 1;
        for face in self.faces() {
            let corners = face.corner_list();
            for pair in corners.windows(2) {
                edges.push((pair[0], pair[1]));
            }
            if let (Some(&last), Some(anchor), true) = (corners.last(), anchor, multiple) {
                edges.push((last, anchor));
            }
        }
        edges
    }

    /// Whether a point lies inside this holder.
    ///
    /// Tests the point against every pair of distinct corners: for each
    /// pair it must fall inside the pair's span on at least one axis.
    /// A point interior to a convex holder satisfies every pair on
    /// whichever axis that pair differs along; a point beyond the hull
    /// fails the pair it is past. With fewer than two distinct corners
    /// this degenerates to exact membership. `allow_edges` counts the
    /// boundary as inside.
    fn contains(&self, point: Position, allow_edges: bool) -> bool {
        let mut distinct = Vec::new();
        let mut seen: IndexSet<PosKey> = IndexSet::new();
        for corner in self.corners() {
            if seen.insert(corner.key()) {
                distinct.push(corner);
            }
        }
        if distinct.len() < 2 {
            return distinct.first() == Some(&point);
        }
        for (i, &a) in distinct.iter().enumerate() {
            for &b in &distinct[i + 1..] {
                if !point.shadowed_on_any_axis(a, b, allow_edges) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every corner of `other` lies inside this holder.
    ///
    /// Vacuously true for a cornerless `other`.
    fn encloses(&self, other: &dyn CornerHolder, allow_edges: bool) -> bool {
        other
            .corners()
            .iter()
            .all(|&corner| self.contains(corner, allow_edges))
    }
}
