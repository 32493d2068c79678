//! Face-overlap occlusion: deciding which of two overlapping faces is
//! in front of the other from a camera position, and cutting the loser.
//!
//! Depth ordering uses [`Position::distance_to`] plus the Y offset from
//! the camera, Y being the depth axis under the Z-up convention. Both
//! comparisons must agree before a cut is made; ambiguous pairs are
//! left alone.

use drift_core::Position;

use crate::face::Face;
use crate::holder::{CornerHolder, Edge};

/// The approximate crossing point of two edges, if they cross.
///
/// The candidate point is the average of all four endpoints; it counts
/// as a crossing when it falls inside the axis-aligned span of both
/// edges on every axis. Coarse, but cheap and symmetric.
pub fn edge_intersection(edge: Edge, other: Edge, allow_edges: bool) -> Option<Position> {
    let candidate = Position::new(
        (edge.0.x + edge.1.x + other.0.x + other.1.x) / 4.0,
        (edge.0.y + edge.1.y + other.0.y + other.1.y) / 4.0,
        (edge.0.z + edge.1.z + other.0.z + other.1.z) / 4.0,
    );
    (candidate.in_shadow(edge.0, edge.1, allow_edges)
        && candidate.in_shadow(other.0, other.1, allow_edges))
    .then_some(candidate)
}

/// The result of resolving one face against a worklist of others.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlapOutcome {
    /// Faces (or cut fragments) that occlude part of the subject face.
    pub consumed: Vec<Face>,
    /// Faces the subject face produced by occluding others; these carry
    /// the subject's texture.
    pub produced: Vec<Face>,
    /// The surviving worklist: input faces not fully occluded, plus any
    /// cut fragments of the subject appended at the end.
    pub worklist: Vec<Face>,
}

/// Resolve a face against a worklist of other faces from `camera`.
///
/// Each candidate is handled by the first rule that applies:
///
/// * candidate entirely inside the subject: the subject wins outright;
///   the candidate is dropped from the worklist and the whole subject
///   lands in `produced`.
/// * subject entirely inside the candidate: the candidate lands in
///   `consumed` and stays on the worklist.
/// * otherwise the edges are intersected pairwise. A crossing cuts
///   whichever face both depth measures agree is farther; the cut
///   fragment takes the nearer face's texture. Fragments cut from the
///   subject also rejoin the worklist so later faces resolve against
///   them.
pub fn resolve_overlaps(face: &Face, others: &[Face], camera: Position) -> OverlapOutcome {
    let mut outcome = OverlapOutcome::default();
    for other in others {
        if face.encloses(other, true) {
            outcome.produced.push(face.clone());
            continue;
        }
        if other.encloses(face, true) {
            outcome.consumed.push(other.clone());
            outcome.worklist.push(other.clone());
            continue;
        }

        let mut cut_self: Vec<Position> = Vec::new();
        let mut cut_other: Vec<Position> = Vec::new();
        for edge in face.edges() {
            for edge1 in other.edges() {
                let Some(cut) = edge_intersection(edge, edge1, true) else {
                    continue;
                };
                let depth_self = edge.0.distance_to(camera);
                let depth_other = edge1.0.distance_to(camera);
                let toward_self = edge.0.y - camera.y;
                let toward_other = edge1.0.y - camera.y;
                if depth_self < depth_other && toward_self < toward_other {
                    push_unique(&mut cut_other, edge.0);
                    push_unique(&mut cut_other, cut);
                } else if depth_self > depth_other && toward_self > toward_other {
                    push_unique(&mut cut_self, edge1.0);
                    push_unique(&mut cut_self, cut);
                }
            }
        }

        if cut_other.len() > 1 {
            outcome
                .produced
                .push(Face::textured(cut_other, face.texture().cloned()));
        } else {
            outcome.worklist.push(other.clone());
        }
        if cut_self.len() > 1 {
            let fragment = Face::textured(cut_self, other.texture().cloned());
            outcome.consumed.push(fragment.clone());
            outcome.worklist.push(fragment);
        }
    }
    outcome
}

fn push_unique(corners: &mut Vec<Position>, pos: Position) {
    if !corners.contains(&pos) {
        corners.push(pos);
    }
}
