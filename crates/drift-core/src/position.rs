//! Continuous 3D positions and the geometry primitives built on them.
//!
//! [`Position`] is a plain `Copy` value; every operation that "moves" a
//! position returns a new one. [`PosKey`] is the bit-exact quantisation
//! used wherever positions act as map keys.

use std::fmt;

use crate::direction::Direction;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right axis.
    X,
    /// Back/front axis.
    Y,
    /// Down/up axis.
    Z,
}

impl Axis {
    /// All axes, in `X`, `Y`, `Z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// A point in continuous 3D space.
///
/// Coordinates are `f64` and positions compare component-wise, so two
/// positions reached by different arithmetic may differ in the last
/// bit. Use [`Position::key`] when grouping positions into buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Left/right coordinate.
    pub x: f64,
    /// Back/front coordinate.
    pub y: f64,
    /// Down/up coordinate.
    pub z: f64,
}

impl Position {
    /// A position at the given coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin, `(0, 0, 0)`.
    pub fn origin() -> Self {
        Self::default()
    }

    /// The coordinate on the given axis.
    pub fn axis(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Signed per-axis difference `other - self`.
    pub fn delta(self, axis: Axis, other: Position) -> f64 {
        other.axis(axis) - self.axis(axis)
    }

    /// A copy displaced by the given amounts.
    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Sum-form ranking distance: `sqrt((x+x')² + (y+y')² + (z+z')²)`.
    ///
    /// This is not the straight-line separation between the two points;
    /// it sums coordinates instead of differencing them, so it ranks a
    /// pair by their combined displacement. It is the metric used for
    /// nearest-object ranking, gravity strength, and occlusion depth
    /// ordering throughout the workspace. For the Euclidean distance
    /// between two points use [`Position::separation`].
    pub fn distance_to(self, other: Position) -> f64 {
        let sx = self.x + other.x;
        let sy = self.y + other.y;
        let sz = self.z + other.z;
        (sx * sx + sy * sy + sz * sz).sqrt()
    }

    /// Euclidean distance between two points.
    ///
    /// Used by [`Position::approach`] and [`Position::trace`] to decide
    /// step counts and termination.
    pub fn separation(self, other: Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// One step of length `distance` from `self` towards `target`.
    ///
    /// The step is split evenly across the axes in proportion to the
    /// remaining per-axis deltas. Returns `None` when the two positions
    /// coincide (there is no direction to move in). A `distance` of
    /// zero returns `self` unchanged.
    pub fn approach(self, target: Position, distance: f64) -> Option<Position> {
        let span = self.separation(target);
        if span == 0.0 {
            return None;
        }
        let steps = span / distance;
        Some(self.offset(
            self.delta(Axis::X, target) / steps,
            self.delta(Axis::Y, target) / steps,
            self.delta(Axis::Z, target) / steps,
        ))
    }

    /// Discretise the segment from `self` to `target` at the given
    /// resolution.
    ///
    /// Returns `self`, the intermediate points spaced `resolution`
    /// apart, and finally `target` itself. When the endpoints coincide
    /// the result is the single point. A non-positive resolution
    /// degenerates to just the two endpoints.
    pub fn trace(self, target: Position, resolution: f64) -> Vec<Position> {
        let mut out = vec![self];
        if resolution > 0.0 {
            let mut cur = self;
            while cur.separation(target) >= resolution * 2.0 {
                match cur.approach(target, resolution) {
                    Some(next) => {
                        cur = next;
                        out.push(cur);
                    }
                    None => break,
                }
            }
        }
        if out.last() != Some(&target) {
            out.push(target);
        }
        out
    }

    /// The cardinal direction whose axis dominates the delta towards
    /// `other`.
    ///
    /// Ties are broken in `X`, `Y`, `Z` order; returns `None` when the
    /// positions coincide.
    pub fn nearest_direction_to(self, other: Position) -> Option<Direction> {
        let mut best: Option<(Axis, f64)> = None;
        for axis in Axis::ALL {
            let d = self.delta(axis, other);
            if d != 0.0 && best.map_or(true, |(_, bd)| d.abs() > bd.abs()) {
                best = Some((axis, d));
            }
        }
        best.map(|(axis, d)| match (axis, d > 0.0) {
            (Axis::X, true) => Direction::Right,
            (Axis::X, false) => Direction::Left,
            (Axis::Y, true) => Direction::Front,
            (Axis::Y, false) => Direction::Back,
            (Axis::Z, true) => Direction::Up,
            (Axis::Z, false) => Direction::Down,
        })
    }

    /// A copy displaced `distance` units along a cardinal direction.
    pub fn offset_direction(self, direction: Direction, distance: f64) -> Self {
        match direction {
            Direction::Right => self.offset(distance, 0.0, 0.0),
            Direction::Left => self.offset(-distance, 0.0, 0.0),
            Direction::Front => self.offset(0.0, distance, 0.0),
            Direction::Back => self.offset(0.0, -distance, 0.0),
            Direction::Up => self.offset(0.0, 0.0, distance),
            Direction::Down => self.offset(0.0, 0.0, -distance),
        }
    }

    /// Whether `self` lies within the axis-aligned span of `a` and `b`
    /// on every axis.
    ///
    /// `allow_edges` makes the span inclusive of its endpoints.
    pub fn in_shadow(self, a: Position, b: Position, allow_edges: bool) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| between(self.axis(axis), a.axis(axis), b.axis(axis), allow_edges))
    }

    /// Whether `self` lies within the span of `a` and `b` on at least
    /// one axis.
    ///
    /// This is the per-corner-pair test used for point-in-shape
    /// membership: a point interior to a box falls inside the span of
    /// every corner pair on whichever axis that pair differs along.
    pub fn shadowed_on_any_axis(self, a: Position, b: Position, allow_edges: bool) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| between(self.axis(axis), a.axis(axis), b.axis(axis), allow_edges))
    }

    /// The quantised key for this position.
    pub fn key(self) -> PosKey {
        PosKey::from_position(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

fn between(v: f64, a: f64, b: f64, allow_edges: bool) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if allow_edges {
        v >= lo && v <= hi
    } else {
        v > lo && v < hi
    }
}

/// Bit-exact map key for a [`Position`].
///
/// Two positions share a key exactly when their coordinates are
/// bit-identical, with `-0.0` normalised to `0.0` so the two zeroes
/// land in the same bucket. `Eq`, `Hash`, and `Ord` make keys usable in
/// any map, unlike raw `f64` triples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PosKey {
    bits: [u64; 3],
}

impl PosKey {
    fn from_position(pos: Position) -> Self {
        Self {
            bits: [canon(pos.x), canon(pos.y), canon(pos.z)],
        }
    }

    /// The position this key was derived from.
    pub fn position(self) -> Position {
        Position::new(
            f64::from_bits(self.bits[0]),
            f64::from_bits(self.bits[1]),
            f64::from_bits(self.bits[2]),
        )
    }
}

fn canon(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl fmt::Display for PosKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position();
        write!(f, "x{}y{}z{}", p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Distance and separation ─────────────────────────────────────

    #[test]
    fn distance_sums_coordinates() {
        let a = Position::new(1.0, 2.0, 3.0);
        // Identical points: the "distance" is the doubled coordinates.
        assert_eq!(a.distance_to(a), 56.0f64.sqrt());
        // Mirrored points cancel to zero.
        let b = Position::new(-1.0, -2.0, -3.0);
        assert_eq!(a.distance_to(b), 0.0);
    }

    #[test]
    fn separation_is_euclidean() {
        let a = Position::origin();
        let b = Position::new(3.0, 4.0, 0.0);
        assert_eq!(a.separation(b), 5.0);
        assert_eq!(a.separation(a), 0.0);
    }

    // ── Approach and trace ──────────────────────────────────────────

    #[test]
    fn approach_moves_by_the_requested_distance() {
        let from = Position::origin();
        let to = Position::new(10.0, 0.0, 0.0);
        let next = from.approach(to, 2.0).unwrap();
        assert_eq!(next, Position::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn approach_coincident_is_none() {
        let p = Position::new(4.0, 5.0, 6.0);
        assert!(p.approach(p, 1.0).is_none());
    }

    #[test]
    fn approach_zero_distance_stays_put() {
        let from = Position::origin();
        let to = Position::new(10.0, 0.0, 0.0);
        assert_eq!(from.approach(to, 0.0), Some(from));
    }

    #[test]
    fn trace_straight_line_at_resolution_two() {
        let pts = Position::origin().trace(Position::new(10.0, 0.0, 0.0), 2.0);
        let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(pts.iter().all(|p| p.y == 0.0 && p.z == 0.0));
    }

    #[test]
    fn trace_coincident_endpoints_is_a_single_point() {
        let p = Position::new(1.0, 1.0, 1.0);
        assert_eq!(p.trace(p, 0.5), vec![p]);
    }

    #[test]
    fn trace_nonpositive_resolution_is_just_endpoints() {
        let a = Position::origin();
        let b = Position::new(5.0, 0.0, 0.0);
        assert_eq!(a.trace(b, 0.0), vec![a, b]);
        assert_eq!(a.trace(b, -1.0), vec![a, b]);
    }

    // ── Shadow tests ────────────────────────────────────────────────

    #[test]
    fn in_shadow_requires_all_axes() {
        let a = Position::origin();
        let b = Position::new(2.0, 2.0, 2.0);
        assert!(Position::new(1.0, 1.0, 1.0).in_shadow(a, b, true));
        assert!(!Position::new(1.0, 3.0, 1.0).in_shadow(a, b, true));
    }

    #[test]
    fn in_shadow_edge_handling() {
        let a = Position::origin();
        let b = Position::new(2.0, 2.0, 2.0);
        let edge = Position::new(0.0, 1.0, 1.0);
        assert!(edge.in_shadow(a, b, true));
        assert!(!edge.in_shadow(a, b, false));
    }

    #[test]
    fn shadowed_on_any_axis_accepts_a_single_axis() {
        let a = Position::origin();
        let b = Position::new(2.0, 0.0, 0.0);
        // Inside the x span even though y and z spans are zero-width.
        assert!(Position::new(1.0, 9.0, 9.0).shadowed_on_any_axis(a, b, false));
        assert!(!Position::new(3.0, 9.0, 9.0).shadowed_on_any_axis(a, b, false));
    }

    // ── Direction selection ─────────────────────────────────────────

    #[test]
    fn nearest_direction_picks_the_dominant_axis() {
        let o = Position::origin();
        assert_eq!(
            o.nearest_direction_to(Position::new(5.0, 1.0, 1.0)),
            Some(Direction::Right)
        );
        assert_eq!(
            o.nearest_direction_to(Position::new(-1.0, -4.0, 2.0)),
            Some(Direction::Back)
        );
        assert_eq!(
            o.nearest_direction_to(Position::new(0.0, 0.0, -3.0)),
            Some(Direction::Down)
        );
        assert_eq!(o.nearest_direction_to(o), None);
    }

    #[test]
    fn offset_direction_moves_along_one_axis() {
        let o = Position::origin();
        assert_eq!(o.offset_direction(Direction::Up, 2.0), Position::new(0.0, 0.0, 2.0));
        assert_eq!(o.offset_direction(Direction::Front, 1.5), Position::new(0.0, 1.5, 0.0));
        assert_eq!(o.offset_direction(Direction::Left, 1.0), Position::new(-1.0, 0.0, 0.0));
    }

    // ── Key tests ───────────────────────────────────────────────────

    #[test]
    fn key_round_trips_and_normalises_negative_zero() {
        let p = Position::new(1.5, -2.25, 0.0);
        assert_eq!(p.key().position(), p);
        let q = Position::new(1.5, -2.25, -0.0);
        assert_eq!(p.key(), q.key());
    }

    #[test]
    fn key_display_matches_coordinates() {
        let p = Position::new(1.0, -2.5, 3.0);
        assert_eq!(p.key().to_string(), "x1y-2.5z3");
    }

    // ── Properties ──────────────────────────────────────────────────

    fn coord() -> impl Strategy<Value = f64> {
        -1000.0..1000.0f64
    }

    fn position() -> impl Strategy<Value = Position> {
        (coord(), coord(), coord()).prop_map(|(x, y, z)| Position::new(x, y, z))
    }

    proptest! {
        #[test]
        fn trace_starts_and_ends_at_the_endpoints(a in position(), b in position(), res in 0.1..10.0f64) {
            let pts = a.trace(b, res);
            prop_assert_eq!(pts[0], a);
            prop_assert_eq!(*pts.last().unwrap(), b);
        }

        #[test]
        fn trace_separation_to_target_never_increases(a in position(), b in position(), res in 0.1..10.0f64) {
            let pts = a.trace(b, res);
            for pair in pts.windows(2) {
                prop_assert!(pair[1].separation(b) <= pair[0].separation(b) + 1e-9);
            }
        }

        #[test]
        fn approach_step_has_the_requested_length(a in position(), b in position(), d in 0.01..5.0f64) {
            prop_assume!(a.separation(b) > 1e-6);
            let next = a.approach(b, d).unwrap();
            prop_assert!((a.separation(next) - d).abs() < 1e-6);
        }

        #[test]
        fn separation_is_symmetric(a in position(), b in position()) {
            prop_assert!((a.separation(b) - b.separation(a)).abs() < 1e-9);
        }
    }
}
