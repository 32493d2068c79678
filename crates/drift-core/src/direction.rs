//! The six cardinal directions and their index arithmetic.

use std::fmt;

/// One of the six cardinal directions.
///
/// Directions carry a stable 1-based index used for serialisation and
/// for the relative-basis arithmetic in [`Direction::relative`]. The
/// axis convention is Z-up: front/back run along Y, up/down along Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards positive Y. Index 1.
    Front,
    /// Towards negative X. Index 2.
    Left,
    /// Towards negative Y. Index 3.
    Back,
    /// Towards positive Z. Index 4.
    Up,
    /// Towards positive X. Index 5.
    Right,
    /// Towards negative Z. Index 6.
    Down,
}

impl Direction {
    /// All directions, in index order.
    pub const ALL: [Direction; 6] = [
        Direction::Front,
        Direction::Left,
        Direction::Back,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The stable 1-based index of this direction.
    pub fn index(self) -> i32 {
        match self {
            Direction::Front => 1,
            Direction::Left => 2,
            Direction::Back => 3,
            Direction::Up => 4,
            Direction::Right => 5,
            Direction::Down => 6,
        }
    }

    /// The direction for an arbitrary integer index.
    ///
    /// Indices outside `-6..=6` wrap modulo 6, zero maps to 6, and
    /// negative indices resolve by magnitude, so every integer yields a
    /// direction.
    pub fn from_index(i: i64) -> Self {
        let mut i = i;
        if !(-6..=6).contains(&i) {
            i %= 6;
        }
        if i == 0 {
            i = 6;
        }
        Self::ALL[(i.unsigned_abs() as usize) - 1]
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Front => Direction::Back,
            Direction::Back => Direction::Front,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Re-express this direction in a rotated basis given by `front`
    /// and `up`.
    ///
    /// The answer is the direction whose index sits at the same offsets
    /// from `front` and `up` as this direction's index sits from the
    /// canonical [`Direction::Front`] and [`Direction::Up`]. Returns
    /// `None` for a degenerate basis (`front` equal or opposite to
    /// `up`), or when no direction satisfies both offsets.
    pub fn relative(self, front: Direction, up: Direction) -> Option<Direction> {
        if front == up || front.opposite() == up {
            return None;
        }
        let dist_front = Direction::Front.index() - self.index();
        let dist_up = Direction::Up.index() - self.index();
        Direction::ALL.into_iter().find(|d| {
            front.index() - d.index() == dist_front && up.index() - d.index() == dist_up
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Front => "front",
            Direction::Left => "left",
            Direction::Back => "back",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_round_trips() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_index(d.index() as i64), d);
        }
    }

    #[test]
    fn from_index_wraps_and_normalises() {
        assert_eq!(Direction::from_index(0), Direction::Down);
        assert_eq!(Direction::from_index(7), Direction::Front);
        assert_eq!(Direction::from_index(12), Direction::Down);
        assert_eq!(Direction::from_index(-2), Direction::Left);
        assert_eq!(Direction::from_index(-13), Direction::Front);
    }

    #[test]
    fn canonical_basis_is_identity() {
        for d in Direction::ALL {
            assert_eq!(d.relative(Direction::Front, Direction::Up), Some(d));
        }
    }

    #[test]
    fn degenerate_basis_is_none() {
        assert!(Direction::Left
            .relative(Direction::Up, Direction::Up)
            .is_none());
        assert!(Direction::Left
            .relative(Direction::Up, Direction::Down)
            .is_none());
    }

    #[test]
    fn shifted_basis_shifts_the_answer() {
        // Basis (Back, Down) sits 2 above (Front, Up) in index space,
        // so every answer shifts up by two indices.
        assert_eq!(
            Direction::Front.relative(Direction::Back, Direction::Down),
            Some(Direction::Back)
        );
        assert_eq!(
            Direction::Left.relative(Direction::Back, Direction::Down),
            Some(Direction::Up)
        );
        // Shifts that run off the end of the index space yield nothing.
        assert_eq!(
            Direction::Down.relative(Direction::Back, Direction::Down),
            None
        );
        // Valid bases whose index offsets differ are never satisfiable.
        assert_eq!(
            Direction::Front.relative(Direction::Left, Direction::Up),
            None
        );
    }

    proptest! {
        #[test]
        fn opposite_is_an_involution(i in 0usize..6) {
            let d = Direction::ALL[i];
            prop_assert_eq!(d.opposite().opposite(), d);
            prop_assert_ne!(d.opposite(), d);
        }

        #[test]
        fn from_index_total_over_integers(i in -1000i64..1000) {
            // Never panics and always lands on a valid direction.
            let d = Direction::from_index(i);
            prop_assert!(Direction::ALL.contains(&d));
        }
    }
}
