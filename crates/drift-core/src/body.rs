//! Object traits: anything that can live in a space implements these.

use std::any::Any;

use crate::position::Position;

/// Receives one callback per simulation tick.
///
/// The default implementation does nothing, so inert objects only need
/// `impl Tickable for Rock {}`.
pub trait Tickable {
    /// Advance this object by one tick.
    fn tick(&mut self) {}
}

/// A physical object that occupies a position in a space.
///
/// The space owns each body behind `Box<dyn Body>`; bodies learn where
/// they are through [`Body::set_position`] and never move themselves.
pub trait Body: Tickable + Any + Send + Sync {
    /// Where this body currently sits.
    fn position(&self) -> Position;

    /// Update the stored position. Called by the space on insertion and
    /// whenever gravity or a command relocates the body.
    fn set_position(&mut self, pos: Position);

    /// Mass in arbitrary units; feeds the gravity speed calculation.
    fn mass(&self) -> f64 {
        1.0
    }

    /// Whether gravity pulls this body towards its nearest neighbour.
    fn has_gravity(&self) -> bool {
        true
    }
}

impl dyn Body {
    /// Downcast a borrowed body to a concrete type.
    pub fn downcast_ref<T: Body>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Downcast a mutably borrowed body to a concrete type.
    pub fn downcast_mut<T: Body>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pebble {
        pos: Position,
        ticks: u32,
    }

    impl Tickable for Pebble {
        fn tick(&mut self) {
            self.ticks += 1;
        }
    }

    impl Body for Pebble {
        fn position(&self) -> Position {
            self.pos
        }

        fn set_position(&mut self, pos: Position) {
            self.pos = pos;
        }
    }

    #[test]
    fn defaults_are_unit_mass_with_gravity() {
        let p = Pebble {
            pos: Position::origin(),
            ticks: 0,
        };
        assert_eq!(p.mass(), 1.0);
        assert!(p.has_gravity());
    }

    #[test]
    fn downcast_recovers_the_concrete_type() {
        let mut boxed: Box<dyn Body> = Box::new(Pebble {
            pos: Position::origin(),
            ticks: 0,
        });
        boxed.tick();
        let pebble = boxed.downcast_ref::<Pebble>().unwrap();
        assert_eq!(pebble.ticks, 1);
        assert!(boxed.downcast_ref::<OtherBody>().is_none());
    }

    struct OtherBody(Position);

    impl Tickable for OtherBody {}

    impl Body for OtherBody {
        fn position(&self) -> Position {
            self.0
        }

        fn set_position(&mut self, pos: Position) {
            self.0 = pos;
        }
    }
}
