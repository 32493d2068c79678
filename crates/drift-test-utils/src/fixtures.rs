//! Reusable [`Body`] implementations.

use drift_core::{Body, Position, Tickable};

/// A body that counts how many times it has been ticked.
///
/// Useful for asserting that the tick loop reached every object, and as
/// a plain massive body for gravity scenarios.
#[derive(Debug, Clone, PartialEq)]
pub struct CountingBody {
    pub position: Position,
    pub mass: f64,
    pub ticks: u64,
}

impl CountingBody {
    pub fn new(mass: f64) -> Self {
        Self { position: Position::origin(), mass, ticks: 0 }
    }

    pub fn boxed(mass: f64) -> Box<Self> {
        Box::new(Self::new(mass))
    }
}

impl Tickable for CountingBody {
    fn tick(&mut self) {
        self.ticks += 1;
    }
}

impl Body for CountingBody {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}

/// A body that opts out of gravity and stays wherever it is put.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorBody {
    pub position: Position,
    pub mass: f64,
}

impl AnchorBody {
    pub fn new(mass: f64) -> Self {
        Self { position: Position::origin(), mass }
    }

    pub fn boxed(mass: f64) -> Box<Self> {
        Box::new(Self::new(mass))
    }
}

impl Tickable for AnchorBody {}

impl Body for AnchorBody {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn has_gravity(&self) -> bool {
        false
    }
}
