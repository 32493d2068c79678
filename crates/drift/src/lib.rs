//! Drift: the spatial core of a voxel sandbox.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Drift sub-crates. For most users, adding `drift` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use drift::prelude::*;
//!
//! // A minimal body: a point mass that drifts under gravity.
//! struct Pebble {
//!     position: Position,
//!     mass: f64,
//! }
//!
//! impl Tickable for Pebble {}
//!
//! impl Body for Pebble {
//!     fn position(&self) -> Position {
//!         self.position
//!     }
//!     fn set_position(&mut self, position: Position) {
//!         self.position = position;
//!     }
//!     fn mass(&self) -> f64 {
//!         self.mass
//!     }
//! }
//!
//! let pebble = |mass| {
//!     Box::new(Pebble { position: Position::origin(), mass })
//! };
//!
//! let mut space = Space::new(GravityParams::default());
//! let a = space.insert_at(Position::new(0.0, 0.0, 0.0), pebble(1.0e4), [Tag::from("rock")]);
//! let b = space.insert_at(Position::new(10.0, 0.0, 0.0), pebble(1.0e4), []);
//!
//! let summary = space.tick();
//! assert_eq!(summary.ticked, 2);
//! assert_eq!(space.tagged(&Tag::from("rock")), vec![a]);
//!
//! // Gravity nudged both pebbles toward each other.
//! let (ids, _) = space.nearest_to(Position::new(10.0, 0.0, 0.0), &[b]).unwrap();
//! assert_eq!(ids, vec![a]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `drift-core` | Positions, directions, IDs, the `Body` trait |
//! | [`geom`] | `drift-geom` | Faces, cuboids, shapes, and occlusion resolution |
//! | [`space`] | `drift-space` | The spatial index and gravity tick |
//! | [`engine`] | `drift-engine` | Paced tick loop and the background tick thread |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`drift-core`).
///
/// Contains [`types::Position`], [`types::Direction`], object and tick
/// IDs, and the [`types::Body`] trait everything in a space implements.
pub use drift_core as types;

/// Geometry and occlusion (`drift-geom`).
///
/// Faces, axis-aligned cuboids, composite shapes, the
/// [`geom::CornerHolder`] containment trait, and the
/// [`geom::resolve_overlaps`] occlusion pass.
pub use drift_geom as geom;

/// The spatial index (`drift-space`).
///
/// [`space::Space`] stores bodies by position and tag and applies
/// pairwise gravity on every tick; [`space::SharedSpace`] wraps one for
/// concurrent use.
pub use drift_space as space;

/// Tick pacing and the background tick thread (`drift-engine`).
///
/// [`engine::TickLoop`] paces ticks against a configured rate;
/// [`engine::TickThread`] runs one on a dedicated thread and accepts
/// commands over a channel.
pub use drift_engine as engine;

/// Common imports for typical Drift usage.
///
/// ```rust
/// use drift::prelude::*;
/// ```
///
/// This imports the most frequently used types: positions and directions,
/// the `Body` trait, geometry types, the spatial index, and the engine
/// entry points.
pub mod prelude {
    // Core types and traits
    pub use drift_core::{Axis, Body, Direction, ObjectId, PosKey, Position, TickId, Tickable};

    // Geometry
    pub use drift_geom::{
        CornerHolder, Cuboid, Face, FaceTextures, PrismCorners, Shape, TextureRef,
        resolve_overlaps,
    };

    // Space
    pub use drift_space::{GravityParams, SharedSpace, Space, SpaceError, Tag, TickSummary};

    // Engine
    pub use drift_engine::{
        CommandReceipt, EngineConfig, SpaceCommand, SubmitError, TickLoop, TickThread,
    };
}
