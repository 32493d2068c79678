//! Faces, boxes, shapes, and occlusion geometry for the Drift voxel
//! sandbox.
//!
//! The building blocks nest: a [`Face`] is an ordered corner list with
//! an optional texture, a [`Cuboid`] is a list of faces, and a
//! [`Shape`] is a list of cuboids. The [`CornerHolder`] trait gives all
//! three a uniform corner/edge/containment view; [`occlusion`] resolves
//! which overlapping faces survive from a given camera position.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cuboid;
pub mod face;
pub mod holder;
pub mod occlusion;
pub mod shape;

pub use cuboid::{Cuboid, FaceTextures, PrismCorners};
pub use face::{Face, Shade, TextureRef};
pub use holder::{CornerHolder, Edge};
pub use occlusion::{edge_intersection, resolve_overlaps, OverlapOutcome};
pub use shape::Shape;
