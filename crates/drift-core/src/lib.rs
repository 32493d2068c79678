//! Core types and traits for the Drift voxel sandbox.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Drift workspace:
//! positions and axes, cardinal directions, strongly-typed IDs, and the
//! object traits implemented by everything that lives in a space.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod direction;
pub mod id;
pub mod position;

pub use body::{Body, Tickable};
pub use direction::Direction;
pub use id::{ObjectId, TickId};
pub use position::{Axis, PosKey, Position};
