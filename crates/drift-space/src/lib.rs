//! Spatial object index with gravity ticking for the Drift voxel
//! sandbox.
//!
//! A [`Space`] owns every object inside it and keeps three views in
//! sync: by ID, by quantised position, and by tag. Ticking advances
//! every object and then applies pairwise-nearest gravity.
//! [`SharedSpace`] wraps a space for concurrent readers alongside a
//! single ticking writer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod gravity;
pub mod index;
pub mod shared;
pub mod tag;

pub use error::SpaceError;
pub use gravity::GravityParams;
pub use index::{Space, TickSummary};
pub use shared::SharedSpace;
pub use tag::Tag;
