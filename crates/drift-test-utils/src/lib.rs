//! Shared fixtures for Drift's test suites.
//!
//! Everything in this crate exists only to make tests shorter. Nothing
//! here is part of the public Drift API and the crate is never
//! published.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{AnchorBody, CountingBody};
