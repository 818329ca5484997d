//! Per-cell marching-cubes engine for isomesh-rs.
//!
//! This crate holds the combinatorial heart of the extractor:
//! - [`geometry`]: the immutable unit-cube model (corners, edges, face
//!   adjacency quads, and the 24-element proper rotation group)
//! - [`lookup`]: the precomputed case/subcase database mapping all 256
//!   corner-sign configurations onto canonical cases
//! - [`classify`]: per-cell topology classification, including the bilinear
//!   saddle tests that disambiguate diagonal face patterns
//! - [`emit`]: triangle emission with interpolated edge crossings and
//!   winding bookkeeping
//!
//! The lookup tables are generated offline by `scripts/gen_tables.py` and
//! compiled in; nothing here is mutated at runtime, so classification and
//! emission are safe to run from any number of threads at once.

// Index arithmetic between u8 table entries and usize slots is pervasive
// and intentional here.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]

pub mod classify;
pub mod emit;
pub mod geometry;
pub mod lookup;
mod tables;
mod triangle;

pub use classify::{classify, ResolvedCell};
pub use emit::{edge_intersections, emit_cell};
pub use geometry::{EdgeDef, Permutation, CORNER_OFFSETS, NUM_CORNERS, NUM_EDGES, NUM_FACES};
pub use lookup::{Case, CaseEntry, CaseTest, Subcase, SubcaseRef};
pub use triangle::Triangle;

// Re-export the math types used in the public API.
pub use glam::Vec3;
