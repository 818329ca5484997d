//! Isosurface extraction from regular 3-D scalar grids.
//!
//! isomesh triangulates the level set of a sampled scalar field with a
//! symmetry-reduced marching-cubes classifier: the 256 corner-sign
//! configurations of a cell collapse onto 15 canonical cases through the
//! cube's rotation group, and ambiguous face patterns are resolved with
//! bilinear saddle tests instead of a fixed pick.
//!
//! # Example
//!
//! ```
//! use isomesh::{extract_surface, DenseGrid};
//!
//! // squared distance from the grid center
//! let grid = DenseGrid::from_fn([10, 10, 10], |x, y, z| {
//!     let (dx, dy, dz) = (x as f64 - 5.0, y as f64 - 5.0, z as f64 - 5.0);
//!     dx * dx + dy * dy + dz * dz
//! });
//! let mesh = extract_surface(&grid, 9.0);
//! assert!(!mesh.is_empty());
//! ```
//!
//! Enable the `parallel` feature for [`extract_surface_parallel`], which
//! partitions the cell index space across rayon tasks.

mod extract;
mod mesh;

pub use extract::extract_surface;
#[cfg(feature = "parallel")]
pub use extract::extract_surface_parallel;
pub use mesh::IsoMesh;

// The engine and field boundary, re-exported for direct use.
pub use isomesh_core::{classify, edge_intersections, emit_cell, ResolvedCell, Triangle};
pub use isomesh_grid::{DenseGrid, GridError, ScalarField};

// Re-export the math type used in the public API.
pub use glam::Vec3;
