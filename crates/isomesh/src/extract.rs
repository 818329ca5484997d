//! Grid traversal.
//!
//! Walks every cell whose 8 corners are in bounds, classifies it, and
//! collects the emitted triangles. Extraction is a pure function of the
//! field contents and the iso level; the field is never mutated. Callers
//! that mutate the field elsewhere (a stepping simulation, say) must hand
//! this module a frozen snapshot.

use isomesh_core::{classify, emit_cell, Triangle, CORNER_OFFSETS};
use isomesh_grid::ScalarField;

use crate::mesh::IsoMesh;

/// Extracts the isosurface of `field` at `iso_level`.
///
/// Returns triangles in traversal order (z fastest); only the winding
/// within each triangle is guaranteed to callers. A field that never
/// crosses the threshold yields an empty mesh.
pub fn extract_surface<F: ScalarField>(field: &F, iso_level: f64) -> IsoMesh {
    let shape = field.shape();
    let mut triangles = Vec::new();
    for x in 0..shape[0].saturating_sub(1) {
        extract_slab(field, iso_level, x, &mut triangles);
    }
    log::debug!(
        "extracted {} triangles from {}x{}x{} grid at iso {}",
        triangles.len(),
        shape[0],
        shape[1],
        shape[2],
        iso_level
    );
    IsoMesh { triangles }
}

/// Extracts the isosurface using one rayon task per x-slab.
///
/// Output is identical to [`extract_surface`]: per-cell work shares no
/// state, so slabs are processed independently and concatenated in slab
/// order.
#[cfg(feature = "parallel")]
pub fn extract_surface_parallel<F: ScalarField + Sync>(field: &F, iso_level: f64) -> IsoMesh {
    use rayon::prelude::*;

    let shape = field.shape();
    let slabs: Vec<Vec<Triangle>> = (0..shape[0].saturating_sub(1))
        .into_par_iter()
        .map(|x| {
            let mut triangles = Vec::new();
            extract_slab(field, iso_level, x, &mut triangles);
            triangles
        })
        .collect();
    let triangles: Vec<Triangle> = slabs.into_iter().flatten().collect();
    log::debug!(
        "extracted {} triangles from {}x{}x{} grid at iso {} (parallel)",
        triangles.len(),
        shape[0],
        shape[1],
        shape[2],
        iso_level
    );
    IsoMesh { triangles }
}

fn extract_slab<F: ScalarField>(
    field: &F,
    iso_level: f64,
    x: usize,
    out: &mut Vec<Triangle>,
) {
    let shape = field.shape();
    for y in 0..shape[1].saturating_sub(1) {
        for z in 0..shape[2].saturating_sub(1) {
            let mut values = [0.0f64; 8];
            for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
                values[i] = field.value(x + offset[0], y + offset[1], z + offset[2]);
            }
            let resolved = classify(&values, iso_level);
            emit_cell([x, y, z], &values, &resolved, iso_level, shape, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomesh_grid::DenseGrid;

    #[test]
    fn test_empty_when_no_crossing() {
        let grid = DenseGrid::zeros([4, 4, 4]);
        assert!(extract_surface(&grid, 5.0).is_empty());
    }

    #[test]
    fn test_degenerate_shapes_yield_empty_mesh() {
        for shape in [[0, 0, 0], [1, 5, 5], [5, 1, 5], [2, 2, 1]] {
            let grid = DenseGrid::zeros(shape);
            assert!(extract_surface(&grid, -1.0).is_empty());
        }
    }

    #[test]
    fn test_single_interior_peak() {
        let mut grid = DenseGrid::zeros([5, 5, 5]);
        grid.set(2, 2, 2, 10.0);
        let mesh = extract_surface(&grid, 5.0);
        // one corner cap in each of the 8 cells around the peak
        assert_eq!(mesh.num_triangles(), 8);
    }
}
