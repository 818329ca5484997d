//! Triangle emitter.
//!
//! Positions the 12 edge intersection points by linear interpolation,
//! reorders them through the accumulated edge permutations, and
//! instantiates the resolved subcase's triangle templates with the winding
//! implied by the sign-flip flag.

use glam::Vec3;

use crate::classify::ResolvedCell;
use crate::geometry::{EDGES, NUM_CORNERS, NUM_EDGES};
use crate::triangle::Triangle;

/// Interpolated intersection points for all 12 edges, in cell-local
/// coordinates.
///
/// The fraction along an edge is `t = w_a / (w_a - w_b)` with
/// `w = value - iso_level`. Coincident endpoint values are a degenerate
/// boundary case: `t` clamps to 0 rather than dividing to NaN. Edges whose
/// endpoints do not straddle the threshold get an unused (possibly
/// off-edge) point; a valid subcase never references them.
pub fn edge_intersections(values: &[f64; NUM_CORNERS], iso_level: f64) -> [Vec3; NUM_EDGES] {
    let mut points = [Vec3::ZERO; NUM_EDGES];
    for (i, edge) in EDGES.iter().enumerate() {
        let a = values[edge.a as usize] - iso_level;
        let b = values[edge.b as usize] - iso_level;
        let t = if a == b { 0.0 } else { a / (a - b) };
        let mut p = Vec3::new(
            f32::from(edge.base[0]),
            f32::from(edge.base[1]),
            f32::from(edge.base[2]),
        );
        p[edge.axis as usize] = t as f32;
        points[i] = p;
    }
    points
}

/// Emits the triangles of one classified cell into `out`.
///
/// `cell` is the cell's minimum-corner grid coordinate and `shape` the
/// full grid extent; output coordinates are normalized by
/// `1 / (dimension - 1)` per axis into the unit cube.
pub fn emit_cell(
    cell: [usize; 3],
    values: &[f64; NUM_CORNERS],
    resolved: &ResolvedCell,
    iso_level: f64,
    shape: [usize; 3],
    out: &mut Vec<Triangle>,
) {
    if resolved.subcase.triangles.is_empty() {
        return;
    }

    let points = edge_intersections(values, iso_level);
    // canonical orientation first, then the subcase's own reordering
    let points = resolved.case_permutation.scatter_edges(&points);
    let points = resolved.edge_permutation.scatter_edges(&points);

    let origin = Vec3::new(cell[0] as f32, cell[1] as f32, cell[2] as f32);
    let scale = Vec3::new(
        1.0 / (shape[0] - 1) as f32,
        1.0 / (shape[1] - 1) as f32,
        1.0 / (shape[2] - 1) as f32,
    );

    for tri in resolved.subcase.triangles {
        let mut corners = [Vec3::ZERO; 3];
        for (slot, &edge) in tri.iter().enumerate() {
            corners[slot] = (origin + points[edge as usize]) * scale;
        }
        if resolved.sign_flip {
            corners.swap(0, 2);
        }
        out.push(Triangle { corners });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn test_interpolation_fraction() {
        let mut values = [0.0f64; 8];
        values[0] = 3.0;
        values[4] = -1.0; // edge 0 runs from corner 0 to corner 4 along x
        let points = edge_intersections(&values, 0.0);
        assert!((points[0].x - 0.75).abs() < 1e-6);
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[0].z, 0.0);
    }

    #[test]
    fn test_degenerate_edge_clamps_to_endpoint() {
        // every edge has equal endpoint values; no NaN may escape
        let values = [2.0f64; 8];
        let points = edge_intersections(&values, 2.0);
        for p in &points {
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
        assert_eq!(points[0], Vec3::ZERO);
    }

    #[test]
    fn test_intersections_lie_on_crossed_edges() {
        let mut values = [-1.0f64; 8];
        values[0] = 2.5;
        let points = edge_intersections(&values, 0.0);
        // corner 0's edges are 0 (x), 4 (y), 8 (z)
        for (edge, axis) in [(0usize, 0usize), (4, 1), (8, 2)] {
            let p = points[edge];
            let t = p[axis];
            assert!(t > 0.0 && t < 1.0, "edge {edge} crossing off the edge");
        }
    }

    #[test]
    fn test_single_corner_emission() {
        let mut values = [-1.0f64; 8];
        values[0] = 1.0;
        let resolved = classify(&values, 0.0);
        let mut out = Vec::new();
        emit_cell([0, 0, 0], &values, &resolved, 0.0, [2, 2, 2], &mut out);
        assert_eq!(out.len(), 1);

        // winding: the normal points toward the above-threshold corner 0
        let [a, b, c] = out[0].corners;
        let normal = (b - a).cross(c - a);
        let toward_corner = Vec3::ZERO - (a + b + c) / 3.0;
        assert!(normal.dot(toward_corner) > 0.0);
    }

    #[test]
    fn test_complement_emits_reversed_windings() {
        let mut values = [-1.0f64; 8];
        values[0] = 1.0;
        values[3] = 2.0;
        let negated = values.map(|v| -v);

        let mut mesh_a = Vec::new();
        let mut mesh_b = Vec::new();
        emit_cell([0, 0, 0], &values, &classify(&values, 0.0), 0.0, [2, 2, 2], &mut mesh_a);
        emit_cell([0, 0, 0], &negated, &classify(&negated, 0.0), 0.0, [2, 2, 2], &mut mesh_b);
        assert_eq!(mesh_a.len(), mesh_b.len());
        for (t, r) in mesh_a.iter().zip(&mesh_b) {
            assert_eq!(t.corners, r.reversed().corners);
        }
    }

    #[test]
    fn test_normalization_into_unit_cube() {
        let mut values = [-1.0f64; 8];
        values[7] = 5.0;
        let resolved = classify(&values, 0.0);
        let mut out = Vec::new();
        emit_cell([3, 3, 3], &values, &resolved, 0.0, [5, 5, 5], &mut out);
        assert!(!out.is_empty());
        for tri in &out {
            for p in &tri.corners {
                assert!(p.x >= 0.0 && p.x <= 1.0);
                assert!(p.y >= 0.0 && p.y <= 1.0);
                assert!(p.z >= 0.0 && p.z <= 1.0);
            }
        }
    }
}
