//! Cell classifier: from 8 corner samples to a resolved subcase.
//!
//! All sign decisions work on values shifted by the iso level
//! (`w = v - iso_level`): bit *i* of the configuration index is set when
//! `w[i] > 0`, and the face saddle test compares `w[a]*w[c] - w[b]*w[d]`
//! against zero. Testing raw values would misclassify saddles whenever the
//! iso level is nonzero.

use crate::geometry::{self, Permutation, NUM_CORNERS};
use crate::lookup::{self, CaseTest, Subcase};

/// Output of [`classify`]: everything the emitter needs for one cell.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCell {
    /// Triangle templates in canonical edge indices.
    pub subcase: &'static Subcase,
    /// Rotation into canonical orientation (applied to all edge data).
    pub case_permutation: &'static Permutation,
    /// Further rotation from the subcase row (edge data only).
    pub edge_permutation: &'static Permutation,
    /// Accumulated winding flag (case-level XOR subcase-level).
    pub sign_flip: bool,
}

/// Classifies one cell.
///
/// `values[i]` is the sample at the corner with offsets
/// `CORNER_OFFSETS[i]`; `iso_level` is the threshold defining the surface.
pub fn classify(values: &[f64; NUM_CORNERS], iso_level: f64) -> ResolvedCell {
    let mut shifted = [0.0f64; NUM_CORNERS];
    let mut config = 0u8;
    for i in 0..NUM_CORNERS {
        shifted[i] = values[i] - iso_level;
        if shifted[i] > 0.0 {
            config |= 1 << i;
        }
    }

    let entry = lookup::case_for(config);
    let case_permutation = geometry::permutation(entry.permutation as usize);
    // remap array slots, not values: all test logic below runs in
    // canonical-case space
    let canonical = case_permutation.scatter_corners(&shifted);

    let case = lookup::case_details(entry.case_id);
    let mut outcome = 0usize;
    for (i, test) in case.tests.iter().enumerate() {
        match *test {
            CaseTest::Interior => outcome |= 1 << i,
            CaseTest::Face(f) => {
                let quad = geometry::adjacency(f as usize);
                let a = canonical[quad[0] as usize];
                let b = canonical[quad[1] as usize];
                let c = canonical[quad[2] as usize];
                let d = canonical[quad[3] as usize];
                if a * c - b * d > 0.0 {
                    outcome |= 1 << i;
                }
            }
        }
    }

    let row = lookup::subcase_details(entry.case_id, outcome);
    ResolvedCell {
        subcase: lookup::subcase(row.subcase),
        case_permutation,
        edge_permutation: geometry::permutation(row.permutation as usize),
        sign_flip: entry.sign_flip ^ row.sign_flip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(positives: &[usize], hi: f64, lo: f64) -> [f64; 8] {
        let mut v = [lo; 8];
        for &i in positives {
            v[i] = hi;
        }
        v
    }

    #[test]
    fn test_uniform_cells_resolve_empty() {
        for values in [[0.0; 8], [10.0; 8]] {
            let resolved = classify(&values, 5.0);
            assert!(resolved.subcase.triangles.is_empty());
        }
    }

    #[test]
    fn test_single_corner_yields_one_triangle() {
        for corner in 0..8 {
            let resolved = classify(&cell(&[corner], 2.0, -1.0), 0.0);
            assert_eq!(resolved.subcase.triangles.len(), 1);
        }
    }

    #[test]
    fn test_threshold_shift_matters() {
        // same values, different iso level: below vs above every sample
        let values = cell(&[0], 4.0, 1.0);
        assert_eq!(classify(&values, 2.0).subcase.triangles.len(), 1);
        assert!(classify(&values, 8.0).subcase.triangles.is_empty());
    }

    #[test]
    fn test_saddle_face_connected_vs_separated() {
        // corners 0 and 5 above threshold: the y=0 face carries them on a
        // diagonal, so its saddle test picks the topology. The adjacency
        // quad there is (0, 1, 5, 4), giving a*c - b*d = w0*w5 - w1*w4.
        let iso = 1.0;

        // w0*w5 = 4, w1*w4 = 1: connected, one bent sheet of 4 triangles
        let mut values = cell(&[0, 5], 3.0, 0.0);
        values[1] = 0.0;
        values[4] = 0.0;
        assert_eq!(classify(&values, iso).subcase.triangles.len(), 4);

        // w0*w5 = 4, w1*w4 = 9: separated, two corner caps
        values[1] = -2.0;
        values[4] = -2.0;
        assert_eq!(classify(&values, iso).subcase.triangles.len(), 2);
    }

    #[test]
    fn test_complement_flips_sign_only() {
        // deterministic pseudo-random magnitudes, all 256 configurations
        for config in 0u16..256 {
            let mut values = [0.0f64; 8];
            for (i, v) in values.iter_mut().enumerate() {
                let magnitude = 0.5 + 0.13 * ((config as usize * 8 + i * 3) % 17) as f64;
                *v = if config & (1 << i) != 0 { magnitude } else { -magnitude };
            }
            let a = classify(&values, 0.0);
            let negated = values.map(|v| -v);
            let b = classify(&negated, 0.0);
            assert_eq!(a.subcase.triangles, b.subcase.triangles);
            assert_eq!(a.case_permutation, b.case_permutation);
            assert_eq!(a.edge_permutation, b.edge_permutation);
            assert_ne!(a.sign_flip, b.sign_flip, "config {config}");
        }
    }
}
