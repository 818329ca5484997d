//! Case/subcase lookup database.
//!
//! Maps every 8-bit corner-sign configuration to a canonical case plus the
//! rotation that brings the cell into canonical orientation, and each
//! (case, test outcome) pair to the triangle list to emit. All lookups are
//! total over their declared domains; an out-of-range index is a
//! programming error and panics. The data lives in the generated `tables`
//! module and is never mutated.

use crate::geometry::{self, NUM_CORNERS, NUM_EDGES};
use crate::tables;

/// Per-configuration entry: which canonical case applies, the rotation
/// into canonical orientation, and whether this configuration is the
/// complement of the canonical one (winding must then be reversed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseEntry {
    pub case_id: u8,
    pub permutation: u8,
    pub sign_flip: bool,
}

/// One disambiguation test of a canonical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTest {
    /// Bilinear saddle test on the given adjacency site (face id 0-5).
    Face(u8),
    /// Fixed outcome: contributes a set bit unconditionally. Stands in for
    /// the interior test, whose rows are paired with the tube
    /// interpretation.
    Interior,
}

/// A canonical case: its ordered disambiguation tests (at most 4) and one
/// subcase row per test outcome (`subcases.len() == 1 << tests.len()`).
#[derive(Debug)]
pub struct Case {
    pub tests: &'static [CaseTest],
    pub subcases: &'static [SubcaseRef],
}

/// A resolved row: the subcase to emit, a further rotation applied to the
/// edge data only, and a sign flip XORed into the case-level flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubcaseRef {
    pub subcase: u8,
    pub permutation: u8,
    pub sign_flip: bool,
}

/// A triangle list in canonical edge indices (0-11).
#[derive(Debug)]
pub struct Subcase {
    pub triangles: &'static [[u8; 3]],
}

/// Looks up the case entry for a configuration index.
pub fn case_for(config: u8) -> &'static CaseEntry {
    &tables::CASE_TABLE[config as usize]
}

/// Looks up a canonical case by id.
///
/// # Panics
/// Panics if `case_id` is out of range (corrupt table reference).
pub fn case_details(case_id: u8) -> &'static Case {
    &tables::CASES[case_id as usize]
}

/// Looks up the subcase row for a case and test outcome.
///
/// # Panics
/// Panics if `outcome` is not within the case's declared test domain.
pub fn subcase_details(case_id: u8, outcome: usize) -> &'static SubcaseRef {
    &case_details(case_id).subcases[outcome]
}

/// Looks up a subcase triangle list by id.
pub fn subcase(id: u8) -> &'static Subcase {
    &tables::SUBCASES[id as usize]
}

/// Verifies the integrity of the compiled-in tables.
///
/// The tables are a build artifact; a violation here means the artifact is
/// corrupt, which is fatal by contract.
///
/// # Panics
/// Panics on the first integrity violation.
pub fn self_check() {
    for id in 0..geometry::num_permutations() {
        let p = geometry::permutation(id);
        let mut corners = [false; NUM_CORNERS];
        let mut edges = [false; NUM_EDGES];
        for &c in &p.corners {
            assert!(!corners[c as usize], "permutation {id}: corner map not bijective");
            corners[c as usize] = true;
        }
        for &e in &p.edges {
            assert!(!edges[e as usize], "permutation {id}: edge map not bijective");
            edges[e as usize] = true;
        }
    }

    for config in 0..=255u8 {
        let entry = case_for(config);
        assert!(
            (entry.case_id as usize) < tables::CASES.len(),
            "config {config}: case id out of range"
        );
        assert!(
            (entry.permutation as usize) < geometry::num_permutations(),
            "config {config}: permutation id out of range"
        );
    }

    for (case_id, case) in tables::CASES.iter().enumerate() {
        assert!(case.tests.len() <= 4, "case {case_id}: too many tests");
        assert_eq!(
            case.subcases.len(),
            1 << case.tests.len(),
            "case {case_id}: one subcase row per test outcome"
        );
        for test in case.tests {
            if let CaseTest::Face(f) = test {
                assert!((*f as usize) < geometry::NUM_FACES);
            }
        }
        for row in case.subcases {
            assert!((row.subcase as usize) < tables::SUBCASES.len());
            assert!((row.permutation as usize) < geometry::num_permutations());
        }
    }

    for sub in &tables::SUBCASES {
        for tri in sub.triangles {
            for &e in tri {
                assert!((e as usize) < NUM_EDGES, "triangle references edge {e}");
            }
        }
    }

    // fully-uniform cells resolve to the empty case through the table
    for config in [0u8, 255u8] {
        let entry = case_for(config);
        let case = case_details(entry.case_id);
        for row in case.subcases {
            assert!(subcase(row.subcase).triangles.is_empty());
        }
    }

    log::debug!(
        "lookup tables verified: {} cases, {} subcases, {} permutations",
        tables::CASES.len(),
        tables::SUBCASES.len(),
        geometry::num_permutations()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_check_passes() {
        self_check();
    }

    #[test]
    fn test_every_configuration_resolves() {
        for config in 0..=255u8 {
            let entry = case_for(config);
            let case = case_details(entry.case_id);
            assert_eq!(case.subcases.len(), 1 << case.tests.len());
        }
    }

    #[test]
    fn test_complement_pairs_share_case() {
        for config in 0..=255u8 {
            let a = case_for(config);
            let b = case_for(!config);
            assert_eq!(a.case_id, b.case_id, "config {config}");
        }
    }

    #[test]
    fn test_uniform_configs_are_empty() {
        for config in [0u8, 255u8] {
            let entry = case_for(config);
            let row = subcase_details(entry.case_id, 0);
            assert!(subcase(row.subcase).triangles.is_empty());
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_out_of_range_outcome_panics() {
        // case for config 1 (single corner) declares no tests
        let entry = case_for(1);
        let _ = subcase_details(entry.case_id, 1);
    }
}
