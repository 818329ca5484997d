//! Generated by `scripts/gen_tables.py` - do not edit by hand.
//!
//! Static case/subcase lookup database: 256 configurations reduced to
//! 15 canonical cases via the cube's 24 proper rotations, with
//! per-outcome subcase rows and 25 distinct triangulations.

use crate::geometry::Permutation;
use crate::lookup::{Case, CaseEntry, CaseTest, Subcase, SubcaseRef};

#[rustfmt::skip]
pub(crate) static PERMUTATIONS: [Permutation; 24] = [
    Permutation { corners: [0, 1, 2, 3, 4, 5, 6, 7], edges: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] },
    Permutation { corners: [3, 2, 1, 0, 7, 6, 5, 4], edges: [3, 2, 1, 0, 5, 4, 7, 6, 9, 8, 11, 10] },
    Permutation { corners: [5, 4, 7, 6, 1, 0, 3, 2], edges: [1, 0, 3, 2, 7, 6, 5, 4, 10, 11, 8, 9] },
    Permutation { corners: [6, 7, 4, 5, 2, 3, 0, 1], edges: [2, 3, 0, 1, 6, 7, 4, 5, 11, 10, 9, 8] },
    Permutation { corners: [1, 3, 0, 2, 5, 7, 4, 6], edges: [1, 3, 0, 2, 8, 9, 10, 11, 5, 4, 7, 6] },
    Permutation { corners: [2, 0, 3, 1, 6, 4, 7, 5], edges: [2, 0, 3, 1, 9, 8, 11, 10, 4, 5, 6, 7] },
    Permutation { corners: [4, 6, 5, 7, 0, 2, 1, 3], edges: [0, 2, 1, 3, 10, 11, 8, 9, 6, 7, 4, 5] },
    Permutation { corners: [7, 5, 6, 4, 3, 1, 2, 0], edges: [3, 1, 2, 0, 11, 10, 9, 8, 7, 6, 5, 4] },
    Permutation { corners: [1, 0, 5, 4, 3, 2, 7, 6], edges: [5, 4, 7, 6, 1, 0, 3, 2, 8, 10, 9, 11] },
    Permutation { corners: [2, 3, 6, 7, 0, 1, 4, 5], edges: [4, 5, 6, 7, 2, 3, 0, 1, 9, 11, 8, 10] },
    Permutation { corners: [4, 5, 0, 1, 6, 7, 2, 3], edges: [6, 7, 4, 5, 0, 1, 2, 3, 10, 8, 11, 9] },
    Permutation { corners: [7, 6, 3, 2, 5, 4, 1, 0], edges: [7, 6, 5, 4, 3, 2, 1, 0, 11, 9, 10, 8] },
    Permutation { corners: [0, 2, 4, 6, 1, 3, 5, 7], edges: [8, 9, 10, 11, 0, 2, 1, 3, 4, 6, 5, 7] },
    Permutation { corners: [3, 1, 7, 5, 2, 0, 6, 4], edges: [9, 8, 11, 10, 3, 1, 2, 0, 5, 7, 4, 6] },
    Permutation { corners: [5, 7, 1, 3, 4, 6, 0, 2], edges: [10, 11, 8, 9, 1, 3, 0, 2, 7, 5, 6, 4] },
    Permutation { corners: [6, 4, 2, 0, 7, 5, 3, 1], edges: [11, 10, 9, 8, 2, 0, 3, 1, 6, 4, 7, 5] },
    Permutation { corners: [0, 4, 1, 5, 2, 6, 3, 7], edges: [4, 6, 5, 7, 8, 10, 9, 11, 0, 1, 2, 3] },
    Permutation { corners: [3, 7, 2, 6, 1, 5, 0, 4], edges: [5, 7, 4, 6, 9, 11, 8, 10, 3, 2, 1, 0] },
    Permutation { corners: [5, 1, 4, 0, 7, 3, 6, 2], edges: [7, 5, 6, 4, 10, 8, 11, 9, 1, 0, 3, 2] },
    Permutation { corners: [6, 2, 7, 3, 4, 0, 5, 1], edges: [6, 4, 7, 5, 11, 9, 10, 8, 2, 3, 0, 1] },
    Permutation { corners: [1, 5, 3, 7, 0, 4, 2, 6], edges: [8, 10, 9, 11, 5, 7, 4, 6, 1, 3, 0, 2] },
    Permutation { corners: [2, 6, 0, 4, 3, 7, 1, 5], edges: [9, 11, 8, 10, 4, 6, 5, 7, 2, 0, 3, 1] },
    Permutation { corners: [4, 0, 6, 2, 5, 1, 7, 3], edges: [10, 8, 11, 9, 6, 4, 7, 5, 0, 2, 1, 3] },
    Permutation { corners: [7, 3, 5, 1, 6, 2, 4, 0], edges: [11, 9, 10, 8, 7, 5, 6, 4, 3, 1, 2, 0] },
];

#[rustfmt::skip]
pub(crate) static CASE_TABLE: [CaseEntry; 256] = [
    ce(0, 0, false), ce(1, 0, false), ce(1, 5, false), ce(2, 0, false),
    ce(1, 4, false), ce(2, 4, false), ce(3, 8, false), ce(5, 1, false),
    ce(1, 1, false), ce(3, 16, false), ce(2, 5, false), ce(5, 4, false),
    ce(2, 1, false), ce(5, 5, false), ce(5, 0, false), ce(8, 0, false),
    ce(1, 6, false), ce(2, 12, false), ce(3, 20, false), ce(5, 13, false),
    ce(3, 4, false), ce(5, 17, false), ce(7, 4, false), ce(9, 0, false),
    ce(4, 1, false), ce(6, 12, false), ce(6, 5, false), ce(11, 1, false),
    ce(6, 10, false), ce(14, 5, false), ce(12, 0, false), ce(5, 6, true),
    ce(1, 2, false), ce(3, 0, false), ce(2, 13, false), ce(5, 9, false),
    ce(4, 2, false), ce(6, 16, false), ce(6, 22, false), ce(14, 1, false),
    ce(3, 13, false), ce(7, 0, false), ce(5, 23, false), ce(9, 3, true),
    ce(6, 1, false), ce(12, 2, true), ce(11, 4, false), ce(5, 2, true),
    ce(2, 2, false), ce(5, 8, false), ce(5, 12, false), ce(8, 8, false),
    ce(6, 9, false), ce(11, 13, false), ce(12, 10, true), ce(5, 10, true),
    ce(6, 2, false), ce(12, 8, false), ce(14, 12, false), ce(5, 15, true),
    ce(10, 16, true), ce(6, 11, true), ce(6, 3, true), ce(2, 3, true),
    ce(1, 3, false), ce(3, 12, false), ce(4, 3, false), ce(6, 0, false),
    ce(2, 14, false), ce(5, 20, false), ce(6, 21, false), ce(11, 5, false),
    ce(3, 1, false), ce(7, 1, false), ce(6, 18, false), ce(12, 3, true),
    ce(5, 11, false), ce(9, 2, true), ce(14, 0, false), ce(5, 3, true),
    ce(2, 6, false), ce(5, 21, false), ce(6, 6, false), ce(14, 13, false),
    ce(5, 16, false), ce(8, 16, false), ce(12, 16, false), ce(5, 22, true),
    ce(6, 17, false), ce(12, 18, true), ce(10, 8, false), ce(6, 7, true),
    ce(11, 12, true), ce(5, 18, true), ce(6, 19, true), ce(2, 7, true),
    ce(3, 17, false), ce(7, 2, false), ce(6, 13, false), ce(12, 9, false),
    ce(6, 14, false), ce(12, 19, true), ce(10, 0, true), ce(6, 23, true),
    ce(7, 3, false), ce(13, 0, false), ce(12, 17, true), ce(7, 6, true),
    ce(12, 11, false), ce(7, 7, true), ce(6, 20, true), ce(3, 9, true),
    ce(5, 7, false), ce(9, 1, true), ce(11, 0, true), ce(5, 14, true),
    ce(14, 4, true), ce(5, 19, true), ce(6, 15, true), ce(2, 15, true),
    ce(12, 1, true), ce(7, 5, true), ce(6, 4, true), ce(3, 21, true),
    ce(6, 8, true), ce(3, 5, true), ce(4, 0, true), ce(1, 7, true),
    ce(1, 7, false), ce(4, 0, false), ce(3, 5, false), ce(6, 8, false),
    ce(3, 21, false), ce(6, 4, false), ce(7, 5, false), ce(12, 1, false),
    ce(2, 15, false), ce(6, 15, false), ce(5, 19, false), ce(14, 4, false),
    ce(5, 14, false), ce(11, 0, false), ce(9, 1, false), ce(5, 7, true),
    ce(3, 9, false), ce(6, 20, false), ce(7, 7, false), ce(12, 11, true),
    ce(7, 6, false), ce(12, 17, false), ce(13, 0, true), ce(7, 3, true),
    ce(6, 23, false), ce(10, 0, false), ce(12, 19, false), ce(6, 14, true),
    ce(12, 9, true), ce(6, 13, true), ce(7, 2, true), ce(3, 17, true),
    ce(2, 7, false), ce(6, 19, false), ce(5, 18, false), ce(11, 12, false),
    ce(6, 7, false), ce(10, 8, true), ce(12, 18, false), ce(6, 17, true),
    ce(5, 22, false), ce(12, 16, true), ce(8, 16, true), ce(5, 16, true),
    ce(14, 13, true), ce(6, 6, true), ce(5, 21, true), ce(2, 6, true),
    ce(5, 3, false), ce(14, 0, true), ce(9, 2, false), ce(5, 11, true),
    ce(12, 3, false), ce(6, 18, true), ce(7, 1, true), ce(3, 1, true),
    ce(11, 5, true), ce(6, 21, true), ce(5, 20, true), ce(2, 14, true),
    ce(6, 0, true), ce(4, 3, true), ce(3, 12, true), ce(1, 3, true),
    ce(2, 3, false), ce(6, 3, false), ce(6, 11, false), ce(10, 16, false),
    ce(5, 15, false), ce(14, 12, true), ce(12, 8, true), ce(6, 2, true),
    ce(5, 10, false), ce(12, 10, false), ce(11, 13, true), ce(6, 9, true),
    ce(8, 8, true), ce(5, 12, true), ce(5, 8, true), ce(2, 2, true),
    ce(5, 2, false), ce(11, 4, true), ce(12, 2, false), ce(6, 1, true),
    ce(9, 3, false), ce(5, 23, true), ce(7, 0, true), ce(3, 13, true),
    ce(14, 1, true), ce(6, 22, true), ce(6, 16, true), ce(4, 2, true),
    ce(5, 9, true), ce(2, 13, true), ce(3, 0, true), ce(1, 2, true),
    ce(5, 6, false), ce(12, 0, true), ce(14, 5, true), ce(6, 10, true),
    ce(11, 1, true), ce(6, 5, true), ce(6, 12, true), ce(4, 1, true),
    ce(9, 0, true), ce(7, 4, true), ce(5, 17, true), ce(3, 4, true),
    ce(5, 13, true), ce(3, 20, true), ce(2, 12, true), ce(1, 6, true),
    ce(8, 0, true), ce(5, 0, true), ce(5, 5, true), ce(2, 1, true),
    ce(5, 4, true), ce(2, 5, true), ce(3, 16, true), ce(1, 1, true),
    ce(5, 1, true), ce(3, 8, true), ce(2, 4, true), ce(1, 4, true),
    ce(2, 0, true), ce(1, 5, true), ce(1, 0, true), ce(0, 0, true),
];

pub(crate) static CASES: [Case; 15] = [
    Case { tests: &[], subcases: &[sr(0, 0, false)] },
    Case { tests: &[], subcases: &[sr(1, 0, false)] },
    Case { tests: &[], subcases: &[sr(2, 0, false)] },
    Case { tests: &[CaseTest::Face(2)], subcases: &[sr(3, 0, false), sr(4, 0, false)] },
    Case { tests: &[CaseTest::Interior], subcases: &[sr(5, 0, false), sr(6, 0, false)] },
    Case { tests: &[], subcases: &[sr(7, 0, false)] },
    Case { tests: &[CaseTest::Face(4), CaseTest::Interior], subcases: &[sr(8, 0, false), sr(9, 0, false), sr(10, 0, false), sr(9, 0, false)] },
    Case { tests: &[CaseTest::Face(2), CaseTest::Face(5), CaseTest::Face(0), CaseTest::Interior], subcases: &[sr(11, 0, false), sr(12, 0, false), sr(13, 0, false), sr(11, 18, false), sr(12, 13, false), sr(14, 0, false), sr(11, 13, false), sr(12, 18, false), sr(11, 0, false), sr(12, 0, false), sr(13, 0, false), sr(11, 18, false), sr(12, 13, false), sr(14, 0, false), sr(11, 13, false), sr(12, 18, false)] },
    Case { tests: &[], subcases: &[sr(15, 0, false)] },
    Case { tests: &[], subcases: &[sr(16, 0, false)] },
    Case { tests: &[CaseTest::Interior, CaseTest::Face(0), CaseTest::Face(1)], subcases: &[sr(17, 0, false), sr(17, 0, false), sr(18, 0, false), sr(18, 0, false), sr(18, 6, false), sr(18, 6, false), sr(17, 2, true), sr(17, 2, true)] },
    Case { tests: &[], subcases: &[sr(19, 0, false)] },
    Case { tests: &[CaseTest::Face(2), CaseTest::Face(4)], subcases: &[sr(20, 0, false), sr(21, 0, false), sr(22, 0, false), sr(20, 6, true)] },
    Case { tests: &[], subcases: &[sr(23, 0, false)] },
    Case { tests: &[], subcases: &[sr(24, 0, false)] },
];

#[rustfmt::skip]
pub(crate) static SUBCASES: [Subcase; 25] = [
    Subcase { triangles: &[] },
    Subcase { triangles: &[[8, 4, 0]] },
    Subcase { triangles: &[[5, 4, 1], [4, 0, 1]] },
    Subcase { triangles: &[[8, 4, 0], [10, 7, 1]] },
    Subcase { triangles: &[[8, 4, 1], [4, 7, 1], [4, 0, 7], [0, 10, 7]] },
    Subcase { triangles: &[[8, 4, 0], [7, 11, 3]] },
    Subcase { triangles: &[[8, 11, 3], [8, 7, 11], [8, 4, 7], [4, 3, 7], [4, 0, 3], [0, 8, 3]] },
    Subcase { triangles: &[[4, 8, 2], [8, 1, 2], [1, 3, 2]] },
    Subcase { triangles: &[[5, 4, 1], [4, 0, 1], [11, 6, 2]] },
    Subcase { triangles: &[[5, 4, 1], [4, 2, 1], [2, 11, 1], [11, 6, 1], [6, 0, 1]] },
    Subcase { triangles: &[[5, 6, 2], [5, 11, 6], [5, 4, 11], [4, 0, 11], [0, 1, 11], [1, 2, 11], [1, 5, 2]] },
    Subcase { triangles: &[[8, 4, 0], [9, 10, 3], [9, 5, 10], [5, 1, 10], [10, 7, 3]] },
    Subcase { triangles: &[[8, 4, 1], [4, 0, 1], [0, 9, 1], [0, 10, 9], [10, 7, 9], [7, 3, 9], [9, 5, 1]] },
    Subcase { triangles: &[[8, 4, 0], [9, 5, 3], [10, 7, 1]] },
    Subcase { triangles: &[[8, 5, 1], [9, 4, 3], [4, 0, 3], [0, 10, 3], [10, 7, 3]] },
    Subcase { triangles: &[[0, 1, 2], [1, 3, 2]] },
    Subcase { triangles: &[[5, 9, 1], [9, 2, 1], [2, 6, 1], [6, 10, 1]] },
    Subcase { triangles: &[[8, 4, 10], [4, 6, 10], [9, 5, 11], [5, 7, 11]] },
    Subcase { triangles: &[[8, 5, 10], [5, 6, 10], [5, 7, 6], [7, 9, 6], [7, 11, 9], [9, 4, 6]] },
    Subcase { triangles: &[[8, 5, 0], [5, 7, 0], [7, 11, 0], [11, 2, 0]] },
    Subcase { triangles: &[[4, 8, 0], [6, 10, 2], [10, 1, 2], [1, 3, 2]] },
    Subcase { triangles: &[[4, 3, 0], [4, 8, 3], [8, 1, 3], [3, 10, 0], [3, 2, 10], [2, 6, 10]] },
    Subcase { triangles: &[[4, 8, 2], [8, 3, 2], [8, 0, 3], [0, 6, 3], [6, 10, 3], [10, 1, 3]] },
    Subcase { triangles: &[[8, 4, 0], [9, 5, 3], [10, 7, 1], [11, 6, 2]] },
    Subcase { triangles: &[[4, 8, 6], [8, 1, 6], [1, 3, 6], [3, 11, 6]] },
];

const fn ce(case_id: u8, permutation: u8, sign_flip: bool) -> CaseEntry {
    CaseEntry { case_id, permutation, sign_flip }
}

const fn sr(subcase: u8, permutation: u8, sign_flip: bool) -> SubcaseRef {
    SubcaseRef { subcase, permutation, sign_flip }
}
