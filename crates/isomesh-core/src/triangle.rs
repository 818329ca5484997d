//! The output triangle type.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One output triangle: three ordered corners in grid-normalized
/// coordinates (each component in `[0, 1]`).
///
/// `repr(C)` and `Pod` so a `&[Triangle]` can be viewed as the flat
/// 9-floats-per-triangle vertex buffer a renderer consumes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Triangle {
    pub corners: [Vec3; 3],
}

impl Triangle {
    /// Creates a triangle from its three corners.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { corners: [a, b, c] }
    }

    /// The same triangle with reversed winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            corners: [self.corners[2], self.corners[1], self.corners[0]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pod_layout() {
        // 9 floats per triangle, no padding
        assert_eq!(std::mem::size_of::<Triangle>(), 9 * 4);
        let tri = Triangle::new(Vec3::X, Vec3::Y, Vec3::Z);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&tri));
        assert_eq!(floats, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_reversed_swaps_outer_corners() {
        let tri = Triangle::new(Vec3::X, Vec3::Y, Vec3::Z);
        let rev = tri.reversed();
        assert_eq!(rev.corners[0], Vec3::Z);
        assert_eq!(rev.corners[1], Vec3::Y);
        assert_eq!(rev.corners[2], Vec3::X);
    }

    #[test]
    fn test_serde_round_trip() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::ONE, Vec3::X);
        let json = serde_json::to_string(&tri).unwrap();
        let back: Triangle = serde_json::from_str(&json).unwrap();
        assert_eq!(tri, back);
    }
}
