//! Output mesh container.

use isomesh_core::Triangle;
use serde::{Deserialize, Serialize};

/// A triangle soup produced by one extraction call.
///
/// Triangles are self-contained (no shared vertex indexing, no normals);
/// the winding of each triangle faces the above-threshold region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsoMesh {
    pub triangles: Vec<Triangle>,
}

impl IsoMesh {
    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The mesh as a flat position-only vertex buffer, 9 floats per
    /// triangle, without copying.
    #[must_use]
    pub fn vertex_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.triangles)
    }
}
