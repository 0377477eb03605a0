//! Raw triangle geometry as produced by a geometry source.
//!
//! The renderer copies these buffers into its own meshes; everything here
//! stays in object space.

use lumen_math::{Aabb, Vec3};
use thiserror::Error;

/// Reasons a set of buffers cannot form a mesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("mesh has no triangles")]
    Empty,

    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),

    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("{normals} normals supplied for {triangles} triangles")]
    NormalCountMismatch { normals: usize, triangles: usize },
}

/// A triangle mesh with one normal per triangle.
///
/// Invariants (checked by [`Mesh::new`]): `indices.len()` is a non-zero
/// multiple of 3, every index references `positions`, and
/// `normals.len() == indices.len() / 3`.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Face normals (one Vec3 per triangle)
    pub normals: Vec<Vec3>,

    /// Object-space bounding box
    pub bounds: Aabb,
}

impl Mesh {
    /// Create a validated mesh.
    ///
    /// If `normals` is `None` they are derived from the winding order as
    /// `cross(v1 - v0, v2 - v0)`.
    pub fn new(
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        normals: Option<Vec<Vec3>>,
    ) -> Result<Self, MeshError> {
        validate_indices(&positions, &indices)?;

        let triangles = indices.len() / 3;
        let normals = match normals {
            Some(normals) if normals.len() != triangles => {
                return Err(MeshError::NormalCountMismatch {
                    normals: normals.len(),
                    triangles,
                });
            }
            Some(normals) => normals.into_iter().map(|n| n.normalize_or_zero()).collect(),
            None => face_normals(&positions, &indices),
        };

        let bounds = Aabb::enclosing(&positions);
        Ok(Self {
            positions,
            indices,
            normals,
            bounds,
        })
    }

    /// Recompute face normals from the winding order.
    pub fn compute_face_normals(&mut self) {
        self.normals = face_normals(&self.positions, &self.indices);
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterate triangles as `[v0, v1, v2]` vertex triplets.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|face| {
            [
                self.positions[face[0] as usize],
                self.positions[face[1] as usize],
                self.positions[face[2] as usize],
            ]
        })
    }
}

fn validate_indices(positions: &[Vec3], indices: &[u32]) -> Result<(), MeshError> {
    if indices.is_empty() || positions.is_empty() {
        return Err(MeshError::Empty);
    }
    if indices.len() % 3 != 0 {
        return Err(MeshError::PartialTriangle(indices.len()));
    }
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(MeshError::IndexOutOfRange {
            index,
            vertex_count: positions.len(),
        });
    }
    Ok(())
}

/// One normal per triangle, `cross(v1 - v0, v2 - v0)` normalized.
///
/// Degenerate (zero-area) triangles get a zero normal, which the
/// intersection code rejects like a ray parallel to the surface.
pub fn face_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut degenerate = 0usize;

    let normals = indices
        .chunks_exact(3)
        .map(|face| {
            let p0 = positions[face[0] as usize];
            let p1 = positions[face[1] as usize];
            let p2 = positions[face[2] as usize];

            let normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
            if normal == Vec3::ZERO {
                degenerate += 1;
            }
            normal
        })
        .collect();

    if degenerate > 0 {
        log::warn!("{} degenerate triangles have no face normal", degenerate);
    }
    normals
}
