//! Wavefront OBJ loading.
//!
//! Only positions and faces are used; faces are triangulated by `tobj`
//! and normals are always rebuilt per triangle from the winding order,
//! since the renderer shades with face normals.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lumen_math::Vec3;
use thiserror::Error;

use crate::mesh::{Mesh, MeshError};

/// Errors that can occur during OBJ loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No geometry found in OBJ file")]
    NoGeometry,

    #[error("Invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load an OBJ file from disk as a single mesh.
pub fn load_obj<P: AsRef<Path>>(path: P) -> LoadResult<Mesh> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let mesh = load_obj_from_reader(&mut reader)?;

    log::info!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Load OBJ data from any buffered reader. Every object in the file is
/// merged into one mesh; material libraries are ignored.
pub fn load_obj_from_reader<R: BufRead>(reader: &mut R) -> LoadResult<Mesh> {
    let (models, _materials) = tobj::load_obj_buf(
        reader,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
        |_| Err(tobj::LoadError::OpenFileFailed),
    )?;

    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for model in &models {
        let base = positions.len() as u32;
        positions.extend(model.mesh.positions.chunks_exact(3).map(Vec3::from_slice));
        indices.extend(model.mesh.indices.iter().map(|i| base + i));
        log::debug!(
            "OBJ object '{}': {} triangles",
            model.name,
            model.mesh.indices.len() / 3
        );
    }

    if indices.is_empty() {
        log::warn!("OBJ data contains {} objects but no faces", models.len());
        return Err(LoadError::NoGeometry);
    }

    Ok(Mesh::new(positions, indices, None)?)
}
