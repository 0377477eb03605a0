//! Lumen Core - mesh geometry sources.
//!
//! This crate produces raw, object-space triangle geometry for the
//! renderer. It knows nothing about transforms, materials or rays:
//!
//! - **`Mesh`**: positions, a flat triangle index buffer and one normal
//!   per triangle, validated on construction
//! - **OBJ loading**: `load_obj` / `load_obj_from_reader` via `tobj`
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_obj;
//!
//! let mesh = load_obj("Resources/simple_cube.obj")?;
//! println!("{} triangles", mesh.triangle_count());
//! ```

pub mod mesh;
pub mod obj;

// Re-export commonly used types
pub use mesh::{Mesh, MeshError};
pub use obj::{load_obj, load_obj_from_reader, LoadError, LoadResult};
