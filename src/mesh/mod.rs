//! Host-side helpers: built-in meshes and face-stream files.

mod io;
mod primitives;

pub use io::{read_baked, read_faces, write_baked, write_faces};
pub use primitives::{assemble_faces, cube, face_normals, quad, triangulate, unit_triangle};
