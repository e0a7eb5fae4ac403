//! Per-face tangent/bitangent baking for triangle meshes.
//!
//! The host hands over a packed buffer of input faces (uv, normal, position
//! per vertex) and receives a packed buffer of output faces with the face
//! tangent and bitangent inserted. See [`layout`] for the byte contract and
//! [`ffi`] for the exported C entry points.

pub mod bake;
pub mod cli;
pub mod ffi;
pub mod layout;
pub mod math;
pub mod mesh;

pub use bake::{
    bake_buffer, bake_bytes, bake_face, bake_faces, bake_faces_with_progress, BakeError,
};
pub use layout::{InputFace, InputVertex, OutputFace, OutputVertex};
pub use math::{Vector2, Vector3};
