//! Fixed binary records exchanged with the host.
//!
//! Every record is built only from `f32` components and is `#[repr(C)]`, so
//! the Rust layout is exactly the packed wire layout: no padding, native
//! endianness, fields in declaration order.

mod vertex;

pub use vertex::{InputFace, InputVertex, OutputFace, OutputVertex};

/// Byte sizes of the wire records.
pub mod size_of {
    pub const FLOAT: usize = 4;
    pub const POSITION: usize = 3 * FLOAT;
    pub const NORMAL: usize = 3 * FLOAT;
    pub const TANGENT: usize = 3 * FLOAT;
    pub const BITANGENT: usize = 3 * FLOAT;
    pub const UV: usize = 2 * FLOAT;

    pub const VERTICES_PER_FACE: usize = 3;
    pub const FLOATS_PER_INPUT_VERTEX: usize = INPUT_VERTEX / FLOAT;
    pub const FLOATS_PER_OUTPUT_VERTEX: usize = OUTPUT_VERTEX / FLOAT;

    pub const INPUT_VERTEX: usize = UV + NORMAL + POSITION;
    pub const OUTPUT_VERTEX: usize = INPUT_VERTEX + BITANGENT + TANGENT;
    pub const INPUT_FACE: usize = VERTICES_PER_FACE * INPUT_VERTEX;
    pub const OUTPUT_FACE: usize = VERTICES_PER_FACE * OUTPUT_VERTEX;
}

const _: () = assert!(std::mem::size_of::<InputVertex>() == size_of::INPUT_VERTEX);
const _: () = assert!(std::mem::size_of::<OutputVertex>() == size_of::OUTPUT_VERTEX);
const _: () = assert!(std::mem::size_of::<InputFace>() == size_of::INPUT_FACE);
const _: () = assert!(std::mem::size_of::<OutputFace>() == size_of::OUTPUT_FACE);
