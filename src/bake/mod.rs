//! Per-face tangent/bitangent baking.
//!
//! Every entry point runs the same per-face computation ([`bake_face`]); they
//! differ only in how the caller hands over the face records.

mod error;

pub use error::BakeError;

use crate::layout::{size_of, InputFace, OutputFace, OutputVertex};

/// Computes the face-uniform tangent and bitangent of one triangle and copies
/// its attributes through.
///
/// Degenerate UV mappings (zero UV determinant) are not guarded: the inverse
/// determinant becomes infinite and the basis comes out as Inf/NaN.
pub fn bake_face(face: &InputFace) -> OutputFace {
    let [v0, v1, v2] = &face.vertices;

    let edge1 = v1.position - v0.position;
    let edge2 = v2.position - v0.position;

    let delta_uv1 = v1.uv - v0.uv;
    let delta_uv2 = v2.uv - v0.uv;

    let f = 1.0 / (delta_uv1.x * delta_uv2.y - delta_uv2.x * delta_uv1.y);

    let tangent = (f * (delta_uv2.y * edge1 - delta_uv1.y * edge2)).normalize();
    let bitangent = (f * (-delta_uv2.x * edge1 + delta_uv1.x * edge2)).normalize();

    OutputFace {
        vertices: face
            .vertices
            .map(|vertex| OutputVertex::from_input(&vertex, tangent, bitangent)),
    }
}

/// Input and output byte lengths for `nb_faces` faces.
pub fn buffer_sizes(nb_faces: usize) -> Result<(usize, usize), BakeError> {
    let overflow = || BakeError::SizeOverflow { faces: nb_faces };
    let input_len = nb_faces.checked_mul(size_of::INPUT_FACE).ok_or_else(overflow)?;
    let output_len = nb_faces.checked_mul(size_of::OUTPUT_FACE).ok_or_else(overflow)?;
    Ok((input_len, output_len))
}

/// Number of faces in an input buffer of `input_len` bytes.
pub fn face_count(input_len: usize) -> Result<usize, BakeError> {
    if input_len % size_of::INPUT_FACE != 0 {
        return Err(BakeError::NotFaceAligned { len: input_len });
    }
    Ok(input_len / size_of::INPUT_FACE)
}

/// Bakes typed faces. `output` must hold at least `input.len()` faces; only
/// the first `input.len()` are written.
pub fn bake_faces(input: &[InputFace], output: &mut [OutputFace]) -> Result<(), BakeError> {
    check_output_faces(input.len(), output.len())?;

    bake_typed(input, &mut output[..input.len()]);
    Ok(())
}

/// Number of progress reports made by [`bake_faces_with_progress`].
pub const PROGRESS_STEPS: usize = 5;

/// Same as [`bake_faces`], calling `on_step(percent, done)` after every 20% of
/// the faces. An empty input reports nothing.
pub fn bake_faces_with_progress<F>(
    input: &[InputFace],
    output: &mut [OutputFace],
    mut on_step: F,
) -> Result<(), BakeError>
where
    F: FnMut(usize, usize),
{
    check_output_faces(input.len(), output.len())?;

    let total = input.len();
    if total == 0 {
        return Ok(());
    }

    let mut done = 0;
    for step in 1..=PROGRESS_STEPS {
        let end = (step * total).div_ceil(PROGRESS_STEPS);
        bake_typed(&input[done..end], &mut output[done..end]);
        done = end;
        on_step(step * 100 / PROGRESS_STEPS, done);
    }

    Ok(())
}

fn check_output_faces(input_faces: usize, output_faces: usize) -> Result<(), BakeError> {
    if output_faces < input_faces {
        let (_, expected) = buffer_sizes(input_faces)?;
        return Err(BakeError::OutputTooShort {
            expected,
            actual: output_faces * size_of::OUTPUT_FACE,
        });
    }
    Ok(())
}

/// Checked byte-level entry point.
///
/// Validates both buffer lengths against `nb_faces` before touching anything.
/// Buffers may be unaligned. Bytes past `nb_faces * 168` in `output` are left
/// untouched.
pub fn bake_bytes(input: &[u8], output: &mut [u8], nb_faces: usize) -> Result<(), BakeError> {
    let (input_len, output_len) = buffer_sizes(nb_faces)?;

    if input.len() < input_len {
        return Err(BakeError::InputTooShort {
            expected: input_len,
            actual: input.len(),
        });
    }
    if output.len() < output_len {
        return Err(BakeError::OutputTooShort {
            expected: output_len,
            actual: output.len(),
        });
    }

    bake_chunks(&input[..input_len], &mut output[..output_len]);

    log::debug!("Baked {} faces ({} -> {} bytes)", nb_faces, input_len, output_len);
    Ok(())
}

/// Bakes a whole input buffer into a newly allocated output buffer. The face
/// count is derived from the input length.
pub fn bake_buffer(input: &[u8]) -> Result<Vec<u8>, BakeError> {
    let nb_faces = face_count(input.len())?;
    let (_, output_len) = buffer_sizes(nb_faces)?;

    let mut output = vec![0u8; output_len];
    bake_bytes(input, &mut output, nb_faces)?;

    let non_finite = count_non_finite(&output);
    if non_finite > 0 {
        log::warn!(
            "{} of {} faces have a degenerate UV mapping; their tangents are not finite",
            non_finite,
            nb_faces
        );
    }

    Ok(output)
}

/// Counts baked faces in an output byte buffer whose basis has Inf/NaN
/// components. A trailing partial face is ignored.
pub fn count_non_finite(output: &[u8]) -> usize {
    output
        .chunks_exact(size_of::OUTPUT_FACE)
        .filter(|chunk| !bytemuck::pod_read_unaligned::<OutputFace>(chunk).is_finite())
        .count()
}

/// Unchecked fast path behind the exported C entry point.
///
/// Faces are processed sequentially in index order with unaligned reads and
/// writes. `nb_faces == 0` dereferences nothing.
///
/// # Safety
///
/// `input` must be valid for reads of `nb_faces * 96` bytes and `output` valid
/// for writes of `nb_faces * 168` bytes for the whole call. If the regions
/// overlap, the output of face `i` must not overlap the input of any face
/// `j > i`.
pub unsafe fn bake_raw(input: *const u8, output: *mut u8, nb_faces: usize) {
    for index in 0..nb_faces {
        let face = unsafe {
            input
                .add(index * size_of::INPUT_FACE)
                .cast::<InputFace>()
                .read_unaligned()
        };
        let baked = bake_face(&face);
        unsafe {
            output
                .add(index * size_of::OUTPUT_FACE)
                .cast::<OutputFace>()
                .write_unaligned(baked);
        }
    }
}

fn bake_chunk(input: &[u8], output: &mut [u8]) {
    let face: InputFace = bytemuck::pod_read_unaligned(input);
    output.copy_from_slice(bytemuck::bytes_of(&bake_face(&face)));
}

// Faces are independent, so the parallel loops only need disjoint output
// chunks per face.
cfg_if::cfg_if! {
    if #[cfg(feature = "parallel")] {
        use rayon::prelude::*;

        fn bake_typed(input: &[InputFace], output: &mut [OutputFace]) {
            output
                .par_iter_mut()
                .zip(input.par_iter())
                .for_each(|(out, face)| *out = bake_face(face));
        }

        fn bake_chunks(input: &[u8], output: &mut [u8]) {
            output
                .par_chunks_exact_mut(size_of::OUTPUT_FACE)
                .zip(input.par_chunks_exact(size_of::INPUT_FACE))
                .for_each(|(out, face)| bake_chunk(face, out));
        }
    } else {
        fn bake_typed(input: &[InputFace], output: &mut [OutputFace]) {
            for (out, face) in output.iter_mut().zip(input) {
                *out = bake_face(face);
            }
        }

        fn bake_chunks(input: &[u8], output: &mut [u8]) {
            for (out, face) in output
                .chunks_exact_mut(size_of::OUTPUT_FACE)
                .zip(input.chunks_exact(size_of::INPUT_FACE))
            {
                bake_chunk(face, out);
            }
        }
    }
}
