//! C ABI exported by the dynamic library.

use crate::bake::{self, BakeError};
use crate::layout::size_of;

/// `void bake_tangents(const char* vertices_in, char* vertices_out, size_t nb_faces_in)`
///
/// Performs no validation.
///
/// # Safety
///
/// `vertices_in` must be readable for `nb_faces_in * 96` bytes and
/// `vertices_out` writable for `nb_faces_in * 168` bytes.
#[no_mangle]
pub unsafe extern "C" fn bake_tangents(
    vertices_in: *const u8,
    vertices_out: *mut u8,
    nb_faces_in: usize,
) {
    unsafe { bake::bake_raw(vertices_in, vertices_out, nb_faces_in) }
}

/// Checked variant of [`bake_tangents`]. Returns 0 on success, otherwise the
/// [`BakeError::status_code`] of the failure. Nothing is written on failure.
///
/// # Safety
///
/// When non-null, `vertices_in` must be readable for `in_len` bytes and
/// `vertices_out` writable for `out_len` bytes, and the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn bake_tangents_checked(
    vertices_in: *const u8,
    in_len: usize,
    vertices_out: *mut u8,
    out_len: usize,
    nb_faces_in: usize,
) -> i32 {
    match unsafe { bake_checked(vertices_in, in_len, vertices_out, out_len, nb_faces_in) } {
        Ok(()) => 0,
        Err(err) => {
            log::error!("bake_tangents_checked failed: {}", err);
            err.status_code()
        }
    }
}

#[no_mangle]
pub extern "C" fn bake_tangents_input_face_size() -> usize {
    size_of::INPUT_FACE
}

#[no_mangle]
pub extern "C" fn bake_tangents_output_face_size() -> usize {
    size_of::OUTPUT_FACE
}

unsafe fn bake_checked(
    vertices_in: *const u8,
    in_len: usize,
    vertices_out: *mut u8,
    out_len: usize,
    nb_faces_in: usize,
) -> Result<(), BakeError> {
    if nb_faces_in == 0 {
        return Ok(());
    }
    if vertices_in.is_null() || vertices_out.is_null() {
        return Err(BakeError::NullPointer);
    }

    let input = unsafe { std::slice::from_raw_parts(vertices_in, in_len) };
    let output = unsafe { std::slice::from_raw_parts_mut(vertices_out, out_len) };
    bake::bake_bytes(input, output, nb_faces_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{InputFace, InputVertex};

    fn quad_faces() -> Vec<InputFace> {
        let normal = [0.0, 0.0, 1.0];
        vec![
            InputFace::new(
                InputVertex::from_arrays([0.0, 0.0], normal, [-1.0, -1.0, 0.0]),
                InputVertex::from_arrays([1.0, 0.0], normal, [1.0, -1.0, 0.0]),
                InputVertex::from_arrays([1.0, 1.0], normal, [1.0, 1.0, 0.0]),
            ),
            InputFace::new(
                InputVertex::from_arrays([0.0, 0.0], normal, [-1.0, -1.0, 0.0]),
                InputVertex::from_arrays([1.0, 1.0], normal, [1.0, 1.0, 0.0]),
                InputVertex::from_arrays([0.0, 1.0], normal, [-1.0, 1.0, 0.0]),
            ),
        ]
    }

    #[test]
    fn test_face_size_queries() {
        assert_eq!(bake_tangents_input_face_size(), 96);
        assert_eq!(bake_tangents_output_face_size(), 168);
    }

    #[test]
    fn test_bake_tangents_matches_bake_buffer() {
        let input: Vec<u8> = bytemuck::cast_slice(&quad_faces()).to_vec();
        let mut output = vec![0u8; 2 * 168];

        unsafe { bake_tangents(input.as_ptr(), output.as_mut_ptr(), 2) };

        assert_eq!(output, bake::bake_buffer(&input).unwrap());
    }

    #[test]
    fn test_bake_tangents_zero_faces() {
        let mut output = vec![0x5Au8; 8];
        unsafe { bake_tangents(std::ptr::null(), output.as_mut_ptr(), 0) };
        assert!(output.iter().all(|&b| b == 0x5A));
    }

    #[test]
    fn test_checked_success() {
        let input: Vec<u8> = bytemuck::cast_slice(&quad_faces()).to_vec();
        let mut output = vec![0u8; 2 * 168];

        let status = unsafe {
            bake_tangents_checked(input.as_ptr(), input.len(), output.as_mut_ptr(), output.len(), 2)
        };

        assert_eq!(status, 0);
        assert_eq!(bake::count_non_finite(&output), 0);
    }

    #[test]
    fn test_checked_reports_short_output() {
        let input: Vec<u8> = bytemuck::cast_slice(&quad_faces()).to_vec();
        let mut output = vec![0u8; 168];

        let status = unsafe {
            bake_tangents_checked(input.as_ptr(), input.len(), output.as_mut_ptr(), output.len(), 2)
        };

        assert_eq!(
            status,
            BakeError::OutputTooShort { expected: 336, actual: 168 }.status_code()
        );
        assert!(output.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_checked_reports_null_pointer() {
        let mut output = vec![0u8; 168];
        let status = unsafe {
            bake_tangents_checked(std::ptr::null(), 96, output.as_mut_ptr(), output.len(), 1)
        };
        assert_eq!(status, BakeError::NullPointer.status_code());
    }
}
