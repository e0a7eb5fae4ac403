//! Commands behind the `tangent-baker` binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};

use crate::bake::bake_faces_with_progress;
use crate::layout::{InputFace, OutputFace};
use crate::math::Vector3;
use crate::mesh;

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Shape {
    Triangle,
    Quad,
    Cube,
}

impl Shape {
    pub fn faces(self) -> Vec<InputFace> {
        match self {
            Shape::Triangle => mesh::unit_triangle(),
            Shape::Quad => mesh::quad(Vec2::splat(-1.0), Vec2::splat(1.0)),
            Shape::Cube => mesh::cube(Vec3::splat(-1.0), Vec3::splat(1.0)),
        }
    }
}

#[derive(Debug)]
pub struct Inspection {
    pub faces: usize,
    pub non_finite: usize,
    pub first_tangent: Option<Vector3>,
    pub first_bitangent: Option<Vector3>,
}

/// Where `bake` writes when no output path is given.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("baked")
}

/// Bakes faces, logging progress at every 20% and warning about faces whose
/// basis is not finite.
pub fn bake_with_progress(faces: &[InputFace]) -> Result<Vec<OutputFace>> {
    let mut baked = vec![OutputFace::default(); faces.len()];

    bake_faces_with_progress(faces, &mut baked, |percent, done| {
        log::info!("{}/{} faces ({}%)", done, faces.len(), percent);
    })
    .context("Failed to bake faces")?;

    let non_finite = baked.iter().filter(|face| !face.is_finite()).count();
    if non_finite > 0 {
        log::warn!(
            "{} faces have a degenerate UV mapping; their tangents are not finite",
            non_finite
        );
    }

    Ok(baked)
}

/// Reads a face stream, bakes it and writes the result. Returns the output
/// path and the number of faces baked.
pub fn bake_file(input: &Path, output: Option<&Path>) -> Result<(PathBuf, usize)> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    let faces = mesh::read_faces(input)?;
    let baked = bake_with_progress(&faces)?;
    mesh::write_baked(&output, &baked)?;

    Ok((output, baked.len()))
}

/// Writes a built-in primitive, baked or as raw input faces. Returns the face
/// count.
pub fn write_primitive(shape: Shape, output: &Path, bake: bool) -> Result<usize> {
    let faces = shape.faces();

    if bake {
        let baked = bake_with_progress(&faces)?;
        mesh::write_baked(output, &baked)?;
    } else {
        mesh::write_faces(output, &faces)?;
    }

    Ok(faces.len())
}

pub fn inspect_file(path: &Path) -> Result<Inspection> {
    let baked = mesh::read_baked(path)?;

    Ok(Inspection {
        faces: baked.len(),
        non_finite: baked.iter().filter(|face| !face.is_finite()).count(),
        first_tangent: baked.first().map(OutputFace::tangent),
        first_bitangent: baked.first().map(OutputFace::bitangent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::InputVertex;
    use crate::math::Vector2;
    use assert_fs::prelude::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("res/sphere.mdl")),
            PathBuf::from("res/sphere.baked")
        );
    }

    #[test_log::test]
    fn test_bake_file_default_output() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("cube.mdl");
        mesh::write_faces(input.path(), &Shape::Cube.faces()).unwrap();

        let (output, count) = bake_file(input.path(), None).unwrap();

        assert_eq!(output, temp.child("cube.baked").path());
        assert_eq!(count, 12);
        assert_eq!(mesh::read_baked(&output).unwrap().len(), 12);
    }

    #[test]
    fn test_bake_file_explicit_output() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("quad.mdl");
        let output = temp.child("out/quad.bin");
        std::fs::create_dir_all(temp.child("out").path()).unwrap();
        mesh::write_faces(input.path(), &Shape::Quad.faces()).unwrap();

        let (written, count) = bake_file(input.path(), Some(output.path())).unwrap();

        assert_eq!(written, output.path());
        assert_eq!(count, 2);
        assert!(!temp.child("quad.baked").path().exists());
    }

    #[test]
    fn test_bake_file_rejects_truncated_stream() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("broken.mdl");
        input.write_binary(&[0u8; 50]).unwrap();

        assert!(bake_file(input.path(), None).is_err());
    }

    #[test]
    fn test_write_primitive_raw_and_baked() {
        let temp = assert_fs::TempDir::new().unwrap();
        let raw = temp.child("triangle.mdl");
        let baked = temp.child("triangle.baked");

        assert_eq!(write_primitive(Shape::Triangle, raw.path(), false).unwrap(), 1);
        assert_eq!(write_primitive(Shape::Triangle, baked.path(), true).unwrap(), 1);

        assert_eq!(std::fs::metadata(raw.path()).unwrap().len(), 96);
        assert_eq!(std::fs::metadata(baked.path()).unwrap().len(), 168);
        assert_eq!(mesh::read_faces(raw.path()).unwrap(), Shape::Triangle.faces());
    }

    #[test]
    fn test_inspect_baked_primitive() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("triangle.baked");
        write_primitive(Shape::Triangle, file.path(), true).unwrap();

        let inspection = inspect_file(file.path()).unwrap();

        assert_eq!(inspection.faces, 1);
        assert_eq!(inspection.non_finite, 0);
        assert_eq!(inspection.first_tangent, Some(Vector3::new(1.0, 0.0, 0.0)));
        assert_eq!(inspection.first_bitangent, Some(Vector3::new(0.0, 1.0, 0.0)));
    }

    #[test_log::test]
    fn test_inspect_counts_degenerate_faces() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("flat.mdl");

        let mut faces = Shape::Quad.faces();
        for vertex in &mut faces[1].vertices {
            vertex.uv = Vector2::ZERO;
        }
        faces.push(InputFace::new(
            InputVertex::from_arrays([0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]),
            InputVertex::from_arrays([0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
            InputVertex::from_arrays([0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ));
        mesh::write_faces(input.path(), &faces).unwrap();

        let (output, _) = bake_file(input.path(), None).unwrap();
        let inspection = inspect_file(&output).unwrap();

        assert_eq!(inspection.faces, 3);
        assert_eq!(inspection.non_finite, 2);
        assert!(inspection.first_tangent.is_some_and(Vector3::is_finite));
    }

    #[test]
    fn test_inspect_empty_stream() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("empty.baked");
        file.touch().unwrap();

        let inspection = inspect_file(file.path()).unwrap();
        assert_eq!(inspection.faces, 0);
        assert_eq!(inspection.first_tangent, None);
    }
}
