use glam::{Vec2, Vec3};

use crate::layout::{InputFace, InputVertex};

/// Expands an indexed triangle list into one entry per triangle corner.
pub fn triangulate<T: Copy>(vertices: &[T], indices: &[[usize; 3]]) -> Vec<T> {
    indices
        .iter()
        .flat_map(move |triangle| triangle.iter().map(move |&index| vertices[index]))
        .collect()
}

/// Flat normal of every triangle in a per-corner position list, repeated for
/// each of its three corners. A trailing partial triangle is ignored.
pub fn face_normals(positions: &[Vec3]) -> Vec<Vec3> {
    positions
        .chunks_exact(3)
        .flat_map(|triangle| {
            let normal = (triangle[1] - triangle[0])
                .cross(triangle[2] - triangle[0])
                .normalize();
            [normal; 3]
        })
        .collect()
}

/// Groups per-corner attribute lists into faces.
pub fn assemble_faces(uvs: &[Vec2], normals: &[Vec3], positions: &[Vec3]) -> Vec<InputFace> {
    let corners: Vec<InputVertex> = uvs
        .iter()
        .zip(normals)
        .zip(positions)
        .map(|((&uv, &normal), &position)| {
            InputVertex::new(uv.into(), normal.into(), position.into())
        })
        .collect();

    corners
        .chunks_exact(3)
        .map(|face| InputFace::new(face[0], face[1], face[2]))
        .collect()
}

/// Single face on the XY plane with UVs matching positions.
pub fn unit_triangle() -> Vec<InputFace> {
    let normal = [0.0, 0.0, 1.0];
    vec![InputFace::new(
        InputVertex::from_arrays([0.0, 0.0], normal, [0.0, 0.0, 0.0]),
        InputVertex::from_arrays([1.0, 0.0], normal, [1.0, 0.0, 0.0]),
        InputVertex::from_arrays([0.0, 1.0], normal, [0.0, 1.0, 0.0]),
    )]
}

/// Two faces covering the rectangle `min..max` on the XY plane, facing +Z.
pub fn quad(min: Vec2, max: Vec2) -> Vec<InputFace> {
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ];
    let tex_coords = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let indices = [[0, 1, 2], [0, 2, 3]];

    let positions: Vec<Vec3> = triangulate(&corners, &indices)
        .into_iter()
        .map(|corner| corner.extend(0.0))
        .collect();
    let uvs = triangulate(&tex_coords, &indices);
    let normals = face_normals(&positions);

    assemble_faces(&uvs, &normals, &positions)
}

/// Twelve faces of the axis-aligned box `min..max`, each side mapped to the
/// full 0..1 UV square.
pub fn cube(min: Vec3, max: Vec3) -> Vec<InputFace> {
    let corners = [
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
    ];
    let indices = [
        [0, 2, 3], [0, 1, 2], // +Z
        [1, 7, 2], [1, 6, 7], // +X
        [6, 5, 4], [4, 7, 6], // -Z
        [3, 4, 5], [3, 5, 0], // -X
        [3, 7, 4], [3, 2, 7], // +Y
        [0, 6, 1], [0, 5, 6], // -Y
    ];

    let tex_coords = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let tex_indices = [
        [0, 2, 3], [0, 1, 2],
        [0, 2, 3], [0, 1, 2],
        [0, 1, 2], [2, 3, 0],
        [2, 3, 0], [2, 0, 1],
        [0, 2, 3], [0, 1, 2],
        [3, 1, 2], [3, 0, 1],
    ];

    let sides = [Vec3::Z, Vec3::X, Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y];
    let normals: Vec<Vec3> = sides.iter().flat_map(|&side| [side; 6]).collect();

    let positions = triangulate(&corners, &indices);
    let uvs = triangulate(&tex_coords, &tex_indices);

    assemble_faces(&uvs, &normals, &positions)
}
