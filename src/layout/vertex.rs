use crate::math::{Vector2, Vector3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InputVertex {
    pub uv: Vector2,
    pub normal: Vector3,
    pub position: Vector3,
}

impl InputVertex {
    pub fn new(uv: Vector2, normal: Vector3, position: Vector3) -> Self {
        Self { uv, normal, position }
    }

    pub fn from_arrays(uv: [f32; 2], normal: [f32; 3], position: [f32; 3]) -> Self {
        Self::new(uv.into(), normal.into(), position.into())
    }
}

/// One triangle, vertices in winding order v0, v1, v2.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InputFace {
    pub vertices: [InputVertex; 3],
}

impl InputFace {
    pub fn new(v0: InputVertex, v1: InputVertex, v2: InputVertex) -> Self {
        Self { vertices: [v0, v1, v2] }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OutputVertex {
    pub uv: Vector2,
    pub bitangent: Vector3,
    pub tangent: Vector3,
    pub normal: Vector3,
    pub position: Vector3,
}

impl OutputVertex {
    /// Copies the input attributes through and attaches the face basis.
    pub fn from_input(vertex: &InputVertex, tangent: Vector3, bitangent: Vector3) -> Self {
        Self {
            uv: vertex.uv,
            bitangent,
            tangent,
            normal: vertex.normal,
            position: vertex.position,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OutputFace {
    pub vertices: [OutputVertex; 3],
}

impl OutputFace {
    // All three vertices carry the same basis, v0 is as good as any.
    pub fn tangent(&self) -> Vector3 {
        self.vertices[0].tangent
    }

    pub fn bitangent(&self) -> Vector3 {
        self.vertices[0].bitangent
    }

    /// True when the baked basis has no Inf/NaN components.
    pub fn is_finite(&self) -> bool {
        self.vertices
            .iter()
            .all(|v| v.tangent.is_finite() && v.bitangent.is_finite())
    }
}
