use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

/// Two-component float vector, used for UV coordinates and UV deltas.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// Three-component float vector, used for positions, normals, tangents and bitangents.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Reads two consecutive floats starting at `offset`.
    pub fn from_slice(values: &[f32], offset: usize) -> Option<Self> {
        match values.get(offset..offset.checked_add(2)?)? {
            [x, y] => Some(Self::new(*x, *y)),
            _ => None,
        }
    }

    pub fn add_vector(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }

    pub fn add_scalar(self, rhs: f32) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }

    pub fn subtract_vector(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }

    pub fn subtract_scalar(self, rhs: f32) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }

    /// Scalar-first subtraction as the baking kernel has always defined it:
    /// the result is `self - lhs`, NOT `lhs - self`.
    pub fn subtract_reversed(self, lhs: f32) -> Self {
        self.subtract_scalar(lhs)
    }

    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    pub fn magnitude(self) -> f32 {
        ((self.x * self.x) + (self.y * self.y)).sqrt()
    }

    /// Divides each component by the magnitude. A zero vector yields NaN components.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        Self::new(self.x / magnitude, self.y / magnitude)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Reads three consecutive floats starting at `offset`.
    pub fn from_slice(values: &[f32], offset: usize) -> Option<Self> {
        match values.get(offset..offset.checked_add(3)?)? {
            [x, y, z] => Some(Self::new(*x, *y, *z)),
            _ => None,
        }
    }

    pub fn add_vector(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    pub fn add_scalar(self, rhs: f32) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }

    pub fn subtract_vector(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    pub fn subtract_scalar(self, rhs: f32) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }

    /// Scalar-first subtraction as the baking kernel has always defined it:
    /// the result is `self - lhs`, NOT `lhs - self`.
    pub fn subtract_reversed(self, lhs: f32) -> Self {
        self.subtract_scalar(lhs)
    }

    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn magnitude(self) -> f32 {
        ((self.x * self.x) + (self.y * self.y) + (self.z * self.z)).sqrt()
    }

    /// Divides each component by the magnitude. A zero vector yields NaN components.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        Self::new(self.x / magnitude, self.y / magnitude, self.z / magnitude)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// `lhs - rhs` with the scalar on the left, keeping the kernel's historical
/// meaning: every component of `rhs` minus `lhs`.
pub fn subtract_reversed<V: ReversedSub>(lhs: f32, rhs: V) -> V {
    rhs.reversed_sub(lhs)
}

pub trait ReversedSub {
    fn reversed_sub(self, lhs: f32) -> Self;
}

impl ReversedSub for Vector2 {
    fn reversed_sub(self, lhs: f32) -> Self {
        self.subtract_reversed(lhs)
    }
}

impl ReversedSub for Vector3 {
    fn reversed_sub(self, lhs: f32) -> Self {
        self.subtract_reversed(lhs)
    }
}

// Vector2 operators

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add_vector(rhs)
    }
}

impl Add<f32> for Vector2 {
    type Output = Self;
    fn add(self, rhs: f32) -> Self {
        self.add_scalar(rhs)
    }
}

impl Add<Vector2> for f32 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        rhs.add_scalar(self)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.subtract_vector(rhs)
    }
}

impl Sub<f32> for Vector2 {
    type Output = Self;
    fn sub(self, rhs: f32) -> Self {
        self.subtract_scalar(rhs)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs.scale(self)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Vector3 operators

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add_vector(rhs)
    }
}

impl Add<f32> for Vector3 {
    type Output = Self;
    fn add(self, rhs: f32) -> Self {
        self.add_scalar(rhs)
    }
}

impl Add<Vector3> for f32 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        rhs.add_scalar(self)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.subtract_vector(rhs)
    }
}

impl Sub<f32> for Vector3 {
    type Output = Self;
    fn sub(self, rhs: f32) -> Self {
        self.subtract_scalar(rhs)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// glam interop

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

// approx

impl AbsDiffEq for Vector2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
