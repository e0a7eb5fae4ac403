mod vector;

pub use vector::{subtract_reversed, ReversedSub, Vector2, Vector3};
