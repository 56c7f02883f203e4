use crate::math::{Point, Vector};

/// A half-line from `origin` along `direction`.
///
/// Intersection math assumes `direction` is unit length; nothing enforces it.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}

/// The nearest forward intersection of a ray with the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub point: Point,
    /// Direction of the ray that produced the hit.
    pub direction: Vector,
    /// Index of the winning object in the scene's object list.
    pub object: usize,
}
