use nalgebra::{point, vector, Point3, Vector3};

pub type Vector = Vector3<f64>;
pub type Point = Point3<f64>;

pub fn vec3(v: [f64; 3]) -> Vector {
    vector![v[0], v[1], v[2]]
}

pub fn point3(p: [f64; 3]) -> Point {
    point![p[0], p[1], p[2]]
}

/// Mirror `direction` about `normal`: `2(N·-d)N + d`, normalized.
///
/// `normal` must be unit length and the result must not be the zero vector,
/// which only happens for a degenerate normal.
pub fn reflect(direction: &Vector, normal: &Vector) -> Vector {
    let along = normal.dot(&-direction);
    (normal * (2.0 * along) + direction).normalize()
}
