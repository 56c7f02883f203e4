use crate::color::Color;
use crate::math::{Point, Vector};
use crate::ray::Ray;

/// Distance reported when a ray has no forward intersection.
pub const MISS: f64 = -1.0;

/// Sphere roots are pulled back by this much so a ray leaving the surface does not re-hit it.
const SPHERE_BIAS: f64 = 0.000001;

/// Infinite plane of points `p` with `normal · p = distance`.
#[derive(Clone, Debug)]
pub struct Plane {
    pub normal: Vector,
    pub distance: f64,
    pub color: Color,
}

impl Plane {
    pub fn new(normal: Vector, distance: f64, color: Color) -> Self {
        Plane { normal, distance, color }
    }

    pub fn intersect(&self, ray: &Ray) -> f64 {
        plane_distance(&self.normal, self.distance, ray)
    }
}

fn plane_distance(normal: &Vector, distance: f64, ray: &Ray) -> f64 {
    let a = ray.direction.dot(normal);
    if a == 0.0 {
        // parallel
        return MISS;
    }
    let b = normal.dot(&(ray.origin.coords - normal * distance));
    -b / a
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}

impl Sphere {
    pub fn new(center: Point, radius: f64, color: Color) -> Self {
        Sphere { center, radius, color }
    }

    pub fn intersect(&self, ray: &Ray) -> f64 {
        let oc = ray.origin - self.center;
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.magnitude_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant <= 0.0 {
            return MISS;
        }
        let sqrtd = discriminant.sqrt();

        let near = (-b - sqrtd) / 2.0 - SPHERE_BIAS;
        if near > 0.0 {
            near
        } else {
            (sqrtd - b) / 2.0 - SPHERE_BIAS
        }
    }

    /// Outward normal; undefined at the center.
    pub fn normal_at(&self, point: &Point) -> Vector {
        (point - self.center).normalize()
    }
}

/// Single-sided triangle; its normal is `normalize((c - a) × (b - a))`.
#[derive(Clone, Debug)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub color: Color,
    normal: Vector,
    distance: f64,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point, color: Color) -> Self {
        let normal = (c - a).cross(&(b - a)).normalize();
        let distance = normal.dot(&a.coords);
        Triangle { a, b, c, color, normal, distance }
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn intersect(&self, ray: &Ray) -> f64 {
        let t = plane_distance(&self.normal, self.distance, ray);
        if t == MISS {
            return MISS;
        }
        let q = ray.at(t);

        // q is inside when it lies on the inner side of every edge
        let edges = [(self.c, self.a), (self.b, self.c), (self.a, self.b)];
        let inside = edges.iter().all(|(to, from)| {
            (to - from).cross(&(q - from)).dot(&self.normal) >= 0.0
        });

        if inside {
            t
        } else {
            MISS
        }
    }
}

#[derive(Clone, Debug)]
pub enum Object {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Object {
    /// Signed distance along `ray` to the surface; anything non-positive means no forward hit.
    pub fn intersect(&self, ray: &Ray) -> f64 {
        match self {
            Object::Plane(plane) => plane.intersect(ray),
            Object::Sphere(sphere) => sphere.intersect(ray),
            Object::Triangle(triangle) => triangle.intersect(ray),
        }
    }

    pub fn normal_at(&self, point: &Point) -> Vector {
        match self {
            Object::Plane(plane) => plane.normal,
            Object::Sphere(sphere) => sphere.normal_at(point),
            Object::Triangle(triangle) => triangle.normal,
        }
    }

    /// The stored color. Checkerboard surfaces are resolved by the shader, not here.
    pub fn color(&self) -> Color {
        match self {
            Object::Plane(plane) => plane.color,
            Object::Sphere(sphere) => sphere.color,
            Object::Triangle(triangle) => triangle.color,
        }
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Triangle> for Object {
    fn from(triangle: Triangle) -> Self {
        Object::Triangle(triangle)
    }
}
