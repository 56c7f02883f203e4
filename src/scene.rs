use nalgebra::point;

use crate::camera::Camera;
use crate::color::{Color, Special};
use crate::light::Light;
use crate::math::Vector;
use crate::object::{Object, Plane, Sphere};

/// Everything a render reads: borrowed immutably for the whole pass.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub objects: Vec<Object>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(objects: Vec<Object>, lights: Vec<Light>) -> Self {
        Scene { objects, lights }
    }

    /// Three reflective spheres on a checkered floor, lit from the upper left.
    pub fn demo() -> Self {
        let green_shine = Color::new(0.5, 1.0, 0.5, Special::Reflective(0.3));
        let maroon_shine = Color::new(0.5, 0.25, 0.25, Special::Reflective(0.3));
        let orange_shine = Color::new(0.94, 0.75, 0.31, Special::Reflective(0.3));
        let tile = Color::new(1.0, 1.0, 1.0, Special::Checkerboard);

        let objects = vec![
            Sphere::new(point![0.0, 0.0, 0.0], 1.0, green_shine).into(),
            Sphere::new(point![1.75, -0.25, 0.0], 0.75, maroon_shine).into(),
            Sphere::new(point![-1.75, -0.25, 0.0], 0.75, orange_shine).into(),
            Plane::new(Vector::y(), -1.0, tile).into(),
        ];
        let lights = vec![Light::point(point![-7.0, 10.0, -10.0], Color::WHITE)];

        Scene { objects, lights }
    }

    pub fn demo_camera() -> Camera {
        Camera::look_at(point![3.0, 1.5, -4.0], point![0.0, 0.0, 0.0])
    }
}
