use crate::color::{checker_tile, Color, Special};
use crate::intersection::{nearest_hit, occluded};
use crate::math::reflect;
use crate::ray::{Hit, Ray};
use crate::scene::Scene;

const SPECULAR_EXPONENT: i32 = 10;

/// Constants shared by every ray of a render.
#[derive(Clone, Debug, PartialEq)]
pub struct Shading {
    /// Intersections at or below this distance are treated as the surface hitting itself.
    pub accuracy: f64,
    /// Fraction of a surface's color visible without any direct light.
    pub ambient_light: f64,
    /// Reflection bounces followed before the mirrored contribution is dropped.
    pub max_depth: u32,
}

impl Default for Shading {
    fn default() -> Self {
        Shading {
            accuracy: 0.00000001,
            ambient_light: 0.2,
            max_depth: 512,
        }
    }
}

/// Color seen along a camera ray, or `None` when it leaves the scene.
pub fn trace(ray: &Ray, scene: &Scene, shading: &Shading) -> Option<Color> {
    nearest_hit(ray, &scene.objects, shading.accuracy).map(|hit| shade(&hit, scene, shading, 0))
}

/// Color at a resolved hit: ambient, mirrored light, then direct light from every unshadowed source.
///
/// `depth` counts the reflections already followed to reach `hit`.
pub fn shade(hit: &Hit, scene: &Scene, shading: &Shading, depth: u32) -> Color {
    let object = &scene.objects[hit.object];
    let normal = object.normal_at(&hit.point);
    let color = match object.color() {
        Color { special: Special::Checkerboard, .. } => checker_tile(&hit.point),
        color => color,
    };
    let reflectivity = color.special.reflectivity();
    let mirrored = reflect(&hit.direction, &normal);

    let mut result = color * shading.ambient_light;

    if let Some(weight) = reflectivity {
        if depth < shading.max_depth {
            let bounce = Ray::new(hit.point, mirrored);
            if let Some(next) = nearest_hit(&bounce, &scene.objects, shading.accuracy) {
                result = result + shade(&next, scene, shading, depth + 1) * weight;
            }
        } else {
            log::trace!(target: "render", "Reflection depth {} reached at {:?}", depth, hit.point);
        }
    }

    for light in &scene.lights {
        let to_light = light.position() - hit.point;
        let distance = to_light.magnitude();
        let direction = to_light / distance;

        let cos_angle = normal.dot(&direction);
        if cos_angle <= 0.0 {
            continue;
        }

        let shadow_ray = Ray::new(hit.point, direction);
        if occluded(&shadow_ray, &scene.objects, shading.accuracy, distance) {
            continue;
        }

        result = result + color * light.color() * cos_angle;

        if let Some(weight) = reflectivity {
            let specular = mirrored.dot(&direction);
            if specular > 0.0 {
                result = result + light.color() * (specular.powi(SPECULAR_EXPONENT) * weight);
            }
        }
    }

    result.clip()
}
