use float_ord::FloatOrd;

use crate::object::Object;
use crate::ray::{Hit, Ray};

/// Distance from the ray origin to every object, index-aligned with `objects`.
pub fn intersections(ray: &Ray, objects: &[Object]) -> Vec<f64> {
    objects.iter().map(|obj| obj.intersect(ray)).collect()
}

/// Index of the smallest strictly positive distance; the earliest index wins a tie.
pub fn winning_object(distances: &[f64]) -> Option<usize> {
    distances.iter()
        .enumerate()
        .filter(|(_, t)| **t > 0.0)
        .min_by_key(|(_, t)| FloatOrd(**t))
        .map(|(i, _)| i)
}

/// Casts `ray` against every object and returns the nearest hit farther than `accuracy`.
///
/// A nearest hit at or below `accuracy` is treated as a self-intersection and
/// yields `None`; the next object behind it is not considered.
pub fn nearest_hit(ray: &Ray, objects: &[Object], accuracy: f64) -> Option<Hit> {
    let distances = intersections(ray, objects);
    let object = winning_object(&distances)?;
    let t = distances[object];
    if t <= accuracy {
        return None;
    }
    Some(Hit {
        point: ray.at(t),
        direction: ray.direction,
        object,
    })
}

/// Whether any object blocks `ray` strictly between `accuracy` and `max_distance`.
pub fn occluded(ray: &Ray, objects: &[Object], accuracy: f64, max_distance: f64) -> bool {
    objects.iter()
        .map(|obj| obj.intersect(ray))
        .any(|t| t > accuracy && t < max_distance)
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use crate::color::Color;
    use crate::math::{Point, Vector};
    use crate::object::{Plane, Sphere};

    use super::*;

    #[test]
    fn test_winner_is_smallest_positive() {
        assert_eq!(winning_object(&[-1.0, 3.2, 0.5, -0.001]), Some(2));
        assert_eq!(winning_object(&[7.0]), Some(0));
        assert_eq!(winning_object(&[4.0, 0.0, 2.5, 9.0]), Some(2));
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(winning_object(&[-1.0, -2.0, -3.0]), None);
        assert_eq!(winning_object(&[0.0, -0.5]), None);
        assert_eq!(winning_object(&[]), None);
    }

    #[test]
    fn test_tie_goes_to_earliest() {
        assert_eq!(winning_object(&[-1.0, 2.0, 3.0, 2.0]), Some(1));
    }

    fn row_of_spheres() -> Vec<Object> {
        vec![
            Sphere::new(point![0.0, 0.0, 10.0], 1.0, Color::WHITE).into(),
            Sphere::new(point![0.0, 0.0, 5.0], 1.0, Color::WHITE).into(),
            Plane::new(Vector::z(), 20.0, Color::WHITE).into(),
        ]
    }

    #[test]
    fn test_nearest_hit() {
        let ray = Ray::new(Point::origin(), Vector::z());
        let hit = nearest_hit(&ray, &row_of_spheres(), 1e-8).unwrap();
        assert_eq!(hit.object, 1);
        assert!((hit.point.z - 4.0).abs() < 1e-5);
        assert_eq!(hit.direction, Vector::z());

        let away = Ray::new(Point::origin(), -Vector::z());
        assert!(nearest_hit(&away, &row_of_spheres(), 1e-8).is_none());
        assert!(nearest_hit(&ray, &[], 1e-8).is_none());
    }

    #[test]
    fn test_nearest_hit_rejects_self_intersection() {
        let objects: Vec<Object> = vec![Plane::new(Vector::z(), 1e-9, Color::WHITE).into()];
        let ray = Ray::new(Point::origin(), Vector::z());
        assert!(nearest_hit(&ray, &objects, 1e-8).is_none());
    }

    #[test]
    fn test_occluded_respects_bounds() {
        let ray = Ray::new(Point::origin(), Vector::z());
        let objects = row_of_spheres();
        assert!(occluded(&ray, &objects, 1e-8, 30.0));
        assert!(occluded(&ray, &objects, 1e-8, 4.5));
        assert!(!occluded(&ray, &objects, 1e-8, 3.9));
    }
}
