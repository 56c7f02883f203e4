use crate::math::{Point, Vector};
use crate::ray::Ray;

/// Pinhole camera described by its position and an orthonormal-ish basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Point,
    pub direction: Vector,
    pub right: Vector,
    pub down: Vector,
}

impl Camera {
    pub fn new(position: Point, direction: Vector, right: Vector, down: Vector) -> Self {
        Camera { position, direction, right, down }
    }

    /// Camera at `position` aimed at `focus`, kept upright against +Y.
    ///
    /// Looking straight up or down leaves the basis undefined.
    pub fn look_at(position: Point, focus: Point) -> Self {
        let direction = (focus - position).normalize();
        let right = Vector::y().cross(&direction).normalize();
        let down = right.cross(&direction);
        Camera { position, direction, right, down }
    }

    /// Ray through the normalized screen amounts `(x, y)`; `(0.5, 0.5)` is the view direction.
    pub fn ray(&self, x: f64, y: f64) -> Ray {
        let direction = (self.direction + self.right * (x - 0.5) + self.down * (y - 0.5)).normalize();
        Ray::new(self.position, direction)
    }
}

/// Maps pixels of a `width` x `height` image onto screen amounts.
///
/// The shorter side spans `[0, 1]`; the longer side is widened symmetrically
/// so pixels stay square. Row 0 is the bottom of the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Sub-samples per pixel along each axis.
    pub aa_depth: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, aa_depth: u32) -> Self {
        Viewport { width, height, aa_depth }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    fn sub_offset(&self, i: u32) -> f64 {
        if self.aa_depth <= 1 {
            0.5
        } else {
            i as f64 / (self.aa_depth - 1) as f64
        }
    }

    /// Screen amounts for sub-sample `(aax, aay)` of pixel `(x, y)`.
    pub fn screen_amounts(&self, x: u32, y: u32, aax: u32, aay: u32) -> (f64, f64) {
        let width = self.width as f64;
        let height = self.height as f64;
        let aspect_ratio = self.aspect_ratio();

        let xs = (x as f64 + self.sub_offset(aax)) / width;
        let ys = ((height - y as f64) + self.sub_offset(aay)) / height;

        if self.width > self.height {
            (xs * aspect_ratio - ((width - height) / height) / 2.0, ys)
        } else if self.height > self.width {
            (xs, ys / aspect_ratio - ((height - width) / width) / 2.0)
        } else {
            (xs, ys)
        }
    }
}
