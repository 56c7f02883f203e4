use std::iter::Sum;
use std::ops::{Add, Mul};

use crate::math::Point;

/// How a surface with this color is shaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Special {
    Matte,
    /// Mirror-like surface; the weight lies in (0, 1].
    Reflective(f64),
    /// Infinite black/white tiling over the x/z plane, ignores the stored channels.
    Checkerboard,
}

impl Special {
    /// Decodes the numeric tag used in scene descriptions:
    /// `2` is checkerboard, `(0, 1]` is reflective, anything else is matte.
    pub fn from_value(value: f64) -> Self {
        if value == 2.0 {
            Special::Checkerboard
        } else if value > 0.0 && value <= 1.0 {
            Special::Reflective(value)
        } else {
            Special::Matte
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Special::Matte => 0.0,
            Special::Reflective(weight) => *weight,
            Special::Checkerboard => 2.0,
        }
    }

    pub fn reflectivity(&self) -> Option<f64> {
        match self {
            Special::Reflective(weight) => Some(*weight),
            _ => None,
        }
    }
}

/// Linear RGB, unbounded until [`Color::clip`] is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub special: Special,
}

impl Sum for Color {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Color::BLACK, |acc, color| acc + color)
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, special: Special) -> Self {
        Self { r, g, b, special }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, Special::Matte)
    }

    pub fn brightness(&self) -> f64 {
        (self.r + self.g + self.b) / 3.0
    }

    pub fn average(&self, other: &Color) -> Color {
        Color::new(
            (self.r + other.r) / 2.0,
            (self.g + other.g) / 2.0,
            (self.b + other.b) / 2.0,
            self.special,
        )
    }

    /// Brings the channels into `[0, 1]`.
    ///
    /// Light beyond a total of 3 is first taken off every channel in
    /// proportion to its share of the total, then each channel is clamped.
    /// Applying it twice gives the same result as applying it once.
    pub fn clip(&self) -> Color {
        let total = self.r + self.g + self.b;
        let excess = total - 3.0;
        let (mut r, mut g, mut b) = (self.r, self.g, self.b);
        if excess > 0.0 {
            r -= excess * (r / total);
            g -= excess * (g / total);
            b -= excess * (b / total);
        }
        Color::new(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), self.special)
    }
}

/// Tile color of the checkerboard at `point`: even `floor(x) + floor(z)` is black, odd is white.
pub fn checker_tile(point: &Point) -> Color {
    // parity per axis in f64, far coordinates would overflow an integer sum
    let odd = point.x.floor().rem_euclid(2.0) + point.z.floor().rem_euclid(2.0) == 1.0;
    if !odd {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.special,
        )
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Color::new(
            self.r * rhs,
            self.g * rhs,
            self.b * rhs,
            self.special,
        )
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        Color::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.special,
        )
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::*;

    fn channels(c: &Color) -> [f64; 3] {
        [c.r, c.g, c.b]
    }

    #[test]
    fn test_special_decoding() {
        assert_eq!(Special::from_value(0.0), Special::Matte);
        assert_eq!(Special::from_value(0.3), Special::Reflective(0.3));
        assert_eq!(Special::from_value(1.0), Special::Reflective(1.0));
        assert_eq!(Special::from_value(2.0), Special::Checkerboard);
        assert_eq!(Special::from_value(1.5), Special::Matte);
        assert_eq!(Special::from_value(-0.5), Special::Matte);
        assert_eq!(Special::Reflective(0.3).value(), 0.3);
        assert_eq!(Special::Checkerboard.reflectivity(), None);
    }

    #[test]
    fn test_arithmetic_keeps_left_special() {
        let shiny = Color::new(0.5, 0.25, 0.25, Special::Reflective(0.3));
        let sum = shiny + Color::WHITE;
        assert_eq!(channels(&sum), [1.5, 1.25, 1.25]);
        assert_eq!(sum.special, Special::Reflective(0.3));

        let product = shiny * Color::rgb(0.5, 1.0, 2.0);
        assert_eq!(channels(&product), [0.25, 0.25, 0.5]);
        assert_eq!(product.special, Special::Reflective(0.3));

        assert_eq!(channels(&(2.0 * shiny)), [1.0, 0.5, 0.5]);
    }

    #[test]
    fn test_average_and_brightness() {
        let avg = Color::WHITE.average(&Color::BLACK);
        assert_eq!(channels(&avg), [0.5, 0.5, 0.5]);
        assert!((Color::rgb(0.3, 0.6, 0.9).brightness() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_clip_clamps_channels() {
        let c = Color::rgb(1.5, -0.2, 0.4).clip();
        assert_eq!(channels(&c), [1.0, 0.0, 0.4]);
    }

    #[test]
    fn test_clip_redistributes_excess() {
        // total 4.0, excess 1.0 taken in proportion: 2 - 0.5, 1.5 - 0.375, 0.5 - 0.125
        let c = Color::rgb(2.0, 1.5, 0.5).clip();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 1.0).abs() < 1e-12);
        assert!((c.b - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_clip_idempotent() {
        let samples = [
            Color::rgb(0.0, 0.0, 0.0),
            Color::rgb(0.2, 0.7, 0.9),
            Color::rgb(5.0, 0.1, -3.0),
            Color::rgb(2.0, 2.0, 2.0),
            Color::rgb(10.0, 4.0, 1.0),
            Color::new(-1.0, 0.5, 1.2, Special::Reflective(0.3)),
        ];
        for c in samples {
            let once = c.clip();
            assert_eq!(once.clip(), once);
        }
    }

    #[test]
    fn test_checker_parity() {
        let base = checker_tile(&point![0.5, 0.0, 0.5]);
        assert_eq!(base, Color::BLACK);
        assert_eq!(checker_tile(&point![2.5, 0.0, 0.5]), base);
        assert_eq!(checker_tile(&point![-3.5, 0.0, 0.5]), base);
        assert_eq!(checker_tile(&point![1.5, 0.0, 0.5]), Color::WHITE);
        assert_eq!(checker_tile(&point![-0.5, -1.0, 0.5]), Color::WHITE);
        assert_eq!(checker_tile(&point![1.5, 0.0, 0.5]).special, Special::Matte);
    }

    #[test]
    fn test_checker_far_from_origin() {
        assert_eq!(checker_tile(&point![1e19, 0.0, 1e19]), Color::BLACK);
        assert_eq!(checker_tile(&point![-1e300, 0.0, 0.5]), Color::BLACK);
        assert_eq!(checker_tile(&point![1e15 + 1.0, 0.0, 0.5]), Color::WHITE);
        assert_eq!(checker_tile(&point![f64::MAX, 0.0, f64::MIN]), Color::BLACK);
    }
}
