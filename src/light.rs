use crate::color::Color;
use crate::math::Point;

#[derive(Clone, Debug)]
pub struct PointLight {
    pub position: Point,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Point, color: Color) -> Self {
        PointLight { position, color }
    }
}

#[derive(Clone, Debug)]
pub enum Light {
    Point(PointLight),
}

impl Light {
    pub fn point(position: Point, color: Color) -> Light {
        Light::Point(PointLight::new(position, color))
    }

    pub fn position(&self) -> Point {
        match self {
            Light::Point(light) => light.position,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Point(light) => light.color,
        }
    }
}
