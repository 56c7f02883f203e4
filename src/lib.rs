//! Whitted-style ray tracer: spheres, planes and triangles lit by point
//! lights, with hard shadows and recursive mirror reflections, written out
//! as an uncompressed BMP.

pub mod bmp;
pub mod camera;
pub mod color;
pub mod config;
pub mod intersection;
pub mod light;
pub mod math;
pub mod object;
pub mod picture;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shade;
