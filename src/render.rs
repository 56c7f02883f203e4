use std::time::Instant;

use log::{info, trace};

use crate::camera::{Camera, Viewport};
use crate::color::Color;
use crate::picture::Picture;
use crate::scene::Scene;
use crate::shade::{self, Shading};

const BACKGROUND_COLOR: Color = Color::BLACK;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
    /// Anti-aliasing grid size; each pixel averages `aa_depth²` rays.
    pub aa_depth: u32,
    pub shading: Shading,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: 640,
            height: 480,
            dpi: 72,
            aa_depth: 1,
            shading: Shading::default(),
        }
    }
}

impl RenderSettings {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.aa_depth)
    }
}

/// Produces the color of a single pixel by averaging its sub-samples.
pub fn render_pixel(x: u32, y: u32, viewport: &Viewport, camera: &Camera, scene: &Scene, shading: &Shading) -> Color {
    let depth = viewport.aa_depth.max(1);
    let sum: Color = (0..depth * depth)
        .map(|i| (i % depth, i / depth))
        .map(|(aax, aay)| {
            let (u, v) = viewport.screen_amounts(x, y, aax, aay);
            camera.ray(u, v)
        })
        .map(|ray| shade::trace(&ray, scene, shading).unwrap_or(BACKGROUND_COLOR))
        .sum();
    let samples = (depth * depth) as f64;
    Color::rgb(sum.r / samples, sum.g / samples, sum.b / samples)
}

pub fn render_picture(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Picture<Color> {
    let viewport = settings.viewport();
    let mut picture = Picture::filled(BACKGROUND_COLOR, (settings.width, settings.height));

    info!(target: "app", "Starting frame render...");
    let start = Instant::now();
    for y in 0..settings.height {
        trace!(target: "render", "Rendering row {}/{}", y + 1, settings.height);
        for x in 0..settings.width {
            *picture.pixel_mut(x, y) = render_pixel(x, y, &viewport, camera, scene, &settings.shading);
        }
    }
    let elapsed = start.elapsed();
    info!(target: "app", "Finished rendering. Took {:?}", elapsed);

    picture
}
