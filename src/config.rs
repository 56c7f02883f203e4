//! TOML scene files.
//!
//! ```toml
//! [render]
//! width = 320
//! height = 240
//! aa_depth = 2
//!
//! [camera]
//! position = [3.0, 1.5, -4.0]
//! look_at = [0.0, 0.0, 0.0]
//!
//! [[objects]]
//! type = "sphere"
//! center = [0.0, 0.0, 0.0]
//! radius = 1.0
//! color = { r = 0.5, g = 1.0, b = 0.5, special = 0.3 }
//!
//! [[lights]]
//! position = [-7.0, 10.0, -10.0]
//! color = { r = 1.0, g = 1.0, b = 1.0 }
//! ```
//!
//! Every section is optional; missing values fall back to the built-in demo.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::bmp::file_size;
use crate::camera::Camera;
use crate::color::{Color, Special};
use crate::light::Light;
use crate::math::{point3, vec3};
use crate::object::{Object, Plane, Sphere, Triangle};
use crate::render::RenderSettings;
use crate::scene::Scene;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct ColorData {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    pub special: f64,
}

impl From<ColorData> for Color {
    fn from(data: ColorData) -> Self {
        Color::new(data.r, data.g, data.b, Special::from_value(data.special))
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectData {
    Sphere {
        center: [f64; 3],
        radius: f64,
        color: ColorData,
    },
    Plane {
        normal: [f64; 3],
        distance: f64,
        color: ColorData,
    },
    Triangle {
        a: [f64; 3],
        b: [f64; 3],
        c: [f64; 3],
        color: ColorData,
    },
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LightData {
    pub position: [f64; 3],
    pub color: ColorData,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderData {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub dpi: Option<u32>,
    pub aa_depth: Option<u32>,
    pub accuracy: Option<f64>,
    pub ambient_light: Option<f64>,
    pub max_depth: Option<u32>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CameraData {
    pub position: [f64; 3],
    pub look_at: [f64; 3],
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SceneData {
    #[serde(default)]
    pub render: RenderData,
    pub camera: Option<CameraData>,
    #[serde(default)]
    pub objects: Vec<ObjectData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
}

/// A fully resolved and validated scene file.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub scene: Scene,
    pub camera: Camera,
    pub settings: RenderSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            scene: Scene::demo(),
            camera: Scene::demo_camera(),
            settings: RenderSettings::default(),
        }
    }
}

fn invalid<T>(message: impl Into<String>) -> ConfigResult<T> {
    Err(ConfigError::Invalid(message.into()))
}

impl ObjectData {
    fn build(&self, index: usize) -> ConfigResult<Object> {
        let object: Object = match self {
            ObjectData::Sphere { center, radius, color } => {
                if !(*radius > 0.0) {
                    return invalid(format!("object {index}: sphere radius must be positive, got {radius}"));
                }
                Sphere::new(point3(*center), *radius, (*color).into()).into()
            }
            ObjectData::Plane { normal, distance, color } => {
                let normal = vec3(*normal);
                if normal.magnitude() == 0.0 {
                    return invalid(format!("object {index}: plane normal must not be zero"));
                }
                Plane::new(normal.normalize(), *distance, (*color).into()).into()
            }
            ObjectData::Triangle { a, b, c, color } => {
                let (a, b, c) = (point3(*a), point3(*b), point3(*c));
                if (c - a).cross(&(b - a)).magnitude() == 0.0 {
                    return invalid(format!("object {index}: triangle vertices are collinear"));
                }
                Triangle::new(a, b, c, (*color).into()).into()
            }
        };
        Ok(object)
    }
}

impl RenderData {
    fn apply(&self, settings: &mut RenderSettings) -> ConfigResult<()> {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(dpi) = self.dpi {
            settings.dpi = dpi;
        }
        if let Some(aa_depth) = self.aa_depth {
            settings.aa_depth = aa_depth;
        }
        if let Some(accuracy) = self.accuracy {
            settings.shading.accuracy = accuracy;
        }
        if let Some(ambient_light) = self.ambient_light {
            settings.shading.ambient_light = ambient_light;
        }
        if let Some(max_depth) = self.max_depth {
            settings.shading.max_depth = max_depth;
        }
        validate_settings(settings)
    }
}

/// Rejects settings a render cannot run with.
///
/// `max_depth = 0` is allowed and renders without reflections.
pub fn validate_settings(settings: &RenderSettings) -> ConfigResult<()> {
    if settings.width == 0 || settings.height == 0 {
        return invalid(format!("image size must be non-zero, got {}x{}", settings.width, settings.height));
    }
    if settings.aa_depth == 0 {
        return invalid("aa_depth must be at least 1");
    }
    if file_size(settings.width, settings.height).is_none() {
        return invalid(format!("image {}x{} is too large for a bitmap", settings.width, settings.height));
    }
    if !(settings.shading.accuracy > 0.0) {
        return invalid(format!("accuracy must be positive, got {}", settings.shading.accuracy));
    }
    Ok(())
}

impl SceneData {
    pub fn build(&self) -> ConfigResult<SceneConfig> {
        let mut settings = RenderSettings::default();
        self.render.apply(&mut settings)?;

        let camera = match &self.camera {
            Some(data) => {
                let (position, focus) = (point3(data.position), point3(data.look_at));
                let view = focus - position;
                if view.magnitude() == 0.0 {
                    return invalid("camera position and look_at must differ");
                }
                if view.x == 0.0 && view.z == 0.0 {
                    return invalid("camera must not look straight up or down");
                }
                Camera::look_at(position, focus)
            }
            None => Scene::demo_camera(),
        };

        let scene = if self.objects.is_empty() && self.lights.is_empty() {
            Scene::demo()
        } else {
            let objects = self.objects.iter()
                .enumerate()
                .map(|(i, data)| data.build(i))
                .collect::<ConfigResult<Vec<_>>>()?;
            let lights = self.lights.iter()
                .map(|light| Light::point(point3(light.position), light.color.into()))
                .collect::<Vec<_>>();
            Scene::new(objects, lights)
        };

        if scene.lights.is_empty() {
            warn!(target: "scene", "Scene has no lights, only ambient light will be visible");
        }
        debug!(target: "scene", "Scene: {} objects, {} lights", scene.objects.len(), scene.lights.len());

        Ok(SceneConfig { scene, camera, settings })
    }
}

pub fn parse_scene(input: &str) -> ConfigResult<SceneConfig> {
    let data: SceneData = toml::from_str(input)?;
    data.build()
}

pub fn load_scene(path: impl AsRef<Path>) -> ConfigResult<SceneConfig> {
    let input = fs::read_to_string(path)?;
    parse_scene(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"
[render]
width = 32
height = 24
aa_depth = 2
max_depth = 8

[camera]
position = [0.0, 1.0, -5.0]
look_at = [0.0, 0.0, 0.0]

[[objects]]
type = "sphere"
center = [0.0, 0.0, 0.0]
radius = 1.0
color = { r = 0.5, g = 1.0, b = 0.5, special = 0.3 }

[[objects]]
type = "plane"
normal = [0.0, 2.0, 0.0]
distance = -1.0
color = { r = 1.0, g = 1.0, b = 1.0, special = 2.0 }

[[objects]]
type = "triangle"
a = [3.0, 0.0, 0.0]
b = [0.0, 3.0, 0.0]
c = [0.0, 0.0, 3.0]
color = { r = 0.94, g = 0.75, b = 0.31 }

[[lights]]
position = [-7.0, 10.0, -10.0]
color = { r = 1.0, g = 1.0, b = 1.0 }
"#;

    #[test]
    fn test_parse_full_scene() {
        let config = parse_scene(SCENE).unwrap();
        assert_eq!(config.settings.width, 32);
        assert_eq!(config.settings.height, 24);
        assert_eq!(config.settings.aa_depth, 2);
        assert_eq!(config.settings.dpi, 72);
        assert_eq!(config.settings.shading.max_depth, 8);
        assert_eq!(config.settings.shading.ambient_light, 0.2);
        assert_eq!(config.scene.objects.len(), 3);
        assert_eq!(config.scene.lights.len(), 1);

        match &config.scene.objects[1] {
            Object::Plane(plane) => {
                assert_eq!(plane.normal, crate::math::Vector::y());
                assert_eq!(plane.color.special, Special::Checkerboard);
            }
            other => panic!("expected a plane, got {:?}", other),
        }
        assert_eq!(config.scene.objects[0].color().special, Special::Reflective(0.3));
        assert_eq!(config.scene.objects[2].color().special, Special::Matte);
    }

    #[test]
    fn test_empty_file_is_demo() {
        let config = parse_scene("").unwrap();
        assert_eq!(config.scene.objects.len(), Scene::demo().objects.len());
        assert_eq!(config.camera, Scene::demo_camera());
        assert_eq!(config.settings, RenderSettings::default());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let zero_normal = r#"
[[objects]]
type = "plane"
normal = [0.0, 0.0, 0.0]
distance = 1.0
color = { r = 1.0, g = 1.0, b = 1.0 }
"#;
        assert!(matches!(parse_scene(zero_normal), Err(ConfigError::Invalid(_))));

        let flat_triangle = r#"
[[objects]]
type = "triangle"
a = [0.0, 0.0, 0.0]
b = [1.0, 1.0, 1.0]
c = [2.0, 2.0, 2.0]
color = { r = 1.0, g = 1.0, b = 1.0 }
"#;
        assert!(matches!(parse_scene(flat_triangle), Err(ConfigError::Invalid(_))));

        let bad_sphere = r#"
[[objects]]
type = "sphere"
center = [0.0, 0.0, 0.0]
radius = 0.0
color = { r = 1.0, g = 1.0, b = 1.0 }
"#;
        assert!(matches!(parse_scene(bad_sphere), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_settings() {
        assert!(matches!(parse_scene("[render]\nwidth = 0"), Err(ConfigError::Invalid(_))));
        assert!(matches!(parse_scene("[render]\naa_depth = 0"), Err(ConfigError::Invalid(_))));
        assert!(matches!(parse_scene("[render]\nwidth = 100000\nheight = 100000"), Err(ConfigError::Invalid(_))));
        assert!(matches!(parse_scene("[render]\naccuracy = -1.0"), Err(ConfigError::Invalid(_))));
        let straight_down = "[camera]\nposition = [0.0, 5.0, 0.0]\nlook_at = [0.0, 0.0, 0.0]";
        assert!(matches!(parse_scene(straight_down), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_max_depth_disables_reflections() {
        let config = parse_scene("[render]\nmax_depth = 0").unwrap();
        assert_eq!(config.settings.shading.max_depth, 0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_scene("[[objects]]\ntype = \"cube\""), Err(ConfigError::Parse(_))));
        assert!(matches!(parse_scene("[render]\nsamples = 4"), Err(ConfigError::Parse(_))));
        assert!(matches!(load_scene("does/not/exist.toml"), Err(ConfigError::Io(_))));
    }
}
