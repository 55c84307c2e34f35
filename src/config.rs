//! Scene and render settings, loadable from a JSON file.
//!
//! ```json
//! {
//!     "render": { "width": 1920, "height": 1080, "output": "out.png" },
//!     "scene": {
//!         "ambient": [0.1, 0.1, 0.1],
//!         "spheres": [{ "center": [0, 0, 10], "radius": 5, "material": { ... } }],
//!         "lights": [{ "position": [5, -5, 0], "diffuse": [0.5, 0.5, 0.5], ... }]
//!     }
//! }
//! ```
//!
//! Every field is optional. Without a `"scene"` key the built-in demo is rendered.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::frame::Frustum;
use crate::geometry::{Disk, Sphere};
use crate::material::{Color, Light, Material};
use crate::scene::Scene;
use crate::vec3::Vec3;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub scene: SceneDesc,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        log::debug!("Loaded scene description from {}", path.display());

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.render.width == 0 || self.render.height == 0 {
            return Err(Error::InvalidScene(format!(
                "raster must not be empty, got {}x{}",
                self.render.width, self.render.height
            )));
        }

        self.scene.validate()
    }

    /// Scene view for a render. A scene without its own camera is viewed
    /// from the frustum origin.
    pub fn scene(&self) -> Scene<'_> {
        self.scene.scene(self.render.frustum.origin)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub frustum: Frustum,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 3840,
            height: 2160,
            frustum: Frustum::default(),
            output: PathBuf::from("render.png"),
        }
    }
}

/// Owned scene storage. [`SceneDesc::scene`] lends it out for a render.
///
/// A missing `"scene"` key means the demo scene, while a present one starts
/// from nothing: no primitives, no lights, black background.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SceneDesc {
    #[serde(default)]
    pub spheres: Vec<Sphere>,
    #[serde(default)]
    pub disks: Vec<Disk>,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub ambient: Color,
    /// Viewer position for specular highlights, `None` to follow the ray origin.
    #[serde(default)]
    pub camera: Option<Vec3<f32>>,
}

impl Default for SceneDesc {
    fn default() -> Self {
        Self::demo()
    }
}

impl SceneDesc {
    /// Two orange spheres side by side, lit from the upper right.
    pub fn demo() -> Self {
        let orange = Material::new(
            Vec3::new(1.0, 0.5, 0.31),
            Vec3::new(1.0, 0.5, 0.31),
            Vec3::new(0.5, 0.5, 0.5),
            32.0,
        );

        Self {
            spheres: vec![
                Sphere::new(Vec3::new(-10.0, 0.0, 10.0), 8.0, orange),
                Sphere::new(Vec3::new(10.0, 0.0, 10.0), 8.0, orange),
            ],
            disks: Vec::new(),
            lights: vec![Light::new(
                Vec3::new(5.0, -5.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(1.0, 1.0, 1.0),
            )],
            ambient: Vec3::new(0.1, 0.1, 0.1),
            camera: None,
        }
    }

    pub fn scene(&self, viewpoint: Vec3<f32>) -> Scene<'_> {
        let camera = self.camera.unwrap_or(viewpoint);

        Scene::new(&self.spheres, &self.disks, &self.lights, self.ambient, camera)
    }

    pub fn validate(&self) -> Result<()> {
        for (id, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) {
                let msg = format!("sphere #{} has radius {}", id, sphere.radius);
                return Err(Error::InvalidScene(msg));
            }
            validate_material(&sphere.material, "sphere", id)?;
        }

        for (id, disk) in self.disks.iter().enumerate() {
            if !(disk.radius > 0.0) {
                return Err(Error::InvalidScene(format!("disk #{} has radius {}", id, disk.radius)));
            }
            if !(disk.normal.len() > 0.0) {
                return Err(Error::InvalidScene(format!("disk #{} has a zero-length normal", id)));
            }
            validate_material(&disk.material, "disk", id)?;
        }

        Ok(())
    }
}

fn validate_material(material: &Material, kind: &str, id: usize) -> Result<()> {
    if material.shininess < 0.0 {
        return Err(Error::InvalidScene(format!(
            "{} #{} has negative shininess {}",
            kind, id, material.shininess
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_is_the_demo() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.render.width, 3840);
        assert_eq!(config.render.height, 2160);
        assert_eq!(config.scene.spheres.len(), 2);
        assert_eq!(config.scene.lights.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_scene() {
        let config: Config = serde_json::from_str(
            r#"{
                "render": { "width": 64, "height": 32, "frustum": { "depth": -2.0 } },
                "scene": {
                    "spheres": [{
                        "center": [0, 0, 10],
                        "radius": 5,
                        "material": {
                            "ambient": [1, 0, 0],
                            "diffuse": [1, 0, 0],
                            "specular": [1, 1, 1],
                            "shininess": 16
                        }
                    }],
                    "disks": [{ "point": [0, -5, 10], "normal": [0, 1, 0], "radius": 20 }],
                    "lights": [{
                        "position": [0, 10, 0],
                        "ambient": [0.1, 0.1, 0.1],
                        "diffuse": [1, 1, 1],
                        "specular": [1, 1, 1]
                    }],
                    "ambient": [0, 0, 0]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.render.width, 64);
        assert_eq!(config.render.frustum.depth, -2.0);
        assert_eq!(config.render.frustum.origin, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(config.render.output, PathBuf::from("render.png"));

        let scene = config.scene();
        assert_eq!(scene.spheres[0].center, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(scene.spheres[0].material.shininess, 16.0);
        assert_eq!(scene.disks[0].material, Material::default());
        assert_eq!(scene.lights[0].position, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(scene.ambient, Vec3::default());
        assert_eq!(scene.camera, Vec3::new(0.0, 0.0, -4.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn camera_follows_configured_frustum() {
        let config: Config = serde_json::from_str(
            r#"{
                "render": { "frustum": { "origin": [1, 2, -8] } },
                "scene": { "spheres": [{ "center": [0, 0, 10], "radius": 5 }] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.scene.camera, None);
        assert_eq!(config.scene().camera, Vec3::new(1.0, 2.0, -8.0));
    }

    #[test]
    fn explicit_camera_wins() {
        let config: Config = serde_json::from_str(
            r#"{
                "render": { "frustum": { "origin": [1, 2, -8] } },
                "scene": { "camera": [0, 0, 0] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.scene().camera, Vec3::default());
    }

    #[test]
    fn demo_is_viewed_from_frustum_origin() {
        let config = Config::default();
        assert_eq!(config.scene().camera, Vec3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let mut desc = SceneDesc::demo();
        desc.spheres[1].radius = 0.0;

        match desc.validate() {
            Err(Error::InvalidScene(msg)) => assert!(msg.contains("sphere #1")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_degenerate_disk() {
        let mut desc = SceneDesc::demo();
        desc.disks.push(Disk::new(Vec3::default(), Vec3::default(), 1.0, Material::default()));

        assert!(matches!(desc.validate(), Err(Error::InvalidScene(..))));
    }

    #[test]
    fn rejects_negative_shininess() {
        let mut desc = SceneDesc::demo();
        desc.spheres[0].material.shininess = -1.0;

        assert!(matches!(desc.validate(), Err(Error::InvalidScene(..))));
    }

    #[test]
    fn rejects_empty_raster() {
        let mut config = Config::default();
        config.render.height = 0;

        assert!(matches!(config.validate(), Err(Error::InvalidScene(..))));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join("photon-lite-config-test.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{ "render": {{ "width": 8, "height": 4 }} }}"#).unwrap();
        drop(file);

        let config = Config::load(&path).unwrap();
        assert_eq!((config.render.width, config.render.height), (8, 4));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("photon-lite-no-such-config.json");

        match Config::load(&path) {
            Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            serde_json::from_str::<Config>(r#"{ "scene": { "ambient": [1, 2] } }"#)
                .map_err(Error::from),
            Err(Error::Json(..))
        ));
    }
}
