//! JSON scene descriptions.
//!
//! A scene file names its materials once and lets any number of spheres refer
//! to them. Building the scene creates one shared handle per material.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use glam::DVec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::hittable_list::HittableList;
use crate::material::Material;
use crate::moving_sphere::MovingSphere;
use crate::sphere::Sphere;

/// Scene shipped with the binary, used when no file is given.
pub const DEFAULT_SCENE: &str = include_str!("scenes/default.json");

/// Parsed scene file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SceneConfig {
    /// Materials by name.
    #[serde(default)]
    pub materials: BTreeMap<String, Material>,
    /// Static spheres.
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
    /// Spheres in linear motion.
    #[serde(default)]
    pub moving_spheres: Vec<MovingSphereConfig>,
}

/// Static sphere entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SphereConfig {
    /// World-space center.
    pub center: DVec3,
    /// Signed radius; negative values describe an inverted sphere.
    pub radius: f64,
    /// Key into [`SceneConfig::materials`].
    pub material: String,
}

/// Moving sphere entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MovingSphereConfig {
    /// Center at `time0`.
    pub center0: DVec3,
    /// Center at `time1`.
    pub center1: DVec3,
    /// Start of the motion, defaults to 0.
    #[serde(default)]
    pub time0: f64,
    /// End of the motion, defaults to 1.
    #[serde(default = "default_time1")]
    pub time1: f64,
    /// Signed radius.
    pub radius: f64,
    /// Key into [`SceneConfig::materials`].
    pub material: String,
}

fn default_time1() -> f64 {
    1.0
}

impl SceneConfig {
    /// Parse a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene file at '{}': {}", path.display(), e))?;
        Self::from_json(&text)
    }

    /// The built-in scene.
    pub fn builtin() -> Result<Self, Box<dyn Error>> {
        Self::from_json(DEFAULT_SCENE)
    }

    /// Instantiate every primitive, sharing one handle per named material.
    pub fn build(&self) -> Result<HittableList, Box<dyn Error>> {
        let materials: BTreeMap<&str, Arc<Material>> = self
            .materials
            .iter()
            .map(|(name, m)| (name.as_str(), Arc::new(*m)))
            .collect();

        let lookup = |name: &str| -> Result<Arc<Material>, Box<dyn Error>> {
            materials
                .get(name)
                .cloned()
                .ok_or_else(|| format!("Unknown material '{}'", name).into())
        };

        let mut world = HittableList::new();

        for s in &self.spheres {
            world.add(Box::new(Sphere::new(s.center, s.radius, lookup(&s.material)?)));
        }

        for s in &self.moving_spheres {
            if s.time0 == s.time1 {
                return Err(format!(
                    "Moving sphere using '{}' has an empty time span ({} .. {})",
                    s.material, s.time0, s.time1
                )
                .into());
            }
            world.add(Box::new(MovingSphere::new(
                s.center0,
                s.center1,
                s.time0,
                s.time1,
                s.radius,
                lookup(&s.material)?,
            )));
        }

        for (name, m) in &self.materials {
            debug!("Material '{}' ({})", name, m.kind());
        }
        info!(
            "Scene built: {} spheres, {} moving spheres, {} materials",
            self.spheres.len(),
            self.moving_spheres.len(),
            materials.len()
        );

        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scene_builds() {
        let scene = SceneConfig::builtin().unwrap();
        let world = scene.build().unwrap();
        assert_eq!(world.len(), scene.spheres.len() + scene.moving_spheres.len());
    }

    #[test]
    fn unknown_material_is_an_error() {
        let scene = SceneConfig::from_json(
            r#"{ "spheres": [ { "center": [0, 0, 0], "radius": 1, "material": "nope" } ] }"#,
        )
        .unwrap();
        let err = scene.build().err().unwrap();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn empty_time_span_is_an_error() {
        let scene = SceneConfig::from_json(
            r#"{
                "materials": { "m": { "type": "dielectric", "refraction_index": 1.3 } },
                "moving_spheres": [
                    { "center0": [0, 0, 0], "center1": [1, 0, 0], "time0": 0.5, "time1": 0.5,
                      "radius": 1, "material": "m" }
                ]
            }"#,
        )
        .unwrap();
        assert!(scene.build().is_err());
    }

    #[test]
    fn moving_sphere_times_default_to_unit_span() {
        let scene = SceneConfig::from_json(
            r#"{ "moving_spheres": [
                { "center0": [0, 0, 0], "center1": [1, 0, 0], "radius": 1, "material": "m" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(scene.moving_spheres[0].time0, 0.0);
        assert_eq!(scene.moving_spheres[0].time1, 1.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SceneConfig::from_json("{ spheres: ").is_err());
    }
}
