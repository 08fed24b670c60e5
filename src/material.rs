//! Material identities attached to primitives.
//!
//! Primitives only carry a shared handle to a material and hand a reference to
//! it back in every [`HitRecord`](crate::hittable::HitRecord). Evaluating the
//! material (scattering, emission) is the shading stage's job.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// RGB color in linear space.
pub type Color = DVec3;

/// Surface material kinds understood by the shading stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness (0.0 = mirror, 1.0 = rough).
        fuzz: f64,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f64,
    },

    /// Emissive surface.
    DiffuseLight {
        /// Emitted radiance.
        emit: Color,
    },
}

impl Material {
    /// Short name of the material kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Material::Lambertian { .. } => "lambertian",
            Material::Metal { .. } => "metal",
            Material::Dielectric { .. } => "dielectric",
            Material::DiffuseLight { .. } => "diffuse_light",
        }
    }
}
