//! Sphere whose center moves linearly over a time span, for motion blur.

use std::sync::Arc;

use crate::aabb::Aabb;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::{Point3, Ray, Vec3};
use crate::sphere::{hit_sphere, sphere_box};

/// Sphere travelling from `center0` at `time0` to `center1` at `time1`.
///
/// Outside that span the motion is extrapolated along the same line.
#[derive(Debug, Clone)]
pub struct MovingSphere {
    center0: Point3,
    velocity: Vec3,
    time0: f64,
    radius: f64,
    material: Arc<Material>,
}

impl MovingSphere {
    /// Create a moving sphere. `time0` and `time1` must differ.
    pub fn new(
        center0: Point3,
        center1: Point3,
        time0: f64,
        time1: f64,
        radius: f64,
        material: Arc<Material>,
    ) -> Self {
        Self {
            center0,
            velocity: (center1 - center0) / (time1 - time0),
            time0,
            radius,
            material,
        }
    }

    /// Center of the sphere at `time`.
    pub fn center(&self, time: f64) -> Point3 {
        self.center0 + (time - self.time0) * self.velocity
    }

    /// Signed radius as given at construction.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Shared material handle.
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for MovingSphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        hit_sphere(self.center(r.time), self.radius, &self.material, r, ray_t)
    }

    fn bounding_box(&self, time0: f64, time1: f64) -> Aabb {
        let box0 = sphere_box(self.center(time0), self.radius);
        let box1 = sphere_box(self.center(time1), self.radius);
        Aabb::surrounding(&box0, &box1)
    }
}
