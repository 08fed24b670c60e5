//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection with the half-b form of the quadratic
//! formula, spherical UV mapping and exact bounding boxes.

use std::f64::consts::PI;
use std::sync::Arc;

use glam::DVec3;

use crate::aabb::Aabb;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::{Point3, Ray};

/// Sphere primitive defined by center, radius, and material.
///
/// Immutable once built. The material handle is shared with the scene and any
/// number of other primitives.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius is not validated. A negative radius yields an inverted
    /// sphere whose outward normals point towards the center, so rays coming
    /// from outside report a back-face hit.
    pub fn new(center: Point3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Center point of the sphere in world coordinates.
    pub fn center(&self) -> Point3 {
        self.center
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

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        hit_sphere(self.center, self.radius, &self.material, r, ray_t)
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Aabb {
        sphere_box(self.center, self.radius)
    }
}

/// Map a point on the unit sphere to texture coordinates.
///
/// `u` runs from 0 to 1 around the y axis starting at -x, `v` from 0 at the
/// south pole (y = -1) to 1 at the north pole. At the poles `u` is
/// meaningless and comes out of `atan2` unchanged.
///
/// `p.y` is clamped to [-1, 1]; points rebuilt from a hit land a rounding
/// step off the unit sphere and `asin` would return NaN past the poles.
pub fn sphere_uv(p: DVec3) -> (f64, f64) {
    let phi = p.z.atan2(p.x);
    let theta = p.y.clamp(-1.0, 1.0).asin();
    let u = 1.0 - (phi + PI) / (2.0 * PI);
    let v = (theta + PI / 2.0) / PI;
    (u, v)
}

/// Intersect `r` with the sphere at `center` and fill a record on success.
///
/// Tangent rays (zero discriminant) are misses. The direction must not be
/// zero-length.
pub(crate) fn hit_sphere<'a>(
    center: Point3,
    radius: f64,
    material: &'a Material,
    r: &Ray,
    ray_t: Interval,
) -> Option<HitRecord<'a>> {
    let oc = r.origin - center;
    let a = r.direction.length_squared();
    let half_b = oc.dot(r.direction);
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Nearest root first, then the far one
    let mut root = (-half_b - sqrtd) / a;
    if !ray_t.surrounds(root) {
        root = (-half_b + sqrtd) / a;
        if !ray_t.surrounds(root) {
            return None;
        }
    }

    let p = r.at(root);
    let outward_normal = (p - center) / radius;
    Some(HitRecord::with_face_normal(
        r,
        root,
        p,
        outward_normal,
        sphere_uv(outward_normal),
        material,
    ))
}

/// Tight box around a sphere. Uses |radius| so inverted spheres stay boundable.
pub(crate) fn sphere_box(center: Point3, radius: f64) -> Aabb {
    let rvec = DVec3::splat(radius.abs());
    Aabb::new(center - rvec, center + rvec)
}
