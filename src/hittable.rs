//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! reporting intersection data to the traversal and shading stages.

use crate::aabb::Aabb;
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::{Point3, Ray, Vec3};

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, texture coordinates
/// and the material of the surface that was hit. Built fresh for every
/// successful hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord<'a> {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Surface normal at the intersection point, pointing against the ray
    pub normal: Vec3,
    /// Ray parameter of the intersection
    pub t: f64,
    /// Horizontal texture coordinate in [0, 1]
    pub u: f64,
    /// Vertical texture coordinate in [0, 1]
    pub v: f64,
    /// True if the ray hits the front (outside) face
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record, orienting the normal against the incident ray.
    ///
    /// `outward_normal` must be unit length and point out of the solid.
    pub fn with_face_normal(
        r: &Ray,
        t: f64,
        p: Point3,
        outward_normal: Vec3,
        (u, v): (f64, f64),
        material: &'a Material,
    ) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p,
            normal,
            t,
            u,
            v,
            front_face,
            material,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Implementations are immutable query objects; Sync + Send lets any number of
/// threads test rays against the same scene.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection strictly inside `ray_t`.
    ///
    /// Returns the nearest such intersection, or None when there is none.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Box enclosing the object for every instant in `[time0, time1]`.
    fn bounding_box(&self, time0: f64, time1: f64) -> Aabb;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    const MAT: Material = Material::Dielectric { refraction_index: 1.5 };

    #[test]
    fn normal_faces_incoming_ray() {
        let outward = DVec3::new(0.0, 0.0, 1.0);

        let from_outside = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::new(0.0, 0.0, -1.0));
        let rec =
            HitRecord::with_face_normal(&from_outside, 4.0, DVec3::Z, outward, (0.5, 0.5), &MAT);
        assert!(rec.front_face);
        assert_eq!(rec.normal, outward);

        let from_inside = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0));
        let rec =
            HitRecord::with_face_normal(&from_inside, 1.0, DVec3::Z, outward, (0.5, 0.5), &MAT);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -outward);
    }
}
