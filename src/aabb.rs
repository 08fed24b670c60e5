//! Axis-aligned bounding boxes.
//!
//! Primitives report their bounds through [`Hittable::bounding_box`] so that
//! acceleration structures can skip whole groups of objects with one slab test.
//!
//! [`Hittable::bounding_box`]: crate::hittable::Hittable::bounding_box

use crate::interval::Interval;
use crate::ray::{Point3, Ray};

/// Axis-aligned box spanning `min` to `max` (inclusive corners).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Corner with the smallest coordinate on every axis.
    pub min: Point3,
    /// Corner with the largest coordinate on every axis.
    pub max: Point3,
}

impl Aabb {
    /// Box that contains nothing; the identity for [`Aabb::surrounding`].
    pub const EMPTY: Aabb = Aabb {
        min: Point3::splat(f64::INFINITY),
        max: Point3::splat(f64::NEG_INFINITY),
    };

    /// Create a box from its two corners.
    ///
    /// The corners are taken as given; callers pass `min <= max` per axis.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing both inputs.
    pub fn surrounding(a: &Aabb, b: &Aabb) -> Aabb {
        Aabb {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// True when the box has no volume on some axis because it was never grown.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Slab test: does the ray pass through the box within `ray_t`?
    ///
    /// Grazing an edge (entry == exit) counts as a miss, matching the open
    /// interval convention of the primitive hit tests.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> bool {
        let mut t_min = ray_t.min;
        let mut t_max = ray_t.max;

        for axis in 0..3 {
            let inv_d = 1.0 / r.direction[axis];
            let mut t0 = (self.min[axis] - r.origin[axis]) * inv_d;
            let mut t1 = (self.max[axis] - r.origin[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max <= t_min {
                return false;
            }
        }

        true
    }

    /// Index of the widest axis (0 = x, 1 = y, 2 = z).
    pub fn longest_axis(&self) -> usize {
        let extent = self.max - self.min;
        if extent.x > extent.y && extent.x > extent.z {
            0
        } else if extent.y > extent.z {
            1
        } else {
            2
        }
    }

    /// Total area of the six faces.
    pub fn surface_area(&self) -> f64 {
        let e = self.max - self.min;
        2.0 * (e.x * e.y + e.y * e.z + e.z * e.x)
    }

    /// Center of the box.
    pub fn centroid(&self) -> Point3 {
        0.5 * (self.min + self.max)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
