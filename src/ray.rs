//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use glam::DVec3;

/// Point in world space.
pub type Point3 = DVec3;

/// Direction or offset in world space.
pub type Vec3 = DVec3;

/// Ray in 3D space defined by origin, direction and the instant it was cast.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized, but must not be zero-length: the
    /// intersection routines divide by its squared length.
    pub direction: Vec3,

    /// Time at which the ray samples the scene.
    ///
    /// Only moving primitives read it; static geometry ignores it.
    pub time: f64,
}

impl Ray {
    /// Create a new ray at time 0.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self::with_time(origin, direction, 0.0)
    }

    /// Create a new ray cast at the given time.
    pub fn with_time(origin: Point3, direction: Vec3, time: f64) -> Self {
        Self { origin, direction, time }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
