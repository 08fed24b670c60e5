//! raysphere: the sphere primitive of a CPU ray tracer
//!
//! Analytic ray-sphere intersection with nearest-root selection, ray-facing
//! normals, spherical UV mapping and exact bounding boxes, plus the small
//! substrate it needs (rays, intervals, boxes, material handles) and a JSON
//! scene loader for the command line probe.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ray;
pub mod interval;
pub mod aabb;
pub mod material;
pub mod hittable;
pub mod hittable_list;
pub mod sphere;
pub mod moving_sphere;
pub mod random;
pub mod probe;
pub mod scene;
