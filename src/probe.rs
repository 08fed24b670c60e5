//! Ray probes for querying a scene from the command line.
//!
//! A probe casts either one ray or a parallel batch of random rays around a
//! main direction and summarizes what the scene reports back.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::random;
use crate::ray::{Point3, Ray, Vec3};

/// Where and when rays are cast from, and which part of each ray counts.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    /// Origin shared by every ray.
    pub origin: Point3,
    /// Main direction; batch rays are spread over the hemisphere around it.
    pub direction: Vec3,
    /// Time stamp given to every ray.
    pub time: f64,
    /// Accepted ray parameter range (exclusive).
    pub ray_t: Interval,
    /// Draw a progress bar while a batch runs.
    pub show_progress: bool,
}

/// Aggregate results of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchStats {
    /// Rays cast.
    pub rays: u64,
    /// Rays that hit something.
    pub hits: u64,
    /// Hits on a front face.
    pub front_faces: u64,
    /// Smallest hit distance seen, if any ray hit.
    pub nearest_t: Option<f64>,
    /// Sum of hit distances, for the mean.
    pub t_sum: f64,
}

impl BatchStats {
    fn from_hit(rec: Option<&HitRecord<'_>>) -> Self {
        match rec {
            Some(rec) => Self {
                rays: 1,
                hits: 1,
                front_faces: rec.front_face as u64,
                nearest_t: Some(rec.t),
                t_sum: rec.t,
            },
            None => Self {
                rays: 1,
                ..Self::default()
            },
        }
    }

    fn merge(self, other: Self) -> Self {
        let nearest_t = match (self.nearest_t, other.nearest_t) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Self {
            rays: self.rays + other.rays,
            hits: self.hits + other.hits,
            front_faces: self.front_faces + other.front_faces,
            nearest_t,
            t_sum: self.t_sum + other.t_sum,
        }
    }

    /// Mean hit distance over the rays that hit.
    pub fn mean_t(&self) -> Option<f64> {
        (self.hits > 0).then(|| self.t_sum / self.hits as f64)
    }
}

impl Probe {
    /// Probe with the usual secondary-ray interval (0.001, inf) at time 0.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            time: 0.0,
            ray_t: Interval::new(0.001, f64::INFINITY),
            show_progress: false,
        }
    }

    /// The main ray of this probe.
    pub fn ray(&self) -> Ray {
        Ray::with_time(self.origin, self.direction, self.time)
    }

    /// Cast the main ray.
    pub fn fire<'w>(&self, world: &'w dyn Hittable) -> Option<HitRecord<'w>> {
        world.hit(&self.ray(), self.ray_t)
    }

    /// Cast `count` random rays over the hemisphere around the main direction.
    ///
    /// Rays are traced in parallel; each worker draws directions from its own
    /// thread-local generator.
    pub fn batch(&self, world: &dyn Hittable, count: u64) -> BatchStats {
        info!("Casting {} rays using {} CPU cores...", count, rayon::current_num_threads());
        let start = std::time::Instant::now();

        let pb = if self.show_progress {
            let pb = ProgressBar::new(count);
            let template = "{bar:40} {pos}/{len} ETA: {eta}";
            if let Ok(style) = ProgressStyle::default_bar().template(template) {
                pb.set_style(style);
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        let axis = self.direction.normalize_or_zero();
        let stats = (0..count)
            .into_par_iter()
            .map(|_| {
                let dir = random::random_on_hemisphere(axis);
                let r = Ray::with_time(self.origin, dir, self.time);
                let stats = BatchStats::from_hit(world.hit(&r, self.ray_t).as_ref());
                pb.inc(1);
                stats
            })
            .reduce(BatchStats::default, BatchStats::merge);

        pb.finish_and_clear();
        info!("Batch traced in {:.2?}", start.elapsed());

        stats
    }
}
