//! Random number generation for ray sampling.
//!
//! Provides thread-safe random number generation with ChaCha20 PRNG.

use rand::{Rng, SeedableRng, rng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;
use glam::DVec3;

thread_local! {
    /// Thread-local ChaCha20 PRNG for quality random numbers.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Reseed the calling thread's generator, for reproducible sequences.
pub fn seed_thread_rng(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = ChaCha20Rng::seed_from_u64(seed));
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range(min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64()
}

/// Generate random unit vector uniformly distributed on unit sphere.
pub fn random_unit_vector() -> DVec3 {
    RNG.with(|rng| {
        let mut rng_mut = rng.borrow_mut();

        // Uniform azimuth and uniform cos(polar) give a uniform sphere distribution
        let theta = 2.0 * std::f64::consts::PI * rng_mut.random::<f64>();
        let cos_phi = 2.0 * rng_mut.random::<f64>() - 1.0;
        let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();

        DVec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
    })
}

/// Generate random vector on hemisphere oriented by the given normal.
pub fn random_on_hemisphere(normal: DVec3) -> DVec3 {
    let on_unit_sphere = random_unit_vector();
    if on_unit_sphere.dot(normal) > 0.0 {
        on_unit_sphere
    } else {
        -on_unit_sphere
    }
}
