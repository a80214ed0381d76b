//! Random sampling for ray scattering.
//!
//! Every function takes an injected `&mut dyn RngCore` rather than touching
//! a global generator, so renders are reproducible from a seed and parallel
//! workers can each own their own stream.

use glint_math::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::TAU;

/// Generate a random f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// Generate a random f32 in [min, max).
#[inline]
pub fn gen_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Generate a random vector in the cube [min, max]^3.
pub fn random_vec3(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_range(rng, min, max),
        gen_range(rng, min, max),
        gen_range(rng, min, max),
    )
}

/// Sample a random point inside the unit ball by rejection.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Sample a random unit vector on the sphere.
///
/// Azimuth is uniform in [0, 2pi) and the vertical component uniform in
/// [-1, 1]; the planar radius follows as sqrt(1 - z^2).
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    let azimuth = gen_range(rng, 0.0, TAU);
    let z = gen_range(rng, -1.0, 1.0);
    let r = (1.0 - z * z).sqrt();
    Vec3::new(r * azimuth.cos(), r * azimuth.sin(), z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_range_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let x = gen_range(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn test_random_vec3_in_cube() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let v = random_vec3(&mut rng, -1.0, 1.0);
            assert!(v.x.abs() <= 1.0 && v.y.abs() <= 1.0 && v.z.abs() <= 1.0);
        }
    }

    #[test]
    fn test_random_in_unit_sphere_is_interior() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_random_unit_vector_is_unit() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(random_unit_vector(&mut a), random_unit_vector(&mut b));
        }
    }
}
