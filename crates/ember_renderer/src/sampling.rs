//! Random sampling helpers.
//!
//! Every function takes the generator explicitly so the kernel never touches
//! a process-wide random source.

use ember_math::Vec3;
use rand::{Rng, RngCore};

/// Generate a random f32 in [0.0, 1.0).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Sample a random point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Sample a random point strictly inside the unit disk in the XY plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Derive an independent seed for the pixel `(x, y)` of a render.
///
/// SplitMix64 finalizer over the render seed and pixel coordinates, so the
/// same pixel always draws the same sample sequence whichever thread runs it.
pub fn pixel_seed(seed: u64, x: u32, y: u32) -> u64 {
    let mut z = seed
        .wrapping_add(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(((x as u64) << 32) | y as u64);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_unit_sphere_samples_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_unit_disk_samples_flat() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = random_in_unit_disk(&mut rng);
            assert_eq!(p.z, 0.0);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_pixel_seed_is_stable_and_distinct() {
        assert_eq!(pixel_seed(1, 10, 20), pixel_seed(1, 10, 20));
        assert_ne!(pixel_seed(1, 10, 20), pixel_seed(1, 20, 10));
        assert_ne!(pixel_seed(1, 10, 20), pixel_seed(2, 10, 20));
    }
}
