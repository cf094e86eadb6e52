//! Numeric value generators.

use rand::Rng;
use seeder_core::SeedValue;

pub use seeder_core::DEFAULT_INT_MAX;

/// Generate a non-negative integer in `0..=DEFAULT_INT_MAX`.
pub fn generate_int<R: Rng>(rng: &mut R) -> SeedValue {
    generate_int_range(rng, 0, DEFAULT_INT_MAX)
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> SeedValue {
    SeedValue::Int(rng.gen_range(min..=max))
}
