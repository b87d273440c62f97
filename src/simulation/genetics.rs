//! Trait inheritance for offspring creatures.
//!
//! Each trait is the average of the two parents' values, with a chance of
//! mutation proportional to the world's mutation rate. Mutated values shift
//! by up to 10% of their own magnitude in either direction.

use rand::Rng;

/// Lower bound for every inherited trait value.
pub const MIN_TRAIT: f64 = 1.0;

/// Total mutation span relative to the trait's own magnitude.
///
/// A mutation draws uniformly from `[-0.5, 0.5] * value * MUTATION_SPAN`,
/// so each trait moves by at most 10% of itself.
pub const MUTATION_SPAN: f64 = 0.2;

/// Computes an offspring trait from two parent values.
///
/// # Arguments
///
/// * `a` - First parent's trait value
/// * `b` - Second parent's trait value
/// * `mutation_rate` - Probability of a mutation occurring
/// * `rng` - Random source for the mutation roll and offset
///
/// # Returns
///
/// The averaged (and possibly mutated) value, floored at [`MIN_TRAIT`].
pub fn inherit<R: Rng>(a: f64, b: f64, mutation_rate: f64, rng: &mut R) -> f64 {
    let mut value = (a + b) / 2.0;
    if rng.random::<f64>() < mutation_rate {
        value += (rng.random::<f64>() - 0.5) * value * MUTATION_SPAN;
    }
    value.max(MIN_TRAIT)
}
