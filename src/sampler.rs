//! Weighted index sampling with and without repeats.
//!
//! Both modes work over an already-validated weight slice (see [`crate::weight`]) and
//! return indices into it:
//!
//! - **With repeats**: one [`AliasTable`] over the whole slice, drawn from `n` times.
//!   Indices come back in draw order, duplicates allowed.
//! - **Without repeats**: `n` rounds against a shrinking set of unselected positions.
//!   Each round renormalizes over what is left, builds a fresh table, and removes the
//!   winner. Indices come back sorted ascending.
//!
//! If the eligible weights sum to zero, selection falls back to a uniform choice among
//! the eligible positions.
//!
//! Notes:
//! - For a fixed generator state and fixed weights the generator is consumed in exactly
//!   the same way every time.
//! - Functions without the `_with_rng` suffix use `rand::rng()` and are not reproducible.

use rand::prelude::*;

use crate::alias::AliasTable;
use crate::error::SampleError;

/// Whether a candidate may be picked more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SampleMode {
    /// Independent draws; the same index may appear several times.
    WithRepeats,
    /// A subset of distinct indices.
    #[default]
    WithoutRepeats,
}

/// Draw `n` indices with repeats.
pub fn sample_with_repeats(weights: &[f64], n: usize) -> Result<Vec<usize>, SampleError> {
    let mut rng = rand::rng();
    sample_with_repeats_with_rng(weights, n, &mut rng)
}

/// Draw `n` indices with repeats, using a caller-supplied RNG.
///
/// Fails with `InsufficientCandidates { requested: 1, available: 0 }` if `n > 0` and
/// `weights` is empty.
pub fn sample_with_repeats_with_rng<R: Rng + ?Sized>(
    weights: &[f64],
    n: usize,
    rng: &mut R,
) -> Result<Vec<usize>, SampleError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    if weights.is_empty() {
        return Err(SampleError::InsufficientCandidates {
            requested: 1,
            available: 0,
        });
    }

    let picks: Vec<usize> = match AliasTable::from_weights(weights) {
        Some(table) => (0..n).map(|_| table.draw(rng)).collect(),
        None => {
            tracing::debug!(
                candidates = weights.len(),
                "zero total weight, drawing uniformly"
            );
            (0..n).map(|_| rng.random_range(0..weights.len())).collect()
        }
    };
    Ok(picks)
}

/// Draw `n` distinct indices.
pub fn sample_without_repeats(weights: &[f64], n: usize) -> Result<Vec<usize>, SampleError> {
    let mut rng = rand::rng();
    sample_without_repeats_with_rng(weights, n, &mut rng)
}

/// Draw `n` distinct indices using a caller-supplied RNG.
///
/// The result is strictly ascending. If `n == weights.len()` every index is returned
/// without touching `rng`.
pub fn sample_without_repeats_with_rng<R: Rng + ?Sized>(
    weights: &[f64],
    n: usize,
    rng: &mut R,
) -> Result<Vec<usize>, SampleError> {
    let size = weights.len();
    if n > size {
        return Err(SampleError::InsufficientCandidates {
            requested: n,
            available: size,
        });
    }
    if n == size {
        tracing::debug!(size, "requested whole population, skipping draws");
        return Ok((0..size).collect());
    }

    let mut unselected: Vec<usize> = (0..size).collect();
    let mut chosen = Vec::with_capacity(n);

    for round in 0..n {
        let eligible: Vec<f64> = unselected.iter().map(|&i| weights[i]).collect();
        let slot = match AliasTable::from_weights(&eligible) {
            Some(table) => table.draw(rng),
            None => {
                tracing::debug!(
                    round,
                    eligible = unselected.len(),
                    "zero total weight, drawing uniformly"
                );
                rng.random_range(0..unselected.len())
            }
        };
        let index = unselected.remove(slot);
        let total: f64 = eligible.iter().sum();
        tracing::trace!(round, eligible = eligible.len(), total, index, "picked");
        chosen.push(index);
    }

    chosen.sort_unstable();
    Ok(chosen)
}

/// Draw `n` indices in the given mode.
pub fn sample(weights: &[f64], n: usize, mode: SampleMode) -> Result<Vec<usize>, SampleError> {
    let mut rng = rand::rng();
    sample_with_rng(weights, n, mode, &mut rng)
}

/// Draw `n` indices in the given mode, using a caller-supplied RNG.
pub fn sample_with_rng<R: Rng + ?Sized>(
    weights: &[f64],
    n: usize,
    mode: SampleMode,
    rng: &mut R,
) -> Result<Vec<usize>, SampleError> {
    match mode {
        SampleMode::WithRepeats => sample_with_repeats_with_rng(weights, n, rng),
        SampleMode::WithoutRepeats => sample_without_repeats_with_rng(weights, n, rng),
    }
}
