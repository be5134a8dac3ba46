//! Weighted selection over host populations.
//!
//! These are the entry points a host primitive calls: validate the request, evaluate
//! every weight once, sample indices, and map them back onto the candidates.
//!
//! Checks run in a fixed order so that failures do not depend on the generator:
//! negative count, then population size, then weights. Only then is `rng` touched.

use rand::prelude::*;

use crate::error::SampleError;
use crate::population::Population;
use crate::sampler::{self, SampleMode};
use crate::weight::{self, Value};

/// Pick one candidate, weighted by `reporter`.
pub fn weighted_one_of<T, F>(
    population: &Population<T>,
    reporter: F,
) -> Result<Option<T>, SampleError>
where
    T: Clone,
    F: FnMut(&T) -> Value,
{
    let mut rng = rand::rng();
    weighted_one_of_with_rng(population, reporter, &mut rng)
}

/// Pick one candidate, weighted by `reporter`, using a caller-supplied RNG.
///
/// Returns `Ok(None)` (no agent) for an empty agent set. An empty list is an error,
/// since there is nothing sensible to return in its place.
pub fn weighted_one_of_with_rng<T, F, R>(
    population: &Population<T>,
    reporter: F,
    rng: &mut R,
) -> Result<Option<T>, SampleError>
where
    T: Clone,
    F: FnMut(&T) -> Value,
    R: Rng + ?Sized,
{
    if population.is_empty() {
        return match population {
            Population::Filterable(_) => Ok(None),
            Population::Ordered(_) => Err(SampleError::InsufficientCandidates {
                requested: 1,
                available: 0,
            }),
        };
    }

    let weights = weight::evaluate(population.items(), reporter)?;
    let picked = sampler::sample_without_repeats_with_rng(&weights, 1, rng)?;
    Ok(picked.first().and_then(|&i| population.item_at(i)).cloned())
}

/// Pick `count` candidates, weighted by `reporter`.
pub fn weighted_n_of<T, F>(
    count: i64,
    mode: SampleMode,
    population: &Population<T>,
    reporter: F,
) -> Result<Population<T>, SampleError>
where
    T: Clone,
    F: FnMut(&T) -> Value,
{
    let mut rng = rand::rng();
    weighted_n_of_with_rng(count, mode, population, reporter, &mut rng)
}

/// Pick `count` candidates, weighted by `reporter`, using a caller-supplied RNG.
///
/// The result has the same shape as `population`. With repeats it lists candidates in
/// draw order; without repeats it keeps their relative order from `population`.
pub fn weighted_n_of_with_rng<T, F, R>(
    count: i64,
    mode: SampleMode,
    population: &Population<T>,
    reporter: F,
    rng: &mut R,
) -> Result<Population<T>, SampleError>
where
    T: Clone,
    F: FnMut(&T) -> Value,
    R: Rng + ?Sized,
{
    let n = usize::try_from(count).map_err(|_| SampleError::NegativeCount(count))?;

    let available = population.len();
    match mode {
        SampleMode::WithoutRepeats if n > available => {
            return Err(SampleError::InsufficientCandidates {
                requested: n,
                available,
            });
        }
        SampleMode::WithRepeats if n > 0 && available == 0 => {
            return Err(SampleError::InsufficientCandidates {
                requested: 1,
                available: 0,
            });
        }
        _ => {}
    }

    let weights = weight::evaluate(population.items(), reporter)?;
    let indices = sampler::sample_with_rng(&weights, n, mode, rng)?;
    Ok(population.rebuild(&indices))
}
