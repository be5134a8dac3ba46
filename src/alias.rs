//! Alias tables (Vose's alias method).
//!
//! Preprocesses a discrete distribution over `k` outcomes in O(k) so that each draw
//! costs O(1): pick a slot uniformly, then keep it or jump to its alias with a biased
//! coin.
//!
//! ## References
//!
//! - Walker (1977): *An Efficient Method for Generating Discrete Random Variables with
//!   General Distributions*.
//! - Vose (1991): *A Linear Algorithm for Generating Random Numbers with a Given
//!   Distribution*.

use rand::prelude::*;

/// An alias table over `k` outcomes.
///
/// Invariants: `0 <= threshold[i] <= 1` and `alias[i] < k` for every slot.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    threshold: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Build a table from probabilities that sum to 1.
    ///
    /// # Panics
    ///
    /// Panics if `probabilities` is empty.
    pub fn new(probabilities: &[f64]) -> Self {
        assert!(
            !probabilities.is_empty(),
            "AliasTable::new: probabilities must be non-empty"
        );

        let k = probabilities.len();
        let mut scaled: Vec<f64> = probabilities.iter().map(|&p| p * k as f64).collect();
        let mut threshold = vec![1.0; k];
        let mut alias: Vec<usize> = (0..k).collect();

        let (mut light, mut heavy): (Vec<usize>, Vec<usize>) =
            (0..k).partition(|&i| scaled[i] < 1.0);

        loop {
            match (light.pop(), heavy.pop()) {
                (Some(l), Some(h)) => {
                    threshold[l] = scaled[l];
                    alias[l] = h;

                    scaled[h] -= 1.0 - scaled[l];
                    if scaled[h] < 1.0 {
                        light.push(h);
                    } else {
                        heavy.push(h);
                    }
                }
                // Leftovers are 1 up to rounding: keep those slots whole.
                (Some(i), None) | (None, Some(i)) => {
                    threshold[i] = 1.0;
                    alias[i] = i;
                }
                (None, None) => break,
            }
        }

        for t in &mut threshold {
            *t = t.clamp(0.0, 1.0);
        }

        Self { threshold, alias }
    }

    /// Build a table from non-negative weights, normalizing them first.
    ///
    /// Returns `None` if `weights` is empty, holds a negative or non-finite entry, or
    /// sums to zero.
    pub fn from_weights(weights: &[f64]) -> Option<Self> {
        if weights.is_empty() || weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return None;
        }
        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            return None;
        }

        let probabilities: Vec<f64> = if total.is_finite() {
            weights.iter().map(|&w| w / total).collect()
        } else {
            // The sum overflowed: rescale by the largest weight first.
            let max = weights.iter().copied().fold(0.0, f64::max);
            let total: f64 = weights.iter().map(|&w| w / max).sum();
            weights.iter().map(|&w| w / max / total).collect()
        };
        Some(Self::new(&probabilities))
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.threshold.len()
    }

    /// Always `false` for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.threshold.is_empty()
    }

    /// Probability of keeping slot `i` rather than taking its alias.
    pub fn threshold(&self, i: usize) -> f64 {
        self.threshold[i]
    }

    /// The outcome slot `i` falls through to.
    pub fn alias(&self, i: usize) -> usize {
        self.alias[i]
    }

    /// Draw one outcome index in `0..len()`.
    ///
    /// Consumes one uniform slot index and one uniform `f64` from `rng`.
    #[inline]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let i = rng.random_range(0..self.threshold.len());
        let u: f64 = rng.random();
        if u < self.threshold[i] {
            i
        } else {
            self.alias[i]
        }
    }
}
