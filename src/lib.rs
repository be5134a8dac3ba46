//! `weighted-pick`: weighted random selection with and without repeats.
//!
//! Picks one or more candidates from an ordered population with probability
//! proportional to a caller-supplied non-negative weight. Single draws go through a
//! Vose alias table, so each draw is O(1) after O(k) preprocessing.
//!
//! Exposed modules:
//! - `weight`: host values, weight validation, eager evaluation.
//! - `alias`: alias tables.
//! - `sampler`: index sampling with repeats / without repeats.
//! - `population`: ordered lists and agent sets as one population type.
//! - `select`: the host-facing entry points (`weighted_one_of`, `weighted_n_of`).
//!
//! The generator is always supplied by the caller (`*_with_rng`) or taken from
//! `rand::rng()`; nothing is cached between calls.

#![forbid(unsafe_code)]

pub mod alias;
pub mod error;
pub mod population;
pub mod sampler;
pub mod select;
pub mod weight;

pub use alias::AliasTable;
pub use error::SampleError;
pub use population::{AgentKind, AgentSet, Population};
pub use sampler::{
    sample, sample_with_repeats, sample_with_repeats_with_rng, sample_with_rng,
    sample_without_repeats, sample_without_repeats_with_rng, SampleMode,
};
pub use select::{
    weighted_n_of, weighted_n_of_with_rng, weighted_one_of, weighted_one_of_with_rng,
};
pub use weight::Value;
