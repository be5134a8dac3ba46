//! Weighted selection from a list and from an agent set.
//!
//! Run with `RUST_LOG=weighted_pick=trace` to see each round.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;
use weighted_pick::{
    weighted_n_of_with_rng, weighted_one_of_with_rng, AgentKind, AgentSet, Population, SampleMode,
    Value,
};

#[derive(Debug, Clone, PartialEq)]
struct Turtle {
    who: u32,
    energy: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let colors = Population::from(vec!["red", "green", "blue", "yellow"]);
    let picked = weighted_n_of_with_rng(
        6,
        SampleMode::WithRepeats,
        &colors,
        |c| Value::from(if *c == "red" { 5 } else { 1 }),
        &mut rng,
    )?;
    println!("colors with repeats: {:?}", picked.items());

    let turtles: Vec<Turtle> = (0..8)
        .map(|who| Turtle {
            who,
            energy: f64::from(who % 4),
        })
        .collect();
    let turtles = AgentSet::new(AgentKind::Turtle, turtles);
    let hungry = Population::from(turtles.with(|t| t.energy < 3.0));

    let picked = weighted_n_of_with_rng(
        3,
        SampleMode::WithoutRepeats,
        &hungry,
        |t| Value::from(t.energy),
        &mut rng,
    )?;
    let who: Vec<u32> = picked.items().iter().map(|t| t.who).collect();
    println!("3 hungry turtles by energy: {who:?}");

    let nobody = Population::from(turtles.with(|t| t.energy > 100.0));
    match weighted_one_of_with_rng(&nobody, |t| Value::from(t.energy), &mut rng)? {
        Some(t) => println!("picked turtle {}", t.who),
        None => println!("picked nobody"),
    }

    Ok(())
}
