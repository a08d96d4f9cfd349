use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Bot;
use crate::{HeuristicBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Derives a per-seat seed so bots sharing a base seed do not mirror each other.
pub fn seat_seed(seed: u64, index: usize) -> u64 {
    seed ^ ((index as u64 + 1) * 0x9E37_79B9)
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - random[:seed]
/// - heuristic[:seed]
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let custom_seed = spec
        .split_once(':')
        .and_then(|(_, value)| value.trim().parse::<u64>().ok())
        .unwrap_or_else(|| seat_seed(seed, index));
    let rng = StdRng::seed_from_u64(custom_seed);
    match label_for_spec(spec).as_str() {
        "random" => Ok(Box::new(RandomBot::new(rng))),
        "heuristic" => Ok(Box::new(HeuristicBot::new(rng))),
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}
