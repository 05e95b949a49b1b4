//! Random engine self-play runner.
//!
//! Run with:
//! `cargo run --release --bin random_match`
//! `cargo run --release --bin random_match -- --verbose --seed 7 --plies 200`

use shade_chess::engines::engine_random::RandomEngine;
use shade_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(idx) => {
            let raw = args
                .get(idx + 1)
                .ok_or_else(|| format!("{flag} needs a value"))?;
            raw.parse::<T>()
                .map(Some)
                .map_err(|_| format!("invalid value for {flag}: {raw}"))
        }
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let seed = parse_flag::<u64>(&args, "--seed")?;
    let plies = parse_flag::<u16>(&args, "--plies")?;
    let fen = parse_flag::<String>(&args, "--fen")?;

    let (mut light, mut dark) = match seed {
        Some(seed) => (
            RandomEngine::with_seed(seed),
            RandomEngine::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomEngine::new(), RandomEngine::new()),
    };

    let config = MatchConfig {
        max_plies: plies.unwrap_or(MatchConfig::default().max_plies),
        starting_fen: fen,
        verbose,
    };

    let result = play_engine_match(&mut light, &mut dark, &config).map_err(|e| e.to_string())?;

    println!("{}", result.report());
    println!("moves: {}", result.played_moves_lan.join(" "));
    Ok(())
}
