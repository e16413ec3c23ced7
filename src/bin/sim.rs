use battleship::{autoplay, init_logging, Ocean};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut ocean = Ocean::new();
    ocean.place_all_ships_randomly(&mut rng);
    let score = autoplay(&mut ocean, &mut rng);

    let result = json!({
        "seed": seed,
        "score": score,
        "game_over": ocean.is_game_over(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
