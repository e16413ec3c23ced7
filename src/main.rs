#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{autoplay, init_logging, play, Ocean};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Hunt a hidden fleet from the console.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the revealed ocean before the first shot")]
        reveal: bool,
    },
    /// Let the computer fire at every cell in random order and report the score.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, reveal } => {
            println!("Welcome to Battleship!");
            let mut rng = make_rng(seed);
            let mut ocean = Ocean::new();
            ocean.place_all_ships_randomly(&mut rng);
            if reveal {
                print!("{}", ocean.reveal());
            }
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            play(&mut ocean, &mut stdin.lock(), &mut stdout.lock())?;
        }
        Commands::Sim { seed } => {
            let mut rng = make_rng(seed);
            let mut ocean = Ocean::new();
            ocean.place_all_ships_randomly(&mut rng);
            let score = autoplay(&mut ocean, &mut rng);
            print!("{}", ocean.fog_of_war());
            println!(
                "Fleet sunk in {} shots ({} hits, accuracy {:.2})",
                score.shots_fired,
                score.hit_count,
                score.accuracy()
            );
        }
    }
    Ok(())
}
