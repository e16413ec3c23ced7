#![cfg(feature = "std")]

//! Console driver: reads shots from a line-oriented input and reports
//! results. Generic over the streams so it can be scripted in tests.

use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::{Coord, Ocean, Score, OCEAN_SIZE};

/// Rejected row or column entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid Entry: Please enter an integer!")]
    NotAnInteger,
    #[error("Invalid Entry: Try again!")]
    OutOfRange(i64),
}

/// Parse a row or column index in `0..OCEAN_SIZE`.
pub fn parse_index(input: &str) -> Result<usize, InputError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| InputError::NotAnInteger)?;
    if (0..OCEAN_SIZE as i64).contains(&value) {
        Ok(value as usize)
    } else {
        Err(InputError::OutOfRange(value))
    }
}

/// Prompt until the user enters a valid index. Fails only on I/O errors or
/// when the input runs out.
pub fn read_index<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<usize> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a coordinate was entered",
            ));
        }
        match parse_index(&line) {
            Ok(index) => return Ok(index),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Read a full shot: row first, then column.
pub fn read_shot<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Coord> {
    let row = read_index(input, output, "Enter row: ")?;
    let column = read_index(input, output, "Enter column: ")?;
    Ok(Coord::new(row, column)?)
}

/// Run the game loop on `ocean` until the fleet is sunk.
pub fn play<R: BufRead, W: Write>(
    ocean: &mut Ocean,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Score> {
    while !ocean.is_game_over() {
        writeln!(output)?;
        write!(output, "{}", ocean.fog_of_war())?;
        writeln!(output, "Shot number {}!", ocean.shots_fired() + 1)?;

        let coord = read_shot(input, output)?;
        let hit = ocean.shoot_at(coord);
        writeln!(output, "{}", if hit { "Hit!" } else { "Miss!" })?;

        let ship = ocean.ship_at(coord);
        if hit && ship.is_sunk() {
            writeln!(output, "You just sunk a {}!", ship.kind())?;
        }
    }

    let score = ocean.score();
    info!(
        "game over: {} shots, {} hits, accuracy {:.2}",
        score.shots_fired,
        score.hit_count,
        score.accuracy()
    );
    writeln!(output)?;
    write!(output, "{}", ocean.reveal())?;
    writeln!(output, "Nice job, you won in {} shots!", score.shots_fired)?;
    Ok(score)
}

/// Fire at every cell once, in random order, stopping as soon as the fleet
/// is sunk.
pub fn autoplay<R: Rng + ?Sized>(ocean: &mut Ocean, rng: &mut R) -> Score {
    let mut targets: Vec<Coord> = Coord::all().collect();
    targets.shuffle(rng);
    for coord in targets {
        if ocean.is_game_over() {
            break;
        }
        ocean.shoot_at(coord);
    }
    ocean.score()
}
