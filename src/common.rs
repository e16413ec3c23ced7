//! Common types for Battleship: coordinates, orientation and ocean errors.

use core::fmt;

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use thiserror::Error;

use crate::config::OCEAN_SIZE;

/// Errors returned at the boundaries of the ocean model.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OceanError {
    /// Coordinate lies outside the `OCEAN_SIZE`×`OCEAN_SIZE` grid.
    #[error("coordinate ({row}, {column}) is outside the ocean")]
    OutOfBounds { row: usize, column: usize },
    /// Ship footprint would extend past the edge of the ocean.
    #[error("ship placement is out of bounds")]
    ShipOutOfBounds,
}

pub type Result<T> = core::result::Result<T, OceanError>;

/// Orientation of a ship on the ocean.
///
/// Horizontal ships extend west from their bow, vertical ships extend north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A cell of the ocean, guaranteed to be in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    row: u8,
    column: u8,
}

impl Coord {
    /// Validate `(row, column)` against the ocean bounds.
    pub fn new(row: usize, column: usize) -> Result<Self> {
        if row >= OCEAN_SIZE || column >= OCEAN_SIZE {
            return Err(OceanError::OutOfBounds { row, column });
        }
        Ok(Self {
            row: row as u8,
            column: column as u8,
        })
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Step `distance` cells back from this one along `orientation`
    /// (west for horizontal, north for vertical).
    pub(crate) fn stern_ward(self, orientation: Orientation, distance: usize) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => {
                let column = self.column().checked_sub(distance)?;
                Coord::new(self.row(), column).ok()
            }
            Orientation::Vertical => {
                let row = self.row().checked_sub(distance)?;
                Coord::new(row, self.column()).ok()
            }
        }
    }

    /// This cell and its (up to) eight neighbours, clipped to the ocean.
    pub fn neighborhood(self) -> impl Iterator<Item = Coord> {
        let (row, column) = (self.row() as isize, self.column() as isize);
        (-1isize..=1).flat_map(move |dr| {
            (-1isize..=1).filter_map(move |dc| {
                let (r, c) = (row + dr, column + dc);
                if r < 0 || c < 0 {
                    return None;
                }
                Coord::new(r as usize, c as usize).ok()
            })
        })
    }

    /// Every cell of the ocean, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..OCEAN_SIZE).flat_map(|row| {
            (0..OCEAN_SIZE).map(move |column| Coord {
                row: row as u8,
                column: column as u8,
            })
        })
    }

    /// Uniformly random cell.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Coord {
            row: rng.random_range(0..OCEAN_SIZE) as u8,
            column: rng.random_range(0..OCEAN_SIZE) as u8,
        }
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = OceanError;

    fn try_from((row, column): (usize, usize)) -> Result<Self> {
        Coord::new(row, column)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
