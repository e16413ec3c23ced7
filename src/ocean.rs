//! The ocean: a grid of ship handles, fleet placement and shot bookkeeping.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace, warn};
use rand::Rng;

use crate::common::{Coord, Orientation};
use crate::config::{FLEET, FLEET_SIZE, OCEAN_SIZE, PLACEMENT_WARN_ATTEMPTS};
use crate::ship::Ship;

/// Handle to a ship owned by an [`Ocean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(usize);

/// Running totals for a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub shots_fired: usize,
    pub hit_count: usize,
    pub ships_sunk: usize,
}

impl Score {
    /// Fraction of shots that hit, `0.0` before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.hit_count as f64 / self.shots_fired as f64
        }
    }
}

/// Hidden 10×10 ocean. Every cell refers to some ship, real or empty sea.
#[derive(Debug, Clone)]
pub struct Ocean {
    ships: Vec<Ship>,
    grid: [[ShipId; OCEAN_SIZE]; OCEAN_SIZE],
    shots_fired: usize,
    hit_count: usize,
    ships_sunk: usize,
}

impl Ocean {
    /// An ocean of empty sea with all counters at zero.
    pub fn new() -> Self {
        let ships: Vec<Ship> = Coord::all().map(Ship::empty_sea).collect();
        let grid = core::array::from_fn(|row| {
            core::array::from_fn(|column| ShipId(row * OCEAN_SIZE + column))
        });
        Ocean {
            ships,
            grid,
            shots_fired: 0,
            hit_count: 0,
            ships_sunk: 0,
        }
    }

    /// Take ownership of an already placed ship and point its cells at it.
    pub(crate) fn commit(&mut self, ship: Ship) -> ShipId {
        let id = ShipId(self.ships.len());
        for cell in ship.cells() {
            self.grid[cell.row()][cell.column()] = id;
        }
        debug!(
            "placed {} at {:?} {:?}",
            ship.kind(),
            ship.bow(),
            ship.orientation()
        );
        self.ships.push(ship);
        id
    }

    /// Place the standard fleet by rejection sampling: draw a random bow and
    /// orientation until the ship fits, then move on to the next one.
    pub fn place_all_ships_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for kind in FLEET {
            let ship = Ship::new(kind);
            let mut attempts = 0usize;
            loop {
                attempts += 1;
                if attempts == PLACEMENT_WARN_ATTEMPTS {
                    warn!("still placing {kind} after {attempts} attempts");
                }
                let bow = Coord::random(rng);
                let orientation: Orientation = rng.random();
                if ship.ok_to_place_ship_at(bow, orientation, self) {
                    trace!("{kind} fits at {bow} after {attempts} attempts");
                    ship.place_unchecked(bow, orientation, self);
                    break;
                }
            }
        }
    }

    /// `true` if a real ship covers `coord`.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        !self.ship_at(coord).kind().is_empty()
    }

    /// Fire at `coord`, updating the counters. Returns `true` on a hit.
    pub fn shoot_at(&mut self, coord: Coord) -> bool {
        self.shots_fired += 1;
        let id = self.ship_id_at(coord);
        let ship = &mut self.ships[id.0];
        if !ship.shoot_at(coord) {
            return false;
        }
        self.hit_count += 1;
        if ship.is_sunk() {
            self.ships_sunk += 1;
            debug!("{} sunk by shot at {coord}", ship.kind());
        }
        true
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    /// `true` once the whole fleet is sunk.
    pub fn is_game_over(&self) -> bool {
        self.ships_sunk == FLEET_SIZE
    }

    pub fn score(&self) -> Score {
        Score {
            shots_fired: self.shots_fired,
            hit_count: self.hit_count,
            ships_sunk: self.ships_sunk,
        }
    }

    pub fn ship_id_at(&self, coord: Coord) -> ShipId {
        self.grid[coord.row()][coord.column()]
    }

    /// Ship (or empty sea) occupying `coord`.
    pub fn ship_at(&self, coord: Coord) -> &Ship {
        &self.ships[self.ship_id_at(coord).0]
    }

    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.ships[id.0]
    }

    /// Real ships that have been placed on this ocean.
    pub fn fleet(&self) -> impl Iterator<Item = (ShipId, &Ship)> + '_ {
        self.ships
            .iter()
            .enumerate()
            .filter(|(_, ship)| !ship.kind().is_empty())
            .map(|(i, ship)| (ShipId(i), ship))
    }

    /// Player's view: `.` for untouched cells, otherwise the ship's symbol.
    pub fn fog_of_war(&self) -> FogOfWar<'_> {
        FogOfWar(self)
    }

    /// Debug view showing every ship by kind.
    pub fn reveal(&self) -> Reveal<'_> {
        Reveal(self)
    }

    fn write_grid(
        &self,
        f: &mut fmt::Formatter<'_>,
        cell: impl Fn(Coord, &Ship, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        f.write_str("  ")?;
        for column in 0..OCEAN_SIZE {
            write!(f, " {column} ")?;
        }
        for coord in Coord::all() {
            if coord.column() == 0 {
                write!(f, "\n{} ", coord.row())?;
            }
            f.write_str(" ")?;
            cell(coord, self.ship_at(coord), &mut *f)?;
            f.write_str(" ")?;
        }
        writeln!(f)
    }
}

impl Default for Ocean {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Display`](fmt::Display) adapter for [`Ocean::fog_of_war`].
pub struct FogOfWar<'a>(&'a Ocean);

impl fmt::Display for FogOfWar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_grid(f, |coord, ship, f| {
            if ship.was_shot_at(coord) {
                write!(f, "{ship}")
            } else {
                f.write_str(".")
            }
        })
    }
}

/// [`Display`](fmt::Display) adapter for [`Ocean::reveal`].
pub struct Reveal<'a>(&'a Ocean);

impl fmt::Display for Reveal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .write_grid(f, |_, ship, f| write!(f, "{}", ship.kind().reveal_symbol()))
    }
}
