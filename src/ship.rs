//! Ship definitions, placement checks and shot resolution.

use core::fmt;

use crate::common::{Coord, OceanError, Orientation, Result};
use crate::ocean::{Ocean, ShipId};

/// Longest ship in the game.
pub const MAX_SHIP_LENGTH: usize = 4;

/// Kind of ship occupying a cell. `Empty` stands in for open sea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
    Empty,
}

impl ShipKind {
    /// Number of cells this kind occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine | ShipKind::Empty => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Submarine => "submarine",
            ShipKind::Empty => "empty",
        }
    }

    /// Symbol used when the ocean is printed with all ships revealed.
    pub const fn reveal_symbol(self) -> char {
        match self {
            ShipKind::Battleship => 'b',
            ShipKind::Cruiser => 'c',
            ShipKind::Destroyer => 'd',
            ShipKind::Submarine => 's',
            ShipKind::Empty => ' ',
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, ShipKind::Empty)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    bow: Coord,
    orientation: Orientation,
}

/// A single vessel (or a patch of empty sea) with per-segment hit flags.
///
/// Segment `i` lies `i` cells stern-ward of the bow, so `hits()[0]` is the bow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    placement: Option<Placement>,
    hits: [bool; MAX_SHIP_LENGTH],
}

impl Ship {
    /// A new, unplaced ship of `kind`.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            placement: None,
            hits: [false; MAX_SHIP_LENGTH],
        }
    }

    /// Placeholder for the open sea at `coord`.
    pub fn empty_sea(coord: Coord) -> Self {
        Self {
            kind: ShipKind::Empty,
            placement: Some(Placement {
                bow: coord,
                orientation: Orientation::Horizontal,
            }),
            hits: [false; MAX_SHIP_LENGTH],
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    /// Bow cell, or `None` while the ship is unplaced.
    pub fn bow(&self) -> Option<Coord> {
        self.placement.map(|p| p.bow)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.placement.map(|p| p.orientation)
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation() == Some(Orientation::Horizontal)
    }

    /// Hit flags, bow first.
    pub fn hits(&self) -> &[bool] {
        &self.hits[..self.length()]
    }

    /// Cells the ship occupies, bow first. Empty while unplaced.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.placement
            .into_iter()
            .flat_map(move |p| footprint(self.length(), p.bow, p.orientation))
            .flatten()
    }

    /// Whether the ship may go at `bow` with `orientation`: every cell must be
    /// on the ocean and neither the cells nor their neighbours may hold a ship.
    pub fn ok_to_place_ship_at(&self, bow: Coord, orientation: Orientation, ocean: &Ocean) -> bool {
        let Some(cells) = footprint(self.length(), bow, orientation) else {
            return false;
        };
        cells
            .flat_map(Coord::neighborhood)
            .all(|c| !ocean.is_occupied(c))
    }

    /// Put the ship on `ocean` with its bow at `bow`.
    ///
    /// Only the board edge is checked; overlap and adjacency are the caller's
    /// business (see [`Ship::ok_to_place_ship_at`]).
    pub fn place_ship_at(
        self,
        bow: Coord,
        orientation: Orientation,
        ocean: &mut Ocean,
    ) -> Result<ShipId> {
        if footprint(self.length(), bow, orientation).is_none() {
            return Err(OceanError::ShipOutOfBounds);
        }
        Ok(self.place_unchecked(bow, orientation, ocean))
    }

    /// Placement for footprints already known to be on the ocean.
    pub(crate) fn place_unchecked(
        mut self,
        bow: Coord,
        orientation: Orientation,
        ocean: &mut Ocean,
    ) -> ShipId {
        self.placement = Some(Placement { bow, orientation });
        ocean.commit(self)
    }

    /// Segment index of `coord`, if it lies on this ship.
    fn segment(&self, coord: Coord) -> Option<usize> {
        let p = self.placement?;
        let offset = match p.orientation {
            Orientation::Horizontal if coord.row() == p.bow.row() => {
                p.bow.column().checked_sub(coord.column())?
            }
            Orientation::Vertical if coord.column() == p.bow.column() => {
                p.bow.row().checked_sub(coord.row())?
            }
            _ => return None,
        };
        (offset < self.length()).then_some(offset)
    }

    /// Fire at `coord`. Returns `true` on a hit.
    ///
    /// A sunk ship never reports a hit again. Empty sea always misses but
    /// remembers that it was fired upon.
    pub fn shoot_at(&mut self, coord: Coord) -> bool {
        if self.kind.is_empty() {
            self.hits[0] = true;
            return false;
        }
        if self.is_sunk() {
            return false;
        }
        match self.segment(coord) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// `true` once every segment has been hit. Empty sea never sinks.
    pub fn is_sunk(&self) -> bool {
        !self.kind.is_empty() && self.hits().iter().all(|&h| h)
    }

    /// Whether the segment at `coord` has been fired upon.
    pub fn was_shot_at(&self, coord: Coord) -> bool {
        self.segment(coord).is_some_and(|i| self.hits[i])
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = if self.kind.is_empty() {
            "-"
        } else if self.is_sunk() {
            "s"
        } else {
            "x"
        };
        f.write_str(symbol)
    }
}

/// Cells covered by a ship of `length` with its bow at `bow`, or `None` if
/// any would fall off the ocean.
fn footprint(
    length: usize,
    bow: Coord,
    orientation: Orientation,
) -> Option<impl Iterator<Item = Coord>> {
    bow.stern_ward(orientation, length - 1)?;
    Some((0..length).filter_map(move |i| bow.stern_ward(orientation, i)))
}
