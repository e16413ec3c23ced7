use crate::ship::ShipKind;

/// Side length of the square ocean.
pub const OCEAN_SIZE: usize = 10;
pub const FLEET_SIZE: usize = 10;

/// Fleet in placement order. Longest first, so the big ships claim space
/// before the ocean is fragmented by the small ones.
pub const FLEET: [ShipKind; FLEET_SIZE] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Rejected samples for a single ship after which placement logs a warning.
/// Placement keeps sampling regardless.
pub const PLACEMENT_WARN_ATTEMPTS: usize = 10_000;
