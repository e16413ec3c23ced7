use battleship::{Coord, Ocean, OceanError, Orientation, Ship, ShipKind};

fn at(row: usize, column: usize) -> Coord {
    Coord::new(row, column).unwrap()
}

#[test]
fn test_kind_lengths_and_names() {
    assert_eq!(ShipKind::Battleship.length(), 4);
    assert_eq!(ShipKind::Cruiser.length(), 3);
    assert_eq!(ShipKind::Destroyer.length(), 2);
    assert_eq!(ShipKind::Submarine.length(), 1);
    assert_eq!(ShipKind::Empty.length(), 1);

    assert_eq!(Ship::new(ShipKind::Cruiser).kind().to_string(), "cruiser");
    assert_eq!(ShipKind::Empty.name(), "empty");
}

#[test]
fn test_new_ship_is_unplaced_and_unhit() {
    let ship = Ship::new(ShipKind::Battleship);
    assert_eq!(ship.bow(), None);
    assert_eq!(ship.orientation(), None);
    assert_eq!(ship.hits(), &[false; 4]);
    assert_eq!(ship.cells().count(), 0);
    assert!(!ship.is_sunk());
}

#[test]
fn test_horizontal_ship_extends_west_from_bow() -> Result<(), OceanError> {
    let mut ocean = Ocean::new();
    let id = Ship::new(ShipKind::Battleship).place_ship_at(
        at(0, 4),
        Orientation::Horizontal,
        &mut ocean,
    )?;
    let ship = ocean.ship(id);
    assert_eq!(ship.bow(), Some(at(0, 4)));
    assert!(ship.is_horizontal());
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![at(0, 4), at(0, 3), at(0, 2), at(0, 1)]);
    for cell in cells {
        assert_eq!(ocean.ship_id_at(cell), id);
    }
    assert!(!ocean.is_occupied(at(0, 0)));
    assert!(!ocean.is_occupied(at(0, 5)));
    Ok(())
}

#[test]
fn test_vertical_ship_extends_north_from_bow() -> Result<(), OceanError> {
    let mut ocean = Ocean::new();
    let id = Ship::new(ShipKind::Cruiser).place_ship_at(
        at(5, 6),
        Orientation::Vertical,
        &mut ocean,
    )?;
    let ship = ocean.ship(id);
    assert!(!ship.is_horizontal());
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![at(5, 6), at(4, 6), at(3, 6)]);
    Ok(())
}

#[test]
fn test_place_off_the_edge_is_rejected() {
    let mut ocean = Ocean::new();
    let err = Ship::new(ShipKind::Battleship)
        .place_ship_at(at(2, 0), Orientation::Horizontal, &mut ocean)
        .unwrap_err();
    assert_eq!(err, OceanError::ShipOutOfBounds);
    assert!(!ocean.is_occupied(at(2, 0)));
    assert_eq!(ocean.fleet().count(), 0);
}

#[test]
fn test_ok_to_place_respects_bounds() {
    let ocean = Ocean::new();
    let battleship = Ship::new(ShipKind::Battleship);
    assert!(!battleship.ok_to_place_ship_at(at(2, 0), Orientation::Horizontal, &ocean));
    assert!(!battleship.ok_to_place_ship_at(at(2, 2), Orientation::Vertical, &ocean));
    assert!(battleship.ok_to_place_ship_at(at(2, 3), Orientation::Horizontal, &ocean));
    assert!(battleship.ok_to_place_ship_at(at(3, 2), Orientation::Vertical, &ocean));
    assert!(battleship.ok_to_place_ship_at(at(9, 9), Orientation::Horizontal, &ocean));
}

#[test]
fn test_ok_to_place_rejects_overlap_and_adjacency() -> Result<(), OceanError> {
    let mut ocean = Ocean::new();
    Ship::new(ShipKind::Destroyer).place_ship_at(at(1, 5), Orientation::Vertical, &mut ocean)?;

    let sub = Ship::new(ShipKind::Submarine);
    // on top
    assert!(!sub.ok_to_place_ship_at(at(0, 5), Orientation::Vertical, &ocean));
    // orthogonal and diagonal neighbours
    assert!(!sub.ok_to_place_ship_at(at(2, 5), Orientation::Vertical, &ocean));
    assert!(!sub.ok_to_place_ship_at(at(1, 4), Orientation::Vertical, &ocean));
    assert!(!sub.ok_to_place_ship_at(at(2, 6), Orientation::Vertical, &ocean));
    assert!(!sub.ok_to_place_ship_at(at(0, 4), Orientation::Vertical, &ocean));
    // one gap is enough
    assert!(sub.ok_to_place_ship_at(at(3, 5), Orientation::Vertical, &ocean));
    assert!(sub.ok_to_place_ship_at(at(0, 7), Orientation::Vertical, &ocean));

    // a long ship whose stern would touch the destroyer
    let cruiser = Ship::new(ShipKind::Cruiser);
    assert!(cruiser.ok_to_place_ship_at(at(1, 9), Orientation::Horizontal, &ocean));
    assert!(!cruiser.ok_to_place_ship_at(at(1, 8), Orientation::Horizontal, &ocean));
    Ok(())
}

#[test]
fn test_shoot_records_segment_hits() -> Result<(), OceanError> {
    let mut ocean = Ocean::new();
    let id = Ship::new(ShipKind::Cruiser).place_ship_at(
        at(0, 2),
        Orientation::Horizontal,
        &mut ocean,
    )?;
    let mut ship = ocean.ship(id).clone();
    assert!(ship.shoot_at(at(0, 1)));
    assert_eq!(ship.hits(), &[false, true, false]);
    assert!(ship.was_shot_at(at(0, 1)));
    assert!(!ship.was_shot_at(at(0, 2)));
    assert!(ship.shoot_at(at(0, 2)));
    assert!(ship.shoot_at(at(0, 0)));
    assert_eq!(ship.hits(), &[true, true, true]);
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_shoot_off_ship_misses() -> Result<(), OceanError> {
    let mut ocean = Ocean::new();
    let id = Ship::new(ShipKind::Destroyer).place_ship_at(
        at(5, 5),
        Orientation::Vertical,
        &mut ocean,
    )?;
    let mut ship = ocean.ship(id).clone();
    assert!(!ship.shoot_at(at(6, 5)));
    assert!(!ship.shoot_at(at(3, 5)));
    assert!(!ship.shoot_at(at(5, 4)));
    assert_eq!(ship.hits(), &[false, false]);
    Ok(())
}

#[test]
fn test_sunk_ship_always_misses() -> Result<(), OceanError> {
    let mut ocean = Ocean::new();
    let id = Ship::new(ShipKind::Submarine).place_ship_at(
        at(9, 9),
        Orientation::Vertical,
        &mut ocean,
    )?;
    let mut ship = ocean.ship(id).clone();
    assert!(!ship.hits()[0]);
    assert!(ship.shoot_at(at(9, 9)));
    assert!(ship.hits()[0]);
    assert!(ship.is_sunk());
    assert!(!ship.shoot_at(at(9, 9)));
    assert!(!ship.shoot_at(at(9, 9)));
    Ok(())
}

#[test]
fn test_unplaced_ship_cannot_be_hit() {
    let mut ship = Ship::new(ShipKind::Submarine);
    assert!(!ship.shoot_at(at(0, 0)));
    assert!(!ship.is_sunk());
}

#[test]
fn test_display_symbols() -> Result<(), OceanError> {
    let mut ocean = Ocean::new();
    let id = Ship::new(ShipKind::Destroyer).place_ship_at(
        at(0, 1),
        Orientation::Horizontal,
        &mut ocean,
    )?;
    let mut ship = ocean.ship(id).clone();
    assert_eq!(ship.to_string(), "x");
    ship.shoot_at(at(0, 1));
    assert_eq!(ship.to_string(), "x");
    ship.shoot_at(at(0, 0));
    assert_eq!(ship.to_string(), "s");
    Ok(())
}

#[test]
fn test_empty_sea_behaviour() {
    let mut sea = Ship::empty_sea(at(3, 7));
    assert_eq!(sea.kind(), ShipKind::Empty);
    assert_eq!(sea.bow(), Some(at(3, 7)));
    assert_eq!(sea.length(), 1);
    assert_eq!(sea.to_string(), "-");
    assert!(!sea.was_shot_at(at(3, 7)));

    assert!(!sea.shoot_at(at(3, 7)));
    assert_eq!(sea.hits(), &[true]);
    assert!(sea.was_shot_at(at(3, 7)));
    assert!(!sea.is_sunk());
    assert_eq!(sea.to_string(), "-");
}
