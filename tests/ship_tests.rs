use seabattle::{BoardError, Coordinate, Orientation, Ship, BOARD_SIZE, SHIP_LENGTH};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_new_lays_out_cells() -> Result<(), BoardError> {
    let ship = Ship::new(Orientation::Horizontal, 2, 1)?;
    assert_eq!(ship.locations(), &[at(2, 1), at(2, 2), at(2, 3)]);
    assert_eq!(ship.hits(), &[false; SHIP_LENGTH]);

    let ship = Ship::new(Orientation::Vertical, 4, 6)?;
    assert_eq!(ship.locations(), &[at(4, 6), at(5, 6), at(6, 6)]);
    for c in ship.locations() {
        assert!(ship.mask().contains(*c));
    }
    assert_eq!(ship.mask().count_ones(), SHIP_LENGTH);
    Ok(())
}

#[test]
fn test_new_rejects_overhang() {
    let edge = BOARD_SIZE - SHIP_LENGTH + 1;
    assert_eq!(
        Ship::new(Orientation::Horizontal, 0, edge).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(Orientation::Vertical, edge, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_from_locations_accepts_any_order() -> Result<(), BoardError> {
    let ship = Ship::from_locations([at(3, 2), at(1, 2), at(2, 2)])?;
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(ship.locations(), &[at(1, 2), at(2, 2), at(3, 2)]);
    Ok(())
}

#[test]
fn test_from_locations_rejects_bad_shapes() {
    let gap = Ship::from_locations([at(0, 0), at(0, 1), at(0, 3)]);
    let diagonal = Ship::from_locations([at(0, 0), at(1, 1), at(2, 2)]);
    let duplicate = Ship::from_locations([at(0, 0), at(0, 0), at(0, 1)]);
    let bent = Ship::from_locations([at(0, 0), at(0, 1), at(1, 1)]);
    for result in [gap, diagonal, duplicate, bent] {
        assert_eq!(result.unwrap_err(), BoardError::MalformedShip);
    }
}

#[test]
fn test_segment_lookup() -> Result<(), BoardError> {
    let ship = Ship::new(Orientation::Horizontal, 5, 0)?;
    assert_eq!(ship.segment_at(at(5, 2)), Some(2));
    assert_eq!(ship.segment_at(at(5, 3)), None);
    assert!(!ship.is_hit_at(at(5, 0)));
    assert!(!ship.is_sunk());
    Ok(())
}
