use seabattle::{BitBoard, BitBoardError, Coordinate, Grid};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_get_bounds() {
    let bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());
    assert!(!bb.get(3, 3).unwrap());
    assert_eq!(
        bb.get(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_insert_and_iter() {
    let mut grid = Grid::new();
    grid.insert(at(6, 6));
    grid.insert(at(0, 1));
    grid.insert(at(0, 1));
    assert_eq!(grid.count_ones(), 2);
    assert!(grid.get(0, 1).unwrap());

    let bits: Vec<_> = grid.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (6, 6)]);
}

#[test]
fn test_grid_overlap() {
    let mut a = Grid::new();
    let mut b = Grid::new();
    a.insert(at(2, 3));
    b.insert(at(6, 6));
    assert!(!a.overlaps(&b));
    assert!(b.contains(at(6, 6)));

    b.insert(at(2, 3));
    assert!(a.overlaps(&b));
    a |= b;
    assert_eq!(a.count_ones(), 2);
}
