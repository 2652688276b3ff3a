use fleet_odds::{BitBoardError, CellSet, GridError};

#[test]
fn test_insert_contains() {
    let mut set = CellSet::new();
    assert!(set.is_empty());
    assert!(set.insert(1, 1).unwrap());
    assert!(!set.insert(1, 1).unwrap());
    assert!(set.contains(1, 1));
    assert!(!set.contains(10, 1));
    assert_eq!(set.len(), 1);
    assert_eq!(
        set.insert(0, 10).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 0, col: 10 }
    );
    assert_eq!(set.len(), 1);
}

#[test]
fn test_out_of_bounds_maps_to_grid_error() {
    let err: GridError = CellSet::from_cells([(2, 3), (11, 4)]).unwrap_err().into();
    assert_eq!(err, GridError::OutOfBounds { row: 11, col: 4 });
}

#[test]
fn test_set_algebra() {
    let a = CellSet::from_cells([(0, 0), (0, 1), (5, 5)]).unwrap();
    let b = CellSet::from_cells([(0, 1), (9, 9)]).unwrap();
    assert!(a.intersects(&b));
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![(0, 1)]);
    assert_eq!((a - b).iter().collect::<Vec<_>>(), vec![(0, 0), (5, 5)]);
    assert_eq!((a | b).len(), 4);
    assert!(!(a - b).intersects(&b));
}

#[test]
fn test_full_board() {
    let mut set = CellSet::new();
    for r in 0..10 {
        for c in 0..10 {
            set.insert(r, c).unwrap();
        }
    }
    assert!(set.is_full());
    assert_eq!(set.len(), 100);
}
