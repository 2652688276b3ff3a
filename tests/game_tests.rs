use fleet_odds::{Game, Grid, GridError, GuessResult, Orientation, BOARD_SIZE, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_fire_hit_then_miss() {
    let mut grid = Grid::new();
    grid.place(1, 0, 0, Orientation::Horizontal).unwrap();
    let mut game = Game::from_grid(grid);

    assert!(!game.is_won());
    assert_eq!(game.fire(0, 0).unwrap(), GuessResult::Hit(1));
    assert_eq!(game.grid().get(0, 0).unwrap(), 0);
    assert_eq!(game.fire(0, 0).unwrap(), GuessResult::Miss);
    assert_eq!(game.fire(5, 5).unwrap(), GuessResult::Miss);
    assert!(!game.is_won());
    assert_eq!(game.fire(0, 1).unwrap().ship_id(), 1);
    assert!(game.is_won());
    assert_eq!(game.shots_fired(), 4);
    assert_eq!(game.shots().len(), 3);
}

#[test]
fn test_fire_out_of_bounds() {
    let mut game = Game::from_grid(Grid::new());
    assert_eq!(
        game.fire(BOARD_SIZE as usize, 0).unwrap_err(),
        GridError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(game.shots_fired(), 0);
}

#[test]
fn test_sweeping_every_cell_wins() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut game = Game::new(&mut rng).unwrap();
    assert!(!game.is_won());
    let mut hits = 0;
    for r in 0..BOARD_SIZE as usize {
        for c in 0..BOARD_SIZE as usize {
            if game.fire(r, c).unwrap().is_hit() {
                hits += 1;
            }
        }
    }
    assert_eq!(hits, TOTAL_SHIP_CELLS);
    assert!(game.is_won());
}

#[test]
fn test_reset_starts_a_fresh_game() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new(&mut rng).unwrap();
    for c in 0..BOARD_SIZE as usize {
        game.fire(3, c).unwrap();
    }
    game.reset(&mut rng).unwrap();
    assert_eq!(game.remaining_cells(), TOTAL_SHIP_CELLS);
    assert_eq!(game.shots_fired(), 0);
    assert!(game.shots().is_empty());
    assert!(!game.is_won());
}
