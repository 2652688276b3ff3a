//! Board dimensions and the ship catalog.

use crate::bitboard::BitBoard;
use crate::common::GridError;
use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// The fleet, in placement order. A ship's identifier is the value written
/// into the grid cells it occupies.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new(1, "Destroyer", 2),
    ShipType::new(2, "Submarine", 3),
    ShipType::new(3, "Cruiser", 3),
    ShipType::new(4, "Battleship", 4),
    ShipType::new(5, "Carrier", 5),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// `BOARD_SIZE` as an index type.
pub const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Set of board cells used for shots, hits and occupancy.
pub type CellSet = BitBoard<u128, GRID_SIZE>;

const _: () = assert!(GRID_SIZE * GRID_SIZE <= u128::BITS as usize);

/// Look up a catalog entry by ship identifier.
pub fn ship_type(id: u8) -> Result<ShipType, GridError> {
    SHIPS
        .iter()
        .find(|s| s.id() == id)
        .copied()
        .ok_or(GridError::UnknownShip(id))
}

/// Identifiers of the whole fleet, in placement order.
pub fn fleet_ids() -> [u8; NUM_SHIPS] {
    core::array::from_fn(|i| SHIPS[i].id())
}
