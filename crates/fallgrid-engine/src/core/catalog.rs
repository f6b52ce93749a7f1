//! The seven standard piece shapes.
//!
//! Shapes are stored as `'static` rotation grids and handed out by
//! reference; the catalog itself is never mutated.

use super::{
    cell::{Cell, PieceColor},
    shape::PieceShape,
};

const E: Cell = Cell::Empty;
const I: Cell = Cell::Full(PieceColor::I);
const J: Cell = Cell::Full(PieceColor::J);
const L: Cell = Cell::Full(PieceColor::L);
const O: Cell = Cell::Full(PieceColor::O);
const S: Cell = Cell::Full(PieceColor::S);
const T: Cell = Cell::Full(PieceColor::T);
const Z: Cell = Cell::Full(PieceColor::Z);

// The grids below read upside down: the first written row is the bottom of
// the piece, since row 0 of the board is the bottom row.

static I_CELLS: [Cell; 4 * 4 * 4] = [
    E, E, E, E, //
    E, E, E, E, //
    I, I, I, I, //
    E, E, E, E, //
    //
    E, E, I, E, //
    E, E, I, E, //
    E, E, I, E, //
    E, E, I, E, //
    //
    E, E, E, E, //
    I, I, I, I, //
    E, E, E, E, //
    E, E, E, E, //
    //
    E, I, E, E, //
    E, I, E, E, //
    E, I, E, E, //
    E, I, E, E, //
];

static J_CELLS: [Cell; 4 * 3 * 3] = [
    E, E, E, //
    J, J, J, //
    J, E, E, //
    //
    E, J, E, //
    E, J, E, //
    E, J, J, //
    //
    E, E, J, //
    J, J, J, //
    E, E, E, //
    //
    J, J, E, //
    E, J, E, //
    E, J, E, //
];

static L_CELLS: [Cell; 4 * 3 * 3] = [
    E, E, E, //
    L, L, L, //
    E, E, L, //
    //
    E, L, L, //
    E, L, E, //
    E, L, E, //
    //
    L, E, E, //
    L, L, L, //
    E, E, E, //
    //
    E, L, E, //
    E, L, E, //
    L, L, E, //
];

static O_CELLS: [Cell; 2 * 2] = [
    O, O, //
    O, O, //
];

static S_CELLS: [Cell; 4 * 3 * 3] = [
    E, E, E, //
    S, S, E, //
    E, S, S, //
    //
    E, E, S, //
    E, S, S, //
    E, S, E, //
    //
    S, S, E, //
    E, S, S, //
    E, E, E, //
    //
    E, S, E, //
    S, S, E, //
    S, E, E, //
];

static T_CELLS: [Cell; 4 * 3 * 3] = [
    E, E, E, //
    T, T, T, //
    E, T, E, //
    //
    E, T, E, //
    E, T, T, //
    E, T, E, //
    //
    E, T, E, //
    T, T, T, //
    E, E, E, //
    //
    E, T, E, //
    T, T, E, //
    E, T, E, //
];

static Z_CELLS: [Cell; 4 * 3 * 3] = [
    E, E, E, //
    E, Z, Z, //
    Z, Z, E, //
    //
    E, Z, E, //
    E, Z, Z, //
    E, E, Z, //
    //
    E, Z, Z, //
    Z, Z, E, //
    E, E, E, //
    //
    Z, E, E, //
    Z, Z, E, //
    E, Z, E, //
];

/// The standard seven-piece catalog, ordered like [`PieceColor`].
///
/// The I piece spawns one row lower than the 3x3 pieces and the O piece one
/// row higher, so every piece's lowest full row lands on the same board row.
pub static PIECES: [PieceShape; PieceColor::LEN] = [
    PieceShape::new(&I_CELLS, 4, 4, 4, -1),
    PieceShape::new(&J_CELLS, 4, 3, 3, 0),
    PieceShape::new(&L_CELLS, 4, 3, 3, 0),
    PieceShape::new(&O_CELLS, 1, 2, 2, 1),
    PieceShape::new(&S_CELLS, 4, 3, 3, 0),
    PieceShape::new(&T_CELLS, 4, 3, 3, 0),
    PieceShape::new(&Z_CELLS, 4, 3, 3, 0),
];

/// The catalog shape for a piece color.
#[must_use]
pub fn shape(color: PieceColor) -> &'static PieceShape {
    &PIECES[color as usize]
}
