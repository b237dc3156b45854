//! Shape table - canonical piece masks and analytic rotation
//!
//! Each of the seven kinds is defined once, as a 4x4 occupancy mask in its
//! spawn (North) orientation. Rotated occupancy is computed by index
//! arithmetic over the canonical mask - no stored rotated copies, no kick
//! data. Rotation is pivot-free, about the center of the 4x4 frame.

use blockfall_types::{PieceKind, Rotation};

/// 4x4 occupancy mask in the canonical (North) orientation
pub type ShapeMask = [[bool; 4]; 4];

const T: bool = true;
const F: bool = false;

const I_MASK: ShapeMask = [
    [F, F, F, F],
    [T, T, T, T],
    [F, F, F, F],
    [F, F, F, F],
];

const O_MASK: ShapeMask = [
    [F, T, T, F],
    [F, T, T, F],
    [F, F, F, F],
    [F, F, F, F],
];

const T_MASK: ShapeMask = [
    [F, T, F, F],
    [T, T, T, F],
    [F, F, F, F],
    [F, F, F, F],
];

const S_MASK: ShapeMask = [
    [F, T, T, F],
    [T, T, F, F],
    [F, F, F, F],
    [F, F, F, F],
];

const Z_MASK: ShapeMask = [
    [T, T, F, F],
    [F, T, T, F],
    [F, F, F, F],
    [F, F, F, F],
];

const J_MASK: ShapeMask = [
    [T, F, F, F],
    [T, T, T, F],
    [F, F, F, F],
    [F, F, F, F],
];

const L_MASK: ShapeMask = [
    [F, F, T, F],
    [T, T, T, F],
    [F, F, F, F],
    [F, F, F, F],
];

/// Canonical mask for a piece kind
pub fn mask(kind: PieceKind) -> &'static ShapeMask {
    match kind {
        PieceKind::I => &I_MASK,
        PieceKind::O => &O_MASK,
        PieceKind::T => &T_MASK,
        PieceKind::S => &S_MASK,
        PieceKind::Z => &Z_MASK,
        PieceKind::J => &J_MASK,
        PieceKind::L => &L_MASK,
    }
}

/// Occupancy of frame cell (row, col) under a rotation, for row, col in 0..4
///
/// The four index mappings encode the whole rotation system:
/// - North: `mask[row][col]`
/// - East (90 CW): `mask[3-col][row]`
/// - South (180): `mask[3-row][3-col]`
/// - West (270 CW): `mask[col][3-row]`
pub fn occupancy_at(kind: PieceKind, rotation: Rotation, row: usize, col: usize) -> bool {
    let m = mask(kind);
    match rotation {
        Rotation::North => m[row][col],
        Rotation::East => m[3 - col][row],
        Rotation::South => m[3 - row][3 - col],
        Rotation::West => m[col][3 - row],
    }
}

/// The four occupied (dx, dy) offsets of a piece's frame, in scan order
///
/// dx is the column and dy the row within the 4x4 frame; adding the piece
/// origin yields board coordinates. Every mask holds exactly four cells.
pub fn shape_cells(kind: PieceKind, rotation: Rotation) -> [(i8, i8); 4] {
    let mut cells = [(0i8, 0i8); 4];
    let mut n = 0;
    for row in 0..4 {
        for col in 0..4 {
            if occupancy_at(kind, rotation, row, col) {
                cells[n] = (col as i8, row as i8);
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, 4, "tetromino mask must hold exactly 4 cells");
    cells
}
