//! Active piece and collision engine
//!
//! The active piece tracks kind, rotation, and the top-left of its 4x4
//! frame in board coordinates. It exists only while falling and is owned
//! exclusively by the update scheduler; locking destroys it.

use blockfall_core::{shape_cells, Board};
use blockfall_types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// New piece at the fixed spawn position, canonical orientation
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// The four occupied board coordinates of the piece
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = shape_cells(self.kind, self.rotation);
        for (cx, cy) in &mut cells {
            *cx += self.x;
            *cy += self.y;
        }
        cells
    }

    /// Whether every occupied cell is in bounds and over an empty board cell
    pub fn fits(&self, board: &Board) -> bool {
        !check_collision(board, self.kind, self.rotation, self.x, self.y)
    }

    /// Copy of the piece translated by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of the piece rotated 90 degrees clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

/// Placement validity test for a piece frame at origin (x, y)
///
/// For every occupied frame cell (row i, col j) the board coordinate is
/// (x + j, y + i). Reports a collision if any such coordinate is out of
/// bounds or the target cell is filled; false only when all four cells are
/// in bounds and empty. Used for move-left/right, soft drop, rotation
/// validity, and spawn-collision (game-over detection).
pub fn check_collision(board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
    shape_cells(kind, rotation)
        .iter()
        .any(|&(dx, dy)| !board.is_free(x + dx, y + dy))
}
