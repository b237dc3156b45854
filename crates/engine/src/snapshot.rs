//! Presentation read model
//!
//! The presentation layer reads a snapshot after each tick completes; the
//! engine fills it in place (`snapshot_into`) so the per-frame path does
//! not allocate.

use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

use crate::game::Phase;
use crate::piece::ActivePiece;

/// Falling-piece fields exposed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Clear-sequence fields for flash rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearingSnapshot {
    /// Captured row indices, ascending; the first `count` entries are valid
    pub rows: [u8; 4],
    pub count: u8,
    /// Elapsed seconds inside the clear window
    pub elapsed_s: f32,
    /// Seconds left in the clear window
    pub remaining_s: f32,
    /// Strobe phase: floor(elapsed / 0.07s) mod 2
    pub flash_phase: u8,
}

/// Per-frame view of the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSnapshot {
    /// Board grid: 0 = empty, else the piece code of the locked cell
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// The pre-rolled kind the next spawn will use
    pub next: PieceKind,
    pub phase: Phase,
    pub score: u32,
    pub game_over: bool,
    /// Present exactly while the engine is in `LineClearing`
    pub clearing: Option<ClearingSnapshot>,
}

impl Default for EngineSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            phase: Phase::Spawning,
            score: 0,
            game_over: false,
            clearing: None,
        }
    }
}
