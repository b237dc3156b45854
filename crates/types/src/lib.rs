//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, presentation, observers).
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0), the top-left of the piece's 4x4 frame
//!
//! # Timing Constants
//!
//! Timing values are in seconds of real time, fed to the engine as an
//! elapsed-duration value per tick (frame-rate independent):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_DELAY_S` | 0.5 | Interval between automatic one-row descents |
//! | `LINE_CLEAR_PAUSE_S` | 0.5 | Flash pause between clear detection and collapse |
//! | `FLASH_STROBE_S` | 0.07 | Strobe half-period for flash rendering |
//! | `TICK_S` | 1/60 | Reference fixed timestep used by the headless runner |

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn position of a new piece: top-left of its 4x4 frame
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Gravity interval in seconds (one automatic descent per interval)
pub const GRAVITY_DELAY_S: f32 = 0.5;

/// Duration of the line-clear flash pause in seconds
pub const LINE_CLEAR_PAUSE_S: f32 = 0.5;

/// Strobe half-period during the clear flash; phase = floor(elapsed / this) mod 2
pub const FLASH_STROBE_S: f32 = 0.07;

/// Reference fixed timestep (~60 FPS) for callers that drive the engine
pub const TICK_S: f32 = 1.0 / 60.0;

/// Line clear scoring table: points for clearing N rows at once
///
/// - 1 row: 100 points
/// - 2 rows: 300 points
/// - 3 rows: 500 points
/// - 4 rows: 800 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven piece kinds
///
/// Each kind has a distinct shape and a stable numeric code used in u8
/// board snapshots and for presentation color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Stable snapshot code in 1..=7 (0 is reserved for empty cells)
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// Rotation states in 90-degree clockwise steps
///
/// - **North**: spawn orientation (index 0)
/// - **East**: 90 degrees clockwise (index 1)
/// - **South**: 180 degrees (index 2)
/// - **West**: 270 degrees clockwise (index 3)
///
/// The cycle North -> East -> South -> West -> North keeps the rotation
/// index mod 4 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotations in clockwise order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90 degrees)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Player intents applied to the falling piece
///
/// Intents are accepted only while a piece is falling; during spawning or a
/// line-clear sequence they are silently rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down; locks immediately if the row below blocks
    SoftDrop,
    /// Rotate piece 90 degrees clockwise
    Rotate,
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(PieceKind)`: cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Symbolic message tokens emitted on line clears
///
/// The engine selects tokens; the presentation layer owns display strings
/// and timing. Single clears pick uniformly from a pool of seven praise
/// tokens; multi-line clears emit a fixed description plus a multiplier tag
/// naming the payout relative to a single clear (300/500/800 vs 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMessage {
    Nice,
    Sweet,
    Great,
    Cool,
    Tidy,
    Slick,
    Clean,
    Double,
    Triple,
    Tetris,
    ScoreX3,
    ScoreX5,
    ScoreX8,
}

impl ClearMessage {
    /// Canonical display token
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearMessage::Nice => "NICE!",
            ClearMessage::Sweet => "SWEET!",
            ClearMessage::Great => "GREAT!",
            ClearMessage::Cool => "COOL!",
            ClearMessage::Tidy => "TIDY!",
            ClearMessage::Slick => "SLICK!",
            ClearMessage::Clean => "CLEAN!",
            ClearMessage::Double => "DOUBLE!",
            ClearMessage::Triple => "TRIPLE!",
            ClearMessage::Tetris => "TETRIS!",
            ClearMessage::ScoreX3 => "x3",
            ClearMessage::ScoreX5 => "x5",
            ClearMessage::ScoreX8 => "x8",
        }
    }
}

/// Events pushed to the engine's FIFO for the presentation layer to drain
///
/// The engine emits events in order; it never owns display timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// One or more rows completed; emitted at lock time, before the flash
    /// pause. The row indices are exposed through the snapshot while the
    /// clear sequence runs.
    LinesCleared { count: u8 },
    /// Clear-triggered message token, emitted when the rows collapse
    Message(ClearMessage),
    /// A freshly spawned piece collided; the engine has halted spawning
    GameOver,
}
