//! Protocol module - JSON observation messages for external observers
//!
//! Implements the line-delimited JSON encoding of the engine's per-frame
//! read model. All messages have: type, seq (sequence number), ts
//! (timestamp in ms, supplied by the caller). The engine itself knows
//! nothing about this encoding; observers consume it.

use serde::{Deserialize, Serialize};

use blockfall_engine::{EngineSnapshot, Phase};
use blockfall_types::{GameEvent, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self::Observation
    }
}

/// Lowercase piece kind used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKindLower {
    #[serde(rename = "i")]
    I,
    #[serde(rename = "o")]
    O,
    #[serde(rename = "t")]
    T,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "z")]
    Z,
    #[serde(rename = "j")]
    J,
    #[serde(rename = "l")]
    L,
}

impl From<PieceKind> for PieceKindLower {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => PieceKindLower::I,
            PieceKind::O => PieceKindLower::O,
            PieceKind::T => PieceKindLower::T,
            PieceKind::S => PieceKindLower::S,
            PieceKind::Z => PieceKindLower::Z,
            PieceKind::J => PieceKindLower::J,
            PieceKind::L => PieceKindLower::L,
        }
    }
}

/// Lowercase rotation used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationLower {
    #[serde(rename = "north")]
    North,
    #[serde(rename = "east")]
    East,
    #[serde(rename = "south")]
    South,
    #[serde(rename = "west")]
    West,
}

impl From<Rotation> for RotationLower {
    fn from(value: Rotation) -> Self {
        match value {
            Rotation::North => RotationLower::North,
            Rotation::East => RotationLower::East,
            Rotation::South => RotationLower::South,
            Rotation::West => RotationLower::West,
        }
    }
}

/// Engine phase used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseLower {
    #[serde(rename = "spawning")]
    Spawning,
    #[serde(rename = "falling")]
    Falling,
    #[serde(rename = "lineClearing")]
    LineClearing,
}

impl From<Phase> for PhaseLower {
    fn from(value: Phase) -> Self {
        match value {
            Phase::Spawning => PhaseLower::Spawning,
            Phase::Falling => PhaseLower::Falling,
            Phase::LineClearing => PhaseLower::LineClearing,
        }
    }
}

/// Board grid with dimensions (0 = empty cell, else piece code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGrid {
    pub width: u8,
    pub height: u8,
    pub cells: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
}

/// Active piece fields on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePieceMessage {
    pub kind: PieceKindLower,
    pub rotation: RotationLower,
    pub x: i8,
    pub y: i8,
}

/// Clear-sequence fields on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearingMessage {
    /// Row indices being cleared, ascending
    pub rows: Vec<u8>,
    pub elapsed_s: f32,
    pub remaining_s: f32,
    pub flash_phase: u8,
}

/// One drained engine event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EventMessage {
    #[serde(rename = "linesCleared")]
    LinesCleared { count: u8 },
    #[serde(rename = "message")]
    Message { token: String },
    #[serde(rename = "gameOver")]
    GameOver,
}

impl From<GameEvent> for EventMessage {
    fn from(value: GameEvent) -> Self {
        match value {
            GameEvent::LinesCleared { count } => EventMessage::LinesCleared { count },
            GameEvent::Message(message) => EventMessage::Message {
                token: message.as_str().to_string(),
            },
            GameEvent::GameOver => EventMessage::GameOver,
        }
    }
}

/// Full game state observation (one per frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub ts: u64,
    pub board: BoardGrid,
    pub active: Option<ActivePieceMessage>,
    pub next: PieceKindLower,
    pub phase: PhaseLower,
    pub score: u32,
    pub game_over: bool,
    pub clearing: Option<ClearingMessage>,
    pub events: Vec<EventMessage>,
}

/// Build an observation from a snapshot plus the events drained this frame
pub fn observation_from_snapshot(
    seq: u64,
    ts: u64,
    snapshot: &EngineSnapshot,
    events: &[GameEvent],
) -> ObservationMessage {
    let active = snapshot.active.map(|a| ActivePieceMessage {
        kind: a.kind.into(),
        rotation: a.rotation.into(),
        x: a.x,
        y: a.y,
    });

    let clearing = snapshot.clearing.as_ref().map(|c| ClearingMessage {
        rows: c.rows[..c.count as usize].to_vec(),
        elapsed_s: c.elapsed_s,
        remaining_s: c.remaining_s,
        flash_phase: c.flash_phase,
    });

    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        ts,
        board: BoardGrid {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: snapshot.board,
        },
        active,
        next: snapshot.next.into(),
        phase: snapshot.phase.into(),
        score: snapshot.score,
        game_over: snapshot.game_over,
        clearing,
        events: events.iter().copied().map(EventMessage::from).collect(),
    }
}

/// Encode an observation as one line of JSON (newline included)
pub fn to_json_line(message: &ObservationMessage) -> Result<String, serde_json::Error> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}
