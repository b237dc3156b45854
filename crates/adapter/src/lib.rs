//! Adapter module - observation encoding for external consumers
//!
//! Encodes the engine's per-frame snapshot and drained events as
//! line-delimited JSON observation messages. This is the outward-facing
//! read contract: an observer (UI process, logger, analysis tool) consumes
//! one observation per frame and owns all display concerns.
//!
//! The adapter is encoding only; it opens no sockets and spawns no tasks.
//!
//! # Example message
//!
//! ```text
//! {"type":"observation","seq":2,"ts":33,"board":{...},"active":{"kind":"t","rotation":"north","x":3,"y":0},"next":"i","phase":"falling","score":0,"game_over":false,"clearing":null,"events":[]}
//! ```

pub mod protocol;

pub use protocol::{
    observation_from_snapshot, to_json_line, ActivePieceMessage, BoardGrid, ClearingMessage,
    EventMessage, ObservationMessage, ObservationType, PhaseLower, PieceKindLower, RotationLower,
};
