//! Game-state engine - the update scheduler and its read model
//!
//! This crate owns the mutable game state and the timing behavior:
//!
//! - [`piece`]: the active falling piece and the collision engine
//! - [`game`]: the `GameEngine` aggregate with its explicit phase machine
//!   (`Spawning` / `Falling` / `LineClearing`), gravity and clear-pause
//!   accumulators, scoring, and the symbolic event FIFO
//! - [`snapshot`]: the per-frame view the presentation layer reads
//!
//! # Timing
//!
//! The engine is cooperative and frame-driven: one `tick(dt)` per rendered
//! frame, with `dt` supplied externally in seconds. Gravity descends the
//! piece every 0.5 s by default, and a completed row flashes for 0.5 s
//! before collapsing; both values are configurable through
//! [`game::TickConfig`].
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{GameEngine, Phase};
//! use blockfall_types::Intent;
//!
//! let mut engine = GameEngine::new(12345);
//! engine.tick(0.0); // spawns the first piece
//! assert_eq!(engine.phase(), Phase::Falling);
//!
//! engine.apply_intent(Intent::MoveLeft);
//! engine.tick(0.6); // past the gravity delay: the piece descends
//! assert!(engine.active().is_some());
//! ```

pub mod game;
pub mod piece;
pub mod snapshot;

// Re-export commonly used items
pub use game::{GameEngine, Phase, TickConfig};
pub use piece::{check_collision, ActivePiece};
pub use snapshot::{ActiveSnapshot, ClearingSnapshot, EngineSnapshot};
