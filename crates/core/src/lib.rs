//! Core game-logic building blocks - pure, deterministic, and testable
//!
//! This crate holds the data-level pieces of the engine: the board grid,
//! the shape table, the deterministic RNG, and scoring. It has **zero
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical games
//! - **Testable**: every rule is a pure function or a small grid operation
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//! - **Fast**: zero-allocation hot paths for tick processing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game grid with full-row detection and row collapse
//! - [`shapes`]: canonical 4x4 masks with analytic rotation transforms
//! - [`rng`]: seeded LCG and uniform piece rolls
//! - [`scoring`]: line-clear payouts and clear-message selection

pub mod board;
pub mod rng;
pub mod scoring;
pub mod shapes;

// Re-export commonly used items
pub use board::Board;
pub use rng::{random_piece, SimpleRng};
pub use scoring::{messages_for_clear, points_for_lines};
pub use shapes::{occupancy_at, shape_cells};
