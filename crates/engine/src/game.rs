//! Update scheduler - the game-state engine
//!
//! A single aggregate owns all mutable state: board, active piece, the
//! pre-rolled next piece, RNG, score, and the event FIFO. Time advances
//! only through `tick(dt)`; gravity and the line-clear pause are float
//! accumulators compared against configurable thresholds, so behavior is
//! independent of frame rate. All operations run to completion within one
//! tick.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use blockfall_core::{messages_for_clear, points_for_lines, random_piece, Board, SimpleRng};
use blockfall_types::{
    GameEvent, Intent, PieceKind, FLASH_STROBE_S, GRAVITY_DELAY_S, LINE_CLEAR_PAUSE_S,
};

use crate::piece::ActivePiece;
use crate::snapshot::{ActiveSnapshot, ClearingSnapshot, EngineSnapshot};

/// Engine phases
///
/// The active piece is `Some` exactly in `Falling`; no piece exists while
/// a line-clear sequence runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No active piece; the next tick spawns one (or detects game over)
    Spawning,
    /// A piece is descending under gravity and accepting intents
    Falling,
    /// Full rows are flashing; collapse happens when the pause ends
    LineClearing,
}

/// Tuning values that varied across revisions of the rule set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickConfig {
    /// Seconds between automatic one-row descents
    pub gravity_delay_s: f32,
    /// Seconds between clear detection and row collapse
    pub line_clear_pause_s: f32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            gravity_delay_s: GRAVITY_DELAY_S,
            line_clear_pause_s: LINE_CLEAR_PAUSE_S,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: Option<ActivePiece>,
    /// Single-ahead lookahead: pre-rolled kind that the next spawn uses
    next_kind: PieceKind,
    rng: SimpleRng,
    score: u32,
    phase: Phase,
    game_over: bool,
    gravity_timer_s: f32,
    clear_timer_s: f32,
    /// Rows captured at lock time, ascending; consumed by the collapse
    clearing_rows: ArrayVec<usize, 4>,
    /// Symbolic events for the presentation layer to drain
    events: VecDeque<GameEvent>,
    config: TickConfig,
}

impl GameEngine {
    /// Create an engine with the given RNG seed and default timing
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, TickConfig::default())
    }

    /// Create an engine with explicit timing configuration
    pub fn with_config(seed: u32, config: TickConfig) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next_kind = random_piece(&mut rng);

        Self {
            board: Board::new(),
            active: None,
            next_kind,
            rng,
            score: 0,
            phase: Phase::Spawning,
            game_over: false,
            gravity_timer_s: 0.0,
            clear_timer_s: 0.0,
            clearing_rows: ArrayVec::new(),
            events: VecDeque::new(),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for external reset flows and test setup
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// The pre-rolled kind the next spawn will use
    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> TickConfig {
        self.config
    }

    /// Rows captured for the running clear sequence (ascending; empty
    /// outside `LineClearing`)
    pub fn clearing_rows(&self) -> &[usize] {
        &self.clearing_rows
    }

    /// Elapsed seconds inside the current clear window
    pub fn clear_elapsed_s(&self) -> f32 {
        self.clear_timer_s
    }

    /// Seconds left in the current clear window
    pub fn clear_remaining_s(&self) -> f32 {
        (self.config.line_clear_pause_s - self.clear_timer_s).max(0.0)
    }

    /// Strobe phase for flash rendering: floor(elapsed / 0.07s) mod 2
    pub fn clear_flash_phase(&self) -> u8 {
        ((self.clear_timer_s / FLASH_STROBE_S) as u32 % 2) as u8
    }

    /// Drain one event from the FIFO (oldest first)
    pub fn pop_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    /// Advance the engine by `dt_s` seconds of real time
    ///
    /// One logical tick per rendered frame. After game over the engine is
    /// inert but remains queryable.
    pub fn tick(&mut self, dt_s: f32) {
        if self.game_over {
            return;
        }

        match self.phase {
            Phase::Spawning => self.spawn_piece(),
            Phase::Falling => {
                self.gravity_timer_s += dt_s;
                if self.gravity_timer_s > self.config.gravity_delay_s {
                    self.gravity_timer_s = 0.0;
                    self.descend_or_lock();
                }
            }
            Phase::LineClearing => {
                self.clear_timer_s += dt_s;
                if self.clear_timer_s >= self.config.line_clear_pause_s {
                    self.resolve_clear();
                }
            }
        }
    }

    /// Apply a player intent to the falling piece
    ///
    /// Accepted only in `Falling`; during `Spawning`, `LineClearing`, or
    /// after game over the intent is silently rejected.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.game_over || self.phase != Phase::Falling {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match intent {
            Intent::MoveLeft => self.try_place(piece.shifted(-1, 0)),
            Intent::MoveRight => self.try_place(piece.shifted(1, 0)),
            Intent::Rotate => self.try_place(piece.rotated_cw()),
            Intent::SoftDrop => {
                let dropped = piece.shifted(0, 1);
                if dropped.fits(&self.board) {
                    self.active = Some(dropped);
                    self.gravity_timer_s = 0.0;
                } else {
                    // Drop into collision locks immediately, same as the
                    // gravity-driven lock
                    self.lock_piece();
                }
                true
            }
        }
    }

    fn try_place(&mut self, candidate: ActivePiece) -> bool {
        if candidate.fits(&self.board) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Promote the lookahead piece to active; detect game over
    fn spawn_piece(&mut self) {
        let piece = ActivePiece::spawn(self.next_kind);
        if !piece.fits(&self.board) {
            self.game_over = true;
            self.events.push_back(GameEvent::GameOver);
            return;
        }

        self.next_kind = random_piece(&mut self.rng);
        self.active = Some(piece);
        self.gravity_timer_s = 0.0;
        self.phase = Phase::Falling;
    }

    fn descend_or_lock(&mut self) {
        let Some(piece) = self.active else {
            return;
        };

        let dropped = piece.shifted(0, 1);
        if dropped.fits(&self.board) {
            self.active = Some(dropped);
        } else {
            self.lock_piece();
        }
    }

    /// Commit the active piece into the board and evaluate line clears
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        for (x, y) in piece.cells() {
            self.board.set(x, y, Some(piece.kind));
        }

        let full = self.board.full_rows();
        if full.is_empty() {
            self.phase = Phase::Spawning;
        } else {
            self.events.push_back(GameEvent::LinesCleared {
                count: full.len() as u8,
            });
            self.clearing_rows = full;
            self.clear_timer_s = 0.0;
            self.phase = Phase::LineClearing;
        }
    }

    /// Collapse the captured rows, pay out, and fall through to spawning
    fn resolve_clear(&mut self) {
        let rows = std::mem::take(&mut self.clearing_rows);
        let lines = rows.len();

        self.board.remove_rows(&rows);
        self.score += points_for_lines(lines);
        for message in messages_for_clear(lines, &mut self.rng) {
            self.events.push_back(GameEvent::Message(message));
        }

        self.clear_timer_s = 0.0;
        self.phase = Phase::Spawning;
    }

    /// Fill a presentation snapshot without allocating
    pub fn snapshot_into(&self, out: &mut EngineSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next_kind;
        out.phase = self.phase;
        out.score = self.score;
        out.game_over = self.game_over;
        out.clearing = if self.phase == Phase::LineClearing {
            let mut rows = [0u8; 4];
            for (slot, &row) in rows.iter_mut().zip(self.clearing_rows.iter()) {
                *slot = row as u8;
            }
            Some(ClearingSnapshot {
                rows,
                count: self.clearing_rows.len() as u8,
                elapsed_s: self.clear_elapsed_s(),
                remaining_s: self.clear_remaining_s(),
                flash_phase: self.clear_flash_phase(),
            })
        } else {
            None
        };
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let mut s = EngineSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
