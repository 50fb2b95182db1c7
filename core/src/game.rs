use std::fmt;

use crate::puzzle::{check_order, shuffle_seed, OrderReport, Puzzle, SlotError, SPECTRUM_SEED};

pub const FIRST_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Checked { solved: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceError {
    NotChecked,
    NotSolved,
    AtMaxLevel,
}

impl fmt::Display for AdvanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvanceError::NotChecked => write!(f, "current arrangement has not been checked"),
            AdvanceError::NotSolved => write!(f, "current arrangement is not in spectral order"),
            AdvanceError::AtMaxLevel => write!(f, "already at the final level"),
        }
    }
}

impl std::error::Error for AdvanceError {}

/// Level-progression machine. Owns the live puzzle; every transition back to
/// `Playing` re-scrambles, so a fresh board is never pre-solved.
#[derive(Clone, Debug)]
pub struct GameState {
    level: u32,
    puzzle: Puzzle,
    phase: GamePhase,
    shuffle_nonce: u32,
}

impl GameState {
    pub fn new(nonce: u32) -> Self {
        let mut state = Self {
            level: FIRST_LEVEL,
            puzzle: Puzzle::solved(),
            phase: GamePhase::Playing,
            shuffle_nonce: nonce,
        };
        state.scramble(FIRST_LEVEL, nonce);
        state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn shuffle_nonce(&self) -> u32 {
        self.shuffle_nonce
    }

    pub fn reorder(&mut self, src: usize, dst: usize) -> Result<(), SlotError> {
        self.puzzle.reorder(src, dst)
    }

    pub fn check(&mut self) -> OrderReport {
        let report = check_order(&self.puzzle);
        self.phase = GamePhase::Checked {
            solved: report.solved,
        };
        report
    }

    /// Per-position correctness of the current arrangement, without moving
    /// the phase. Used for rendering feedback.
    pub fn report(&self) -> OrderReport {
        check_order(&self.puzzle)
    }

    pub fn play_again(&mut self, nonce: u32) {
        self.scramble(self.level, nonce);
    }

    pub fn next_level(&mut self, nonce: u32) -> Result<u32, AdvanceError> {
        match self.phase {
            GamePhase::Playing => Err(AdvanceError::NotChecked),
            GamePhase::Checked { solved: false } => Err(AdvanceError::NotSolved),
            GamePhase::Checked { solved: true } => {
                if self.level >= MAX_LEVEL {
                    return Err(AdvanceError::AtMaxLevel);
                }
                let next = self.level + 1;
                self.scramble(next, nonce);
                Ok(next)
            }
        }
    }

    pub fn can_advance(&self) -> bool {
        matches!(self.phase, GamePhase::Checked { solved: true }) && self.level < MAX_LEVEL
    }

    pub fn completed(&self) -> bool {
        matches!(self.phase, GamePhase::Checked { solved: true }) && self.level == MAX_LEVEL
    }

    fn scramble(&mut self, level: u32, nonce: u32) {
        self.level = level;
        self.shuffle_nonce = nonce;
        self.puzzle = Puzzle::scrambled(shuffle_seed(SPECTRUM_SEED, nonce, level));
        self.phase = GamePhase::Playing;
    }
}
