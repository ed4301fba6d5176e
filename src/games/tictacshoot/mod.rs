//! # Tic-Tac-Shoot Game Implementation
//!
//! A tic-tac-toe variant on a 3x3 grid where pieces carry a facing
//! direction:
//! - **PLACE** puts a piece on an empty cell with a chosen rotation (once
//!   per turn; new pieces start shielded in the sliding variant)
//! - **SPIN** advances every piece's rotation by 45 degrees (costs one of
//!   two action points per turn)
//! - **SHOOT** fires along every own piece's ray; unshielded hits die,
//!   shielded hits slide along the shot with iterative collision resolution
//!   (costs an action point)
//! - **END_TURN** hands the move to the opponent
//!
//! Player X starts with a special token on the board: immune from being
//! used as a shoot source until it is destroyed, after which the board
//! forgets it permanently.
//!
//! Win: complete a row, column or diagonal. The adapter reports a small
//! draw signal once the turn count exceeds the stalemate cutoff.
//!
//! This module contains all tic-tac-shoot code organized into submodules:
//! - `board`: board configuration, rule variants, owned state
//! - `logic`: core game rules (legality, placement, spin, shoot, win)
//! - `action`: action type and flat-id encoding
//! - `encoding`: tensor snapshot encode/decode
//! - `canonicalization`: mover-perspective canonical form
//! - `notation`: algebraic coordinates and board rendering
//! - `py_logic`: Python bindings for the adapter operations

pub mod action;
pub mod board;
pub mod canonicalization;
pub mod encoding;
pub mod logic;
pub mod notation;
#[cfg(feature = "python")]
pub mod py_logic;

#[cfg(test)]
mod canonicalization_tests;
#[cfg(test)]
mod encoding_tests;
#[cfg(test)]
mod game_tests;

// Re-export key types for convenience
pub use action::Action;
pub use board::{BoardConfig, BoardState, RuleVariant};
pub use logic::{ShootOutcome, NO_WIN, PLAYER_O, PLAYER_X};

use crate::game_trait::BoardGame;
use encoding::{decode_state, encode_state};
use ndarray::{Array1, Array3, ArrayView3};

/// Tic-tac-shoot game adapter.
///
/// Owns a [`BoardConfig`] and exposes the [`BoardGame`] operations by
/// decoding snapshots into a [`BoardState`], delegating to `logic`, and
/// re-encoding. All rule knowledge lives in `logic`; this type only
/// translates at the boundary.
pub struct TicTacShootGame {
    config: BoardConfig,
}

impl TicTacShootGame {
    /// Create a game with the canonical sliding rules.
    pub fn new(n: usize) -> Result<Self, String> {
        Ok(Self {
            config: BoardConfig::sliding(n)?,
        })
    }

    /// Create a game with the classic immediate-removal rules.
    pub fn classic(n: usize) -> Result<Self, String> {
        Ok(Self {
            config: BoardConfig::classic(n)?,
        })
    }

    /// Wrap an existing configuration.
    pub fn with_config(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Get reference to the board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}

impl BoardGame for TicTacShootGame {
    type Action = Action;

    fn initial_state(&self) -> Array3<f32> {
        encode_state(&BoardState::new(&self.config), &self.config)
    }

    fn action_size(&self) -> usize {
        self.config.action_size
    }

    fn spatial_shape(&self) -> (usize, usize, usize) {
        (self.config.num_planes, self.config.n, self.config.n)
    }

    fn legal_action_mask(
        &self,
        snapshot: &ArrayView3<f32>,
        player: i8,
    ) -> Result<Array1<f32>, String> {
        let state = decode_state(snapshot, &self.config)?;
        Ok(logic::legal_action_mask(&state, player, &self.config))
    }

    fn next_state(
        &self,
        snapshot: &ArrayView3<f32>,
        player: i8,
        action: usize,
    ) -> Result<(Array3<f32>, i8), String> {
        let mut state = decode_state(snapshot, &self.config)?;
        let action = Action::from_index(action, &self.config)?;
        logic::apply_action(&mut state, &action, player, &self.config);

        // Only END_TURN hands the move over; a player may chain several
        // actions within one turn.
        let next_player = if action == Action::EndTurn { -player } else { player };

        Ok((encode_state(&state, &self.config), next_player))
    }

    fn terminal_value(&self, snapshot: &ArrayView3<f32>, player: i8) -> Result<f32, String> {
        let state = decode_state(snapshot, &self.config)?;

        let winner = logic::check_win(&state, &self.config);
        if winner != NO_WIN {
            return Ok((winner * player) as f32);
        }
        if state.turn_number > self.config.turn_limit {
            return Ok(self.config.draw_value);
        }
        Ok(0.0)
    }

    fn canonicalize_state(
        &self,
        snapshot: &ArrayView3<f32>,
        player: i8,
    ) -> Result<Array3<f32>, String> {
        Ok(canonicalization::canonicalize_state(snapshot, player, &self.config))
    }

    fn name(&self) -> &str {
        match self.config.variant {
            RuleVariant::Sliding => "TicTacShoot",
            RuleVariant::Classic => "TicTacShoot-Classic",
        }
    }
}
