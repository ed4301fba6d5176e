//! # Action Types
//!
//! Action representation for tic-tac-shoot moves and the flat-id encoding
//! shared with external drivers.
//!
//! The flat action space for grid size `n` has `8*n*n + 3` ids: placement
//! ids encode both target cell and initial rotation as
//! `rotation*(n*n) + row*n + col`, followed by SPIN, SHOOT and END_TURN in
//! that order.

use super::board::BoardConfig;

/// A single tic-tac-shoot action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a piece at (row, col) with an initial rotation
    Place { rotation: u8, row: usize, col: usize },
    /// Advance every piece's rotation by one step
    Spin,
    /// Fire along every eligible piece's ray
    Shoot,
    /// Pass the turn to the opponent
    EndTurn,
}

impl Action {
    /// Encode this action as a flat id in `[0, config.action_size)`.
    pub fn to_index(&self, config: &BoardConfig) -> usize {
        match *self {
            Action::Place { rotation, row, col } => {
                rotation as usize * config.n * config.n + config.cell_to_flat(row, col)
            }
            Action::Spin => config.action_spin,
            Action::Shoot => config.action_shoot,
            Action::EndTurn => config.action_end_turn,
        }
    }

    /// Decode a flat id. Errors on ids outside the action space.
    pub fn from_index(index: usize, config: &BoardConfig) -> Result<Self, String> {
        if index >= config.action_size {
            return Err(format!(
                "Action id {} out of range (action space is {})",
                index, config.action_size
            ));
        }

        if index == config.action_spin {
            Ok(Action::Spin)
        } else if index == config.action_shoot {
            Ok(Action::Shoot)
        } else if index == config.action_end_turn {
            Ok(Action::EndTurn)
        } else {
            let cells = config.n * config.n;
            let (row, col) = config.flat_to_cell(index % cells);
            Ok(Action::Place {
                rotation: (index / cells) as u8,
                row,
                col,
            })
        }
    }
}
