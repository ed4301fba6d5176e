//! # tictacshoot
//!
//! Board engine and game adapter for the tic-tac-shoot grid game: a
//! tic-tac-toe variant with piece rotations, line-of-sight shooting and
//! shield-based sliding. The engine exposes state snapshots, legality
//! masks, transitions and terminal values to external search / self-play
//! drivers; it contains no search or evaluation logic of its own.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod game_trait; // Game trait abstraction
pub mod games; // Game implementations module

pub use game_trait::BoardGame;
pub use games::TicTacShootGame;

#[cfg(feature = "python")]
use games::tictacshoot::py_logic::{PyAction, PyBoardConfig};

/// Python module exposing the tic-tac-shoot adapter operations over numpy
/// snapshots.
#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "tictacshoot")]
fn tictacshoot(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardConfig>()?;
    m.add_class::<PyAction>()?;
    games::tictacshoot::py_logic::register(m)?;

    // Player constants
    m.add("PLAYER_O", games::tictacshoot::PLAYER_O)?;
    m.add("PLAYER_X", games::tictacshoot::PLAYER_X)?;

    Ok(())
}
