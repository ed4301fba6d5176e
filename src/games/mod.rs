//! Game implementations module
//!
//! Each game lives in its own submodule and implements the
//! [`BoardGame`](crate::game_trait::BoardGame) trait.

pub mod tictacshoot;

pub use tictacshoot::TicTacShootGame;
