//! # Board Game Trait
//!
//! The seam between the board engine and external search / self-play
//! collaborators. Drivers only ever see tensor snapshots and flat action
//! ids: they obtain an initial snapshot, ask for the legality mask, apply
//! actions through `next_state` and read the terminal value. They never
//! construct or inspect engine state directly.
//!
//! ## Design Principles
//!
//! - **Universal state representation**: a single `Array3<f32>` snapshot
//!   whose layout is fixed per game and exactly invertible to engine state
//! - **Flat action ids**: a dense integer space so collaborators can index
//!   probability vectors without knowing what the actions mean
//! - **No suspension points**: every operation is a pure function of its
//!   inputs; concurrent simulations must each hold their own snapshots

use ndarray::{Array1, Array3, ArrayView3};
use std::fmt::Debug;
use std::hash::Hash;

/// Interface every driveable board game implements.
pub trait BoardGame: Send + Sync + 'static {
    /// The decoded action type. Drivers treat actions as flat ids; this type
    /// exists so engine-level code and tests can name moves structurally.
    type Action: Clone + Eq + Hash + Send + Sync + Debug;

    /// Snapshot of the starting position.
    fn initial_state(&self) -> Array3<f32>;

    /// Size of the flat action space.
    fn action_size(&self) -> usize;

    /// Shape of every snapshot: (planes, height, width).
    fn spatial_shape(&self) -> (usize, usize, usize);

    /// Dense 0/1 legality vector for `player`, indexed by flat action id.
    ///
    /// Errors if the snapshot is malformed; that is a driver bug and must
    /// abort the simulation step rather than continue with bad state.
    fn legal_action_mask(
        &self,
        snapshot: &ArrayView3<f32>,
        player: i8,
    ) -> Result<Array1<f32>, String>;

    /// Apply the action with flat id `action` for `player` and return the
    /// successor snapshot plus the player to move next.
    ///
    /// # Panics
    /// May panic if the action is legal by id range but violates a game
    /// precondition; callers are expected to consult `legal_action_mask`
    /// first.
    fn next_state(
        &self,
        snapshot: &ArrayView3<f32>,
        player: i8,
        action: usize,
    ) -> Result<(Array3<f32>, i8), String>;

    /// Outcome from `player`'s perspective: +1 win, -1 loss, a small
    /// non-zero draw signal at the stalemate cutoff, 0 while undecided.
    fn terminal_value(&self, snapshot: &ArrayView3<f32>, player: i8) -> Result<f32, String>;

    /// Canonical snapshot for `player`, so an evaluator always sees the
    /// position from the mover's point of view.
    ///
    /// # Default
    /// Returns the snapshot unchanged.
    fn canonicalize_state(
        &self,
        snapshot: &ArrayView3<f32>,
        _player: i8,
    ) -> Result<Array3<f32>, String> {
        Ok(snapshot.to_owned())
    }

    /// Human-readable game name (for debugging/logging).
    fn name(&self) -> &str;
}
