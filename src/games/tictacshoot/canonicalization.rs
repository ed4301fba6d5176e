//! # State Canonicalization
//!
//! Canonical form for tic-tac-shoot: sign-flip the piece plane so the board
//! always reads as if the mover were player +1.
//!
//! Unlike plain tic-tac-toe there is no D4 symmetry folding here: rotation
//! values name absolute ray directions, and those are not closed under board
//! reflections or rotations, so the only safe canonicalizing transform is
//! the sign flip.

use super::board::BoardConfig;
use ndarray::{s, Array3, ArrayView3};

/// Return the canonical snapshot for `player`: the piece plane multiplied by
/// `player`, all other planes unchanged.
pub fn canonicalize_state(
    snapshot: &ArrayView3<f32>,
    player: i8,
    config: &BoardConfig,
) -> Array3<f32> {
    let mut canonical = snapshot.to_owned();
    canonical
        .slice_mut(s![config.piece_plane, .., ..])
        .mapv_inplace(|v| v * player as f32);
    canonical
}
