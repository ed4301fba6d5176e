//! # Snapshot Encoding
//!
//! Conversion between the owned [`BoardState`] and the 7-plane tensor
//! snapshot exchanged with external evaluators and search drivers:
//!
//! - Plane 0: pieces (+1 / -1 / 0)
//! - Plane 1: rotation index per cell
//! - Plane 2: shields (0/1)
//! - Plane 3: actions left, broadcast
//! - Plane 4: last placement, one-hot
//! - Plane 5: turn number, broadcast
//! - Plane 6: token active flag, broadcast
//!
//! `decode_state(encode_state(s)) == s` for every reachable state:
//! `has_placed` is recovered from the one-hot plane because placement always
//! records `last_placed` and END_TURN clears both together.

use super::board::{BoardConfig, BoardState};
use ndarray::{s, Array3, ArrayView3};

/// Encode a state into its snapshot. Side-effect free.
pub fn encode_state(state: &BoardState, config: &BoardConfig) -> Array3<f32> {
    let n = config.n;
    let mut snapshot = Array3::zeros((config.num_planes, n, n));

    for row in 0..n {
        for col in 0..n {
            snapshot[[config.piece_plane, row, col]] = state.pieces[[row, col]] as f32;
            snapshot[[config.rotation_plane, row, col]] = state.rotations[[row, col]] as f32;
            snapshot[[config.shield_plane, row, col]] =
                if state.shields[[row, col]] { 1.0 } else { 0.0 };
        }
    }

    snapshot
        .slice_mut(s![config.actions_plane, .., ..])
        .fill(state.actions_left as f32);
    if let Some((row, col)) = state.last_placed {
        snapshot[[config.placed_plane, row, col]] = 1.0;
    }
    snapshot
        .slice_mut(s![config.turn_plane, .., ..])
        .fill(state.turn_number as f32);
    snapshot
        .slice_mut(s![config.token_plane, .., ..])
        .fill(if state.token_active { 1.0 } else { 0.0 });

    snapshot
}

/// Decode a snapshot back into an owned state.
///
/// Errors if the snapshot shape does not match the configured board; a
/// malformed shape indicates a driver bug and aborts the simulation step.
pub fn decode_state(snapshot: &ArrayView3<f32>, config: &BoardConfig) -> Result<BoardState, String> {
    let n = config.n;
    if snapshot.shape() != &[config.num_planes, n, n] {
        return Err(format!(
            "Snapshot shape {:?} does not match expected ({}, {}, {})",
            snapshot.shape(),
            config.num_planes,
            n,
            n
        ));
    }

    let mut state = BoardState::new(config);
    state.last_placed = None;

    for row in 0..n {
        for col in 0..n {
            state.pieces[[row, col]] = snapshot[[config.piece_plane, row, col]] as i8;
            state.rotations[[row, col]] = snapshot[[config.rotation_plane, row, col]] as u8;
            state.shields[[row, col]] = snapshot[[config.shield_plane, row, col]] > 0.5;
            if snapshot[[config.placed_plane, row, col]] > 0.5 {
                state.last_placed = Some((row, col));
            }
        }
    }

    state.has_placed = state.last_placed.is_some();
    state.actions_left = snapshot[[config.actions_plane, 0, 0]] as u8;
    state.turn_number = snapshot[[config.turn_plane, 0, 0]] as u32;
    state.token_active = snapshot[[config.token_plane, 0, 0]] > 0.5;

    Ok(state)
}
