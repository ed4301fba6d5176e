//! Tests for the sign-flip canonical form.

use super::board::{BoardConfig, BoardState};
use super::canonicalization::canonicalize_state;
use super::encoding::encode_state;
use super::{PLAYER_O, PLAYER_X};

fn test_config() -> BoardConfig {
    BoardConfig::sliding(3).unwrap()
}

fn sample_snapshot(config: &BoardConfig) -> ndarray::Array3<f32> {
    let mut state = BoardState::new(config);
    state.pieces[[0, 0]] = 1;
    state.rotations[[0, 0]] = 6;
    state.shields[[0, 0]] = true;
    state.actions_left = 1;
    encode_state(&state, config)
}

#[test]
fn test_identity_for_player_o() {
    let config = test_config();
    let snapshot = sample_snapshot(&config);

    let canonical = canonicalize_state(&snapshot.view(), PLAYER_O, &config);
    assert_eq!(canonical, snapshot);
}

#[test]
fn test_flips_only_piece_plane_for_player_x() {
    let config = test_config();
    let snapshot = sample_snapshot(&config);

    let canonical = canonicalize_state(&snapshot.view(), PLAYER_X, &config);

    assert_eq!(canonical[[config.piece_plane, 0, 0]], -1.0);
    assert_eq!(canonical[[config.piece_plane, 2, 1]], 1.0);
    for plane in 1..config.num_planes {
        for row in 0..config.n {
            for col in 0..config.n {
                assert_eq!(
                    canonical[[plane, row, col]],
                    snapshot[[plane, row, col]],
                    "plane {} changed",
                    plane
                );
            }
        }
    }
}

#[test]
fn test_double_flip_is_identity() {
    let config = test_config();
    let snapshot = sample_snapshot(&config);

    let once = canonicalize_state(&snapshot.view(), PLAYER_X, &config);
    let twice = canonicalize_state(&once.view(), PLAYER_X, &config);
    assert_eq!(twice, snapshot);
}
