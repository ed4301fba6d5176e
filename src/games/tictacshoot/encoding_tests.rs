//! Tests for snapshot encoding: exact invertibility and plane layout.

use super::board::{BoardConfig, BoardState};
use super::encoding::{decode_state, encode_state};
use ndarray::Array3;

fn test_config() -> BoardConfig {
    BoardConfig::sliding(3).unwrap()
}

/// A state exercising every field: both players, mixed rotations and
/// shields, a spent action point, a recorded placement, a dead token.
fn rich_state(config: &BoardConfig) -> BoardState {
    let mut state = BoardState::new(config);
    state.pieces[[2, 1]] = 0;
    state.token_active = false;

    state.pieces[[0, 0]] = 1;
    state.rotations[[0, 0]] = 7;
    state.shields[[0, 0]] = true;

    state.pieces[[1, 2]] = -1;
    state.rotations[[1, 2]] = 3;

    state.pieces[[0, 2]] = 1;
    state.rotations[[0, 2]] = 1;

    state.turn_number = 17;
    state.actions_left = 1;
    state.has_placed = true;
    state.last_placed = Some((0, 2));
    state
}

#[test]
fn test_round_trip_initial_state() {
    let config = test_config();
    let state = BoardState::new(&config);

    let snapshot = encode_state(&state, &config);
    let decoded = decode_state(&snapshot.view(), &config).unwrap();

    assert_eq!(decoded, state);
}

#[test]
fn test_round_trip_rich_state() {
    let config = test_config();
    let state = rich_state(&config);

    let snapshot = encode_state(&state, &config);
    let decoded = decode_state(&snapshot.view(), &config).unwrap();

    assert_eq!(decoded, state);
}

#[test]
fn test_broadcast_planes_are_uniform() {
    let config = test_config();
    let state = rich_state(&config);
    let snapshot = encode_state(&state, &config);

    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(snapshot[[config.actions_plane, row, col]], 1.0);
            assert_eq!(snapshot[[config.turn_plane, row, col]], 17.0);
            assert_eq!(snapshot[[config.token_plane, row, col]], 0.0);
        }
    }
}

#[test]
fn test_last_placed_is_one_hot() {
    let config = test_config();
    let state = rich_state(&config);
    let snapshot = encode_state(&state, &config);

    let ones = snapshot
        .index_axis(ndarray::Axis(0), config.placed_plane)
        .iter()
        .filter(|&&v| v == 1.0)
        .count();
    assert_eq!(ones, 1);
    assert_eq!(snapshot[[config.placed_plane, 0, 2]], 1.0);

    // No placement this turn: the plane is all zero
    let fresh = BoardState::new(&config);
    let snapshot = encode_state(&fresh, &config);
    assert!(snapshot
        .index_axis(ndarray::Axis(0), config.placed_plane)
        .iter()
        .all(|&v| v == 0.0));
}

#[test]
fn test_decode_recovers_has_placed_from_one_hot() {
    let config = test_config();
    let state = rich_state(&config);
    let snapshot = encode_state(&state, &config);

    let decoded = decode_state(&snapshot.view(), &config).unwrap();
    assert!(decoded.has_placed);
    assert_eq!(decoded.last_placed, Some((0, 2)));
}

#[test]
fn test_decode_rejects_wrong_shape() {
    let config = test_config();

    let bad = Array3::<f32>::zeros((6, 3, 3));
    assert!(decode_state(&bad.view(), &config).is_err());

    let bad = Array3::<f32>::zeros((7, 4, 4));
    assert!(decode_state(&bad.view(), &config).is_err());
}
