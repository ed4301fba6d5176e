//! Tests for the game adapter: the snapshot-in, snapshot-out surface a
//! search or self-play driver actually uses.

use super::board::BoardState;
use super::encoding::{decode_state, encode_state};
use super::{Action, TicTacShootGame, PLAYER_O, PLAYER_X};
use crate::game_trait::BoardGame;
use ndarray::Array3;

fn game() -> TicTacShootGame {
    TicTacShootGame::new(3).unwrap()
}

fn place_id(game: &TicTacShootGame, rotation: u8, row: usize, col: usize) -> usize {
    Action::Place { rotation, row, col }.to_index(game.config())
}

#[test]
fn test_initial_state_layout() {
    let game = game();
    let snapshot = game.initial_state();

    assert_eq!(snapshot.shape(), &[7, 3, 3]);
    assert_eq!(game.spatial_shape(), (7, 3, 3));
    assert_eq!(snapshot[[0, 2, 1]], -1.0); // pre-placed token
    assert_eq!(snapshot[[3, 0, 0]], 2.0); // two action points
    assert_eq!(snapshot[[6, 1, 1]], 1.0); // token active
}

#[test]
fn test_initial_mask_counts_placements() {
    let game = game();
    let snapshot = game.initial_state();

    let mask = game.legal_action_mask(&snapshot.view(), PLAYER_O).unwrap();
    assert_eq!(mask.len(), 75);
    assert_eq!(game.action_size(), 75);

    // 8 empty cells x 8 rotations, nothing else
    let legal: f32 = mask.sum();
    assert_eq!(legal, 64.0);
    assert_eq!(mask[game.config().action_spin], 0.0);
    assert_eq!(mask[game.config().action_shoot], 0.0);
    assert_eq!(mask[game.config().action_end_turn], 0.0);
}

#[test]
fn test_transition_flips_player_only_on_end_turn() {
    let game = game();
    let snapshot = game.initial_state();

    let (after_place, next_player) = game
        .next_state(&snapshot.view(), PLAYER_O, place_id(&game, 0, 0, 0))
        .unwrap();
    assert_eq!(next_player, PLAYER_O);

    let (after_end, next_player) = game
        .next_state(&after_place.view(), PLAYER_O, game.config().action_end_turn)
        .unwrap();
    assert_eq!(next_player, PLAYER_X);

    let state = decode_state(&after_end.view(), game.config()).unwrap();
    assert_eq!(state.turn_number, 1);
    assert_eq!(state.actions_left, 2);
    assert!(!state.has_placed);
}

#[test]
fn test_transition_records_placement() {
    let game = game();
    let snapshot = game.initial_state();

    let (after, _) = game
        .next_state(&snapshot.view(), PLAYER_O, place_id(&game, 5, 1, 1))
        .unwrap();
    let state = decode_state(&after.view(), game.config()).unwrap();

    assert_eq!(state.pieces[[1, 1]], PLAYER_O);
    assert_eq!(state.rotations[[1, 1]], 5);
    assert!(state.shields[[1, 1]]);
    assert_eq!(state.last_placed, Some((1, 1)));
}

#[test]
fn test_next_state_rejects_bad_action_id() {
    let game = game();
    let snapshot = game.initial_state();
    assert!(game
        .next_state(&snapshot.view(), PLAYER_O, game.action_size())
        .is_err());
}

#[test]
fn test_adapter_rejects_malformed_snapshot() {
    let game = game();
    let bad = Array3::<f32>::zeros((7, 2, 2));

    assert!(game.legal_action_mask(&bad.view(), PLAYER_O).is_err());
    assert!(game.next_state(&bad.view(), PLAYER_O, 0).is_err());
    assert!(game.terminal_value(&bad.view(), PLAYER_O).is_err());
}

#[test]
fn test_terminal_value_perspectives() {
    let game = game();

    let snapshot = game.initial_state();
    assert_eq!(game.terminal_value(&snapshot.view(), PLAYER_O).unwrap(), 0.0);

    // O completes the top row
    let mut state = decode_state(&snapshot.view(), game.config()).unwrap();
    for col in 0..3 {
        state.pieces[[0, col]] = PLAYER_O;
    }
    let snapshot = encode_state(&state, game.config());

    assert_eq!(game.terminal_value(&snapshot.view(), PLAYER_O).unwrap(), 1.0);
    assert_eq!(game.terminal_value(&snapshot.view(), PLAYER_X).unwrap(), -1.0);
}

#[test]
fn test_terminal_value_draw_after_turn_limit() {
    let game = game();
    let mut state = BoardState::new(game.config());
    state.turn_number = 1000;
    let snapshot = encode_state(&state, game.config());

    let value = game.terminal_value(&snapshot.view(), PLAYER_O).unwrap();
    assert!(value > 0.0 && value < 1e-3);

    // At the limit itself the game is still live
    state.turn_number = 999;
    let snapshot = encode_state(&state, game.config());
    assert_eq!(game.terminal_value(&snapshot.view(), PLAYER_O).unwrap(), 0.0);
}

#[test]
fn test_canonicalize_through_trait() {
    let game = game();
    let snapshot = game.initial_state();

    let canonical = game.canonicalize_state(&snapshot.view(), PLAYER_X).unwrap();
    assert_eq!(canonical[[0, 2, 1]], 1.0); // token reads as the mover's piece
    assert_eq!(canonical[[6, 0, 0]], snapshot[[6, 0, 0]]);
}

#[test]
fn test_scripted_game_round_trips_at_every_step() {
    let game = game();
    let mut snapshot = game.initial_state();
    let mut player = PLAYER_O;

    // O places and passes, X places and spins, then O places a shooter
    // aimed at X's piece and fires.
    let script = [
        (place_id(&game, 0, 0, 0), true),
        (game.config().action_end_turn, true),
        (place_id(&game, 2, 0, 1), true),
        (game.config().action_spin, true),
        (game.config().action_end_turn, true),
        (place_id(&game, 4, 0, 2), true),
        (game.config().action_shoot, true),
        (game.config().action_end_turn, true),
    ];

    for &(action, expect_legal) in &script {
        let mask = game.legal_action_mask(&snapshot.view(), player).unwrap();
        assert_eq!(mask[action] == 1.0, expect_legal, "action {}", action);

        let (next, next_player) = game.next_state(&snapshot.view(), player, action).unwrap();

        // Encode/decode is exactly invertible at every reachable state
        let decoded = decode_state(&next.view(), game.config()).unwrap();
        assert_eq!(encode_state(&decoded, game.config()), next);

        snapshot = next;
        player = next_player;
    }
}

#[test]
fn test_classic_variant_name_and_rules() {
    let classic = TicTacShootGame::classic(3).unwrap();
    assert_eq!(classic.name(), "TicTacShoot-Classic");

    // A classic placement carries no shield
    let snapshot = classic.initial_state();
    let (after, _) = classic
        .next_state(&snapshot.view(), PLAYER_O, place_id(&classic, 0, 0, 0))
        .unwrap();
    let state = decode_state(&after.view(), classic.config()).unwrap();
    assert!(!state.shields[[0, 0]]);
}

#[test]
fn test_sliding_variant_name() {
    assert_eq!(game().name(), "TicTacShoot");
}
