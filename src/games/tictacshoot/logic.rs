//! # Game Logic Module
//!
//! Pure, stateless game rules for tic-tac-shoot. This module is the single
//! source of truth for legality, move execution and win detection; the
//! adapter in `mod.rs` only translates snapshots at the boundary.
//!
//! ## Architecture
//!
//! All functions take the game state as input and return results without
//! side effects, except the `apply_*` functions which mutate the provided
//! `BoardState` in place.
//!
//! ## Turn structure
//!
//! A turn consists of at most one PLACE plus up to two action points spent
//! on SPIN/SHOOT, closed by END_TURN. Only END_TURN hands the move to the
//! opponent.
//!
//! ## Shoot resolution (sliding variant)
//!
//! 1. Hit detection: every piece of the acting player (excluding the active
//!    token) casts a ray along its rotation; the first occupied cell on the
//!    ray is hit. Shooters are scanned in row-major order and only the first
//!    shooter records a direction per target.
//! 2. Unshielded targets die; shielded targets slide along the recorded hit
//!    direction, with dying cells treated as already empty.
//! 3. A slider blocked immediately retries at +90, +180 and +270 degrees
//!    from the hit direction, in that order; if all are blocked it stays
//!    put.
//! 4. Destination conflicts resolve iteratively: the claimant with the
//!    strictly smallest travel distance wins, everyone else is pushed back
//!    one cell along their own ray; on a distance tie every claimant is
//!    pushed back. Each pushback shrinks a distance, so the loop terminates.
//! 5. Deaths are applied, sliders are moved and every hit survivor loses
//!    its shield.

use super::action::Action;
use super::board::{BoardConfig, BoardState, RuleVariant};
use ndarray::Array1;
use smallvec::SmallVec;

/// Player encoding in the piece grid.
pub const PLAYER_O: i8 = 1;
pub const PLAYER_X: i8 = -1;

/// `check_win` result when no line is complete.
pub const NO_WIN: i8 = 0;

/// Hits, slides and deaths produced by a single SHOOT action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShootOutcome {
    /// Cells whose piece was removed.
    pub destroyed: Vec<(usize, usize)>,
    /// Resolved slides as (origin, destination); origin == destination for
    /// a piece that was hit but could not move.
    pub slides: Vec<((usize, usize), (usize, usize))>,
    /// True if this shot removed the token.
    pub token_destroyed: bool,
}

/// A planned slide while destination conflicts are being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Slide {
    pub origin: (usize, usize),
    /// Travel direction actually used (hit direction or a rotation of it).
    pub dir: u8,
    pub dest: (usize, usize),
    /// Cells traveled from origin to dest along `dir`.
    pub dist: u32,
}

type CellList = SmallVec<[(usize, usize); 9]>;
type HitList = SmallVec<[((usize, usize), u8); 9]>;

/// Check if (row, col) coordinates are within board bounds.
#[inline]
pub fn is_inbounds(row: i32, col: i32, n: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < n && (col as usize) < n
}

/// Walk the ray from (row, col) in direction `dir` and return the first
/// occupied cell, or None if the ray exits the board.
fn first_piece_on_ray(
    state: &BoardState,
    row: usize,
    col: usize,
    dir: u8,
    config: &BoardConfig,
) -> Option<(usize, usize)> {
    let (dr, dc) = config.directions[dir as usize];
    let mut r = row as i32 + dr;
    let mut c = col as i32 + dc;

    while is_inbounds(r, c, config.n) {
        if state.pieces[[r as usize, c as usize]] != 0 {
            return Some((r as usize, c as usize));
        }
        r += dr;
        c += dc;
    }

    None
}

/// True if a SHOOT by `player` would hit at least one piece.
///
/// The active token never shoots, so it is skipped as a source.
pub fn has_shoot_targets(state: &BoardState, player: i8, config: &BoardConfig) -> bool {
    for row in 0..config.n {
        for col in 0..config.n {
            if state.pieces[[row, col]] != player || state.is_active_token(row, col, config) {
                continue;
            }
            let dir = state.rotations[[row, col]];
            if first_piece_on_ray(state, row, col, dir, config).is_some() {
                return true;
            }
        }
    }
    false
}

/// True if SPIN would affect at least one spinnable piece: more than one
/// occupied cell, or a single occupied cell that is not the active token.
pub fn can_spin(state: &BoardState, _config: &BoardConfig) -> bool {
    let occupied = state.occupied_count();
    occupied > 1 || (occupied == 1 && !state.token_active)
}

/// Generate all legal actions for `player`.
///
/// - PLACE (every rotation, every empty cell) while nothing has been placed
///   this turn
/// - SPIN/SHOOT while action points remain and the action would not be a
///   no-op
/// - END_TURN once a piece has been placed, or whenever the board is full
///   (so the game cannot stall when no placement is possible)
pub fn get_legal_actions(state: &BoardState, player: i8, config: &BoardConfig) -> Vec<Action> {
    let mut actions = Vec::new();

    if !state.has_placed {
        for rotation in 0..8u8 {
            for row in 0..config.n {
                for col in 0..config.n {
                    if state.pieces[[row, col]] == 0 {
                        actions.push(Action::Place { rotation, row, col });
                    }
                }
            }
        }
    }

    if state.actions_left > 0 {
        if can_spin(state, config) {
            actions.push(Action::Spin);
        }
        if has_shoot_targets(state, player, config) {
            actions.push(Action::Shoot);
        }
    }

    if state.has_placed || state.is_full() {
        actions.push(Action::EndTurn);
    }

    actions
}

/// Dense 0/1 legality vector indexed by flat action id.
pub fn legal_action_mask(state: &BoardState, player: i8, config: &BoardConfig) -> Array1<f32> {
    let mut mask = Array1::zeros(config.action_size);
    for action in get_legal_actions(state, player, config) {
        mask[action.to_index(config)] = 1.0;
    }
    mask
}

/// Apply `action` for `player`, mutating the state in place.
///
/// Returns the shoot report for SHOOT actions, None otherwise.
///
/// # Panics
/// Panics if a precondition is violated (occupied placement cell, second
/// placement in a turn, spending without action points, ending a turn with
/// nothing placed on a non-full board). Callers are expected to consult
/// `get_legal_actions` first; a violation here is a driver bug.
pub fn apply_action(
    state: &mut BoardState,
    action: &Action,
    player: i8,
    config: &BoardConfig,
) -> Option<ShootOutcome> {
    match *action {
        Action::Place { rotation, row, col } => {
            apply_place(state, rotation, row, col, player, config);
            None
        }
        Action::Spin => {
            apply_spin(state, config);
            None
        }
        Action::Shoot => Some(apply_shoot(state, player, config)),
        Action::EndTurn => {
            apply_end_turn(state);
            None
        }
    }
}

/// Place a piece for `player` at (row, col) with the given rotation.
///
/// New pieces start shielded in the sliding variant.
pub fn apply_place(
    state: &mut BoardState,
    rotation: u8,
    row: usize,
    col: usize,
    player: i8,
    config: &BoardConfig,
) {
    assert!(rotation < 8, "invalid rotation {}", rotation);
    assert!(
        state.pieces[[row, col]] == 0,
        "placement on occupied cell ({}, {})",
        row,
        col
    );
    assert!(!state.has_placed, "second placement in one turn");

    state.pieces[[row, col]] = player;
    state.rotations[[row, col]] = rotation;
    state.shields[[row, col]] = config.variant == RuleVariant::Sliding;
    state.has_placed = true;
    state.last_placed = Some((row, col));
}

/// Advance every occupied cell's rotation by one step (45 degrees).
pub fn apply_spin(state: &mut BoardState, config: &BoardConfig) {
    assert!(state.actions_left > 0, "spin with no actions left");
    state.actions_left -= 1;

    for row in 0..config.n {
        for col in 0..config.n {
            if state.pieces[[row, col]] != 0 {
                state.rotations[[row, col]] = (state.rotations[[row, col]] + 1) % 8;
            }
        }
    }
}

/// Reset the per-turn budget and hand the move to the opponent.
pub fn apply_end_turn(state: &mut BoardState) {
    assert!(
        state.has_placed || state.is_full(),
        "end turn before placing on a non-full board"
    );
    state.turn_number += 1;
    state.actions_left = 2;
    state.has_placed = false;
    state.last_placed = None;
}

/// Execute a SHOOT for `player`.
///
/// Consumes one action point regardless of whether anything was hit.
pub fn apply_shoot(state: &mut BoardState, player: i8, config: &BoardConfig) -> ShootOutcome {
    assert!(state.actions_left > 0, "shoot with no actions left");
    state.actions_left -= 1;

    match config.variant {
        RuleVariant::Sliding => resolve_shoot_sliding(state, player, config),
        RuleVariant::Classic => resolve_shoot_classic(state, player, config),
    }
}

/// Hit detection shared by both variants.
///
/// Shooters are scanned in row-major order; only the first shooter to hit a
/// given target records a direction for it. This ordering is a rule, not an
/// implementation detail: it decides which way a shielded target slides when
/// several pieces target the same cell.
fn collect_hits(state: &BoardState, player: i8, config: &BoardConfig) -> HitList {
    let mut hits: HitList = SmallVec::new();

    for row in 0..config.n {
        for col in 0..config.n {
            if state.pieces[[row, col]] != player || state.is_active_token(row, col, config) {
                continue;
            }
            let dir = state.rotations[[row, col]];
            if let Some(target) = first_piece_on_ray(state, row, col, dir, config) {
                if !hits.iter().any(|&(cell, _)| cell == target) {
                    hits.push((target, dir));
                }
            }
        }
    }

    hits
}

fn resolve_shoot_classic(
    state: &mut BoardState,
    player: i8,
    config: &BoardConfig,
) -> ShootOutcome {
    let hits = collect_hits(state, player, config);
    let mut outcome = ShootOutcome::default();

    for &((row, col), _) in &hits {
        if state.is_active_token(row, col, config) {
            state.token_active = false;
            outcome.token_destroyed = true;
        }
        state.pieces[[row, col]] = 0;
        state.rotations[[row, col]] = 0;
        state.shields[[row, col]] = false;
        outcome.destroyed.push((row, col));
    }

    outcome
}

fn resolve_shoot_sliding(
    state: &mut BoardState,
    player: i8,
    config: &BoardConfig,
) -> ShootOutcome {
    let hits = collect_hits(state, player, config);
    let mut outcome = ShootOutcome::default();

    // Partition by shield: unshielded targets die, shielded ones slide.
    let mut dying: CellList = SmallVec::new();
    let mut shielded: HitList = SmallVec::new();
    for &(cell, dir) in &hits {
        if state.shields[[cell.0, cell.1]] {
            shielded.push((cell, dir));
        } else {
            dying.push(cell);
        }
    }

    if state.token_active && dying.contains(&config.token_cell) {
        state.token_active = false;
        outcome.token_destroyed = true;
    }

    // Slide planning: try the hit direction, then +90, +180, +270 degrees.
    let mut slides: SmallVec<[Slide; 9]> = SmallVec::new();
    let mut stuck: CellList = SmallVec::new();
    for &(origin, hit_dir) in &shielded {
        let planned = [0u8, 2, 4, 6].iter().find_map(|&delta| {
            let dir = (hit_dir + delta) % 8;
            slide_destination(state, origin, dir, &dying, config)
                .map(|(dest, dist)| Slide { origin, dir, dest, dist })
        });
        match planned {
            Some(slide) => slides.push(slide),
            None => stuck.push(origin),
        }
    }

    resolve_slide_conflicts(&mut slides, config);

    // Apply deaths first so sliders may land on vacated cells.
    for &(row, col) in &dying {
        state.pieces[[row, col]] = 0;
        state.rotations[[row, col]] = 0;
        state.shields[[row, col]] = false;
        outcome.destroyed.push((row, col));
    }

    // A blocked piece does not move but still loses its shield.
    for &(row, col) in &stuck {
        state.shields[[row, col]] = false;
        outcome.slides.push(((row, col), (row, col)));
    }

    // Destinations are distinct and never another slider's origin, so the
    // moves are independent of each other.
    for slide in &slides {
        let (or, oc) = slide.origin;
        let (nr, nc) = slide.dest;
        if slide.dest != slide.origin {
            state.pieces[[nr, nc]] = state.pieces[[or, oc]];
            state.rotations[[nr, nc]] = state.rotations[[or, oc]];
            state.pieces[[or, oc]] = 0;
            state.rotations[[or, oc]] = 0;
            state.shields[[or, oc]] = false;
        }
        state.shields[[nr, nc]] = false;
        outcome.slides.push((slide.origin, slide.dest));
    }

    outcome
}

/// Farthest free cell along `dir` before the first obstruction, with the
/// distance traveled. Dying cells count as already empty; the board edge and
/// any other occupied cell block. None if blocked immediately.
fn slide_destination(
    state: &BoardState,
    origin: (usize, usize),
    dir: u8,
    dying: &[(usize, usize)],
    config: &BoardConfig,
) -> Option<((usize, usize), u32)> {
    let (dr, dc) = config.directions[dir as usize];
    let mut last = origin;
    let mut dist = 0u32;
    let mut r = origin.0 as i32;
    let mut c = origin.1 as i32;

    loop {
        r += dr;
        c += dc;
        if !is_inbounds(r, c, config.n) {
            break;
        }
        let cell = (r as usize, c as usize);
        if state.pieces[[cell.0, cell.1]] != 0 && !dying.contains(&cell) {
            break;
        }
        last = cell;
        dist += 1;
    }

    if dist == 0 {
        None
    } else {
        Some((last, dist))
    }
}

/// Fixed-point conflict resolution over destination claims.
///
/// While any cell is claimed by more than one slider: the claimant with the
/// strictly smallest travel distance keeps the cell and every other claimant
/// is pushed back one cell along its own ray; if the smallest distances tie,
/// every claimant is pushed back. Each pushback decrements a distance toward
/// the claimant's origin, and origin cells are never contested (they block
/// other sliders' rays), so the loop terminates.
pub(crate) fn resolve_slide_conflicts(slides: &mut [Slide], config: &BoardConfig) {
    loop {
        let mut conflict = None;
        'scan: for i in 0..slides.len() {
            for j in (i + 1)..slides.len() {
                if slides[j].dest == slides[i].dest {
                    conflict = Some(slides[i].dest);
                    break 'scan;
                }
            }
        }
        let Some(dest) = conflict else { break };

        let min_dist = slides
            .iter()
            .filter(|s| s.dest == dest)
            .map(|s| s.dist)
            .min()
            .expect("conflicted destination has claimants");
        let winners = slides
            .iter()
            .filter(|s| s.dest == dest && s.dist == min_dist)
            .count();
        let unique_winner = winners == 1;

        for slide in slides.iter_mut() {
            if slide.dest != dest || (unique_winner && slide.dist == min_dist) {
                continue;
            }
            debug_assert!(slide.dist > 0, "pushback past slide origin");
            let (dr, dc) = config.directions[slide.dir as usize];
            slide.dest = (
                (slide.dest.0 as i32 - dr) as usize,
                (slide.dest.1 as i32 - dc) as usize,
            );
            slide.dist -= 1;
        }
    }
}

/// Check whether a player has completed a row, column or diagonal.
///
/// Returns the winning player value, or [`NO_WIN`].
pub fn check_win(state: &BoardState, config: &BoardConfig) -> i8 {
    let n = config.n;
    for &player in &[PLAYER_O, PLAYER_X] {
        for i in 0..n {
            if (0..n).all(|j| state.pieces[[i, j]] == player)
                || (0..n).all(|j| state.pieces[[j, i]] == player)
            {
                return player;
            }
        }
        if (0..n).all(|i| state.pieces[[i, i]] == player)
            || (0..n).all(|i| state.pieces[[i, n - 1 - i]] == player)
        {
            return player;
        }
    }
    NO_WIN
}

#[cfg(test)]
#[path = "logic_tests.rs"]
mod logic_tests;
