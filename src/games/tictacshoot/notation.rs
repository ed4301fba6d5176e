//! # Notation Module
//!
//! Converts between array coordinates (row, col) and algebraic notation
//! ("a1".."c3"), formats actions, and renders a board state to a string.
//!
//! ## Coordinate System
//!
//! - **Columns**: a, b, c, ... (left to right, col-axis)
//! - **Rows**: 1 at the bottom, so `row_number = n - row`
//!
//! For a 3x3 board:
//!
//! ```text
//! a3 b3 c3        (0,0) (0,1) (0,2)
//! a2 b2 c2   <=   (1,0) (1,1) (1,2)
//! a1 b1 c1        (2,0) (2,1) (2,2)
//! ```
//!
//! Rendering and console I/O remain the caller's concern; this module only
//! produces strings.

use super::action::Action;
use super::board::{BoardConfig, BoardState};
use super::logic::PLAYER_O;

/// Rotation arrows for player O pieces, indexed by rotation.
pub const ARROWS_O: [char; 8] = ['⇨', '⬂', '⇩', '⬃', '⇦', '⬁', '⇧', '⬀'];

/// Rotation arrows for player X pieces, indexed by rotation.
pub const ARROWS_X: [char; 8] = ['→', '↘', '↓', '↙', '←', '↖', '↑', '↗'];

/// Glyph for an empty cell.
pub const EMPTY_CELL: char = '⬜';

/// Convert array coordinates to algebraic notation (e.g. "b1").
pub fn cell_to_algebraic(row: usize, col: usize, n: usize) -> Result<String, String> {
    if row >= n || col >= n {
        return Err(format!(
            "Position ({}, {}) is out of bounds for a {}x{} board",
            row, col, n, n
        ));
    }
    let column = (b'a' + col as u8) as char;
    Ok(format!("{}{}", column, n - row))
}

/// Parse algebraic notation (e.g. "b1") to array coordinates.
pub fn algebraic_to_cell(notation: &str, n: usize) -> Result<(usize, usize), String> {
    let notation = notation.trim().to_lowercase();
    let mut chars = notation.chars();

    let column_char = chars
        .next()
        .ok_or_else(|| "Empty notation string".to_string())?;
    if !column_char.is_ascii_lowercase() {
        return Err(format!("Invalid column letter: {}", column_char));
    }
    let col = (column_char as u8 - b'a') as usize;
    if col >= n {
        return Err(format!("Invalid column letter: {}", column_char));
    }

    let row_str = chars.as_str();
    let row_number: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row number: {}", row_str))?;
    if row_number == 0 || row_number > n {
        return Err(format!("Row {} out of bounds (1..={})", row_number, n));
    }

    Ok((n - row_number, col))
}

/// The arrow glyph for a piece of `player` with the given rotation.
pub fn rotation_arrow(player: i8, rotation: u8) -> char {
    if player == PLAYER_O {
        ARROWS_O[rotation as usize % 8]
    } else {
        ARROWS_X[rotation as usize % 8]
    }
}

/// Format an action: "Pb2↗" for placements (neutral arrow set), or "SPIN",
/// "SHOOT", "END".
pub fn format_action(action: &Action, config: &BoardConfig) -> Result<String, String> {
    match *action {
        Action::Place { rotation, row, col } => {
            let cell = cell_to_algebraic(row, col, config.n)?;
            Ok(format!("P{}{}", cell, ARROWS_X[rotation as usize % 8]))
        }
        Action::Spin => Ok("SPIN".to_string()),
        Action::Shoot => Ok("SHOOT".to_string()),
        Action::EndTurn => Ok("END".to_string()),
    }
}

/// Parse an action formatted by [`format_action`].
pub fn parse_action(text: &str, config: &BoardConfig) -> Result<Action, String> {
    let text = text.trim();
    match text.to_uppercase().as_str() {
        "SPIN" => return Ok(Action::Spin),
        "SHOOT" => return Ok(Action::Shoot),
        "END" => return Ok(Action::EndTurn),
        _ => {}
    }

    let rest = text
        .strip_prefix('P')
        .or_else(|| text.strip_prefix('p'))
        .ok_or_else(|| format!("Invalid action notation: {}", text))?;

    let arrow = rest
        .chars()
        .last()
        .ok_or_else(|| format!("Invalid action notation: {}", text))?;
    let rotation = ARROWS_X
        .iter()
        .position(|&a| a == arrow)
        .ok_or_else(|| format!("Invalid rotation arrow: {}", arrow))? as u8;

    let cell_str: String = {
        let mut chars: Vec<char> = rest.chars().collect();
        chars.pop();
        chars.into_iter().collect()
    };
    let (row, col) = algebraic_to_cell(&cell_str, config.n)?;

    Ok(Action::Place { rotation, row, col })
}

/// Render a board state as a multi-line string, one glyph per cell, with a
/// header summarizing the per-turn counters. The active token is shown as
/// "x" regardless of its rotation.
pub fn render_state(state: &BoardState, config: &BoardConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "turn {} | actions left {} | placed {}\n",
        state.turn_number, state.actions_left, state.has_placed
    ));

    for row in 0..config.n {
        for col in 0..config.n {
            if col > 0 {
                out.push(' ');
            }
            let piece = state.pieces[[row, col]];
            if state.is_active_token(row, col, config) {
                out.push('x');
            } else if piece != 0 {
                out.push(rotation_arrow(piece, state.rotations[[row, col]]));
            } else {
                out.push(EMPTY_CELL);
            }
        }
        out.push('\n');
    }

    out
}
