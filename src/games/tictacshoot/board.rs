//! # Board Configuration and State
//!
//! Immutable configuration (`BoardConfig`) and the owned, mutable game state
//! (`BoardState`) for tic-tac-shoot.
//!
//! `BoardState` is the state of record during a simulation: one owner per
//! simulation branch, mutated in place by the functions in `logic`. The
//! 7-plane tensor snapshot produced by `encoding` is a derived, disposable
//! view of it.

use ndarray::Array2;

/// Rule variant selected at construction.
///
/// - `Sliding`: new pieces start shielded; a shielded piece survives one hit
///   by sliding along the shooter's ray instead of dying.
/// - `Classic`: no shields; any hit piece is removed immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleVariant {
    Sliding,
    Classic,
}

/// Immutable board configuration: grid size, snapshot plane layout, flat
/// action-id layout, ray directions, and game constants.
#[derive(Clone, Debug)]
pub struct BoardConfig {
    pub variant: RuleVariant,
    pub n: usize,

    // Snapshot plane indices
    pub piece_plane: usize,
    pub rotation_plane: usize,
    pub shield_plane: usize,
    pub actions_plane: usize,
    pub placed_plane: usize,
    pub turn_plane: usize,
    pub token_plane: usize,
    pub num_planes: usize,

    // Flat action ids: placements occupy [0, 8*n*n), then the specials
    pub action_spin: usize,
    pub action_shoot: usize,
    pub action_end_turn: usize,
    pub action_size: usize,

    // Ray directions (dr, dc), 45 degrees apart, index 0 = right, clockwise
    pub directions: [(i32, i32); 8],

    // The special pre-placed token: cell and owner
    pub token_cell: (usize, usize),

    // Stalemate cutoff for the adapter's terminal value
    pub turn_limit: u32,
    pub draw_value: f32,

    // Player encoding in the piece grid
    pub player_o: i8,
    pub player_x: i8,
}

impl BoardConfig {
    /// Create a config for the canonical sliding variant.
    pub fn sliding(n: usize) -> Result<Self, String> {
        Self::with_variant(n, RuleVariant::Sliding)
    }

    /// Create a config for the classic immediate-removal variant.
    pub fn classic(n: usize) -> Result<Self, String> {
        Self::with_variant(n, RuleVariant::Classic)
    }

    fn with_variant(n: usize, variant: RuleVariant) -> Result<Self, String> {
        if n != 3 {
            return Err(format!("Unsupported board size: {}. Use 3.", n));
        }

        let cells = n * n;

        Ok(BoardConfig {
            variant,
            n,
            piece_plane: 0,
            rotation_plane: 1,
            shield_plane: 2,
            actions_plane: 3,
            placed_plane: 4,
            turn_plane: 5,
            token_plane: 6,
            num_planes: 7,
            action_spin: 8 * cells,
            action_shoot: 8 * cells + 1,
            action_end_turn: 8 * cells + 2,
            action_size: 8 * cells + 3,
            directions: [
                (0, 1),   // 0: right
                (1, 1),   // 1: down-right
                (1, 0),   // 2: down
                (1, -1),  // 3: down-left
                (0, -1),  // 4: left
                (-1, -1), // 5: up-left
                (-1, 0),  // 6: up
                (-1, 1),  // 7: up-right
            ],
            token_cell: (2, 1),
            turn_limit: 999,
            draw_value: 1e-4,
            player_o: 1,
            player_x: -1,
        })
    }

    /// Flatten (row, col) to a row-major cell index.
    #[inline]
    pub fn cell_to_flat(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    /// Inverse of [`cell_to_flat`](Self::cell_to_flat).
    #[inline]
    pub fn flat_to_cell(&self, flat: usize) -> (usize, usize) {
        (flat / self.n, flat % self.n)
    }
}

/// Mutable board state, exclusively owned by one simulation context.
///
/// Invariants maintained by the `logic` functions:
/// - `rotations` and `shields` are meaningful only where `pieces != 0`
/// - `actions_left` stays in `{0, 1, 2}`
/// - `has_placed == last_placed.is_some()` (this is what makes the 7-plane
///   snapshot encoding exactly invertible)
/// - `token_active` is monotonic: once false, it stays false
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    /// 0 = empty, +1 = player O, -1 = player X
    pub pieces: Array2<i8>,
    /// Ray direction index 0..8 per occupied cell
    pub rotations: Array2<u8>,
    /// True if the piece survives one hit by sliding instead of dying
    pub shields: Array2<bool>,
    pub turn_number: u32,
    pub actions_left: u8,
    pub has_placed: bool,
    pub last_placed: Option<(usize, usize)>,
    pub token_active: bool,
}

impl BoardState {
    /// Create the starting position: empty grid except for the token,
    /// pre-placed for player X with no shield.
    pub fn new(config: &BoardConfig) -> Self {
        let n = config.n;
        let mut pieces = Array2::zeros((n, n));
        let (tr, tc) = config.token_cell;
        pieces[[tr, tc]] = config.player_x;

        BoardState {
            pieces,
            rotations: Array2::zeros((n, n)),
            shields: Array2::from_elem((n, n), false),
            turn_number: 0,
            actions_left: 2,
            has_placed: false,
            last_placed: None,
            token_active: true,
        }
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.pieces.iter().filter(|&&p| p != 0).count()
    }

    /// True if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.pieces.iter().all(|&p| p != 0)
    }

    /// True if (row, col) holds the still-active token.
    #[inline]
    pub fn is_active_token(&self, row: usize, col: usize, config: &BoardConfig) -> bool {
        self.token_active && (row, col) == config.token_cell
    }
}
